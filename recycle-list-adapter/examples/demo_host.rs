use recycle_list::ViewportHost;
use recycle_list_adapter::{DemoOptions, FrameScheduler, ListHost, MemoryViewport};

fn print_frame(label: &str, host: &ListHost) {
    println!("-- {label} (offset={:.1})", host.viewport().scroll_offset_y());
    for line in host.render() {
        println!("{line}");
    }
}

fn main() {
    // Example: a host that owns the data source and swaps datasets.
    //
    // The flow mirrors a typical UI toolkit:
    // 1) defer the build until the first layout pass is done
    // 2) forward scroll offset changes
    // 3) replace the dataset wholesale (half / full)
    let mut host = ListHost::new(MemoryViewport::new(0.0), DemoOptions::default())
        .with_on_item_clicked(|index| println!("clicked record {index}"));
    let mut frames = FrameScheduler::new();
    ListHost::start(&mut frames);

    host.layout(230.0).expect("not built yet");
    frames.end_frame(&mut host);
    print_frame("first frame", &host);

    host.scroll_to(10_000.0);
    print_frame("scrolled to the bottom", &host);
    host.click_slot(0);

    host.show_half().expect("layout is valid");
    print_frame("half dataset", &host);

    host.scroll_by(300.0);
    host.show_full().expect("layout is valid");
    print_frame("full dataset", &host);
}
