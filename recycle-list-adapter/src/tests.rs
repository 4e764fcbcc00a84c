use crate::*;

use std::sync::{Arc, Mutex};

use recycle_list::{ItemRecord, ListError, PooledItemView, ViewportHost};

fn started_host(options: DemoOptions) -> ListHost {
    let mut host = ListHost::new(MemoryViewport::new(0.0), options);
    let mut frames = FrameScheduler::new();
    ListHost::start(&mut frames);
    host.layout(230.0).unwrap();
    assert_eq!(frames.end_frame(&mut host), 1);
    host
}

fn ordinals(host: &ListHost) -> Vec<String> {
    host.controller()
        .unwrap()
        .pool()
        .iter()
        .map(|row| row.ordinal().to_string())
        .collect()
}

#[test]
fn list_is_built_after_the_first_frame() {
    let mut host = ListHost::new(MemoryViewport::new(0.0), DemoOptions::default());
    let mut frames = FrameScheduler::new();
    ListHost::start(&mut frames);
    assert_eq!(frames.pending(), 1);

    host.layout(230.0).unwrap();
    assert!(host.controller().is_none());
    assert!(host.render().is_empty());

    assert_eq!(frames.end_frame(&mut host), 1);
    assert!(host.is_ready());
    assert_eq!(frames.end_frame(&mut host), 0);
    assert_eq!(frames.frame(), 2);

    let c = host.controller().unwrap();
    assert_eq!(c.records().len(), 100);
    assert_eq!(c.state().item_height, 20.0);
    assert_eq!(host.viewport().content_extent(), 2990.0);
    assert_eq!(c.bound_slots().count(), 9);
}

#[test]
fn failed_build_renders_nothing() {
    let mut host = ListHost::new(MemoryViewport::new(0.0), DemoOptions::default());
    let mut frames = FrameScheduler::new();
    ListHost::start(&mut frames);
    // No layout pass: height 0 cannot fit 8 rows with padding.
    frames.end_frame(&mut host);
    assert!(!host.is_ready());
    assert!(host.render().is_empty());
    assert!(!host.click_slot(0));

    host.layout(230.0).unwrap();
    host.init().unwrap();
    assert!(host.is_ready());
}

#[test]
fn init_reports_configuration_errors() {
    let mut host = ListHost::new(
        MemoryViewport::new(230.0),
        DemoOptions {
            display_count: 0,
            ..DemoOptions::default()
        },
    );
    assert!(matches!(host.init(), Err(ListError::Configuration(_))));
    assert!(!host.is_ready());
}

#[test]
fn scrolling_rebinds_rows_and_clamps() {
    let mut host = started_host(DemoOptions::default());
    host.scroll_to(2720.0);
    assert_eq!(host.controller().unwrap().window_start(), 90);
    assert_eq!(ordinals(&host)[0], "91");

    host.scroll_to(10_000.0);
    assert_eq!(host.viewport().scroll_offset_y(), 2760.0);
    assert_eq!(host.controller().unwrap().window_start(), 91);
    assert_eq!(host.viewport().normalized_position(), 1.0);

    host.scroll_by(-2760.0);
    assert_eq!(host.viewport().scroll_offset_y(), 0.0);
    assert_eq!(host.controller().unwrap().window_start(), 0);
}

#[test]
fn render_lists_rows_inside_the_viewport() {
    let mut host = started_host(DemoOptions::default());
    let lines = host.render();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "   1 | Button[1] | Description[1]");
    assert_eq!(lines[7], "   8 | Button[8] | Description[8]");

    // Rows 1 (partially) through 9 are visible.
    host.scroll_to(15.0);
    let lines = host.render();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("   1 |"));
    assert!(lines[8].starts_with("   9 |"));
}

#[test]
fn show_half_near_the_end_resets_to_top() {
    let mut host = started_host(DemoOptions::default());
    host.scroll_to(2760.0);
    host.show_half().unwrap();

    assert_eq!(host.viewport().scroll_offset_y(), 0.0);
    assert_eq!(host.viewport().content_extent(), 1490.0);
    assert_eq!(
        ordinals(&host),
        ["1", "2", "3", "4", "5", "6", "7", "8", "9"]
    );

    host.scroll_to(600.0);
    host.show_full().unwrap();
    assert_eq!(host.viewport().scroll_offset_y(), 600.0);
    assert_eq!(host.controller().unwrap().window_start(), 20);
}

#[test]
fn a_single_listener_survives_repeated_data_replacement() {
    let mut host = started_host(DemoOptions::default());
    for _ in 0..4 {
        host.show_half().unwrap();
        host.show_full().unwrap();
    }
    assert_eq!(host.scroll_listeners(), 1);

    let before: Vec<u64> = host
        .controller()
        .unwrap()
        .pool()
        .iter()
        .map(|row| row.bind_count())
        .collect();
    host.scroll_to(300.0);
    let after: Vec<u64> = host
        .controller()
        .unwrap()
        .pool()
        .iter()
        .map(|row| row.bind_count())
        .collect();
    assert!(before.iter().zip(&after).all(|(b, a)| a - b == 1));
}

#[test]
fn unchanged_offset_does_not_notify() {
    let mut host = started_host(DemoOptions::default());
    host.scroll_to(0.0);
    let binds = host.controller().unwrap().pool()[0].bind_count();
    host.scroll_to(-40.0);
    assert_eq!(host.controller().unwrap().pool()[0].bind_count(), binds);
}

#[test]
fn shutdown_stops_rebinding() {
    let mut host = started_host(DemoOptions::default());
    host.shutdown();
    host.shutdown();
    assert_eq!(host.scroll_listeners(), 0);

    host.scroll_to(900.0);
    assert_eq!(host.viewport().scroll_offset_y(), 900.0);
    assert_eq!(host.controller().unwrap().window_start(), 0);
}

#[test]
fn clicks_report_data_indexes() {
    let clicks = Arc::new(Mutex::new(Vec::new()));
    let mut host = ListHost::new(MemoryViewport::new(230.0), DemoOptions::default())
        .with_on_item_clicked({
            let clicks = Arc::clone(&clicks);
            move |index: usize| clicks.lock().unwrap().push(index)
        });
    host.init().unwrap();

    assert!(host.click_slot(0));
    host.scroll_to(1500.0);
    assert!(host.click_slot(3));
    host.set_data(sample_records(2)).unwrap();
    assert!(host.click_slot(1));
    assert!(!host.click_slot(2));
    assert!(!host.click_slot(99));

    // ceil((1500 - 20) / 30) = 50
    assert_eq!(*clicks.lock().unwrap(), [0, 53, 1]);
}

#[test]
fn layout_change_relayouts_rows() {
    let mut host = started_host(DemoOptions::default());
    host.layout(250.0).unwrap();
    // (250 - 70) / 8
    assert_eq!(host.controller().unwrap().state().item_height, 22.5);
    assert!(host.controller().unwrap().pool().iter().all(|r| r.size().height == 22.5));

    let err = host.layout(10.0).unwrap_err();
    assert!(matches!(err, ListError::Configuration(_)));
    assert!(host.render().is_empty());
}

#[test]
fn factory_creates_one_pool() {
    let mut host = started_host(DemoOptions::default());
    host.show_half().unwrap();
    host.show_full().unwrap();
    let c = host.controller().unwrap();
    assert_eq!(c.pool().len(), 9);
    for (slot, row) in c.pool().iter().enumerate() {
        assert_eq!(row.slot(), slot);
        assert_eq!(row.size().width, 300.0);
    }
}

#[test]
fn sample_records_are_numbered_from_one() {
    let records = sample_records(3);
    assert_eq!(records[0], ItemRecord::new(1, "Button[1]", "Description[1]"));
    assert_eq!(records[2].name, "Button[3]");
    assert!(sample_records(0).is_empty());
}

#[test]
fn scroll_signal_subscriptions_are_explicit() {
    let mut signal = ScrollSignal::<Vec<f32>>::new();
    let a = signal.subscribe(|seen, offset| seen.push(offset));
    let b = signal.subscribe(|seen, offset| seen.push(-offset));

    let mut seen = Vec::new();
    signal.emit(&mut seen, 5.0);
    assert_eq!(seen, [5.0, -5.0]);

    assert!(signal.unsubscribe(a));
    assert!(!signal.unsubscribe(a));
    signal.emit(&mut seen, 1.0);
    assert_eq!(seen, [5.0, -5.0, -1.0]);

    assert!(signal.unsubscribe(b));
    assert!(signal.is_empty());
}

#[test]
fn memory_viewport_clamps_offsets() {
    let mut viewport = MemoryViewport::new(100.0);
    viewport.set_scroll_offset_y(50.0);
    assert_eq!(viewport.scroll_offset_y(), 0.0);

    viewport.set_content_extent(400.0);
    viewport.set_scroll_offset_y(350.0);
    assert_eq!(viewport.scroll_offset_y(), 300.0);

    viewport.set_content_extent(250.0);
    assert_eq!(viewport.scroll_offset_y(), 150.0);

    viewport.set_scroll_offset_y(f32::NAN);
    assert_eq!(viewport.scroll_offset_y(), 0.0);
}
