// Example: a minimal host driving the recycled list by hand.
use recycle_list::{
    ClickHandler, ItemRecord, ListOptions, Point, PooledItemView, RecyclingListController, Size,
    ViewportHost,
};

#[derive(Default)]
struct Viewport {
    height: f32,
    extent: f32,
    offset: f32,
}

impl ViewportHost for Viewport {
    fn viewport_height(&self) -> f32 {
        self.height
    }
    fn content_extent(&self) -> f32 {
        self.extent
    }
    fn set_content_extent(&mut self, height: f32) {
        self.extent = height;
    }
    fn scroll_offset_y(&self) -> f32 {
        self.offset
    }
    fn set_scroll_offset_y(&mut self, offset: f32) {
        self.offset = offset;
    }
}

#[derive(Default)]
struct Row {
    text: String,
    position: Point,
    size: Size,
    visible: bool,
    on_click: Option<ClickHandler>,
}

impl PooledItemView for Row {
    fn set_ordinal(&mut self, text: &str) {
        self.text = text.to_string();
    }
    fn set_name(&mut self, text: &str) {
        if !text.is_empty() {
            self.text = format!("{} {text}", self.text);
        }
    }
    fn set_description(&mut self, _text: &str) {}
    fn position(&self) -> Point {
        self.position
    }
    fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }
    fn size(&self) -> Size {
        self.size
    }
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn register_click_handler(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }
    fn clear_click_handler(&mut self) {
        self.on_click = None;
    }
}

fn main() {
    let records: Vec<ItemRecord> = (1..=1_000)
        .map(|i| ItemRecord::new(i, format!("Button[{i}]"), format!("Description[{i}]")))
        .collect();

    let viewport = Viewport {
        height: 230.0,
        ..Default::default()
    };
    let options = ListOptions::new(8, 10.0)
        .with_on_item_clicked(Some(|index: usize| println!("clicked record {index}")));
    let mut list =
        RecyclingListController::build(viewport, |_slot: usize| Row::default(), records, options)
            .expect("230px fits 8 rows with 10px padding");

    println!("state={:?}", list.state());

    list.viewport_mut().set_scroll_offset_y(12_345.0);
    list.on_scroll();
    println!("after scroll: window_start={}", list.window_start());
    for row in list.pool().iter().filter(|r| r.visible) {
        println!("  y={:>9.1} {}", row.position.y, row.text);
    }

    if let Some(on_click) = &list.pool()[0].on_click {
        on_click();
    }
}
