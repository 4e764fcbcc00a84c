use core::fmt;

use recycle_list::{ClickHandler, ItemViewFactory, Point, PooledItemView, Size};

/// A pooled row that keeps its labels as plain strings.
///
/// Useful for terminal front-ends and for tests: the controller binds it like any other
/// [`PooledItemView`], and [`TextRow::click`] plays the part of the host's button.
#[derive(Default)]
pub struct TextRow {
    slot: usize,
    ordinal: String,
    name: String,
    description: String,
    position: Point,
    size: Size,
    visible: bool,
    on_click: Option<ClickHandler>,
    bind_count: u64,
}

impl TextRow {
    pub fn new(slot: usize, width: f32) -> Self {
        Self {
            slot,
            size: Size::new(width, 0.0),
            ..Self::default()
        }
    }

    /// The pool slot this row was created for.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn ordinal(&self) -> &str {
        &self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Distance from the content top to this row's top edge.
    pub fn top(&self) -> f32 {
        -self.position.y
    }

    /// How many times the row was (re)bound, blanking included.
    pub fn bind_count(&self) -> u64 {
        self.bind_count
    }

    /// Fires the installed click handler. Returns `false` for blank rows.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(on_click) => {
                on_click();
                true
            }
            None => false,
        }
    }

    /// A single-line rendering: `ordinal | name | description`.
    pub fn render(&self) -> String {
        format!("{:>4} | {} | {}", self.ordinal, self.name, self.description)
    }
}

impl PooledItemView for TextRow {
    fn set_ordinal(&mut self, text: &str) {
        self.bind_count = self.bind_count.saturating_add(1);
        self.ordinal.clear();
        self.ordinal.push_str(text);
    }

    fn set_name(&mut self, text: &str) {
        self.name.clear();
        self.name.push_str(text);
    }

    fn set_description(&mut self, text: &str) {
        self.description.clear();
        self.description.push_str(text);
    }

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
        self.size = Size::new(width, height.max(0.0));
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

impl fmt::Debug for TextRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRow")
            .field("slot", &self.slot)
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("visible", &self.visible)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Creates [`TextRow`]s of a fixed width and counts how many it made.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextRowFactory {
    width: f32,
    created: usize,
}

impl TextRowFactory {
    pub fn new(width: f32) -> Self {
        Self { width, created: 0 }
    }

    pub fn created(&self) -> usize {
        self.created
    }
}

impl ItemViewFactory for TextRowFactory {
    type View = TextRow;

    fn create(&mut self, slot: usize) -> TextRow {
        self.created += 1;
        adebug!(slot, width = self.width, "TextRowFactory::create");
        TextRow::new(slot, self.width)
    }
}
