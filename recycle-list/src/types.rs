use alloc::string::String;

/// One logical row of the dataset.
///
/// The controller never mutates records; the application replaces the whole dataset through
/// [`crate::RecyclingListController::set_data`].
///
/// With `feature = "serde"`, missing fields deserialize to their defaults (`0` / empty string).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRecord {
    pub number: i32,
    pub name: String,
    pub description: String,
}

impl ItemRecord {
    pub fn new(number: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A position in the host's anchored coordinate space.
///
/// `y` grows upward, so rows below the content top sit at negative `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
