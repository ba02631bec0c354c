use crate::core::data::vec2::Vec2;

/// A boundary vertex tagged with the reference centre used to decide which
/// side of the following edge counts as outward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub centre: Vec2,
}

impl Vertex {
    #[must_use]
    pub const fn new(position: Vec2, centre: Vec2) -> Self {
        Self { position, centre }
    }
}
