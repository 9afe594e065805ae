//! Axis-aligned rectangles for sprite bounds and hitboxes

use crate::vector::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner (+Y down)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create with the top-left corner at `pos`
    #[inline]
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Create centered on `center`
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move so the left edge sits at `v`
    #[inline]
    pub fn set_left(&mut self, v: f32) {
        self.x = v;
    }

    /// Move so the right edge sits at `v`
    #[inline]
    pub fn set_right(&mut self, v: f32) {
        self.x = v - self.width;
    }

    /// Move so the top edge sits at `v`
    #[inline]
    pub fn set_top(&mut self, v: f32) {
        self.y = v;
    }

    /// Move so the bottom edge sits at `v`
    #[inline]
    pub fn set_bottom(&mut self, v: f32) {
        self.y = v - self.height;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Move so the center sits at `center`, keeping the size
    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.width * 0.5;
        self.y = center.y - self.height * 0.5;
    }

    /// Midpoint of the left edge
    #[inline]
    pub fn mid_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.center().y)
    }

    #[inline]
    pub fn mid_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.center().y)
    }

    #[inline]
    pub fn mid_top(&self) -> Vec2 {
        Vec2::new(self.center().x, self.top())
    }

    #[inline]
    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new(self.center().x, self.bottom())
    }

    /// Copy grown by `dx`/`dy` in total (negative shrinks), keeping the center
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x - dx * 0.5,
            self.y - dy * 0.5,
            self.width + dx,
            self.height + dy,
        )
    }

    /// Check if the rectangle has positive area
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if two rectangles overlap with positive area.
    ///
    /// Rectangles that only share an edge do not intersect, so a body
    /// snapped flush against a wall is not considered inside it.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
