// File: crates/barchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// Axis-aligned rectangle in surface pixels (y grows downward).
/// `width`/`height` may be negative; a bar with negative height grows upward from `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }
    pub fn left(&self) -> f64 { self.x.min(self.x + self.width) }
    pub fn right(&self) -> f64 { self.x.max(self.x + self.width) }
    pub fn top(&self) -> f64 { self.y.min(self.y + self.height) }
    pub fn bottom(&self) -> f64 { self.y.max(self.y + self.height) }

    /// Same area with non-negative width and height.
    pub fn normalized(&self) -> Self {
        Self::from_ltrb(self.left(), self.top(), self.right(), self.bottom())
    }

    /// True when `other` lies within `self` (edges inclusive, tolerance `eps`).
    pub fn contains_rect(&self, other: &Rect, eps: f64) -> bool {
        other.left() >= self.left() - eps
            && other.right() <= self.right() + eps
            && other.top() >= self.top() - eps
            && other.bottom() <= self.bottom() + eps
    }
}
