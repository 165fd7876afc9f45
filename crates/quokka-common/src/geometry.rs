//! Rectangle value type.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the rectangle: `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn area_is_width_times_height() {
        let rect = Rect::new(10.0, 20.0);
        assert!((rect.width - 10.0).abs() < f64::EPSILON);
        assert!((rect.height - 20.0).abs() < f64::EPSILON);
        assert!((rect.area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sided_rect_has_zero_area() {
        assert!(Rect::new(0.0, 7.5).area().abs() < f64::EPSILON);
    }
}
