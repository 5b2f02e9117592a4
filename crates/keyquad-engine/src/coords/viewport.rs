use super::Vec2;

/// Drawable size of a window.
///
/// The renderer stores it in physical pixels for `set_viewport`; input
/// conversion uses the logical size so it matches pointer coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a window-space point (origin top-left, +Y down) to NDC.
    ///
    /// Returns `None` for a degenerate viewport (zero or non-finite size), which
    /// happens while a window is minimized.
    pub fn to_ndc(self, p: Vec2) -> Option<Vec2> {
        if !self.is_valid() {
            return None;
        }
        let x = p.x * 2.0 / self.width - 1.0;
        let y = -(p.y * 2.0 / self.height - 1.0);
        Some(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn top_left_maps_to_upper_left_corner() {
        let v = Viewport::new(800.0, 600.0);
        assert!(close(v.to_ndc(Vec2::new(0.0, 0.0)).unwrap(), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn bottom_right_maps_to_lower_right_corner() {
        let v = Viewport::new(800.0, 600.0);
        assert!(close(v.to_ndc(Vec2::new(800.0, 600.0)).unwrap(), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn centre_maps_to_origin() {
        let v = Viewport::new(1280.0, 720.0);
        assert!(close(v.to_ndc(Vec2::new(640.0, 360.0)).unwrap(), Vec2::zero()));
    }

    #[test]
    fn y_axis_is_flipped() {
        let v = Viewport::new(100.0, 100.0);
        let upper = v.to_ndc(Vec2::new(50.0, 10.0)).unwrap();
        let lower = v.to_ndc(Vec2::new(50.0, 90.0)).unwrap();
        assert!(upper.y > lower.y);
    }

    #[test]
    fn degenerate_viewport_yields_none() {
        assert!(Viewport::new(0.0, 600.0).to_ndc(Vec2::zero()).is_none());
        assert!(Viewport::new(800.0, 0.0).to_ndc(Vec2::zero()).is_none());
        assert!(Viewport::new(f32::NAN, 10.0).to_ndc(Vec2::zero()).is_none());
    }
}
