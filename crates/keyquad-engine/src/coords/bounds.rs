use super::Vec2;

/// Axis-aligned bounding box.
///
/// Unlike a half-open pixel rect, containment is closed on every edge: a
/// point lying exactly on `min` or `max` is inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing `first` and every point in `rest`.
    pub fn enclosing(first: Vec2, rest: &[Vec2]) -> Self {
        rest.iter().fold(Self::new(first, first), |b, p| Self {
            min: b.min.min(*p),
            max: b.max.max(*p),
        })
    }

    /// Smallest box enclosing `points`, or `None` when the slice is empty.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        points
            .split_first()
            .map(|(first, rest)| Self::enclosing(*first, rest))
    }

    /// Closed containment: `[min.x, max.x] × [min.y, max.y]`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn intersects(self, other: Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_points_empty_is_none() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn from_points_single_point_is_degenerate() {
        let b = Bounds::from_points(&[v(0.3, -0.2)]).unwrap();
        assert_eq!(b.min, v(0.3, -0.2));
        assert_eq!(b.max, v(0.3, -0.2));
        assert!(b.contains(v(0.3, -0.2)));
    }

    #[test]
    fn enclosing_is_independent_of_vertex_order() {
        let pts = [v(0.7, 0.9), v(0.2, 0.6), v(0.7, 0.6), v(0.2, 0.9)];
        let mut rev = pts;
        rev.reverse();
        assert_eq!(Bounds::from_points(&pts), Bounds::from_points(&rev));
        assert_eq!(Bounds::from_points(&pts).unwrap(), Bounds::new(v(0.2, 0.6), v(0.7, 0.9)));
    }

    #[test]
    fn enclosing_does_not_assume_origin_inside() {
        // All-positive box whose first vertex is its minimum corner.
        let b = Bounds::from_points(&[v(0.2, 0.1), v(0.7, 0.4), v(0.2, 0.4)]).unwrap();
        assert_eq!(b.min, v(0.2, 0.1));
        assert!(!b.contains(v(0.0, 0.0)));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_edges_and_corners() {
        let b = Bounds::new(v(-0.7, 0.6), v(-0.2, 0.9));
        assert!(b.contains(v(-0.7, 0.6)));
        assert!(b.contains(v(-0.2, 0.9)));
        assert!(b.contains(v(-0.7, 0.75)));
        assert!(b.contains(v(-0.45, 0.9)));
    }

    #[test]
    fn contains_rejects_just_outside() {
        let b = Bounds::new(v(0.0, 0.0), v(1.0, 1.0));
        assert!(!b.contains(v(-0.001, 0.5)));
        assert!(!b.contains(v(1.001, 0.5)));
        assert!(!b.contains(v(0.5, -0.001)));
        assert!(!b.contains(v(0.5, 1.001)));
    }

    #[test]
    fn contains_rejects_nan() {
        let b = Bounds::new(v(0.0, 0.0), v(1.0, 1.0));
        assert!(!b.contains(v(f32::NAN, 0.5)));
    }

    // ── intersects ────────────────────────────────────────────────────────

    #[test]
    fn intersects_shared_edge() {
        let a = Bounds::new(v(0.0, 0.0), v(1.0, 1.0));
        let b = Bounds::new(v(1.0, 0.0), v(2.0, 1.0));
        assert!(a.intersects(b));
    }

    #[test]
    fn intersects_disjoint() {
        let a = Bounds::new(v(0.0, 0.0), v(1.0, 1.0));
        let b = Bounds::new(v(1.5, 1.5), v(2.0, 2.0));
        assert!(!a.intersects(b));
        assert!(!b.intersects(a));
    }
}
