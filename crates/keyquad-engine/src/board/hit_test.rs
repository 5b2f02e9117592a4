use crate::coords::Vec2;

use super::key::{KeyId, Quad};

/// Returns true when `point` lies inside the bounding box of `quad`.
///
/// Points exactly on an edge count as inside.
#[inline]
pub fn hit_test(point: Vec2, quad: &Quad) -> bool {
    quad.bounds().contains(point)
}

/// Returns the first key in `keys` whose quad contains `point`.
///
/// Evaluation stops at the first match, so when boxes overlap the earlier
/// entry wins regardless of size or draw order.
pub fn first_hit<'a, I>(point: Vec2, keys: I) -> Option<KeyId>
where
    I: IntoIterator<Item = (KeyId, &'a Quad)>,
{
    keys.into_iter()
        .find(|(_, quad)| hit_test(point, quad))
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{KEY_COUNT, PIANO_LAYOUT};

    fn piano() -> impl Iterator<Item = (KeyId, &'static Quad)> {
        KeyId::ALL.into_iter().zip(PIANO_LAYOUT.iter().map(|s| &s.quad))
    }

    fn centre(quad: &Quad) -> Vec2 {
        let b = quad.bounds();
        Vec2::new((b.min.x + b.max.x) * 0.5, (b.min.y + b.max.y) * 0.5)
    }

    #[test]
    fn point_inside_key_three() {
        let key3 = Quad::from_flat([-0.2, 0.6, -0.2, 0.9, -0.7, 0.6, -0.7, 0.9]);
        assert!(hit_test(Vec2::new(-0.4, 0.7), &key3));
        assert_eq!(first_hit(Vec2::new(-0.4, 0.7), piano()), KeyId::from_number(3));
    }

    #[test]
    fn interior_points_hit_only_their_own_key() {
        for (i, spec) in PIANO_LAYOUT.iter().enumerate() {
            let p = centre(&spec.quad);
            for (j, other) in PIANO_LAYOUT.iter().enumerate() {
                assert_eq!(hit_test(p, &other.quad), i == j, "centre of key {} vs key {}", i + 1, j + 1);
            }
        }
    }

    #[test]
    fn boundary_counts_as_inside() {
        let q = &PIANO_LAYOUT[0].quad;
        assert!(hit_test(Vec2::new(0.2, 0.6), q));
        assert!(hit_test(Vec2::new(0.7, 0.9), q));
        assert!(hit_test(Vec2::new(0.45, 0.9), q));
        assert!(hit_test(Vec2::new(0.7, 0.75), q));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        // Minimum corner first: a scan seeded at the origin would get this wrong.
        let q = Quad::from_flat([0.2, 0.1, 0.7, 0.4, 0.2, 0.4, 0.7, 0.1]);
        assert!(hit_test(Vec2::new(0.45, 0.25), &q));
        assert!(!hit_test(Vec2::new(0.1, 0.05), &q));
    }

    #[test]
    fn points_outside_every_key_miss() {
        let misses = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.95, 0.95),
            Vec2::new(-0.95, -0.95),
            Vec2::new(0.0, 0.5),
            Vec2::new(0.45, 0.5),
            Vec2::new(-0.45, -0.5),
            Vec2::new(0.3, -0.7),
        ];
        for p in misses {
            assert_eq!(first_hit(p, piano()), None, "{p:?}");
        }
    }

    #[test]
    fn overlapping_boxes_resolve_to_lower_index() {
        let big = Quad::from_flat([-1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0]);
        let small = Quad::from_flat([-0.1, -0.1, -0.1, 0.1, 0.1, -0.1, 0.1, 0.1]);
        let keys = [(KeyId::ALL[0], &small), (KeyId::ALL[1], &big)];
        assert_eq!(first_hit(Vec2::zero(), keys), Some(KeyId::ALL[0]));

        let keys = [(KeyId::ALL[0], &big), (KeyId::ALL[1], &small)];
        assert_eq!(first_hit(Vec2::zero(), keys), Some(KeyId::ALL[0]));
    }

    #[test]
    fn every_layout_key_is_reachable() {
        let hits: Vec<_> = PIANO_LAYOUT
            .iter()
            .filter_map(|s| first_hit(centre(&s.quad), piano()))
            .collect();
        assert_eq!(hits, KeyId::ALL.to_vec());
        assert_eq!(hits.len(), KEY_COUNT);
    }
}
