use std::fmt;

use crate::coords::{Bounds, Vec2};

/// Number of keys on the board.
pub const KEY_COUNT: usize = 7;

/// Identifies one of the seven keys.
///
/// Keys are ordered; lower indices win when bounding boxes overlap.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct KeyId(u8);

impl KeyId {
    /// All keys in hit-test priority order.
    pub const ALL: [KeyId; KEY_COUNT] = [
        KeyId(0),
        KeyId(1),
        KeyId(2),
        KeyId(3),
        KeyId(4),
        KeyId(5),
        KeyId(6),
    ];

    /// Returns the key at zero-based `index`, if in range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < KEY_COUNT { Some(KeyId(index as u8)) } else { None }
    }

    /// Returns the key with one-based `number` (1..=7), if in range.
    #[inline]
    pub const fn from_number(number: usize) -> Option<Self> {
        if number == 0 { None } else { Self::from_index(number - 1) }
    }

    /// Zero-based index, suitable for indexing per-key tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based key number as used in logs.
    #[inline]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {}", self.number())
    }
}

/// Note played by a key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Note {
    A,
    B,
    C,
    D,
    E,
    FSharp,
    G,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::A => "A",
            Note::B => "B",
            Note::C => "C",
            Note::D => "D",
            Note::E => "E",
            Note::FSharp => "F#",
            Note::G => "G",
        };
        f.write_str(name)
    }
}

/// Four NDC vertices in triangle-strip order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub vertices: [Vec2; 4],
}

impl Quad {
    /// Builds a quad from `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    pub const fn from_flat(v: [f32; 8]) -> Self {
        Self {
            vertices: [
                Vec2::new(v[0], v[1]),
                Vec2::new(v[2], v[3]),
                Vec2::new(v[4], v[5]),
                Vec2::new(v[6], v[7]),
            ],
        }
    }

    /// Axis-aligned box enclosing all four vertices.
    pub fn bounds(&self) -> Bounds {
        let [first, rest @ ..] = &self.vertices;
        Bounds::enclosing(*first, rest)
    }
}

/// Static description of one key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeySpec {
    pub quad: Quad,
    pub note: Note,
}

/// The demo's key layout, in key order.
pub const PIANO_LAYOUT: [KeySpec; KEY_COUNT] = [
    KeySpec {
        quad: Quad::from_flat([0.2, 0.6, 0.2, 0.9, 0.7, 0.6, 0.7, 0.9]),
        note: Note::B,
    },
    KeySpec {
        quad: Quad::from_flat([-0.2, -0.1, -0.2, -0.4, -0.7, -0.1, -0.7, -0.4]),
        note: Note::E,
    },
    KeySpec {
        quad: Quad::from_flat([-0.2, 0.6, -0.2, 0.9, -0.7, 0.6, -0.7, 0.9]),
        note: Note::A,
    },
    KeySpec {
        quad: Quad::from_flat([0.2, 0.4, 0.2, 0.1, 0.7, 0.4, 0.7, 0.1]),
        note: Note::D,
    },
    KeySpec {
        quad: Quad::from_flat([0.2, -0.1, 0.2, -0.4, 0.7, -0.1, 0.7, -0.4]),
        note: Note::FSharp,
    },
    KeySpec {
        quad: Quad::from_flat([-0.2, 0.4, -0.2, 0.1, -0.7, 0.4, -0.7, 0.1]),
        note: Note::C,
    },
    KeySpec {
        quad: Quad::from_flat([-0.25, -0.85, -0.25, -0.55, 0.25, -0.85, 0.25, -0.55]),
        note: Note::G,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_numbering_round_trips() {
        for (i, key) in KeyId::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(KeyId::from_number(key.number()), Some(*key));
        }
        assert_eq!(KeyId::from_number(0), None);
        assert_eq!(KeyId::from_number(8), None);
        assert_eq!(KeyId::from_index(7), None);
    }

    #[test]
    fn key_display_is_one_based() {
        assert_eq!(KeyId::ALL[2].to_string(), "key 3");
    }

    #[test]
    fn note_names() {
        assert_eq!(Note::FSharp.to_string(), "F#");
        assert_eq!(PIANO_LAYOUT[0].note, Note::B);
        assert_eq!(PIANO_LAYOUT[6].note, Note::G);
    }

    #[test]
    fn layout_bounds_match_vertex_extents() {
        let expected = [
            ((0.2, 0.6), (0.7, 0.9)),
            ((-0.7, -0.4), (-0.2, -0.1)),
            ((-0.7, 0.6), (-0.2, 0.9)),
            ((0.2, 0.1), (0.7, 0.4)),
            ((0.2, -0.4), (0.7, -0.1)),
            ((-0.7, 0.1), (-0.2, 0.4)),
            ((-0.25, -0.85), (0.25, -0.55)),
        ];
        for (spec, (min, max)) in PIANO_LAYOUT.iter().zip(expected) {
            let b = spec.quad.bounds();
            assert_eq!(b.min, Vec2::from(min));
            assert_eq!(b.max, Vec2::from(max));
        }
    }

    #[test]
    fn layout_keys_do_not_overlap() {
        for (i, a) in PIANO_LAYOUT.iter().enumerate() {
            for b in &PIANO_LAYOUT[i + 1..] {
                assert!(!a.quad.bounds().intersects(b.quad.bounds()));
            }
        }
    }
}
