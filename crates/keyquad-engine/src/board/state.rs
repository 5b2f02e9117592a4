use crate::coords::Vec2;
use crate::paint::Color;

use super::hit_test::first_hit;
use super::key::{KEY_COUNT, KeyId, KeySpec, PIANO_LAYOUT};

/// Visual state of a key.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum KeyState {
    #[default]
    Idle,
    Active,
}

impl KeyState {
    /// Color the renderer uses for this state.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            KeyState::Idle => Color::YELLOW,
            KeyState::Active => Color::RED,
        }
    }
}

/// Key geometry plus the mutable per-key state.
///
/// Geometry is fixed at construction. Only [`KeyState`] changes, and only
/// through [`Board::press`] and [`Board::release_all`].
#[derive(Debug, Clone)]
pub struct Board {
    keys: [KeySpec; KEY_COUNT],
    states: [KeyState; KEY_COUNT],
}

impl Board {
    /// Board using [`PIANO_LAYOUT`].
    pub fn piano() -> Self {
        Self::with_layout(PIANO_LAYOUT)
    }

    /// Board with a custom layout; all keys start idle.
    pub fn with_layout(keys: [KeySpec; KEY_COUNT]) -> Self {
        Self {
            keys,
            states: [KeyState::Idle; KEY_COUNT],
        }
    }

    #[inline]
    pub fn spec(&self, key: KeyId) -> &KeySpec {
        &self.keys[key.index()]
    }

    #[inline]
    pub fn state(&self, key: KeyId) -> KeyState {
        self.states[key.index()]
    }

    /// Keys with their spec and current state, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyId, &KeySpec, KeyState)> + '_ {
        KeyId::ALL
            .into_iter()
            .map(|k| (k, &self.keys[k.index()], self.states[k.index()]))
    }

    /// Currently active keys, in key order.
    pub fn active_keys(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.iter()
            .filter(|(_, _, s)| *s == KeyState::Active)
            .map(|(k, _, _)| k)
    }

    /// First key whose bounding box contains `point` (NDC).
    pub fn key_at(&self, point: Vec2) -> Option<KeyId> {
        first_hit(point, self.iter().map(|(k, spec, _)| (k, &spec.quad)))
    }

    /// Activates the key under `point`, if any, and returns it.
    ///
    /// At most one key changes per call. A miss leaves every state untouched.
    pub fn press(&mut self, point: Vec2) -> Option<KeyId> {
        let key = self.key_at(point)?;
        self.states[key.index()] = KeyState::Active;
        Some(key)
    }

    /// Returns every key to idle, whatever was active before.
    pub fn release_all(&mut self) {
        self.states = [KeyState::Idle; KEY_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::piano()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Note, Quad};

    fn all_idle(board: &Board) -> bool {
        board.iter().all(|(_, _, s)| s == KeyState::Idle)
    }

    #[test]
    fn starts_idle() {
        assert!(all_idle(&Board::piano()));
        assert_eq!(Board::default().active_keys().count(), 0);
    }

    #[test]
    fn state_resolves_to_fixed_colors() {
        assert_eq!(KeyState::Idle.color(), Color::YELLOW);
        assert_eq!(KeyState::Active.color(), Color::RED);
    }

    #[test]
    fn press_activates_only_the_hit_key() {
        let mut board = Board::piano();
        let key = board.press(Vec2::new(-0.4, 0.7));
        assert_eq!(key, KeyId::from_number(3));
        assert_eq!(board.active_keys().collect::<Vec<_>>(), vec![KeyId::ALL[2]]);
        assert_eq!(board.state(KeyId::ALL[0]), KeyState::Idle);
    }

    #[test]
    fn miss_changes_nothing() {
        let mut board = Board::piano();
        board.press(Vec2::new(0.45, 0.75));
        let before: Vec<_> = board.iter().map(|(_, _, s)| s).collect();

        assert_eq!(board.press(Vec2::new(0.0, 0.0)), None);
        let after: Vec<_> = board.iter().map(|(_, _, s)| s).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn repeated_presses_accumulate_until_release() {
        let mut board = Board::piano();
        board.press(Vec2::new(0.45, 0.75));
        board.press(Vec2::new(0.0, -0.7));
        assert_eq!(
            board.active_keys().collect::<Vec<_>>(),
            vec![KeyId::ALL[0], KeyId::ALL[6]]
        );

        board.release_all();
        assert!(all_idle(&board));
    }

    #[test]
    fn release_all_on_idle_board_is_noop() {
        let mut board = Board::piano();
        board.release_all();
        assert!(all_idle(&board));
    }

    #[test]
    fn overlapping_layout_prefers_lower_index() {
        let mut layout = PIANO_LAYOUT;
        // Key 5 grows to cover key 7's box as well.
        layout[4] = KeySpec {
            quad: Quad::from_flat([-0.9, -0.1, -0.9, -0.95, 0.9, -0.1, 0.9, -0.95]),
            note: Note::FSharp,
        };
        let mut board = Board::with_layout(layout);

        assert_eq!(board.press(Vec2::new(0.0, -0.7)), KeyId::from_number(5));
        assert_eq!(board.state(KeyId::ALL[6]), KeyState::Idle);
    }

    #[test]
    fn geometry_is_unchanged_by_touches() {
        let mut board = Board::piano();
        board.press(Vec2::new(-0.4, 0.7));
        board.release_all();
        for (k, spec, _) in board.iter() {
            assert_eq!(*spec, PIANO_LAYOUT[k.index()]);
        }
    }
}
