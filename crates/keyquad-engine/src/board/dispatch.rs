use std::fmt;

use crate::coords::Vec2;

use super::key::{KEY_COUNT, KeyId};
use super::state::Board;

type SoundCallback = Box<dyn FnMut()>;

/// Per-key "play sound" callbacks.
///
/// Playback itself belongs to the host; the bank only routes a key to the
/// callback registered for it. Unregistered keys are silent.
#[derive(Default)]
pub struct SoundBank {
    slots: [Option<SoundCallback>; KEY_COUNT],
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `f` for `key`, replacing any previous callback.
    pub fn register(&mut self, key: KeyId, f: impl FnMut() + 'static) {
        self.slots[key.index()] = Some(Box::new(f));
    }

    #[inline]
    pub fn is_registered(&self, key: KeyId) -> bool {
        self.slots[key.index()].is_some()
    }

    /// Invokes the callback for `key`. Returns false when none is registered.
    pub fn play(&mut self, key: KeyId) -> bool {
        match self.slots[key.index()].as_mut() {
            Some(f) => {
                f();
                true
            }
            None => {
                log::debug!("no sound registered for {key}");
                false
            }
        }
    }
}

impl fmt::Debug for SoundBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<usize> = KeyId::ALL
            .into_iter()
            .filter(|k| self.is_registered(*k))
            .map(KeyId::number)
            .collect();
        f.debug_struct("SoundBank").field("registered", &registered).finish()
    }
}

/// Touch handling entry points: board state plus sound routing.
#[derive(Debug, Default)]
pub struct Keyboard {
    board: Board,
    sounds: SoundBank,
}

impl Keyboard {
    pub fn new(board: Board, sounds: SoundBank) -> Self {
        Self { board, sounds }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn sounds_mut(&mut self) -> &mut SoundBank {
        &mut self.sounds
    }

    /// Touch-down at NDC `(x, y)`.
    ///
    /// Activates the first key containing the point and fires its sound once.
    /// A miss neither changes state nor plays anything.
    pub fn on_touch_down(&mut self, x: f32, y: f32) -> Option<KeyId> {
        log::debug!("touch down at ({x:.3}, {y:.3})");

        let key = self.board.press(Vec2::new(x, y))?;
        log::info!("{key} pressed ({})", self.board.spec(key).note);
        self.sounds.play(key);
        Some(key)
    }

    /// Touch-up at NDC `(x, y)`. Every key returns to idle.
    pub fn on_touch_up(&mut self, x: f32, y: f32) {
        log::debug!("touch up at ({x:.3}, {y:.3})");
        self.board.release_all();
    }
}
