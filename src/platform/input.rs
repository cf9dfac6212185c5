//! Keyboard mapping
//!
//! Five keys drive the player; every other key is ignored.

use crate::sim::InputFlags;

/// A key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Boost,
}

impl InputKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(InputKey::Up),
            "ArrowDown" => Some(InputKey::Down),
            "ArrowLeft" => Some(InputKey::Left),
            "ArrowRight" => Some(InputKey::Right),
            "Shift" => Some(InputKey::Boost),
            _ => None,
        }
    }

    fn flag_mut(self, flags: &mut InputFlags) -> &mut bool {
        match self {
            InputKey::Up => &mut flags.up,
            InputKey::Down => &mut flags.down,
            InputKey::Left => &mut flags.left,
            InputKey::Right => &mut flags.right,
            InputKey::Boost => &mut flags.boost,
        }
    }
}

/// Apply a key press (`pressed`) or release to the flags
///
/// Returns the mapped key, or `None` for keys the game ignores.
pub fn apply_key(flags: &mut InputFlags, key: &str, pressed: bool) -> Option<InputKey> {
    let key = InputKey::from_key_name(key)?;
    *key.flag_mut(flags) = pressed;
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut flags = InputFlags::default();
        assert_eq!(apply_key(&mut flags, "ArrowLeft", true), Some(InputKey::Left));
        assert_eq!(apply_key(&mut flags, "Shift", true), Some(InputKey::Boost));
        assert!(flags.left && flags.boost);
        assert!(!flags.right && !flags.up && !flags.down);

        apply_key(&mut flags, "ArrowLeft", false);
        assert!(!flags.left);
        assert!(flags.boost);
    }

    #[test]
    fn test_all_keys_map() {
        let mut flags = InputFlags::default();
        for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "Shift"] {
            apply_key(&mut flags, key, true);
        }
        assert_eq!(
            flags,
            InputFlags {
                left: true,
                right: true,
                up: true,
                down: true,
                boost: true,
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut flags = InputFlags::default();
        assert_eq!(apply_key(&mut flags, "a", true), None);
        assert_eq!(apply_key(&mut flags, "arrowup", true), None);
        assert_eq!(apply_key(&mut flags, "", true), None);
        assert_eq!(flags, InputFlags::default());
    }
}
