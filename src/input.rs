// Keyboard routing: maps `KeyboardEvent.key` values to game and camera commands

use crate::model::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    RotateLeft,
    RotateRight,
    IncreasePerspective,
    DecreasePerspective,
    TogglePause,
    Start,
}

impl Command {
    /// Commands handled by the camera rather than the game reducer.
    pub fn is_camera(self) -> bool {
        matches!(
            self,
            Command::RotateLeft
                | Command::RotateRight
                | Command::IncreasePerspective
                | Command::DecreasePerspective
        )
    }
}

pub fn command_for_key(key: &str) -> Option<Command> {
    let cmd = match key {
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        "q" | "Q" => Command::RotateLeft,
        "e" | "E" => Command::RotateRight,
        "r" | "R" => Command::IncreasePerspective,
        "f" | "F" => Command::DecreasePerspective,
        " " | "Spacebar" => Command::TogglePause,
        "Enter" => Command::Start,
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key("a"), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for_key("D"), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn camera_keys_are_camera_commands() {
        for key in ["q", "E", "r", "F"] {
            let cmd = command_for_key(key).expect("mapped");
            assert!(cmd.is_camera(), "{key}");
        }
        assert!(!Command::TogglePause.is_camera());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(command_for_key("x"), None);
        assert_eq!(command_for_key("Shift"), None);
    }
}
