//! Keyboard commands and the key map that produces them.

/// A user command dispatched from the input poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleWrap,
    Reseed,
    PlaceGlider,
    PlaceGliderGun,
    Clear,
    SlowDown,
    SpeedUp,
    Quit,
}

impl Command {
    /// Map a keystroke to a command; unknown keys are ignored
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'l' => Some(Command::ToggleWrap),
            'r' => Some(Command::Reseed),
            'g' => Some(Command::PlaceGlider),
            's' => Some(Command::PlaceGliderGun),
            'c' => Some(Command::Clear),
            '-' => Some(Command::SlowDown),
            '+' => Some(Command::SpeedUp),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }

    pub const fn key(self) -> char {
        match self {
            Command::ToggleWrap => 'l',
            Command::Reseed => 'r',
            Command::PlaceGlider => 'g',
            Command::PlaceGliderGun => 's',
            Command::Clear => 'c',
            Command::SlowDown => '-',
            Command::SpeedUp => '+',
            Command::Quit => 'q',
        }
    }

    /// One-line description for the help text
    pub const fn describe(self) -> &'static str {
        match self {
            Command::ToggleWrap => "toggle wrapping edges",
            Command::Reseed => "reseed randomly",
            Command::PlaceGlider => "drop a glider at the top-left corner",
            Command::PlaceGliderGun => "drop a Gosper glider gun at the top-left corner",
            Command::Clear => "clear the grid",
            Command::SlowDown => "slow down (double the delay)",
            Command::SpeedUp => "speed up (halve the delay)",
            Command::Quit => "quit",
        }
    }

    pub fn all() -> Vec<Command> {
        vec![
            Command::ToggleWrap,
            Command::Reseed,
            Command::PlaceGlider,
            Command::PlaceGliderGun,
            Command::Clear,
            Command::SlowDown,
            Command::SpeedUp,
            Command::Quit,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_round_trips() {
        for command in Command::all() {
            assert_eq!(Command::from_key(command.key()), Some(command));
        }
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(Command::from_key('x'), None);
        assert_eq!(Command::from_key('L'), None);
        assert_eq!(Command::from_key(' '), None);
    }
}
