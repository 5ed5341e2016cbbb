use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Skin tone modifiers, U+1F3FB..=U+1F3FF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Fitzpatrick {
    /// Light skin tone, covers both type 1 and 2
    Type12 = 0x1F3FB,
    Type3 = 0x1F3FC,
    Type4 = 0x1F3FD,
    Type5 = 0x1F3FE,
    Type6 = 0x1F3FF,
}

impl Fitzpatrick {
    pub const ALL: [Fitzpatrick; 5] = [
        Fitzpatrick::Type12,
        Fitzpatrick::Type3,
        Fitzpatrick::Type4,
        Fitzpatrick::Type5,
        Fitzpatrick::Type6,
    ];

    #[inline]
    pub const fn from_char(c: char) -> Option<Fitzpatrick> {
        Some(match c {
            '\u{1F3FB}' => Fitzpatrick::Type12,
            '\u{1F3FC}' => Fitzpatrick::Type3,
            '\u{1F3FD}' => Fitzpatrick::Type4,
            '\u{1F3FE}' => Fitzpatrick::Type5,
            '\u{1F3FF}' => Fitzpatrick::Type6,
            _ => return None,
        })
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Fitzpatrick::Type12 => '\u{1F3FB}',
            Fitzpatrick::Type3 => '\u{1F3FC}',
            Fitzpatrick::Type4 => '\u{1F3FD}',
            Fitzpatrick::Type5 => '\u{1F3FE}',
            Fitzpatrick::Type6 => '\u{1F3FF}',
        }
    }

    /// Name used in alias notation, e.g. `:wave|type_3:`
    pub const fn type_name(self) -> &'static str {
        match self {
            Fitzpatrick::Type12 => "type_1_2",
            Fitzpatrick::Type3 => "type_3",
            Fitzpatrick::Type4 => "type_4",
            Fitzpatrick::Type5 => "type_5",
            Fitzpatrick::Type6 => "type_6",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Fitzpatrick> {
        Self::ALL.into_iter().find(|f| f.type_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Fitzpatrick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// What to do with a skin tone modifier when rendering an emoji to another form
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitzpatrickAction {
    /// Render the modifier in the target form, e.g. `:wave|type_3:`
    #[default]
    Parse,
    /// Drop the modifier entirely
    Remove,
    /// Leave the raw modifier code point in place after the rendered emoji
    Ignore,
}

impl FromStr for FitzpatrickAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            _ if s.eq_ignore_ascii_case("parse") => FitzpatrickAction::Parse,
            _ if s.eq_ignore_ascii_case("remove") => FitzpatrickAction::Remove,
            _ if s.eq_ignore_ascii_case("ignore") => FitzpatrickAction::Ignore,
            _ => return Err(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_range() {
        for c in '\u{1F3FB}'..='\u{1F3FF}' {
            let f = Fitzpatrick::from_char(c).unwrap();
            assert_eq!(f.as_char(), c);
            assert_eq!(f as u32, c as u32);
            assert_eq!(Fitzpatrick::from_type_name(f.type_name()), Some(f));
        }

        assert_eq!(Fitzpatrick::from_char('\u{1F3FA}'), None);
        assert_eq!(Fitzpatrick::from_char('a'), None);
        assert_eq!(Fitzpatrick::from_type_name("type_2"), None);
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("REMOVE".parse(), Ok(FitzpatrickAction::Remove));
        assert_eq!("ignore".parse(), Ok(FitzpatrickAction::Ignore));
        assert!("nope".parse::<FitzpatrickAction>().is_err());
    }
}
