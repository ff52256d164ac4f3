//! Participant colours.
//!
//! Every participant is identified by a colour. `Black` is reserved for the
//! fugitive; every other colour belongs to a pursuer.

use serde::{Deserialize, Serialize};

/// Colour identifying a participant.
///
/// The derived ordering is only used to keep colour sets deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    /// The fugitive.
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// The one colour a fugitive may use.
    pub const FUGITIVE: Colour = Colour::Black;

    /// Every pursuer colour, in seating order.
    pub const PURSUERS: [Colour; 5] = [
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Is this the fugitive's colour?
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Is this a pursuer colour?
    #[must_use]
    pub const fn is_pursuer(self) -> bool {
        !self.is_fugitive()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "black",
            Colour::Blue => "blue",
            Colour::Green => "green",
            Colour::Red => "red",
            Colour::White => "white",
            Colour::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_black_is_fugitive() {
        assert!(Colour::Black.is_fugitive());
        for colour in Colour::PURSUERS {
            assert!(colour.is_pursuer());
            assert!(!colour.is_fugitive());
        }
    }

    #[test]
    fn test_colour_serialization() {
        let json = serde_json::to_string(&Colour::Yellow).unwrap();
        assert_eq!(json, r#""yellow""#);
        let back: Colour = serde_json::from_str(r#""black""#).unwrap();
        assert_eq!(back, Colour::FUGITIVE);
    }
}
