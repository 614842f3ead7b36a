use serde::{Deserialize, Serialize};
use std::fmt;

use super::skill::Family;

/// A social grouping tied to one skill family. Clan bonus skills are
/// always drawn from that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clan {
    Yashan,
    Veygirh,
    Tengun,
    Bakaar,
    Ulgar,
    Khazrak,
}

impl Clan {
    pub const ALL: [Clan; 6] = [
        Clan::Yashan,
        Clan::Veygirh,
        Clan::Tengun,
        Clan::Bakaar,
        Clan::Ulgar,
        Clan::Khazrak,
    ];

    /// Stable lowercase key, identical to the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Yashan => "yashan",
            Self::Veygirh => "veygirh",
            Self::Tengun => "tengun",
            Self::Bakaar => "bakaar",
            Self::Ulgar => "ulgar",
            Self::Khazrak => "khazrak",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yashan => "Yashan",
            Self::Veygirh => "Veygirh",
            Self::Tengun => "Tengun",
            Self::Bakaar => "Bakaar",
            Self::Ulgar => "Ulgar",
            Self::Khazrak => "Khazrak",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Yashan => Family::Social,
            Self::Veygirh | Self::Ulgar => Family::Technical,
            Self::Tengun => Family::Martial,
            Self::Bakaar | Self::Khazrak => Family::Survival,
        }
    }
}

impl fmt::Display for Clan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_matches_serialized_form() {
        for clan in Clan::ALL {
            assert_eq!(serde_json::to_string(&clan).unwrap(), format!("\"{}\"", clan.key()));
            assert_eq!(clan.key(), clan.label().to_lowercase());
        }
    }

    #[test]
    fn clan_families() {
        assert_eq!(Clan::Yashan.family(), Family::Social);
        assert_eq!(Clan::Veygirh.family(), Family::Technical);
        assert_eq!(Clan::Tengun.family(), Family::Martial);
        assert_eq!(Clan::Bakaar.family(), Family::Survival);
        assert_eq!(Clan::Ulgar.family(), Family::Technical);
        assert_eq!(Clan::Khazrak.family(), Family::Survival);
    }
}
