//! The user-facing appearance preference.

use shade_store::Codec;

/// Theme preference.
///
/// `System` is not a visual state of its own: it defers to whatever the OS
/// currently reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    Light,
    Dark,
    /// Follow the OS dark/light signal.
    #[default]
    System,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::System => "system",
        }
    }

    /// Parse a stored name.
    ///
    /// Anything unrecognized is absence, so a corrupted stored value
    /// degrades to the entry default instead of failing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Appearance::Light),
            "dark" => Some(Appearance::Dark),
            "system" => Some(Appearance::System),
            _ => None,
        }
    }

    pub const fn codec() -> Codec<Appearance> {
        Codec::new(|v| Some(v.as_str().to_string()), Appearance::parse)
    }
}
