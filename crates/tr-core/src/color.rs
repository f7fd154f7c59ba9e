//! Station and train colors.
//!
//! The palette is closed: once every color has a station, no further
//! stations can be placed.

/// A station color; trains carry the color of the station they belong to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Orange,
    Cyan,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Orange,
        Color::Cyan,
    ];

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red    => "red",
            Color::Blue   => "blue",
            Color::Yellow => "yellow",
            Color::Green  => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Cyan   => "cyan",
        }
    }

    /// sRGB triple for renderers.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red    => (255, 0, 0),
            Color::Blue   => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Green  => (0, 255, 0),
            Color::Purple => (160, 32, 240),
            Color::Orange => (255, 165, 0),
            Color::Cyan   => (0, 255, 255),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
