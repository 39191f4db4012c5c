//! Calendar color palette keyed by how many reviews share a day.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    White,
    Black,
}

impl DensityColor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// sRGB triple matching the named CSS/X11 color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 0, 0),
            Self::Orange => (255, 165, 0),
            Self::Yellow => (255, 255, 0),
            Self::Green => (0, 128, 0),
            Self::Blue => (0, 0, 255),
            Self::Indigo => (75, 0, 130),
            Self::Violet => (238, 130, 238),
            Self::White => (255, 255, 255),
            Self::Black => (0, 0, 0),
        }
    }
}

impl fmt::Display for DensityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background and foreground colors for a day holding `count` reviews.
///
/// Foregrounds are chosen for contrast: black on orange and yellow, white
/// everywhere else. Counts outside 1..=6 fall back to violet.
pub fn density_color(count: usize) -> (DensityColor, DensityColor) {
    use DensityColor::*;
    match count {
        1 => (Red, White),
        2 => (Orange, Black),
        3 => (Yellow, Black),
        4 => (Green, White),
        5 => (Blue, White),
        6 => (Indigo, White),
        _ => (Violet, White),
    }
}

/// Legend rows, one per density bucket, with the colors used for that bucket.
pub fn legend() -> Vec<(&'static str, DensityColor, DensityColor)> {
    [
        ("1 Subject", 1),
        ("2 Subjects", 2),
        ("3 Subjects", 3),
        ("4 Subjects", 4),
        ("5 Subjects", 5),
        ("6 Subjects", 6),
        ("7+ Subjects", 7),
    ]
    .into_iter()
    .map(|(label, count)| {
        let (background, foreground) = density_color(count);
        (label, background, foreground)
    })
    .collect()
}

pub fn legend_text() -> String {
    let mut out = String::from("Color Key:");
    for (label, color, _) in legend() {
        let name = color.name();
        out.push('\n');
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&name[..1].to_ascii_uppercase());
        out.push_str(&name[1..]);
    }
    out
}
