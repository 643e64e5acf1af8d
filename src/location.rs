//! Named label corners and the anchor geometry each one implies.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::LabelError;
use crate::host::{HAlign, VAlign};
use crate::types::{Limix, Offset};

/// Where on its panel a label sits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Location {
    NorthEast,
    #[default]
    NorthWest,
    SouthWest,
    SouthEast,
    /// Anchored at the top-left corner with the offset pointing up, out of the panel
    NorthWestOutside,
}

/// Everything a location fixes about a label: the reference corner, which
/// way a positive offset moves on each axis, and the text alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub limix: Limix,
    pub sign: DVec2,
    pub valign: VAlign,
    pub halign: HAlign,
}

impl Anchor {
    /// Apply this anchor's signs to a raw offset
    pub fn signed(&self, offset: Offset) -> DVec2 {
        offset.as_vec() * self.sign
    }

    /// Label position for a raw offset, in normalized panel units
    pub fn position(&self, offset: Offset) -> DVec2 {
        self.limix.corner() + self.signed(offset)
    }
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::NorthEast,
        Location::NorthWest,
        Location::SouthWest,
        Location::SouthEast,
        Location::NorthWestOutside,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::NorthEast => "northeast",
            Location::NorthWest => "northwest",
            Location::SouthWest => "southwest",
            Location::SouthEast => "southeast",
            Location::NorthWestOutside => "northwestoutside",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Location::NorthEast => "ne",
            Location::NorthWest => "nw",
            Location::SouthWest => "sw",
            Location::SouthEast => "se",
            Location::NorthWestOutside => "nwo",
        }
    }

    pub fn anchor(self) -> Anchor {
        let (x, y, sx, sy, valign, halign) = match self {
            Location::NorthEast => (1, 1, -1.0, -1.0, VAlign::Top, HAlign::Right),
            Location::NorthWest => (0, 1, 1.0, -1.0, VAlign::Top, HAlign::Left),
            Location::SouthWest => (0, 0, 1.0, 1.0, VAlign::Bottom, HAlign::Left),
            Location::SouthEast => (1, 0, -1.0, 1.0, VAlign::Bottom, HAlign::Right),
            Location::NorthWestOutside => (0, 1, 1.0, 1.0, VAlign::Bottom, HAlign::Left),
        };
        Anchor {
            limix: Limix::new(x, y),
            sign: dvec2(sx, sy),
            valign,
            halign,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Location::ALL
            .into_iter()
            .find(|loc| loc.name() == wanted || loc.abbreviation() == wanted)
            .ok_or_else(|| LabelError::UnknownLocation {
                name: s.to_string(),
                src: None,
                span: None,
            })
    }
}
