//! Label configuration and its defaults

use std::fmt;
use std::str::FromStr;

use crate::errors::LabelError;
use crate::location::Location;
use crate::order::PanelOrder;
use crate::types::Offset;

pub const FONT_SIZE: f64 = 14.0;
pub const MARGIN: f64 = 1.0;
pub const COLOR: &str = "black";
pub const BACKGROUND_COLOR: &str = "none";
pub const EDGE_COLOR: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontAngle {
    #[default]
    Normal,
    Italic,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        })
    }
}

impl fmt::Display for FontAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontAngle::Normal => "normal",
            FontAngle::Italic => "italic",
        })
    }
}

impl FromStr for FontWeight {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(LabelError::UnknownFontWeight {
                name: s.to_string(),
                src: None,
                span: None,
            }),
        }
    }
}

impl FromStr for FontAngle {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontAngle::Normal),
            "italic" => Ok(FontAngle::Italic),
            _ => Err(LabelError::UnknownFontAngle {
                name: s.to_string(),
                src: None,
                span: None,
            }),
        }
    }
}

/// Placement and styling shared by every label of one call
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOptions {
    pub location: Location,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_angle: FontAngle,
    pub color: String,
    pub background_color: String,
    pub margin: f64,
    pub edge_color: String,
    /// Literal text placed before the label token
    pub prefix: String,
    /// Literal text placed after the label token
    pub postfix: String,
    pub offset: Offset,
}

impl Default for LabelOptions {
    fn default() -> Self {
        LabelOptions {
            location: Location::default(),
            font_size: FONT_SIZE,
            font_weight: FontWeight::default(),
            font_angle: FontAngle::default(),
            color: COLOR.to_string(),
            background_color: BACKGROUND_COLOR.to_string(),
            margin: MARGIN,
            edge_color: EDGE_COLOR.to_string(),
            prefix: String::new(),
            postfix: String::new(),
            offset: Offset::default(),
        }
    }
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn font_size(mut self, size: f64) -> Result<Self, LabelError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(LabelError::InvalidNumber { what: "font size", value: size });
        }
        self.font_size = size;
        Ok(self)
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn font_angle(mut self, angle: FontAngle) -> Self {
        self.font_angle = angle;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = color.into();
        self
    }

    pub fn margin(mut self, margin: f64) -> Result<Self, LabelError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(LabelError::InvalidNumber { what: "margin", value: margin });
        }
        self.margin = margin;
        Ok(self)
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// One component is used for both axes, two are (x, y); anything else is rejected.
    pub fn offset(mut self, components: &[f64]) -> Result<Self, LabelError> {
        self.offset = Offset::from_components(components)?;
        Ok(self)
    }

    /// Full label text for a sequence token
    pub fn decorate(&self, token: &str) -> String {
        format!("{}{}{}", self.prefix, token, self.postfix)
    }
}

/// Options for labeling a whole figure: per-label options plus panel order
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FigureOptions {
    pub label: LabelOptions,
    pub order: PanelOrder,
}

impl FigureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: PanelOrder) -> Self {
        self.order = order;
        self
    }

    pub fn label(mut self, label: LabelOptions) -> Self {
        self.label = label;
        self
    }
}

impl From<LabelOptions> for FigureOptions {
    fn from(label: LabelOptions) -> Self {
        FigureOptions { label, order: PanelOrder::default() }
    }
}
