//! Strongly-typed geometry for panel labeling.
//!
//! Panel positions are figure-normalized rectangles; label anchors live in a
//! panel's own normalized space, where each axis spans exactly `[0, 1]`.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::LabelError;

/// The normalized coordinate domain of one panel axis.
pub const DOMAIN: [f64; 2] = [0.0, 1.0];

/// A panel's placement in its figure as (left, bottom, width, height),
/// all in figure-normalized units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanelRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        PanelRect { left, bottom, width, height }
    }

    /// Top edge (bottom + height)
    #[inline]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Reference point used for label ordering: left edge, top edge
    #[inline]
    pub fn top_left(&self) -> DVec2 {
        dvec2(self.left, self.top())
    }
}

impl fmt::Display for PanelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {} {}]", self.left, self.bottom, self.width, self.height)
    }
}

/// Which end of the normalized domain each label coordinate is measured from.
/// Each index is 0 (low edge) or 1 (high edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limix {
    x: usize,
    y: usize,
}

impl Limix {
    /// Panics in debug builds if an index is not 0 or 1; only the corner table builds these.
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        debug_assert!(x < 2 && y < 2);
        Limix { x, y }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    /// The corner point in normalized panel coordinates
    pub fn corner(self) -> DVec2 {
        dvec2(DOMAIN[self.x], DOMAIN[self.y])
    }
}

/// A user-supplied label offset, in normalized panel units, before the
/// per-corner sign is applied. Positive components point into the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset(DVec2);

impl Offset {
    pub const DEFAULT: Offset = Offset(DVec2::new(0.01, 0.01));

    /// Same offset on both axes
    pub fn uniform(d: f64) -> Result<Offset, LabelError> {
        Offset::xy(d, d)
    }

    pub fn xy(dx: f64, dy: f64) -> Result<Offset, LabelError> {
        for v in [dx, dy] {
            if !v.is_finite() {
                return Err(LabelError::InvalidNumber { what: "offset", value: v });
            }
        }
        Ok(Offset(dvec2(dx, dy)))
    }

    /// One component applies to both axes; two are (x, y).
    pub fn from_components(components: &[f64]) -> Result<Offset, LabelError> {
        match *components {
            [d] => Offset::uniform(d),
            [dx, dy] => Offset::xy(dx, dy),
            _ => Err(LabelError::InvalidOffset {
                len: components.len(),
                src: None,
                span: None,
            }),
        }
    }

    pub fn as_vec(self) -> DVec2 {
        self.0
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_uses_top_edge() {
        let r = PanelRect::new(0.1, 0.5, 0.3, 0.25);
        assert_eq!(r.top_left(), dvec2(0.1, 0.75));
    }

    #[test]
    fn limix_corner() {
        assert_eq!(Limix::new(1, 0).corner(), dvec2(1.0, 0.0));
        assert_eq!(Limix::new(0, 1).corner(), dvec2(0.0, 1.0));
    }

    #[test]
    fn offset_scalar_applies_to_both_axes() {
        let o = Offset::from_components(&[0.05]).unwrap();
        assert_eq!(o.as_vec(), dvec2(0.05, 0.05));
    }

    #[test]
    fn offset_pair() {
        let o = Offset::from_components(&[0.02, -0.03]).unwrap();
        assert_eq!(o.as_vec(), dvec2(0.02, -0.03));
    }

    #[test]
    fn offset_rejects_too_many_components() {
        let err = Offset::from_components(&[0.1, 0.2, 0.3]).unwrap_err();
        assert!(matches!(err, LabelError::InvalidOffset { len: 3, .. }));
    }

    #[test]
    fn offset_rejects_empty() {
        assert!(Offset::from_components(&[]).is_err());
    }

    #[test]
    fn offset_rejects_nan() {
        assert!(matches!(
            Offset::uniform(f64::NAN),
            Err(LabelError::InvalidNumber { what: "offset", .. })
        ));
    }

    #[test]
    fn default_offset() {
        assert_eq!(Offset::default().as_vec(), dvec2(0.01, 0.01));
    }
}
