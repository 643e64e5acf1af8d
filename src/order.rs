//! Reading order of the panels in a figure.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::LabelError;
use crate::types::PanelRect;

/// How panels are walked when a whole figure is labeled. Both orders key
/// on the panel's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PanelOrder {
    /// Top row first, left to right within a row
    #[default]
    RightDown,
    /// Left column first, top to bottom within a column
    DownRight,
}

impl PanelOrder {
    pub fn name(self) -> &'static str {
        match self {
            PanelOrder::RightDown => "rightdown",
            PanelOrder::DownRight => "downright",
        }
    }

    /// Compare two panels by reading order
    pub fn compare(self, a: &PanelRect, b: &PanelRect) -> Ordering {
        let (pa, pb) = (a.top_left(), b.top_left());
        // Higher top edge comes first, so y compares reversed.
        let by_row = pb.y.total_cmp(&pa.y);
        let by_col = pa.x.total_cmp(&pb.x);
        match self {
            PanelOrder::RightDown => by_row.then(by_col),
            PanelOrder::DownRight => by_col.then(by_row),
        }
    }

    /// Sort panels into label order. The sort is stable: panels whose
    /// reference corners coincide keep the order they were given in.
    pub fn sort<P>(self, panels: &mut [(P, PanelRect)]) {
        panels.sort_by(|(_, a), (_, b)| self.compare(a, b));
    }
}

impl fmt::Display for PanelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelOrder {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rightdown" => Ok(PanelOrder::RightDown),
            "downright" => Ok(PanelOrder::DownRight),
            _ => Err(LabelError::UnknownOrder {
                name: s.to_string(),
                src: None,
                span: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2 rows x 3 columns, named by (row, col), shuffled
    fn grid() -> Vec<(&'static str, PanelRect)> {
        let cell = |row: usize, col: usize| {
            PanelRect::new(0.1 + 0.3 * col as f64, 0.55 - 0.45 * row as f64, 0.25, 0.4)
        };
        vec![
            ("r1c2", cell(1, 2)),
            ("r0c1", cell(0, 1)),
            ("r1c0", cell(1, 0)),
            ("r0c0", cell(0, 0)),
            ("r0c2", cell(0, 2)),
            ("r1c1", cell(1, 1)),
        ]
    }

    fn names(panels: &[(&'static str, PanelRect)]) -> Vec<&'static str> {
        panels.iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn rightdown_reads_rows() {
        let mut panels = grid();
        PanelOrder::RightDown.sort(&mut panels);
        assert_eq!(names(&panels), ["r0c0", "r0c1", "r0c2", "r1c0", "r1c1", "r1c2"]);
    }

    #[test]
    fn downright_reads_columns() {
        let mut panels = grid();
        PanelOrder::DownRight.sort(&mut panels);
        assert_eq!(names(&panels), ["r0c0", "r1c0", "r0c1", "r1c1", "r0c2", "r1c2"]);
    }

    #[test]
    fn row_key_is_the_top_edge() {
        // Same bottom, different heights: the taller panel's top is higher.
        let mut panels = vec![
            ("short", PanelRect::new(0.0, 0.1, 0.4, 0.3)),
            ("tall", PanelRect::new(0.5, 0.1, 0.4, 0.8)),
        ];
        PanelOrder::RightDown.sort(&mut panels);
        assert_eq!(names(&panels), ["tall", "short"]);
    }

    #[test]
    fn ties_keep_given_order() {
        let rect = PanelRect::new(0.1, 0.1, 0.8, 0.8);
        let mut panels = vec![("first", rect), ("second", rect)];
        PanelOrder::DownRight.sort(&mut panels);
        assert_eq!(names(&panels), ["first", "second"]);
    }

    #[test]
    fn parse() {
        assert_eq!("RightDown".parse::<PanelOrder>().unwrap(), PanelOrder::RightDown);
        assert_eq!("downright".parse::<PanelOrder>().unwrap(), PanelOrder::DownRight);
        assert!(matches!(
            "updown".parse::<PanelOrder>(),
            Err(LabelError::UnknownOrder { .. })
        ));
    }
}
