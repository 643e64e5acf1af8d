//! An in-process [`Host`] that keeps figures, panels and text objects in
//! memory. It draws nothing; it exists so labeling can be driven and
//! inspected without a live plotting environment.

use std::fmt;

use glam::DVec2;

use crate::host::{Host, HostError, TextSpec};
use crate::options::{FontAngle, FontWeight};
use crate::types::PanelRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FigureId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PanelId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextId(usize);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel #{}", self.0)
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text #{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct PanelState {
    figure: FigureId,
    rect: PanelRect,
    hold: bool,
    locked: bool,
    /// Number of hold writes, so tests can see the flag was touched
    hold_writes: usize,
}

/// A live text object: the panel it belongs to and its current properties
#[derive(Debug, Clone, PartialEq)]
pub struct TextObject {
    pub panel: PanelId,
    pub spec: TextSpec,
    /// Whether the panel's hold flag was on when the text was created
    pub created_with_hold: bool,
}

#[derive(Debug, Default)]
pub struct MemoryHost {
    figures: usize,
    panels: Vec<PanelState>,
    texts: Vec<Option<TextObject>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_figure(&mut self) -> FigureId {
        self.figures += 1;
        FigureId(self.figures - 1)
    }

    pub fn add_panel(&mut self, figure: FigureId, rect: PanelRect) -> PanelId {
        self.panels.push(PanelState {
            figure,
            rect,
            hold: false,
            locked: false,
            hold_writes: 0,
        });
        PanelId(self.panels.len() - 1)
    }

    /// Add the `index`th (1-based, row-major) cell of a `rows` x `cols` grid
    /// filling the central 80% of the figure
    pub fn subplot(
        &mut self,
        figure: FigureId,
        rows: usize,
        cols: usize,
        index: usize,
    ) -> Result<PanelId, HostError> {
        if figure.0 >= self.figures {
            return Err(HostError::new(format!("no such figure #{}", figure.0)));
        }
        if rows == 0 || cols == 0 || index == 0 || index > rows.saturating_mul(cols) {
            return Err(HostError::new(format!(
                "subplot index {index} is outside a {rows} x {cols} grid"
            )));
        }
        let (row, col) = ((index - 1) / cols, (index - 1) % cols);
        let (cell_w, cell_h) = (0.8 / cols as f64, 0.8 / rows as f64);
        let rect = PanelRect::new(
            0.1 + col as f64 * cell_w + 0.1 * cell_w,
            0.9 - (row + 1) as f64 * cell_h + 0.1 * cell_h,
            0.8 * cell_w,
            0.8 * cell_h,
        );
        Ok(self.add_panel(figure, rect))
    }

    /// Make text creation on this panel fail
    pub fn lock_panel(&mut self, panel: PanelId) {
        if let Some(p) = self.panels.get_mut(panel.0) {
            p.locked = true;
        }
    }

    pub fn text_object(&self, text: TextId) -> Option<&TextObject> {
        self.texts.get(text.0).and_then(Option::as_ref)
    }

    /// Live texts on a panel, oldest first
    pub fn texts_on(&self, panel: PanelId) -> Vec<TextId> {
        self.texts
            .iter()
            .enumerate()
            .filter(|(_, t)| t.as_ref().is_some_and(|t| t.panel == panel))
            .map(|(i, _)| TextId(i))
            .collect()
    }

    pub fn live_texts(&self) -> usize {
        self.texts.iter().flatten().count()
    }

    pub fn hold_writes(&self, panel: PanelId) -> usize {
        self.panels.get(panel.0).map_or(0, |p| p.hold_writes)
    }

    fn panel(&self, panel: PanelId) -> Result<&PanelState, HostError> {
        self.panels
            .get(panel.0)
            .ok_or_else(|| HostError::new(format!("no such {panel}")))
    }

    fn spec(&self, text: TextId) -> Result<&TextSpec, HostError> {
        self.text_object(text)
            .map(|t| &t.spec)
            .ok_or_else(|| HostError::new(format!("{text} does not exist")))
    }

    fn spec_mut(&mut self, text: TextId) -> Result<&mut TextSpec, HostError> {
        self.texts
            .get_mut(text.0)
            .and_then(Option::as_mut)
            .map(|t| &mut t.spec)
            .ok_or_else(|| HostError::new(format!("{text} does not exist")))
    }
}

impl Host for MemoryHost {
    type Figure = FigureId;
    type Panel = PanelId;
    type Text = TextId;

    /// Newest panel first
    fn panels(&self, figure: FigureId) -> Result<Vec<PanelId>, HostError> {
        if figure.0 >= self.figures {
            return Err(HostError::new(format!("no such figure #{}", figure.0)));
        }
        Ok(self
            .panels
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, p)| p.figure == figure)
            .map(|(i, _)| PanelId(i))
            .collect())
    }

    fn panel_rect(&self, panel: PanelId) -> Result<PanelRect, HostError> {
        Ok(self.panel(panel)?.rect)
    }

    fn hold(&self, panel: PanelId) -> Result<bool, HostError> {
        Ok(self.panel(panel)?.hold)
    }

    fn set_hold(&mut self, panel: PanelId, on: bool) -> Result<(), HostError> {
        let p = self
            .panels
            .get_mut(panel.0)
            .ok_or_else(|| HostError::new(format!("no such {panel}")))?;
        p.hold = on;
        p.hold_writes += 1;
        Ok(())
    }

    fn create_text(&mut self, panel: PanelId, spec: &TextSpec) -> Result<TextId, HostError> {
        let state = self.panel(panel)?;
        if state.locked {
            return Err(HostError::new(format!("{panel} is locked")));
        }
        let created_with_hold = state.hold;
        self.texts.push(Some(TextObject {
            panel,
            spec: spec.clone(),
            created_with_hold,
        }));
        Ok(TextId(self.texts.len() - 1))
    }

    fn text(&self, text: TextId) -> Result<String, HostError> {
        Ok(self.spec(text)?.text.clone())
    }

    fn set_text(&mut self, text: TextId, value: &str) -> Result<(), HostError> {
        self.spec_mut(text)?.text = value.to_string();
        Ok(())
    }

    fn font_size(&self, text: TextId) -> Result<f64, HostError> {
        Ok(self.spec(text)?.font_size)
    }

    fn set_font_size(&mut self, text: TextId, size: f64) -> Result<(), HostError> {
        self.spec_mut(text)?.font_size = size;
        Ok(())
    }

    fn set_font_weight(&mut self, text: TextId, weight: FontWeight) -> Result<(), HostError> {
        self.spec_mut(text)?.font_weight = weight;
        Ok(())
    }

    fn set_font_angle(&mut self, text: TextId, angle: FontAngle) -> Result<(), HostError> {
        self.spec_mut(text)?.font_angle = angle;
        Ok(())
    }

    fn set_position(&mut self, text: TextId, position: DVec2) -> Result<(), HostError> {
        self.spec_mut(text)?.position = position;
        Ok(())
    }

    fn delete_text(&mut self, text: TextId) -> Result<(), HostError> {
        match self.texts.get_mut(text.0) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                Ok(())
            }
            _ => Err(HostError::new(format!("{text} does not exist"))),
        }
    }
}
