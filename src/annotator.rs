//! Place labels on panels and restyle them afterwards.
//!
//! Every mutator takes a slice of labels and applies itself to each in turn,
//! so a single label is just a slice of length one.

use glam::{DVec2, dvec2};

use crate::errors::LabelError;
use crate::host::{HoldGuard, Host, HostError, TextSpec};
use crate::log::debug;
use crate::options::{FigureOptions, FontAngle, FontWeight, LabelOptions};
use crate::sequence::LabelMode;
use crate::types::{DOMAIN, Limix};

/// One label placed on one panel.
///
/// The text object itself belongs to the host; this keeps its handle plus
/// the anchor data needed to put it back where it was created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLabel<T> {
    label: T,
    limix: Limix,
    offset: DVec2,
}

impl<T: Copy> PanelLabel<T> {
    /// Host handle of the text object
    pub fn label(&self) -> T {
        self.label
    }

    pub fn limix(&self) -> Limix {
        self.limix
    }

    /// Offset from the anchor corner, already signed for that corner
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// The position the label was created at
    pub fn home(&self) -> DVec2 {
        dvec2(
            DOMAIN[self.limix.x()] + self.offset.x,
            DOMAIN[self.limix.y()] + self.offset.y,
        )
    }
}

/// What to label: one panel with an explicit token, or every panel of a figure
pub enum Target<'a, H: Host> {
    Panel { panel: H::Panel, label: &'a str },
    Figure { figure: H::Figure, mode: &'a str },
}

/// Label either target form; see [`label_panel`] and [`label_figure`].
/// The panel form ignores `opts.order`.
pub fn annotate<H: Host>(
    host: &mut H,
    target: Target<'_, H>,
    opts: &FigureOptions,
) -> Result<Vec<PanelLabel<H::Text>>, LabelError> {
    match target {
        Target::Panel { panel, label } => Ok(vec![label_panel(host, panel, label, &opts.label)?]),
        Target::Figure { figure, mode } => label_figure(host, figure, mode.parse()?, opts),
    }
}

/// The text object a label starts out as
fn text_spec(text: String, opts: &LabelOptions, position: DVec2) -> TextSpec {
    let anchor = opts.location.anchor();
    TextSpec {
        text,
        position,
        valign: anchor.valign,
        halign: anchor.halign,
        font_size: opts.font_size,
        font_weight: opts.font_weight,
        font_angle: opts.font_angle,
        color: opts.color.clone(),
        background_color: opts.background_color.clone(),
        edge_color: opts.edge_color.clone(),
        margin: opts.margin,
        clipping: true,
    }
}

/// Put `prefix + token + postfix` on one panel at the configured corner.
///
/// The panel's hold flag is forced on while the text is created and put
/// back afterwards if it was off.
pub fn label_panel<H: Host>(
    host: &mut H,
    panel: H::Panel,
    token: &str,
    opts: &LabelOptions,
) -> Result<PanelLabel<H::Text>, LabelError> {
    let anchor = opts.location.anchor();
    let offset = anchor.signed(opts.offset);
    let position = anchor.limix.corner() + offset;
    let spec = text_spec(opts.decorate(token), opts, position);

    let label = {
        let mut host = HoldGuard::acquire(host, panel)?;
        host.create_text(panel, &spec)?
    };
    debug!(text = %spec.text, x = position.x, y = position.y, location = %opts.location, "placed label");

    Ok(PanelLabel {
        label,
        limix: anchor.limix,
        offset,
    })
}

/// Label every panel of a figure in reading order with consecutive entries
/// of `mode`'s sequence.
///
/// Fails with [`LabelError::NoPanels`] on an empty figure. Either every
/// panel gets a label or none does: if the host refuses one, the labels
/// already created are deleted again.
pub fn label_figure<H: Host>(
    host: &mut H,
    figure: H::Figure,
    mode: LabelMode,
    opts: &FigureOptions,
) -> Result<Vec<PanelLabel<H::Text>>, LabelError> {
    let mut panels = host
        .panels(figure)?
        .into_iter()
        .map(|panel| -> Result<_, HostError> { Ok((panel, host.panel_rect(panel)?)) })
        .collect::<Result<Vec<_>, _>>()?;
    if panels.is_empty() {
        return Err(LabelError::NoPanels);
    }
    opts.order.sort(&mut panels);
    debug!(count = panels.len(), mode = %mode, order = %opts.order, "labeling figure");

    let mut labels = Vec::with_capacity(panels.len());
    for (n, (panel, _)) in (1u32..).zip(panels) {
        match label_panel(host, panel, &mode.nth(n), &opts.label) {
            Ok(label) => labels.push(label),
            Err(err) => {
                debug!(placed = labels.len(), "rolling back figure labels");
                for label in labels {
                    // The original error is the one worth reporting.
                    let _ = host.delete_text(label.label);
                }
                return Err(err);
            }
        }
    }
    Ok(labels)
}

/// Move labels back to where they were created
pub fn reset_position<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    for label in labels {
        host.set_position(label.label, label.home())?;
    }
    Ok(())
}

/// Upper-case the whole label text, prefix and postfix included
pub fn upper<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    map_text(host, labels, str::to_uppercase)
}

/// Lower-case the whole label text, prefix and postfix included
pub fn lower<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    map_text(host, labels, str::to_lowercase)
}

fn map_text<H: Host>(
    host: &mut H,
    labels: &[PanelLabel<H::Text>],
    f: impl Fn(&str) -> String,
) -> Result<(), LabelError> {
    for label in labels {
        let text = host.text(label.label)?;
        host.set_text(label.label, &f(&text))?;
    }
    Ok(())
}

/// Grow the font by `step`
pub fn bigger<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>], step: f64) -> Result<(), LabelError> {
    resize(host, labels, step)
}

/// Shrink the font by `step`. A step that would leave a label at zero points
/// or below is rejected with [`LabelError::InvalidNumber`].
pub fn smaller<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>], step: f64) -> Result<(), LabelError> {
    resize(host, labels, -step)
}

/// Sizes are all checked before any is written, so a step that would take
/// one label to zero or below leaves every label untouched.
fn resize<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>], delta: f64) -> Result<(), LabelError> {
    let mut sizes = Vec::with_capacity(labels.len());
    for label in labels {
        let size = host.font_size(label.label)? + delta;
        if !size.is_finite() || size <= 0.0 {
            return Err(LabelError::InvalidNumber { what: "font size", value: size });
        }
        sizes.push(size);
    }
    for (label, size) in labels.iter().zip(sizes) {
        host.set_font_size(label.label, size)?;
    }
    Ok(())
}

pub fn italic<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    for label in labels {
        host.set_font_angle(label.label, FontAngle::Italic)?;
    }
    Ok(())
}

pub fn bold<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    for label in labels {
        host.set_font_weight(label.label, FontWeight::Bold)?;
    }
    Ok(())
}

/// Clear both italic and bold
pub fn normal<H: Host>(host: &mut H, labels: &[PanelLabel<H::Text>]) -> Result<(), LabelError> {
    for label in labels {
        host.set_font_angle(label.label, FontAngle::Normal)?;
        host.set_font_weight(label.label, FontWeight::Normal)?;
    }
    Ok(())
}

/// Remove the labels' text objects from the host.
///
/// Every label is attempted; the first failure, if any, is returned.
pub fn delete<H: Host>(host: &mut H, labels: Vec<PanelLabel<H::Text>>) -> Result<(), LabelError> {
    let mut first_err = None;
    for label in labels {
        if let Err(err) = host.delete_text(label.label) {
            first_err.get_or_insert(err);
        }
    }
    match first_err {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
