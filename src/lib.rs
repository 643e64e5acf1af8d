//! Sequential panel labels for composite figures.
//!
//! Given a figure made of several panels (subplots), `panelmark` puts a label
//! such as `A`, `b`, `3` or `iv` in a chosen corner of each one, in reading
//! order, and offers a few cosmetic tweaks afterwards. Drawing is left to the
//! host plotting environment, reached through the [`Host`] trait;
//! [`MemoryHost`] is an in-memory stand-in.
//!
//! ```
//! use panelmark::{FigureOptions, Host, LabelMode, MemoryHost, label_figure, upper};
//!
//! let mut host = MemoryHost::new();
//! let fig = host.add_figure();
//! for i in 1..=4 {
//!     host.subplot(fig, 2, 2, i)?;
//! }
//!
//! let opts = FigureOptions::parse(r#"location = nw, prefix = "(", postfix = ")""#)?;
//! let labels = label_figure(&mut host, fig, LabelMode::LowerAlpha, &opts)?;
//! assert_eq!(host.text(labels[0].label())?, "(a)");
//!
//! upper(&mut host, &labels)?;
//! assert_eq!(host.text(labels[3].label())?, "(D)");
//! # Ok::<(), panelmark::LabelError>(())
//! ```

pub mod annotator;
pub mod errors;
pub mod host;
pub mod location;
mod log;
pub mod memory;
pub mod options;
pub mod order;
pub mod parse;
pub mod sequence;
pub mod types;

pub use annotator::{
    PanelLabel, Target, annotate, bigger, bold, delete, italic, label_figure, label_panel, lower,
    normal, reset_position, smaller, upper,
};
pub use errors::{ErrorKind, LabelError};
pub use host::{HAlign, HoldGuard, Host, HostError, TextSpec, VAlign};
pub use location::{Anchor, Location};
pub use memory::{FigureId, MemoryHost, PanelId, TextId, TextObject};
pub use options::{FigureOptions, FontAngle, FontWeight, LabelOptions};
pub use order::PanelOrder;
pub use parse::parse_options;
pub use sequence::{LabelMode, alpha, roman};
pub use types::{DOMAIN, Limix, Offset, PanelRect};
