//! Error types with rich diagnostics using miette
//!
//! Errors raised from the textual option parser carry source spans so the
//! offending `name = value` pair is underlined in reports.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::host::HostError;

/// Coarse failure classes callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed or unrecognized argument (offset, mode, order, location, ...)
    InvalidArgument,
    /// The target figure is not in a labelable state
    PreconditionFailed,
    /// The host graphics environment refused an operation
    Host,
}

/// Errors raised while configuring, placing, or mutating panel labels
#[derive(Error, Diagnostic, Debug)]
pub enum LabelError {
    #[error("offset must have 1 or 2 components, got {len}")]
    #[diagnostic(code(panelmark::args::invalid_offset))]
    InvalidOffset {
        len: usize,
        #[source_code]
        src: Option<NamedSource<String>>,
        #[label("this offset")]
        span: Option<SourceSpan>,
    },

    #[error("unknown location: {name}")]
    #[diagnostic(
        code(panelmark::args::unknown_location),
        help("expected one of northwest, southwest, northeast, southeast, northwestoutside (or nw, sw, ne, se, nwo)")
    )]
    UnknownLocation {
        name: String,
        #[source_code]
        src: Option<NamedSource<String>>,
        #[label("not a corner")]
        span: Option<SourceSpan>,
    },

    #[error("unknown label mode: {token}")]
    #[diagnostic(
        code(panelmark::args::unknown_mode),
        help("expected one of \"A\", \"a\", \"1\", \"I\", \"i\"")
    )]
    UnknownMode { token: String },

    #[error("unknown ordering: {name}")]
    #[diagnostic(
        code(panelmark::args::unknown_order),
        help("expected \"rightdown\" or \"downright\"")
    )]
    UnknownOrder {
        name: String,
        #[source_code]
        src: Option<NamedSource<String>>,
        #[label("not an ordering")]
        span: Option<SourceSpan>,
    },

    #[error("unknown font weight: {name}")]
    #[diagnostic(code(panelmark::args::unknown_font_weight), help("expected \"normal\" or \"bold\""))]
    UnknownFontWeight {
        name: String,
        #[source_code]
        src: Option<NamedSource<String>>,
        #[label("not a weight")]
        span: Option<SourceSpan>,
    },

    #[error("unknown font angle: {name}")]
    #[diagnostic(code(panelmark::args::unknown_font_angle), help("expected \"normal\" or \"italic\""))]
    UnknownFontAngle {
        name: String,
        #[source_code]
        src: Option<NamedSource<String>>,
        #[label("not an angle")]
        span: Option<SourceSpan>,
    },

    #[error("invalid number for {what}: {value}")]
    #[diagnostic(code(panelmark::args::invalid_number))]
    InvalidNumber { what: &'static str, value: f64 },

    #[error("unknown option: {name}")]
    #[diagnostic(code(panelmark::options::unknown_option))]
    UnknownOption {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a recognized option")]
        span: SourceSpan,
    },

    #[error("option {name} expects {expected}, got {got}")]
    #[diagnostic(code(panelmark::options::type_mismatch))]
    OptionType {
        name: String,
        expected: &'static str,
        got: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("wrong kind of value")]
        span: SourceSpan,
    },

    #[error("malformed options: {message}")]
    #[diagnostic(code(panelmark::options::syntax))]
    OptionSyntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("figure has no panels to label")]
    #[diagnostic(
        code(panelmark::figure::no_panels),
        help("create at least one subplot before labeling the figure")
    )]
    NoPanels,

    #[error(transparent)]
    #[diagnostic(code(panelmark::host))]
    Host(#[from] HostError),
}

impl LabelError {
    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::NoPanels => ErrorKind::PreconditionFailed,
            LabelError::Host(_) => ErrorKind::Host,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Attach option-source context to an argument error that was raised
    /// without one (e.g. by a `FromStr` impl called from the parser).
    pub(crate) fn with_source(self, source: NamedSource<String>, at: SourceSpan) -> Self {
        match self {
            LabelError::InvalidOffset { len, .. } => LabelError::InvalidOffset {
                len,
                src: Some(source),
                span: Some(at),
            },
            LabelError::UnknownLocation { name, .. } => LabelError::UnknownLocation {
                name,
                src: Some(source),
                span: Some(at),
            },
            LabelError::UnknownOrder { name, .. } => LabelError::UnknownOrder {
                name,
                src: Some(source),
                span: Some(at),
            },
            LabelError::UnknownFontWeight { name, .. } => LabelError::UnknownFontWeight {
                name,
                src: Some(source),
                span: Some(at),
            },
            LabelError::UnknownFontAngle { name, .. } => LabelError::UnknownFontAngle {
                name,
                src: Some(source),
                span: Some(at),
            },
            other => other,
        }
    }
}
