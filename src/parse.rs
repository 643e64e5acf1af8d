//! Parse textual `name = value` option lists into [`FigureOptions`]

use std::str::FromStr;

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::LabelError;
use crate::log::debug;
use crate::location::Location;
use crate::options::{FigureOptions, FontAngle, FontWeight};
use crate::order::PanelOrder;

#[derive(Parser)]
#[grammar = "options.pest"]
pub struct OptionsParser;

const SOURCE_NAME: &str = "<options>";

/// A parsed option value before it is interpreted for a specific option
#[derive(Debug, Clone, PartialEq)]
enum RawValue<'s> {
    Number(f64),
    Vector(Vec<f64>),
    /// A bare word or the contents of a quoted string
    Text(&'s str),
}

impl RawValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            RawValue::Number(_) => "number",
            RawValue::Vector(_) => "vector",
            RawValue::Text(_) => "text",
        }
    }
}

#[derive(Debug)]
struct RawOption<'s> {
    name: &'s str,
    name_span: SourceSpan,
    value: RawValue<'s>,
    /// Source text of the value, quotes excluded for strings
    lexeme: &'s str,
    value_span: SourceSpan,
}

/// Parse an option list such as `location = se, offset = [0.02 0.03], order = downright`.
///
/// Option names are case-insensitive. Later options override earlier ones.
pub fn parse_options(source: &str) -> Result<FigureOptions, LabelError> {
    let named = || NamedSource::new(SOURCE_NAME, source.to_string());

    let raw = parse_raw(source).map_err(|e| {
        let span: SourceSpan = match e.location {
            InputLocation::Pos(p) => (p, 0).into(),
            InputLocation::Span((start, end)) => (start, end - start).into(),
        };
        LabelError::OptionSyntax {
            message: e.variant.message().into_owned(),
            src: named(),
            span,
        }
    })?;

    let mut opts = FigureOptions::default();
    for option in raw {
        debug!(option = option.name, value = option.lexeme, "applying option");
        apply(&mut opts, &option, named)?;
    }
    Ok(opts)
}

fn parse_raw(source: &str) -> Result<Vec<RawOption<'_>>, pest::error::Error<Rule>> {
    let mut out = Vec::new();
    for pair in OptionsParser::parse(Rule::options, source)? {
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::option {
                out.push(parse_option(inner)?);
            }
        }
    }
    Ok(out)
}

fn span_of(pair: &Pair<'_, Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn parse_option(pair: Pair<'_, Rule>) -> Result<RawOption<'_>, pest::error::Error<Rule>> {
    let mut inner = pair.into_inner();
    let (Some(name), Some(value)) = (inner.next(), inner.next()) else {
        unreachable!("grammar: option = name ~ value");
    };
    let name_span = span_of(&name);
    let value_span = span_of(&value);

    let Some(value) = value.into_inner().next() else {
        unreachable!("grammar: value has exactly one alternative");
    };
    let (value, lexeme) = match value.as_rule() {
        Rule::number => (RawValue::Number(parse_number(&value)?), value.as_str()),
        Rule::vector => {
            let lexeme = value.as_str();
            let numbers = value
                .into_inner()
                .map(|n| parse_number(&n))
                .collect::<Result<Vec<_>, _>>()?;
            (RawValue::Vector(numbers), lexeme)
        }
        Rule::string => {
            let content = value.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            (RawValue::Text(content), content)
        }
        _ => (RawValue::Text(value.as_str()), value.as_str()),
    };

    Ok(RawOption {
        name: name.as_str(),
        name_span,
        value,
        lexeme,
        value_span,
    })
}

fn parse_number(pair: &Pair<'_, Rule>) -> Result<f64, pest::error::Error<Rule>> {
    pair.as_str().parse::<f64>().map_err(|e| {
        pest::error::Error::new_from_span(
            pest::error::ErrorVariant::CustomError { message: format!("invalid number: {e}") },
            pair.as_span(),
        )
    })
}

fn apply(
    opts: &mut FigureOptions,
    option: &RawOption<'_>,
    named: impl Fn() -> NamedSource<String>,
) -> Result<(), LabelError> {
    let type_error = |expected: &'static str| LabelError::OptionType {
        name: option.name.to_string(),
        expected,
        got: option.value.kind(),
        src: named(),
        span: option.value_span,
    };
    let text = || match option.value {
        RawValue::Text(s) => Ok(s),
        _ => Err(type_error("a word or string")),
    };
    let number = || match option.value {
        RawValue::Number(n) => Ok(n),
        _ => Err(type_error("a number")),
    };
    let at = option.value_span;

    let label = &mut opts.label;
    match option.name.to_ascii_lowercase().as_str() {
        "location" => label.location = located(Location::from_str(text()?), &named, at)?,
        "order" => opts.order = located(PanelOrder::from_str(text()?), &named, at)?,
        "fontweight" => label.font_weight = located(FontWeight::from_str(text()?), &named, at)?,
        "fontangle" => label.font_angle = located(FontAngle::from_str(text()?), &named, at)?,
        "fontsize" => *label = located(label.clone().font_size(number()?), &named, at)?,
        "margin" => *label = located(label.clone().margin(number()?), &named, at)?,
        "color" => label.color = text()?.to_string(),
        "backgroundcolor" => label.background_color = text()?.to_string(),
        "edgecolor" => label.edge_color = text()?.to_string(),
        // Numbers are fine as affixes; vectors are not.
        "prefix" | "postfix" => {
            if let RawValue::Vector(_) = option.value {
                return Err(type_error("a word, string, or number"));
            }
            if option.name.eq_ignore_ascii_case("prefix") {
                label.prefix = option.lexeme.to_string();
            } else {
                label.postfix = option.lexeme.to_string();
            }
        }
        "offset" => {
            let components = match &option.value {
                RawValue::Number(n) => vec![*n],
                RawValue::Vector(v) => v.clone(),
                RawValue::Text(_) => return Err(type_error("a number or [x y] vector")),
            };
            *label = located(label.clone().offset(&components), &named, at)?;
        }
        _ => {
            return Err(LabelError::UnknownOption {
                name: option.name.to_string(),
                src: named(),
                span: option.name_span,
            });
        }
    }
    Ok(())
}

/// Tag an argument error from a `FromStr` impl or builder with where it came from
fn located<T>(
    result: Result<T, LabelError>,
    named: &impl Fn() -> NamedSource<String>,
    at: SourceSpan,
) -> Result<T, LabelError> {
    result.map_err(|e| e.with_source(named(), at))
}

impl FigureOptions {
    /// Parse a textual option list; see [`parse_options`].
    pub fn parse(source: &str) -> Result<FigureOptions, LabelError> {
        parse_options(source)
    }
}

impl FromStr for FigureOptions {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_options(s)
    }
}
