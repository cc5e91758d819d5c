//! Message template segmentation using winnow.
//!
//! A template is split into literal text and `{name}` placeholders. Anything
//! that is not a well-formed placeholder (`{}`, `{a-b}`, a stray `{`) stays
//! literal, so parsing never fails.

use csv_importer_syntax::is_name_char;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::i18n::value::Params;

/// A segmented message template borrowing from its source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pub segments: Vec<Segment<'a>>,
}

/// A segment within a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output as-is.
    Literal(&'a str),
    /// A `{name}` token; holds the name without braces.
    Placeholder(&'a str),
}

impl Template<'_> {
    /// Names of the placeholders in order of appearance.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }
}

/// Segment a template string.
pub fn parse_template(input: &str) -> Template<'_> {
    let mut remaining = input;
    match segments.parse_next(&mut remaining) {
        Ok(segments) if remaining.is_empty() => Template {
            segments: merge_literals(input, segments),
        },
        _ => Template {
            segments: vec![Segment::Literal(input)],
        },
    }
}

/// Replace `{name}` placeholders with values from `values`.
///
/// A single left-to-right pass: substituted text is never rescanned.
/// Placeholders whose value is absent or [`Value::Unset`](crate::Value::Unset)
/// are kept verbatim.
///
/// ```
/// use csv_importer::{i18n::interpolate, params};
///
/// let values = params! { "name" => "{name}", "count" => 2 };
/// assert_eq!(interpolate("{name} has {count} {things}", &values), "{name} has 2 {things}");
/// ```
pub fn interpolate(message: &str, values: &Params) -> String {
    let template = parse_template(message);
    let mut output = String::with_capacity(message.len());

    for segment in template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => match values.get(name) {
                Some(value) if !value.is_unset() => output.push_str(&value.to_string()),
                _ => {
                    output.push('{');
                    output.push_str(name);
                    output.push('}');
                }
            },
        }
    }

    output
}

/// Parse every segment of the input.
fn segments<'i>(input: &mut &'i str) -> ModalResult<Vec<Segment<'i>>> {
    repeat(0.., segment).parse_next(input)
}

/// Parse a single segment (placeholder or literal).
fn segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((placeholder, literal)).parse_next(input)
}

/// Parse a placeholder: `{` name `}`.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    delimited('{', take_while(1.., is_name_char), '}')
        .map(Segment::Placeholder)
        .parse_next(input)
}

/// Parse literal text: a run without `{`, or a lone `{` that did not open a placeholder.
fn literal<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((take_till(1.., '{'), "{"))
        .map(Segment::Literal)
        .parse_next(input)
}

/// Merge adjacent literal segments into single slices of `input`.
fn merge_literals<'a>(input: &'a str, segments: Vec<Segment<'a>>) -> Vec<Segment<'a>> {
    let base = input.as_ptr() as usize;
    let mut result: Vec<Segment<'a>> = Vec::with_capacity(segments.len());

    for segment in segments {
        // Segments tile the input in order, so neighbouring literals are contiguous.
        if let (Some(Segment::Literal(prev)), Segment::Literal(text)) = (result.last_mut(), segment)
        {
            let start = prev.as_ptr() as usize - base;
            let end = text.as_ptr() as usize - base + text.len();
            *prev = &input[start..end];
            continue;
        }
        result.push(segment);
    }

    result
}
