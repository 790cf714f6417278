//! Record segmentation: boundary scan over line starts, then head parsing per span.
//!
//! A boundary is a line that starts with `(<digits>)` followed by whitespace.
//! Every boundary closes the span opened by the previous one. A span becomes a
//! record only when it opens with `(<index>) <name> (Reg.# <number>)`; the head
//! search never reaches past the span, so a listing without a registration
//! marker is dropped instead of swallowing the next one.

use tracing::{debug, trace};

use super::patterns::RECORD_HEAD;

/// A recognized record span, before field parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub index: u64,
    pub name: &'a str,
    pub registration_number: &'a str,
    pub body: &'a str,
}

/// Output of [`segment`].
#[derive(Debug, Default)]
pub struct Segments<'a> {
    /// Spans that parsed into a record head, in text order.
    pub records: Vec<RawRecord<'a>>,
    /// Boundary spans without a valid head (trimmed).
    pub rejected: Vec<&'a str>,
}

enum State {
    /// No boundary seen yet.
    Searching,
    /// Inside the span opened at `start`.
    Accumulating { start: usize },
}

/// Whether `line` (including its line break, if any) opens a record span.
fn is_boundary(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('(') else {
        return false;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    rest[digits..]
        .strip_prefix(')')
        .and_then(|after| after.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Split `text` into boundary-delimited spans. Text before the first boundary is dropped.
pub fn spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut state = State::Searching;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if is_boundary(line) {
            if let State::Accumulating { start } = state {
                spans.push(&text[start..offset]);
            }
            state = State::Accumulating { start: offset };
        }
        offset += line.len();
    }

    if let State::Accumulating { start } = state {
        spans.push(&text[start..]);
    }

    spans
}

/// Parse the head of one span.
fn parse_span(span: &str) -> Option<RawRecord<'_>> {
    let caps = RECORD_HEAD.captures(span)?;
    let head = caps.get(0)?;

    Some(RawRecord {
        index: caps[1].parse().ok()?,
        name: caps.get(2)?.as_str().trim(),
        registration_number: caps.get(3)?.as_str().trim(),
        body: span[head.end()..].trim(),
    })
}

/// Segment one document's text into record spans.
///
/// Expects `\n` line breaks.
pub fn segment(text: &str) -> Segments<'_> {
    let mut segments = Segments::default();

    for span in spans(text) {
        match parse_span(span) {
            Some(record) => {
                trace!("Record ({}) {}", record.index, record.name);
                segments.records.push(record);
            }
            None => segments.rejected.push(span.trim()),
        }
    }

    debug!(
        "Segmented {} records, {} rejected spans",
        segments.records.len(),
        segments.rejected.len()
    );
    segments
}
