//! Error adapter for converting ArborError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Parse Failures
//!
//! [`serde_json`] reports failures as a 1-based line/column pair. The parse
//! adapter converts that position into a byte offset into the retained
//! source text, so miette can render a snippet with the failure labeled.

use std::{error::Error as _, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use arbor::ArborError;

/// Adapter for a JSON parse failure with source context.
///
/// Wraps the `serde_json` error together with the source text it came from
/// and implements [`MietteDiagnostic`] to enable rich error formatting in
/// the CLI.
pub struct ParseErrorAdapter<'a> {
    /// The underlying parse error
    err: &'a serde_json::Error,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> ParseErrorAdapter<'a> {
    /// Create a new parse error adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("arbor::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("the input must be a well-formed JSON document"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        // line() is 0 for errors without a position (e.g. I/O failures).
        if self.err.line() == 0 {
            return None;
        }

        let span = position_to_span(self.src, self.err.line(), self.err.column());
        let label = LabeledSpan::new_primary_with_span(Some("invalid JSON here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-parse [`ArborError`] variants.
///
/// This adapter handles errors that don't have source location information,
/// such as I/O errors, configuration errors, layout errors, and export
/// errors.
pub struct ErrorAdapter<'a>(pub &'a ArborError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArborError::Io(_) => "arbor::io",
            ArborError::Parse { .. } => return None,
            ArborError::Config(_) => "arbor::config",
            ArborError::Layout(_) => "arbor::layout",
            ArborError::Export(_) => "arbor::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a parse failure with source context or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse failure with source location information.
    Parse(ParseErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line/column position into a one-byte miette span.
fn position_to_span(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = if offset < src.len() { 1 } else { 0 };
    SourceSpan::new(offset.into(), len)
}

/// Convert an [`ArborError`] into a reportable error.
///
/// [`ArborError::Parse`] becomes a [`Reportable::Parse`] carrying the
/// retained source text; every other variant becomes a plain
/// [`Reportable::Error`].
pub fn to_reportable(err: &ArborError) -> Reportable<'_> {
    match err {
        ArborError::Parse { err: parse_err, src } => {
            Reportable::Parse(ParseErrorAdapter::new(parse_err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_failure(src: &str) -> ArborError {
        let err = serde_json::from_str::<serde_json::Value>(src)
            .expect_err("Source should not parse");
        ArborError::new_parse_error(err, src)
    }

    #[test]
    fn test_parse_error_becomes_parse_reportable() {
        let err = parse_failure("{invalid");

        let reportable = to_reportable(&err);

        match &reportable {
            Reportable::Parse(p) => {
                assert!(p.source_code().is_some());
                let labels: Vec<_> = p.labels().expect("positioned error has a label").collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
            }
            Reportable::Error(_) => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_label_points_into_source() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        let err = parse_failure(src);

        let reportable = to_reportable(&err);
        let labels: Vec<_> = reportable.labels().expect("label present").collect();

        let offset = labels[0].offset();
        assert!(offset <= src.len());
        // The failure is on the third line, past both preceding newlines.
        assert!(offset > src.find("1,").unwrap());
    }

    #[test]
    fn test_position_to_span_first_line() {
        let span = position_to_span("abc", 1, 2);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_position_to_span_later_line() {
        let src = "ab\ncd\nef";
        let span = position_to_span(src, 3, 1);
        assert_eq!(span.offset(), 6);
    }

    #[test]
    fn test_position_to_span_clamps_to_source_end() {
        let span = position_to_span("ab", 9, 9);
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_non_parse_error() {
        let err = ArborError::Config("bad fill color".to_string());

        let reportable = to_reportable(&err);

        match &reportable {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad fill color");
                assert_eq!(
                    reportable.code().map(|c| c.to_string()),
                    Some("arbor::config".to_string())
                );
            }
            Reportable::Parse(_) => panic!("Expected Error"),
        }
    }
}
