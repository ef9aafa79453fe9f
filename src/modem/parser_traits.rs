//! Trait abstraction for parsing modem HTML pages.

use scraper::Html;

use crate::error::ParseError;

/// Trait for parsers that need additional context for parsing.
///
/// Use this when parsing requires external information, such as the poll
/// timestamp stamped onto every extracted point.
pub trait ContextualHtmlParser {
    /// The type of data this parser produces
    type Output;
    /// The type of context needed for parsing
    type Context;

    /// Parse HTML document with context into the output type
    fn parse_with_context(
        &self,
        document: &Html,
        context: Self::Context,
    ) -> Result<Self::Output, ParseError>;
}
