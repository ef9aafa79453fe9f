//! Error types for the cable modem stats scraper.
//!
//! Each stage of the pipeline has its own error enum so the CLI can tell a
//! failed fetch apart from a status page whose layout no longer matches.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The modem could not be reached or answered with an error
    #[error("failed to fetch modem status page")]
    Fetch(#[from] FetchError),

    /// The status page does not have the expected table/row/cell shape
    #[error("malformed modem status page")]
    MalformedDocument(#[from] ParseError),

    /// Rendering the points to the output sink failed
    #[error("failed to write output")]
    Emit(#[from] EmitError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),
}

/// Transport errors while talking to the modem.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Modem returned a non-success status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },
}

/// HTML parsing errors.
///
/// Every variant names the table (and row/cell where relevant) so firmware
/// layout drift can be diagnosed from the message alone.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Fewer tables in the document than the layout addresses
    #[error("{direction} table not found: expected table #{index}, document has {found}")]
    TableNotFound {
        direction: String,
        index: usize,
        found: usize,
    },

    /// Table is shorter than its header block
    #[error("{direction} table has {found} rows, expected at least {expected} header rows")]
    MissingHeaderRows {
        direction: String,
        expected: usize,
        found: usize,
    },

    /// Data row has no cell at the addressed column
    #[error("{direction} row {row}: no cell at column {column} ({field}), row has {found} cells")]
    CellNotFound {
        direction: String,
        row: usize,
        column: usize,
        field: String,
        found: usize,
    },

    /// Failed to parse numeric value
    #[error("{direction} row {row}: failed to parse {field} from '{text}': {message}")]
    NumberParse {
        direction: String,
        row: usize,
        field: String,
        text: String,
        message: String,
    },
}

/// Output rendering errors.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }
}

impl FetchError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl ParseError {
    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }

    /// Creates a table not found error.
    pub fn table_not_found(direction: impl std::fmt::Display, index: usize, found: usize) -> Self {
        Self::TableNotFound {
            direction: direction.to_string(),
            index,
            found,
        }
    }

    /// Creates a missing header rows error.
    pub fn missing_header_rows(
        direction: impl std::fmt::Display,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::MissingHeaderRows {
            direction: direction.to_string(),
            expected,
            found,
        }
    }

    /// Creates a cell not found error.
    pub fn cell_not_found(
        direction: impl std::fmt::Display,
        row: usize,
        column: usize,
        field: impl Into<String>,
        found: usize,
    ) -> Self {
        Self::CellNotFound {
            direction: direction.to_string(),
            row,
            column,
            field: field.into(),
            found,
        }
    }

    /// Creates a number parse error.
    pub fn number_parse(
        direction: impl std::fmt::Display,
        row: usize,
        field: impl Into<String>,
        text: impl Into<String>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::NumberParse {
            direction: direction.to_string(),
            row,
            field: field.into(),
            text: text.into(),
            message: err.to_string(),
        }
    }
}
