//! Core error types for diagram processing
//!
//! Layout itself is total and never fails. These errors only appear at the
//! edges: decoding a spec, encoding output, and file I/O.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Serialize error: {message}")]
    SerializeError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Create a new serialize error
    pub fn serialize_error(message: String) -> Self {
        Self::SerializeError { message }
    }

    /// Convert a JSON decoding failure, keeping its position
    pub fn from_json(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = match err.classify() {
            serde_json::error::Category::Eof => "unexpected end of input".to_string(),
            serde_json::error::Category::Syntax => format!("invalid JSON: {}", err),
            serde_json::error::Category::Data => format!("invalid diagram spec: {}", err),
            serde_json::error::Category::Io => err.to_string(),
        };
        Self::parse_error(message, line, column)
    }
}
