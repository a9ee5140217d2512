//! Fetch a published survey sheet, shorten its headers, persist it, read it back.
//!
//! - Fetch: one `GET` of the sheet's CSV export (`HttpFetcher`).
//! - Normalize: question-text headers become short names (`HeaderLookup`).
//! - Persist: the table is written to a local file, which is then trusted on
//!   presence (`CachePolicy::TrustOnPresence`).
//! - Read: rows by header name (`KeyedRows`) or by position (`PositionalRows`).
//!
//! Data shape:
//! - `Row = Vec<String>`, `Table = Vec<Row>`, row 0 is the header.
//! - Read side rows are `csv_async::StringRecord`s behind a lookup that fails
//!   loudly on an absent key or index.
//
mod cache;
pub mod config;
mod fetch;
mod headers;
mod pipeline;
mod reader;
mod table;

pub use crate::cache::{ensure_survey_file, CacheOutcome, CachePolicy};
pub use crate::config::SurveyConfig;
pub use crate::fetch::{Fetcher, HttpFetcher};
pub use crate::headers::{HeaderLookup, SURVEY_HEADINGS};
pub use crate::pipeline::download_survey;
pub use crate::reader::{
    print_column, print_column_at, KeyedRow, KeyedRows, PositionalRow, PositionalRows,
};
pub use crate::table::{decode_table, write_table};

use thiserror::Error;

/// One CSV line as ordered text fields.
pub type Row = Vec<String>;

/// Ordered rows; index 0 is conventionally the header.
pub type Table = Vec<Row>;

/// Error type returned by this crate when not using `anyhow`.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Failed to fetch data: status code {0}")]
    HttpStatus(u16),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Missing field at index {index} (row has {len} fields)")]
    MissingIndex { index: usize, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv_async::Error),
}

pub type SurveyResult<T> = std::result::Result<T, SurveyError>;
