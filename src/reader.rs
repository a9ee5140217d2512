//! Read side: re-open the persisted survey and walk its data rows.
//!
//! Two access patterns:
//! - `KeyedRows`: the header is parsed and each row is looked up by name.
//! - `PositionalRows`: the header line is read and discarded, fields are
//!   looked up by index.
//!
//! A missing key or index is a `SurveyError`, never a default value.
use crate::{SurveyError, SurveyResult};
use csv_async::{AsyncReader, AsyncReaderBuilder, StringRecord};
use std::io::Write;
use std::path::Path;
use tokio::fs::File;
use tracing::debug;

async fn open_reader(path: &Path, has_headers: bool) -> SurveyResult<AsyncReader<File>> {
    let file = File::open(path).await?;
    Ok(AsyncReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .create_reader(file))
}

pub struct KeyedRows {
    rdr: AsyncReader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl KeyedRows {
    pub async fn open(path: &Path) -> SurveyResult<Self> {
        let mut rdr = open_reader(path, true).await?;
        let headers = rdr.headers().await?.clone();
        debug!(columns = headers.len(), path = %path.display(), "opened survey by header");
        Ok(Self {
            rdr,
            headers,
            record: StringRecord::new(),
        })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Next data row, or `None` at end of file.
    pub async fn next_row(&mut self) -> SurveyResult<Option<KeyedRow<'_>>> {
        if !self.rdr.read_record(&mut self.record).await? {
            return Ok(None);
        }
        Ok(Some(KeyedRow {
            headers: &self.headers,
            record: &self.record,
        }))
    }
}

/// A data row viewed as header name -> value.
#[derive(Debug, Clone, Copy)]
pub struct KeyedRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> KeyedRow<'a> {
    /// Value under header `key`. When several columns share the name the last
    /// one wins.
    pub fn get(&self, key: &str) -> SurveyResult<&'a str> {
        self.headers
            .iter()
            .enumerate()
            .filter(|&(_, h)| h == key)
            .map(|(idx, _)| idx)
            .last()
            .and_then(|idx| self.record.get(idx))
            .ok_or_else(|| SurveyError::MissingField(key.to_string()))
    }
}

pub struct PositionalRows {
    rdr: AsyncReader<File>,
    record: StringRecord,
}

impl PositionalRows {
    pub async fn open(path: &Path) -> SurveyResult<Self> {
        let mut rdr = open_reader(path, false).await?;
        let mut record = StringRecord::new();
        // skip the header line
        rdr.read_record(&mut record).await?;
        debug!(path = %path.display(), "opened survey by position");
        Ok(Self { rdr, record })
    }

    pub async fn next_row(&mut self) -> SurveyResult<Option<PositionalRow<'_>>> {
        if !self.rdr.read_record(&mut self.record).await? {
            return Ok(None);
        }
        Ok(Some(PositionalRow {
            record: &self.record,
        }))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PositionalRow<'a> {
    record: &'a StringRecord,
}

impl<'a> PositionalRow<'a> {
    pub fn get(&self, index: usize) -> SurveyResult<&'a str> {
        self.record.get(index).ok_or(SurveyError::MissingIndex {
            index,
            len: self.record.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

/// Print the `column` value of every data row, one per line. Stops at the
/// first row without it.
pub async fn print_column<W: Write>(
    path: &Path,
    column: &str,
    mut out: W,
) -> SurveyResult<usize> {
    let mut rows = KeyedRows::open(path).await?;
    let mut printed = 0usize;
    while let Some(row) = rows.next_row().await? {
        writeln!(out, "{}", row.get(column)?)?;
        printed += 1;
    }
    out.flush()?;
    Ok(printed)
}

/// Like `print_column`, by field index.
pub async fn print_column_at<W: Write>(
    path: &Path,
    index: usize,
    mut out: W,
) -> SurveyResult<usize> {
    let mut rows = PositionalRows::open(path).await?;
    let mut printed = 0usize;
    while let Some(row) = rows.next_row().await? {
        writeln!(out, "{}", row.get(index)?)?;
        printed += 1;
    }
    out.flush()?;
    Ok(printed)
}
