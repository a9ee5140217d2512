use crate::{SurveyResult, Table};
use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder};
use futures::TryStreamExt;
use std::path::Path;
use tokio::fs::File;
use tracing::debug;

/// Parse CSV text into rows. Every line, header included, becomes a row.
///
/// Quoted fields may contain delimiters and line breaks. Ragged rows are kept
/// as they are; column counts are not checked against the header.
pub async fn decode_table(text: &str) -> SurveyResult<Table> {
    let mut rdr = AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(text.as_bytes());

    let table: Table = rdr
        .records()
        .map_ok(|record| record.iter().map(str::to_owned).collect())
        .try_collect()
        .await?;

    debug!(rows = table.len(), "decoded csv text");
    Ok(table)
}

/// Write `table` to `path` as comma-delimited UTF-8, creating or truncating it.
///
/// A failure midway may leave a truncated file. A row with no fields is
/// written as `""` and reads back as one empty field.
pub async fn write_table(path: &Path, table: &Table) -> SurveyResult<()> {
    let file = File::create(path).await?;
    let mut wtr = AsyncWriterBuilder::new()
        .flexible(true)
        .create_writer(file);

    for row in table {
        wtr.write_record(row).await?;
    }
    // AsyncWriter cannot flush on drop
    wtr.flush().await?;

    debug!(rows = table.len(), path = %path.display(), "wrote csv file");
    Ok(())
}
