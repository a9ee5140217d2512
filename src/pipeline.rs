use crate::{decode_table, write_table, Fetcher, HeaderLookup, SurveyResult};
use std::path::Path;
use tracing::info;

/// Fetch `url`, shorten the header with `lookup` and write the table to `path`.
///
/// Returns the number of rows written, header included. Nothing is written
/// when the fetch fails.
pub async fn download_survey<F: Fetcher>(
    fetcher: &F,
    url: &str,
    path: &Path,
    lookup: &HeaderLookup,
) -> SurveyResult<usize> {
    let body = fetcher.fetch(url).await?;

    let mut table = decode_table(&body).await?;
    lookup.normalize_table(&mut table);

    write_table(path, &table).await?;
    info!(rows = table.len(), path = %path.display(), "survey sheet saved");
    Ok(table.len())
}
