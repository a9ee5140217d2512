use crate::{download_survey, Fetcher, HeaderLookup, SurveyResult};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// When a local survey file may stand in for a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Any existing regular file is treated as already-normalized output and
    /// kept forever. No staleness check, TTL or checksum.
    #[default]
    TrustOnPresence,
    /// Always fetch and overwrite.
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The file was already there; nothing was fetched.
    Hit,
    /// The pipeline ran and wrote `rows` rows.
    Fetched { rows: usize },
}

/// Make sure `path` holds the survey, running the pipeline only when `policy`
/// says the local copy cannot be used.
pub async fn ensure_survey_file<F: Fetcher>(
    fetcher: &F,
    url: &str,
    path: &Path,
    lookup: &HeaderLookup,
    policy: CachePolicy,
) -> SurveyResult<CacheOutcome> {
    if policy == CachePolicy::TrustOnPresence && is_file(path).await? {
        info!(path = %path.display(), "using cached survey file");
        return Ok(CacheOutcome::Hit);
    }

    let rows = download_survey(fetcher, url, path, lookup).await?;
    Ok(CacheOutcome::Fetched { rows })
}

async fn is_file(path: &Path) -> SurveyResult<bool> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
