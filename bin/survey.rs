use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;
use survey_sheet::config::SURVEY_COLUMN;
use survey_sheet::{
    ensure_survey_file, print_column, print_column_at, CacheOutcome, CachePolicy, HeaderLookup,
    HttpFetcher, SurveyConfig, SurveyError,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn cli() -> Command {
    Command::new("survey")
        .about("Download the survey sheet once, shorten its headers, print one column")
        .arg(
            Arg::new("url")
                .long("url")
                .help("CSV export to fetch [default: the survey sheet]"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Local file to write and read back [default: survey.csv]")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("refresh")
                .long("refresh")
                .help("Fetch even if the output file exists")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("describe-headings")
                .long("describe-headings")
                .help("Print each short column name with its full question")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .help("Header name to print for every row")
                .conflicts_with("index"),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .help("Field index to print for every row (header skipped)")
                .value_parser(clap::value_parser!(usize)),
        )
}

/// Flags over `SurveyConfig::default()`; an absent flag keeps the constant.
fn config_from(matches: &ArgMatches) -> SurveyConfig {
    let defaults = SurveyConfig::default();
    SurveyConfig {
        url: matches
            .get_one::<String>("url")
            .cloned()
            .unwrap_or(defaults.url),
        path: matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or(defaults.path),
        cache: if matches.get_flag("refresh") {
            CachePolicy::Refresh
        } else {
            defaults.cache
        },
        describe_headings: defaults.describe_headings || matches.get_flag("describe-headings"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = config_from(&matches);

    let lookup = HeaderLookup::survey();
    let fetcher = HttpFetcher::new();
    match ensure_survey_file(&fetcher, &config.url, &config.path, &lookup, config.cache).await {
        Ok(CacheOutcome::Hit) => info!(path = %config.path.display(), "survey already on disk"),
        Ok(CacheOutcome::Fetched { rows }) => info!(rows, "survey downloaded"),
        Err(err @ SurveyError::HttpStatus(_)) => {
            println!("{err}");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    if config.describe_headings {
        lookup.describe(io::stdout().lock())?;
    }

    let stdout = io::stdout().lock();
    let printed = match matches.get_one::<usize>("index") {
        Some(&index) => print_column_at(&config.path, index, stdout).await?,
        None => {
            let column = matches
                .get_one::<String>("column")
                .map(String::as_str)
                .unwrap_or(SURVEY_COLUMN);
            print_column(&config.path, column, stdout).await?
        }
    };
    info!(rows = printed, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_sheet::config::{SURVEY_FILE, SURVEY_URL};

    #[test]
    fn no_flags_uses_source_constants() -> anyhow::Result<()> {
        let matches = cli().try_get_matches_from(["survey"])?;
        let config = config_from(&matches);

        assert_eq!(config.url, SURVEY_URL);
        assert_eq!(config.path, PathBuf::from(SURVEY_FILE));
        assert_eq!(config.cache, CachePolicy::TrustOnPresence);
        assert!(!config.describe_headings);
        Ok(())
    }

    #[test]
    fn flags_override_constants() -> anyhow::Result<()> {
        let matches = cli().try_get_matches_from([
            "survey",
            "--url",
            "http://127.0.0.1:8080/sheet.csv",
            "--output",
            "copy.csv",
            "--refresh",
            "--describe-headings",
        ])?;
        let config = config_from(&matches);

        assert_eq!(config.url, "http://127.0.0.1:8080/sheet.csv");
        assert_eq!(config.path, PathBuf::from("copy.csv"));
        assert_eq!(config.cache, CachePolicy::Refresh);
        assert!(config.describe_headings);
        Ok(())
    }

    #[test]
    fn column_and_index_conflict() {
        let result = cli().try_get_matches_from(["survey", "--column", "city", "--index", "3"]);
        assert!(result.is_err());
    }
}
