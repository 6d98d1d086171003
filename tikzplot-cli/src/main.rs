//! tikzplot CLI
//!
//! Reads a plot configuration (JSON) from FILE or stdin and prints the TikZ
//! document.
//!
//! ```text
//! tikzplot [--raw] [FILE]             generate from a configuration
//! tikzplot --list [CATEGORY]          list settings as JSON
//! tikzplot --help-setting ID          describe one setting as JSON
//! ```
//!
//! Log level comes from `TIKZPLOT_LOG` (default `warn`), written to stderr.

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tikzplot::{Category, PlotConfig, PlotError, PlotSession};
use tracing::{debug, error, warn, Level};

const USAGE: &str = "usage: tikzplot [--raw] [--list [CATEGORY]] [--help-setting ID] [FILE]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    raw: bool,
    /// `Some(None)` lists every category
    list: Option<Option<Category>>,
    help_setting: Option<String>,
    file: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--raw" => options.raw = true,
            "--list" => {
                let category = args.peek().and_then(|next| Category::from_name(next));
                if category.is_some() {
                    args.next();
                }
                options.list = Some(category);
            }
            "--help-setting" => match args.next() {
                Some(id) => options.help_setting = Some(id),
                None => return Err("--help-setting needs a setting id".to_string()),
            },
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path => {
                if options.file.is_some() {
                    return Err(format!("unexpected argument {}", path));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn log_level() -> Level {
    env::var("TIKZPLOT_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::WARN)
}

/// Configuration text from FILE, piped stdin, or nothing
fn read_config(file: Option<&PathBuf>) -> Result<PlotConfig, PlotError> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| PlotError::invalid_config(format!("{}: {}", path.display(), e)))?,
        None if !io::stdin().is_terminal() => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| PlotError::invalid_config(format!("stdin: {}", e)))?;
            text
        }
        None => String::new(),
    };

    if text.trim().is_empty() {
        debug!("no configuration given, using defaults");
        return Ok(PlotConfig::default());
    }
    PlotConfig::from_json(&text)
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "cannot serialize output");
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> ExitCode {
    let mut session = PlotSession::with_standard_catalog();

    if let Some(category) = options.list {
        return print_json(&session.catalog(category));
    }

    if let Some(id) = options.help_setting {
        return match session.help(&id) {
            Ok(info) => print_json(&info),
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        };
    }

    let config = match read_config(options.file.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "configuration rejected");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for err in session.apply_config(&config) {
        warn!(error = %err, "config entry ignored");
    }

    let report = session.generate_report();
    for err in &report.errors {
        warn!(error = %err, context = ?err.context, "generation issue");
    }

    if options.raw {
        print!("{}", report.source);
    } else {
        println!("{}", report.tidy());
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level())
        .init();

    match parse_args(env::args().skip(1)) {
        Ok(options) => run(options),
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_raw_and_file() {
        let options = parse(&["--raw", "plot.json"]).unwrap();
        assert!(options.raw);
        assert_eq!(options.file, Some(PathBuf::from("plot.json")));
    }

    #[test]
    fn test_list_with_and_without_category() {
        assert_eq!(parse(&["--list"]).unwrap().list, Some(None));
        assert_eq!(parse(&["--list", "grid"]).unwrap().list, Some(Some(Category::Grid)));

        // A non-category word after --list is the input file
        let options = parse(&["--list", "plot.json"]).unwrap();
        assert_eq!(options.list, Some(None));
        assert_eq!(options.file, Some(PathBuf::from("plot.json")));
    }

    #[test]
    fn test_help_setting() {
        assert_eq!(
            parse(&["--help-setting", "gridSize"]).unwrap().help_setting.as_deref(),
            Some("gridSize")
        );
        assert!(parse(&["--help-setting"]).is_err());
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = env::temp_dir().join(format!("tikzplot-cli-test-{}.json", std::process::id()));
        fs::write(&path, r#"{"settings": {"title": "From file"}}"#).unwrap();

        let config = read_config(Some(&path)).unwrap();
        let mut session = PlotSession::with_standard_catalog();
        assert!(session.apply_config(&config).is_empty());
        assert!(session.generate_tidy().contains("title={From file},"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let err = read_config(Some(&PathBuf::from("/nonexistent/plot.json"))).unwrap_err();
        assert!(err.is(tikzplot::ErrorKind::InvalidConfig));
    }
}
