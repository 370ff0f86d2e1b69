//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Fetch and show a random user. Press Enter to fetch, `q` to quit.
#[derive(Parser, Debug)]
#[command(name = randuser::constants::APP_NAME, version = randuser::constants::VERSION)]
pub struct Cli {
    /// Config file layered over the global `~/.config/randuser/config.toml`.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Users resource to fetch `{base-url}/{id}` from.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Minimum milliseconds between two fetches.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter used when `RANDUSER_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["randuser"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.base_url.is_none());
        assert!(cli.interval_ms.is_none());
        assert_eq!(cli.default_log_filter(), "warn");
    }

    #[test]
    fn parses_overrides_and_verbosity() {
        let cli = Cli::try_parse_from([
            "randuser",
            "--config",
            "widget.toml",
            "--base-url",
            "http://localhost:3000/users",
            "--interval-ms",
            "250",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("widget.toml")));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000/users"));
        assert_eq!(cli.interval_ms, Some(250));
        assert_eq!(cli.default_log_filter(), "debug");
    }

    #[test]
    fn rejects_non_numeric_interval() {
        assert!(Cli::try_parse_from(["randuser", "--interval-ms", "soon"]).is_err());
    }
}
