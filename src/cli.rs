use clap::Parser;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "A single-screen terminal day planner")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use development mode (uses a separate dev config)
    #[arg(long)]
    pub dev: bool,

    /// Start on this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_dev_flags() {
        let cli = Cli::parse_from(["dayplan", "--dev", "--date", "2024-06-01"]);
        assert!(cli.dev);
        assert_eq!(cli.date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["dayplan"]);
        assert!(!cli.dev);
        assert!(cli.date.is_none());
        assert!(cli.config.is_none());
    }
}
