use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the config-collector tool.
///
/// Collection behavior is constant-configured; the flags here only move
/// the staging root or raise console verbosity, and none of them changes
/// what gets logged to the collection log.
#[derive(Parser, Debug)]
#[clap(name = "config-collector", about = "Workstation user-configuration collector")]
pub struct Args {
    /// Staging root override (default: the user's sync root)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose console logging
    #[clap(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_values() {
        let args = Args::parse_from(&["config-collector"]);

        assert!(args.output.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_output_and_verbose() {
        let args = Args::parse_from(&[
            "config-collector",
            "--output", "/tmp/staging",
            "--verbose",
        ]);

        assert_eq!(args.output, Some(PathBuf::from("/tmp/staging")));
        assert!(args.verbose);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(&["config-collector", "-o", "/tmp/out", "-v"]);

        assert_eq!(args.output, Some(PathBuf::from("/tmp/out")));
        assert!(args.verbose);
    }
}
