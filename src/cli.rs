//! CLI definitions for PageLens.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

/// PageLens CLI.
#[derive(Parser)]
#[command(name = "pagelens")]
#[command(about = "Reduce rendered web pages to compact, element-addressable text trees")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.pagelens/config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Simplify a captured page or an HTML file
    Simplify(SimplifyArgs),

    /// Check the configuration file and report problems
    Validate,
}

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["snapshot", "html"])))]
pub(crate) struct SimplifyArgs {
    /// Page snapshot JSON with recorded layout (`-` for stdin)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Plain HTML without layout (`-` for stdin)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Keep invisible and off-screen elements
    #[arg(long)]
    pub include_invisible: bool,

    /// Keep script and noscript elements
    #[arg(long)]
    pub include_scripts: bool,

    /// Additional attribute to keep (repeatable)
    #[arg(long = "keep", value_name = "ATTR")]
    pub keep: Vec<String>,

    /// Attribute to always remove (repeatable)
    #[arg(long = "remove", value_name = "ATTR")]
    pub remove: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The simplified tree only
    Text,
    /// `{ "bboxes": ..., "modifiedHtml": ... }`
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simplify_snapshot() {
        let cli = Cli::try_parse_from([
            "pagelens", "simplify", "--snapshot", "page.json", "--keep", "class", "--keep",
            "id", "--format", "json",
        ])
        .unwrap();

        let Commands::Simplify(args) = cli.command else {
            panic!("expected simplify");
        };
        assert_eq!(args.snapshot, Some(PathBuf::from("page.json")));
        assert!(args.html.is_none());
        assert_eq!(args.keep, vec!["class", "id"]);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_simplify_requires_input() {
        assert!(Cli::try_parse_from(["pagelens", "simplify"]).is_err());
    }

    #[test]
    fn test_simplify_inputs_conflict() {
        let result = Cli::try_parse_from([
            "pagelens", "simplify", "--snapshot", "a.json", "--html", "a.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["pagelens", "validate", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Validate));
    }
}
