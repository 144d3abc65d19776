//! Command-line interface definitions.

use crate::config::FeedFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Pagefeed: RSS and Atom feeds for rendered documentation pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "pagefeed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the feed from a page manifest
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// JSON manifest listing the rendered pages
    #[arg(short, long, default_value = "pages.json", value_hint = clap::ValueHint::FilePath)]
    pub pages: PathBuf,

    /// Output directory (default: `public` next to the config file)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override `feed.format`
    #[arg(long, value_enum)]
    pub format: Option<FeedFormat>,

    /// Override `feed.num_items` (0 keeps every item)
    #[arg(short = 'n', long)]
    pub num_items: Option<u32>,

    /// Print the feed to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print per-page details (undated pages, history lookups)
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from([
            "pagefeed",
            "-C",
            "docs/pagefeed.toml",
            "build",
            "--pages",
            "out/pages.json",
            "-o",
            "out/html",
            "--format",
            "atom",
            "-n",
            "10",
            "-V",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("docs/pagefeed.toml"));
        let Commands::Build { build_args } = cli.command;
        assert_eq!(build_args.pages, PathBuf::from("out/pages.json"));
        assert_eq!(build_args.output, Some(PathBuf::from("out/html")));
        assert_eq!(build_args.format, Some(FeedFormat::Atom));
        assert_eq!(build_args.num_items, Some(10));
        assert!(!build_args.dry_run);
        assert!(build_args.verbose);
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["pagefeed", "b"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("pagefeed.toml"));
        let Commands::Build { build_args } = cli.command;
        assert_eq!(build_args.pages, PathBuf::from("pages.json"));
        assert!(!build_args.verbose);
        assert!(build_args.output.is_none());
        assert!(build_args.format.is_none());
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pagefeed", "build", "--format", "json"]).is_err());
    }
}
