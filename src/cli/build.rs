//! Feed build orchestration.
//!
//! Build phases:
//! - **Config** - Locate `pagefeed.toml`, apply CLI overrides
//! - **Collect** - Read the page manifest
//! - **Pages** - Run the per-page hook in parallel
//! - **Finalize** - Assemble and write the feed

use super::BuildArgs;
use crate::{
    config::{SiteConfig, find_config_file},
    feed::FeedPipeline,
    log,
    page::load_manifest,
    utils::git::{HistoryProvider, detect_history},
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Output directory used when `--output` is not given.
const DEFAULT_OUTPUT_DIR: &str = "public";

/// Locate the config file, searching upward from the current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    match find_config_file(&cwd, config) {
        Some(path) => Ok(path),
        None => bail!(
            "config file `{}` not found in {} or any parent directory",
            config.display(),
            cwd.display()
        ),
    }
}

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut SiteConfig, args: &BuildArgs) {
    if let Some(format) = args.format {
        config.feed.format = format;
    }
    if let Some(n) = args.num_items {
        config.feed.num_items = Some(toml::Value::Integer(n.into()));
    }
}

/// Load config and run the build with git history when available.
pub fn build_feed(config_path: &Path, args: &BuildArgs) -> Result<()> {
    let mut config = SiteConfig::load(&locate_config(config_path)?)?;
    apply_overrides(&mut config, args);
    run_build(config, args, detect_history()).map(|_| ())
}

/// Run the full build and return the written feed path, if any.
pub fn run_build(
    config: SiteConfig,
    args: &BuildArgs,
    history: Box<dyn HistoryProvider>,
) -> Result<Option<PathBuf>> {
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.root.join(DEFAULT_OUTPUT_DIR));

    let pipeline = FeedPipeline::new(config, history)?;

    let mut pages = load_manifest(&args.pages)?;
    log!("pages"; "{} from {}", pages.len(), args.pages.display());

    let produced = pages
        .par_iter_mut()
        .filter_map(|ctx| pipeline.on_page(ctx))
        .count();
    log!("feed"; "{} of {} pages produced items", produced, pages.len());

    if args.dry_run {
        println!("{}", pipeline.render()?);
        return Ok(None);
    }

    pipeline.on_build_finished(&output_dir).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FeedFormat, test_parse_config},
        utils::git::NoHistory,
    };
    use std::fs;
    use tempfile::TempDir;

    fn args(pages: PathBuf, output: PathBuf) -> BuildArgs {
        BuildArgs {
            pages,
            output: Some(output),
            format: None,
            num_items: None,
            dry_run: false,
            verbose: false,
        }
    }

    fn write_manifest(dir: &Path) -> PathBuf {
        fs::create_dir_all(dir.join("fragments")).unwrap();
        fs::write(
            dir.join("fragments/p2.html"),
            "<h1>Second</h1><p>By Jo</p><p>Second post.</p>",
        )
        .unwrap();

        let manifest = dir.join("pages.json");
        fs::write(
            &manifest,
            r#"[
  {"name": "p1", "title": "First", "body": "<h1>First</h1><p>One</p>",
   "metadata": {"Publish Date": "2020-01-01"}},
  {"name": "p2", "title": "Second", "body_path": "fragments/p2.html",
   "metadata": {"Publish Date": "2021-06-15 08:00"}},
  {"name": "draft/p3", "title": "Draft", "body": "<h1>Draft</h1>",
   "metadata": {"Publish Date": "2022-01-01"}},
  {"name": "genindex", "title": "Index", "body": "<h1>Index</h1>"}
]"#,
        )
        .unwrap();
        manifest
    }

    #[test]
    fn test_run_build_writes_feed() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(dir.path());
        let output = dir.path().join("html");
        let config = test_parse_config("[feed]\nskip_regex = \"draft/\"");

        let path = run_build(config, &args(manifest, output.clone()), Box::new(NoHistory))
            .unwrap()
            .unwrap();
        assert_eq!(path, output.join("rss.xml"));

        let channel = rss::Channel::read_from(fs::read(&path).unwrap().as_slice()).unwrap();
        let guids: Vec<_> = channel
            .items()
            .iter()
            .filter_map(|i| i.guid().map(|g| g.value().to_string()))
            .collect();
        assert_eq!(guids, vec!["p2", "p1"]);
        // The reader trims text; the written document keeps the leading space.
        assert_eq!(channel.items()[0].description(), Some("Second post. ..."));
        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains(" Second post. ..."));
        assert!(!xml.contains("By Jo"));
    }

    #[test]
    fn test_overrides() {
        let mut config = test_parse_config("");
        let mut build_args = args(PathBuf::new(), PathBuf::new());
        build_args.format = Some(FeedFormat::Atom);
        build_args.num_items = Some(1);

        apply_overrides(&mut config, &build_args);
        assert_eq!(config.feed.format, FeedFormat::Atom);
        assert_eq!(config.feed.max_items().unwrap(), Some(1));
    }

    #[test]
    fn test_num_items_override_applies() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(dir.path());
        let output = dir.path().join("html");
        let mut config = test_parse_config("[feed]\nformat = \"atom\"\nfilename = \"atom.xml\"");
        let mut build_args = args(manifest, output);
        build_args.num_items = Some(1);
        apply_overrides(&mut config, &build_args);

        let path = run_build(config, &build_args, Box::new(NoHistory))
            .unwrap()
            .unwrap();
        let feed: atom_syndication::Feed = fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(feed.entries().len(), 1);
        assert_eq!(feed.entries()[0].id(), "draft/p3");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(dir.path());
        let output = dir.path().join("html");
        let mut build_args = args(manifest, output.clone());
        build_args.dry_run = true;

        let written = run_build(test_parse_config(""), &build_args, Box::new(NoHistory)).unwrap();
        assert!(written.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let dir = TempDir::new().unwrap();
        let build_args = args(dir.path().join("nope.json"), dir.path().join("html"));
        assert!(run_build(test_parse_config(""), &build_args, Box::new(NoHistory)).is_err());
    }
}
