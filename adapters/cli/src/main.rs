#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that crawls every reachable Wizard Maze screen and
//! exports the resulting graph as JSON.

mod config;

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wizard_maze_system_crawler::{CrawlConfig, Crawler, ScreenGraph};

use crate::config::{FileConfig, Overrides, Settings};

/// Command-line arguments accepted by the crawler.
#[derive(Debug, Parser)]
#[command(name = "wizard-maze", about = "Explore every screen of a Wizard Maze level")]
struct CliArgs {
    /// TOML file providing crawl settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Level file with one glyph row per line; replaces configured levels.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Ceiling on the number of explored screens.
    #[arg(long, value_name = "COUNT")]
    max_screens: Option<usize>,

    /// Destination of the exported graph.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the Wizard Maze command-line interface.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn run(args: CliArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            level: args.level,
            max_screens: args.max_screens,
            output: args.output,
        },
    )?;

    info!(
        levels = settings.levels.len(),
        max_screens = settings.max_screens,
        "starting crawl"
    );
    let crawler = Crawler::new(settings.levels, CrawlConfig::new(settings.max_screens));
    let graph = crawler.run().context("crawl failed")?;

    summarize(&graph);
    export(&graph, &settings.output)?;
    info!(path = %settings.output.display(), "graph written");
    Ok(())
}

fn summarize(graph: &ScreenGraph) {
    for (kind, count) in graph.kind_counts() {
        info!(%kind, count, "screens discovered");
    }
    info!(
        screens = graph.len(),
        edges = graph.edge_count(),
        root = %graph.root(),
        "graph summary"
    );
}

fn export(graph: &ScreenGraph, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)
        .with_context(|| format!("failed to encode graph into {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_into_overrides() {
        let args = CliArgs::try_parse_from([
            "wizard-maze",
            "--max-screens",
            "42",
            "--output",
            "out.json",
            "-vv",
        ])
        .expect("arguments parse");

        assert_eq!(args.max_screens, Some(42));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.verbose, 2);
        assert!(args.config.is_none());
        assert!(args.level.is_none());
    }

    #[test]
    fn export_writes_graph_json() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("graph.json");
        let level = vec![vec![
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}".to_owned(),
            "\u{1F9F1}\u{1F9D9}\u{1F9F1}".to_owned(),
            "\u{1F9F1}\u{1F9F1}\u{1F9F1}".to_owned(),
        ]];
        let graph = Crawler::new(level, CrawlConfig::default())
            .run()
            .expect("crawl completes");

        export(&graph, &path).expect("export succeeds");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read back"))
                .expect("valid json");
        assert_eq!(json["root"], graph.root().to_string());
        assert_eq!(
            json["screens"].as_object().map(|screens| screens.len()),
            Some(graph.len())
        );
    }
}
