//! Crawl settings assembled from a TOML file and command-line overrides.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use wizard_maze_system_crawler::DEFAULT_MAX_SCREENS;
use wizard_maze_world::DEFAULT_LEVEL;

/// Graph export path used when neither the file nor the flags name one.
pub(crate) const DEFAULT_OUTPUT: &str = "dist/graph.json";

/// Optional settings read from a TOML configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    /// Ceiling on the number of explored screens.
    pub(crate) max_screens: Option<usize>,
    /// Destination of the exported graph.
    pub(crate) output: Option<PathBuf>,
    /// Authored levels, each a list of glyph rows.
    pub(crate) levels: Option<Vec<Vec<String>>>,
}

impl FileConfig {
    /// Reads and parses a configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse configuration at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid configuration toml")
    }
}

/// Values supplied on the command line, each overriding the file.
#[derive(Clone, Debug, Default)]
pub(crate) struct Overrides {
    /// Level file holding one glyph row per line.
    pub(crate) level: Option<PathBuf>,
    /// Ceiling on the number of explored screens.
    pub(crate) max_screens: Option<usize>,
    /// Destination of the exported graph.
    pub(crate) output: Option<PathBuf>,
}

/// Fully resolved crawl settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Ceiling on the number of explored screens.
    pub(crate) max_screens: usize,
    /// Destination of the exported graph.
    pub(crate) output: PathBuf,
    /// Authored levels; the first one is played.
    pub(crate) levels: Vec<Vec<String>>,
}

impl Settings {
    /// Merges file settings with command-line overrides.
    pub(crate) fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let levels = match overrides.level {
            Some(path) => vec![read_level(&path)?],
            None => file.levels.unwrap_or_else(default_levels),
        };
        if levels.is_empty() {
            bail!("configuration lists no levels");
        }

        Ok(Self {
            max_screens: overrides
                .max_screens
                .or(file.max_screens)
                .unwrap_or(DEFAULT_MAX_SCREENS),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            levels,
        })
    }
}

fn default_levels() -> Vec<Vec<String>> {
    vec![DEFAULT_LEVEL.iter().map(|row| (*row).to_owned()).collect()]
}

fn read_level(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read level at {}", path.display()))?;
    let rows = parse_level_text(&contents);
    if rows.is_empty() {
        bail!("level file {} contains no rows", path.display());
    }
    Ok(rows)
}

/// Splits a level file into glyph rows, skipping blank lines.
pub(crate) fn parse_level_text(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
