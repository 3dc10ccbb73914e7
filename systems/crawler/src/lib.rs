#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Breadth-first explorer that discovers every reachable screen.
//!
//! Starting from the title menu, the [`Crawler`] presses every offered button
//! on every screen it has not seen before, identifies successors by their
//! [`ScreenHash`], and stops once a round discovers nothing new. The result
//! is a [`ScreenGraph`] whose shape depends only on reachability, never on
//! the order screens were expanded in.

mod hash;

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};
use wizard_maze_core::Button;
use wizard_maze_system_screens::{Screen, ScreenError, ScreenKind};

pub use hash::ScreenHash;

/// Default ceiling on the number of screens a crawl may produce.
pub const DEFAULT_MAX_SCREENS: usize = 1_000_000;

/// Failures that abort a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The visited set would exceed the configured ceiling.
    #[error("exploration exceeded the limit of {limit} screens")]
    Overflow {
        /// Ceiling that was hit.
        limit: usize,
    },
    /// A screen transition failed.
    #[error(transparent)]
    Screen(#[from] ScreenError),
    /// A screen could not be encoded for hashing.
    #[error("failed to encode screen for hashing")]
    Encoding(#[source] serde_json::Error),
}

/// Configuration parameters required to construct the crawler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrawlConfig {
    max_screens: usize,
}

impl CrawlConfig {
    /// Creates a configuration with the provided screen ceiling.
    #[must_use]
    pub const fn new(max_screens: usize) -> Self {
        Self { max_screens }
    }

    /// Maximum number of screens the crawl may commit.
    #[must_use]
    pub const fn max_screens(&self) -> usize {
        self.max_screens
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCREENS)
    }
}

/// A discovered screen together with its outgoing transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEntry {
    /// Screen content.
    pub screen: Screen,
    /// Successor hash for every button the screen offers.
    pub actions: BTreeMap<Button, ScreenHash>,
}

/// Complete, deduplicated graph of reachable screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreenGraph {
    root: ScreenHash,
    screens: BTreeMap<ScreenHash, GraphEntry>,
}

impl ScreenGraph {
    /// Hash of the title menu the crawl started from.
    #[must_use]
    pub const fn root(&self) -> ScreenHash {
        self.root
    }

    /// Looks up a screen by hash.
    #[must_use]
    pub fn get(&self, hash: &ScreenHash) -> Option<&GraphEntry> {
        self.screens.get(hash)
    }

    /// Number of screens in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Reports whether the graph holds no screens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Iterates over screens ordered by hash.
    pub fn iter(&self) -> impl Iterator<Item = (&ScreenHash, &GraphEntry)> {
        self.screens.iter()
    }

    /// Total number of transitions across all screens.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.screens.values().map(|entry| entry.actions.len()).sum()
    }

    /// Number of screens per variant.
    #[must_use]
    pub fn kind_counts(&self) -> BTreeMap<ScreenKind, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.screens.values() {
            *counts.entry(entry.screen.kind()).or_insert(0) += 1;
        }
        counts
    }
}

/// Breadth-first screen explorer.
#[derive(Clone, Debug)]
pub struct Crawler {
    root: Screen,
    config: CrawlConfig,
}

impl Crawler {
    /// Creates a crawler that starts from the title menu of `levels`.
    #[must_use]
    pub fn new(levels: Vec<Vec<String>>, config: CrawlConfig) -> Self {
        Self::from_screen(Screen::main(levels), config)
    }

    /// Creates a crawler that starts from an arbitrary screen.
    #[must_use]
    pub const fn from_screen(root: Screen, config: CrawlConfig) -> Self {
        Self { root, config }
    }

    /// Explores every screen reachable from the root.
    ///
    /// Each round expands the whole frontier. A screen is committed to the
    /// graph when it is expanded, and each hash is expanded exactly once no
    /// matter how many parents reach it. The crawl fails with
    /// [`CrawlError::Overflow`] before committing a round that would push the
    /// graph past the configured ceiling.
    pub fn run(&self) -> Result<ScreenGraph, CrawlError> {
        let limit = self.config.max_screens();
        let root = ScreenHash::of(&self.root)?;
        let mut screens: BTreeMap<ScreenHash, GraphEntry> = BTreeMap::new();
        let mut discovered: HashSet<ScreenHash> = HashSet::new();
        let _ = discovered.insert(root);
        let mut frontier = vec![(root, self.root.clone())];
        let mut round = 0_usize;

        while !frontier.is_empty() {
            if screens.len() + frontier.len() > limit {
                error!(limit, round, "screen limit exceeded, aborting crawl");
                return Err(CrawlError::Overflow { limit });
            }
            debug!(
                round,
                frontier = frontier.len(),
                visited = screens.len(),
                "expanding frontier"
            );
            let expansions = expand_frontier(&frontier)?;

            let mut next = Vec::new();
            for ((hash, screen), edges) in frontier.into_iter().zip(expansions) {
                let mut actions = BTreeMap::new();
                for edge in edges {
                    let _ = actions.insert(edge.button, edge.target);
                    if discovered.insert(edge.target) {
                        next.push((edge.target, edge.screen));
                    }
                }

                let _ = screens.insert(hash, GraphEntry { screen, actions });
            }

            frontier = next;
            round += 1;
        }

        info!(screens = screens.len(), rounds = round, "crawl complete");
        Ok(ScreenGraph { root, screens })
    }
}

#[derive(Debug)]
struct Edge {
    button: Button,
    target: ScreenHash,
    screen: Screen,
}

fn expand(screen: &Screen) -> Result<Vec<Edge>, CrawlError> {
    screen
        .actions()
        .iter()
        .map(|&button| -> Result<Edge, CrawlError> {
            let next = screen.handle(button)?;
            let target = ScreenHash::of(&next)?;
            Ok(Edge {
                button,
                target,
                screen: next,
            })
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn expand_frontier(frontier: &[(ScreenHash, Screen)]) -> Result<Vec<Vec<Edge>>, CrawlError> {
    frontier.iter().map(|(_, screen)| expand(screen)).collect()
}

#[cfg(feature = "parallel")]
fn expand_frontier(frontier: &[(ScreenHash, Screen)]) -> Result<Vec<Vec<Edge>>, CrawlError> {
    use rayon::prelude::*;

    frontier.par_iter().map(|(_, screen)| expand(screen)).collect()
}
