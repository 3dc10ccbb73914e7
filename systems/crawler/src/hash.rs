//! Canonical content hashing for screens.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use wizard_maze_system_screens::Screen;

use crate::CrawlError;

/// SHA-256 digest identifying a screen by content.
///
/// The digest covers the screen's serde encoding: the variant tag followed
/// by every field in declaration order, recursing into the bound state. The
/// static action list is derived from the variant and never enters the
/// encoding. Two screens with equal content always share a hash, whichever
/// path produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenHash([u8; 32]);

impl ScreenHash {
    /// Computes the canonical hash of a screen.
    pub fn of(screen: &Screen) -> Result<Self, CrawlError> {
        let mut hasher = Sha256::new();
        serde_json::to_writer(&mut hasher, screen).map_err(CrawlError::Encoding)?;
        Ok(Self(hasher.finalize().into()))
    }

    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ScreenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for ScreenHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
