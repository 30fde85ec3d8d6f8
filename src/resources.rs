//! External collaborator seams.
//!
//! The core never does its own asset lookup or networking. The host
//! application supplies two capabilities:
//!
//! - `ResourceLoader`: read a named bundled resource (the JSON snapshot).
//! - `ImageFetcher`: resolve a remote artwork URL to bytes, or report that
//!   the fetch is still pending or has failed.
//!
//! Fetches are independent and unordered; no caching contract is imposed
//! here.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Capability to read a named resource from the application bundle.
pub trait ResourceLoader {
    /// Read the resource `<name>.<extension>` in full.
    ///
    /// Absence is reported as an error, not a panic; callers decide how to
    /// degrade.
    fn load(&self, name: &str, extension: &str) -> io::Result<Vec<u8>>;
}

/// `ResourceLoader` over a directory on disk.
///
/// The desktop/test counterpart of an application bundle: resources are
/// plain files under a root directory.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLoader for DirectoryLoader {
    fn load(&self, name: &str, extension: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(format!("{}.{}", name, extension)))
    }
}

/// Outcome of a single artwork fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageState {
    /// The fetch has not completed yet; render a placeholder.
    Pending,
    /// Encoded image bytes, ready to decode and render.
    Ready(Vec<u8>),
    /// The fetch failed; render nothing.
    Failed,
}

impl ImageState {
    /// True when image bytes are available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, ImageState::Ready(_))
    }
}

/// Capability to fetch remote card artwork by URL.
///
/// Invoked once per visible card and once per detail-view art crop.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> ImageState;
}
