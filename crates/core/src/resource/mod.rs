//! Resource lookup across an ordered set of filesystem roots.
//!
//! This is the only place the bootstrap touches the filesystem. Everything
//! above it asks for resources by well-known name and does not care where
//! they live.

pub mod manifest;
pub mod scanner;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable supplying extra resource roots, separated with the
/// platform path separator.
pub const RESOURCE_PATH_ENV: &str = "OXBIND_RESOURCE_PATH";

/// Where a resource was found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHit {
    pub root: PathBuf,
    pub path: PathBuf,
}

/// Resource lookup by well-known name.
///
/// `read` resolves the first match in root order; `locate` enumerates every
/// match across the full search path. Loaders are cheap handles and
/// re-invocation re-scans.
pub trait ResourceLoader: Send + Sync {
    /// Bytes of the first resource with this name, in root order.
    fn read(&self, name: &str) -> Option<Vec<u8>>;

    /// Whether the resource resolves at all.
    fn contains(&self, name: &str) -> bool {
        self.read(name).is_some()
    }

    /// Every readable resource ending with this relative name, across all
    /// roots, at any depth.
    fn locate(&self, name: &str) -> Vec<ResourceHit>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Ordered filesystem roots, searched front to back.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
        }
    }

    /// Roots taken from [`RESOURCE_PATH_ENV`]. Empty when the variable is
    /// unset.
    pub fn from_env() -> Self {
        let roots = std::env::var_os(RESOURCE_PATH_ENV)
            .map(|raw| std::env::split_paths(&raw).collect())
            .unwrap_or_default();
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl ResourceLoader for SearchPath {
    fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|path| path.is_file())
            .and_then(|path| std::fs::read(path).ok())
    }

    fn contains(&self, name: &str) -> bool {
        self.roots.iter().any(|root| root.join(name).is_file())
    }

    fn locate(&self, name: &str) -> Vec<ResourceHit> {
        let relative = Path::new(name);
        let mut hits = Vec::new();
        for root in &self.roots {
            for entry in WalkDir::new(root)
                .follow_links(false)
                .into_iter()
                .filter_map(|entry| entry.ok())
            {
                if entry.file_type().is_file() && entry.path().ends_with(relative) {
                    hits.push(ResourceHit {
                        root: root.clone(),
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }
        hits
    }

    fn describe(&self) -> String {
        let roots: Vec<String> = self
            .roots
            .iter()
            .map(|root| root.display().to_string())
            .collect();
        format!("search-path[{}]", roots.join(", "))
    }
}
