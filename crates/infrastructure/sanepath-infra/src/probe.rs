use camino::Utf8PathBuf;
use sanepath_core::DirectoryProbe;
use std::collections::HashMap;
use std::fs;
use tracing::trace;

/// Asks the filesystem whether a path is a directory.
///
/// Relative paths resolve against `root` when one is set, otherwise against
/// the working directory. Missing or unreadable paths count as files.
#[derive(Debug, Clone, Default)]
pub struct FsProbe {
    root: Option<Utf8PathBuf>,
}

impl FsProbe {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn rooted(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> Utf8PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => Utf8PathBuf::from(path),
        }
    }
}

impl DirectoryProbe for FsProbe {
    fn is_directory(&self, path: &str) -> bool {
        let full = self.resolve(path);
        match fs::metadata(&full) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                trace!("probe {}: {}", full, e);
                false
            }
        }
    }
}

/// Lookup table of known directory-ness, falling back to `inner` for paths
/// it hasn't seen.
#[derive(Debug, Clone, Default)]
pub struct CachedProbe<P = FsProbe> {
    known: HashMap<String, bool>,
    inner: P,
}

impl<P: DirectoryProbe> CachedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            known: HashMap::new(),
            inner,
        }
    }

    pub fn insert(&mut self, path: impl Into<String>, is_dir: bool) {
        self.known.insert(path.into(), is_dir);
    }

    /// Resolve each path once through the inner probe.
    pub fn preload<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            let path = path.as_ref();
            if !self.known.contains_key(path) {
                let is_dir = self.inner.is_directory(path);
                self.known.insert(path.to_string(), is_dir);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl<P: DirectoryProbe> DirectoryProbe for CachedProbe<P> {
    fn is_directory(&self, path: &str) -> bool {
        match self.known.get(path) {
            Some(is_dir) => *is_dir,
            None => self.inner.is_directory(path),
        }
    }
}
