use crate::probe::{CachedProbe, FsProbe};
use crate::InfraError;
use camino::{Utf8Path, Utf8PathBuf};
use sanepath_core::{NaturalComparer, PathFlavor, PathOrderer, SegmentComparer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Depth limit when recursive; 1 means direct children only.
    pub max_depth: Option<usize>,
    /// Include names starting with a dot.
    pub include_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Path relative to the listed root.
    pub rel_path: Utf8PathBuf,
    pub is_dir: bool,
    /// Size in bytes; zero for directories.
    pub len: u64,
}

/// List `root` in file-browser order using the natural comparer.
pub fn list_directory(root: &Utf8Path, options: &ListOptions) -> Result<Vec<Entry>, InfraError> {
    list_directory_with(root, options, NaturalComparer::new())
}

pub fn list_directory_with<C: SegmentComparer>(
    root: &Utf8Path,
    options: &ListOptions,
    comparer: C,
) -> Result<Vec<Entry>, InfraError> {
    if !root.metadata()?.is_dir() {
        return Err(InfraError::NotADirectory(root.to_path_buf()));
    }

    let max_depth = if options.recursive {
        options.max_depth.unwrap_or(usize::MAX).max(1)
    } else {
        1
    };
    info!("Listing {} (depth {})", root, max_depth);

    let include_hidden = options.include_hidden;
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        // The root goes through the filter as well and must survive it.
        .filter_entry(move |e| {
            e.depth() == 0 || include_hidden || !e.file_name().to_string_lossy().starts_with('.')
        });

    let mut entries = Vec::new();
    for item in walker {
        let item = item?;
        let Some(path) = Utf8Path::from_path(item.path()) else {
            warn!("Skipping non UTF-8 path {}", item.path().display());
            continue;
        };
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };

        let is_dir = item.file_type().is_dir();
        let len = if is_dir {
            0
        } else {
            item.metadata().map(|m| m.len()).unwrap_or(0)
        };

        entries.push(Entry {
            rel_path: rel.to_path_buf(),
            is_dir,
            len,
        });
    }

    // Directory-ness is already known for every entry, so the orderer never
    // has to go back to the disk while sorting.
    let mut probe = CachedProbe::new(FsProbe::rooted(root));
    for entry in &entries {
        probe.insert(entry.rel_path.as_str(), entry.is_dir);
    }
    let orderer = PathOrderer::with_comparer(probe, comparer).with_flavor(PathFlavor::native());
    entries.sort_by(|a, b| orderer.compare(a.rel_path.as_str(), b.rel_path.as_str()));

    debug!("Listed {} entries under {}", entries.len(), root);
    Ok(entries)
}
