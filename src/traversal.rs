use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

/// Extensions (no dot) treated as C/C++ sources and headers. Matching is
/// case-sensitive, like a shell glob.
pub const SOURCE_EXTENSIONS: [&str; 6] = ["h", "hpp", "cc", "cpp", "c", "cxx"];

#[derive(Debug, Clone, Copy)]
pub struct CollectOptions {
    pub recurse: bool,
    pub follow_symlinks: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            recurse: true,
            follow_symlinks: false,
        }
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Collects every source/header file under `root`.
///
/// Returns `Ok(None)` when `root` does not exist, so callers can treat it as
/// "nothing to do". The returned paths are absolute and sorted.
///
/// # Errors
/// Returns an error if `root` exists but cannot be resolved.
pub fn collect_files(root: &Path, opts: &CollectOptions) -> Result<Option<Vec<PathBuf>>> {
    if !root.exists() {
        return Ok(None);
    }
    let root = fs::canonicalize(root).with_context(|| format!("resolve {}", root.display()))?;
    if !root.is_dir() {
        return Ok(Some(Vec::new()));
    }

    let mut builder = WalkBuilder::new(&root);
    // plain glob semantics: no ignore files, hidden entries included
    builder.standard_filters(false);
    builder.follow_links(opts.follow_symlinks);
    if !opts.recurse {
        builder.max_depth(Some(1));
    }

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = match dent {
            Ok(d) => d,
            Err(_) => continue,
        };
        // symlinks to files count; `follow_symlinks` only governs descent
        if !dent.path().is_file() || !is_source_file(dent.path()) {
            continue;
        }
        out.push(dent.into_path());
    }

    out.sort();
    Ok(Some(out))
}
