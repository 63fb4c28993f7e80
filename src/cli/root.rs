//! Monorepo root resolution

use std::path::{Path, PathBuf};

use crate::registry::PROJECTS_DIR;

/// Resolve the monorepo root directory.
///
/// Priority:
/// 1. `--root` flag / `MONO_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for a `projects/` directory
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    cwd.ancestors()
        .find(|dir| dir.join(PROJECTS_DIR).is_dir())
        .unwrap_or(cwd)
        .to_path_buf()
}
