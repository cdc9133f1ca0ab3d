//! Settings files. Values end up in the process environment, where
//! `RuntimeConfig::from_env` reads them.

use std::path::{Path, PathBuf};

use codegpt_constant::app;

/// How far up from the working directory to look for project files.
const MAX_ASCENT: usize = 32;

/// Candidate env files, highest priority first:
/// project `.codegpt/env`, project `.env`, then `~/.codegpt/env`.
pub fn env_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(found) = find_upwards(&cwd, &Path::new(app::DATA_DIR).join(app::ENV_FILE)) {
            files.push(found);
        }
        if let Some(found) = find_upwards(&cwd, Path::new(".env")) {
            files.push(found);
        }
    }
    if let Some(home) = dirs::home_dir() {
        files.push(home.join(app::DATA_DIR).join(app::ENV_FILE));
    }
    files
}

/// Load every existing env file. Variables already set are never overridden,
/// so the process environment wins, then files in [`env_files`] order.
pub fn load() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    for path in env_files() {
        if path.exists() && dotenvy::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }
    loaded
}

fn find_upwards(start: &Path, relative: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..MAX_ASCENT {
        let candidate = dir.join(relative);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
