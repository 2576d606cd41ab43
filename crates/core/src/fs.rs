//! Filesystem checks

use std::path::Path;

/// Check if a path points at a regular file
pub fn is_file(path: &str) -> bool {
    Path::new(path).is_file()
}
