use super::node::Node;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Walk `root_dir` and return one node per direct child, recursing into
/// subdirectories. No filtering happens here.
///
/// Entries come back in whatever order `read_dir` yields them, which is
/// platform-dependent. A missing or unreadable root propagates the error;
/// there is no partial tree.
pub fn build_hierarchy(root_dir: &Path) -> io::Result<Vec<Node>> {
    let mut hierarchy = Vec::new();

    for entry in fs::read_dir(root_dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, "skipping entry with non-UTF-8 name");
                continue;
            }
        };

        let item_path = entry.path();
        // Follows symlinks, so a link to a file counts as a file.
        let metadata = match fs::metadata(&item_path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %item_path.display(), error = %e, "cannot stat entry, skipping");
                continue;
            }
        };

        if metadata.is_file() {
            hierarchy.push(Node::file(name));
        } else if metadata.is_dir() {
            hierarchy.push(Node::folder(name, build_hierarchy(&item_path)?));
        }
    }

    Ok(hierarchy)
}
