use super::node::Node;
use std::path::Path;

fn matches_any(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| name.contains(pattern.as_str()))
}

/// Filter a hierarchy by substring patterns, returning a new tree.
///
/// A file is dropped when its bare name contains any ignore pattern; when
/// `focus_patterns` is non-empty, only names containing a focus pattern
/// survive. Retained files are rewritten to carry their path relative to the
/// walk root, accumulated through `base_path`. Dropping a folder removes its
/// entire subtree.
///
/// Focus patterns select along the ancestor chain only: once a folder passes
/// its own name check, its children are filtered with an empty focus set.
/// Ignore patterns keep applying at every level.
pub fn filter_hierarchy(
    hierarchy: &[Node],
    ignore_patterns: &[String],
    focus_patterns: &[String],
    base_path: &Path,
) -> Vec<Node> {
    let mut filtered = Vec::new();

    for item in hierarchy {
        match item {
            Node::File(name) => {
                if matches_any(name, ignore_patterns) {
                    continue;
                }
                if focus_patterns.is_empty() || matches_any(name, focus_patterns) {
                    let full_path = base_path.join(name);
                    filtered.push(Node::file(full_path.to_string_lossy()));
                }
            }
            Node::Folder { name, children } => {
                if matches_any(name, ignore_patterns) {
                    continue;
                }
                if focus_patterns.is_empty() || matches_any(name, focus_patterns) {
                    filtered.push(Node::folder(
                        name.clone(),
                        filter_hierarchy(children, ignore_patterns, &[], &base_path.join(name)),
                    ));
                }
            }
        }
    }

    filtered
}
