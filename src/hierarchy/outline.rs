use super::node::Node;
use std::path::Path;

/// Render a hierarchy as a plain-text outline: files as `- name`, folders as
/// `+ name/`, indented two spaces per level.
///
/// File entries may carry relative paths after filtering; only the base name
/// is shown.
pub fn format_outline(hierarchy: &[Node]) -> String {
    format_level(hierarchy, 0)
}

fn format_level(hierarchy: &[Node], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut output = String::new();

    for item in hierarchy {
        match item {
            Node::File(path) => {
                let file_name = Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                output.push_str(&format!("{}- {}\n", pad, file_name));
            }
            Node::Folder { name, children } => {
                output.push_str(&format!("{}+ {}/\n", pad, name));
                output.push_str(&format_level(children, indent + 2));
            }
        }
    }

    output
}
