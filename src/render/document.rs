use crate::hierarchy::Node;
use crate::obfuscate::obfuscate_value;
use crate::render::encoding::read_to_text;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rendering knobs threaded through the document walk.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Mask sensitive values inside embedded JSON objects.
    pub obfuscate_json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            obfuscate_json: true,
        }
    }
}

/// Emit a heading and fenced code block for every file in the hierarchy.
///
/// Top-level file entries are qualified against `base_dir`; entries nested in
/// folders already carry their full relative path and are used as-is. Folder
/// entries recurse with `base_dir` extended by the folder name.
pub fn add_file_blocks<W: Write>(
    hierarchy: &[Node],
    out: &mut W,
    base_dir: &Path,
    options: &RenderOptions,
) -> io::Result<()> {
    for item in hierarchy {
        match item {
            Node::File(item_path) => {
                let file_path = qualify(base_dir, item_path);
                add_file_to_md(&file_path, out, options)?;
            }
            Node::Folder { name, children } => {
                for child in children {
                    match child {
                        Node::File(child_path) => {
                            add_file_to_md(Path::new(child_path), out, options)?;
                        }
                        folder @ Node::Folder { .. } => {
                            add_file_blocks(
                                std::slice::from_ref(folder),
                                out,
                                &base_dir.join(name),
                                options,
                            )?;
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Join `item` onto `base_dir` unless it is already qualified, so that filter
/// output carrying root-relative paths is not prefixed twice.
fn qualify(base_dir: &Path, item: &str) -> PathBuf {
    let path = Path::new(item);
    if path.is_absolute() || path.starts_with(base_dir) {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Emit one path into the document: a `##` heading with the base name, then a
/// fenced block with the file's text, verbatim.
///
/// A directory that slips through as a file entry is expanded recursively.
/// Missing paths and files whose content cannot be decoded are logged and
/// skipped; the document is allowed to come out partial.
pub fn add_file_to_md<W: Write>(
    file_path: &Path,
    out: &mut W,
    options: &RenderOptions,
) -> io::Result<()> {
    let name = match file_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => file_path.display().to_string(),
    };

    if !file_path.exists() {
        warn!(path = %file_path.display(), "file or folder not found, skipping");
        return Ok(());
    }

    if file_path.is_dir() {
        write!(out, "\n## {}\n", name)?;
        let entries = match fs::read_dir(file_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %file_path.display(), error = %e, "cannot list folder, skipping");
                return Ok(());
            }
        };
        for entry in entries {
            match entry {
                Ok(entry) => add_file_to_md(&entry.path(), out, options)?,
                Err(e) => {
                    warn!(path = %file_path.display(), error = %e, "unreadable folder entry");
                }
            }
        }
        return Ok(());
    }

    match read_to_text(file_path) {
        Ok(contents) => {
            let contents = if options.obfuscate_json {
                mask_embedded_json(file_path, contents)
            } else {
                contents
            };
            write!(out, "\n## {}\n", name)?;
            write!(out, "```\n{}\n```\n", contents)?;
        }
        Err(e) => {
            warn!(path = %file_path.display(), error = %e, "skipping unreadable file");
        }
    }

    Ok(())
}

/// Obfuscate a `.json` file's content before it gets embedded. Anything that
/// is not a JSON object is left verbatim.
fn mask_embedded_json(path: &Path, contents: String) -> String {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return contents;
    }

    match serde_json::from_str::<Value>(&contents) {
        Ok(value) => match obfuscate_value(&value) {
            Ok(masked) => serde_json::to_string_pretty(&masked).unwrap_or(contents),
            // Top-level arrays and scalars carry no keyed secrets.
            Err(_) => contents,
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "not valid JSON, embedding verbatim");
            contents
        }
    }
}
