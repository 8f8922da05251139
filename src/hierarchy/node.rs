/// One entry in a directory hierarchy.
///
/// A `File` carries the bare entry name as produced by the builder. After
/// filtering it carries the path relative to the walk root instead, so the
/// renderer can locate the file without re-walking the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(String),
    Folder { name: String, children: Vec<Node> },
}

impl Node {
    pub fn file<S: Into<String>>(name: S) -> Self {
        Node::File(name.into())
    }

    pub fn folder<S: Into<String>>(name: S, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.into(),
            children,
        }
    }
}
