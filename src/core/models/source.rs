use std::path::PathBuf;

/// One configuration file, already read into memory.
///
/// The engine never performs I/O itself: the caller reads each
/// candidate file up front and hands over the content, keeping
/// parsing and merging pure and trivially testable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub content: String,
}

impl ConfigSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
