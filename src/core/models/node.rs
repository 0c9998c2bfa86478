use std::collections::BTreeMap;

/// A node in the intermediate configuration tree.
///
/// The tree is built directly from indentation before any section
/// is interpreted, so every value is either a plain string scalar
/// or a nested mapping — never both. Making that a tagged union
/// means every traversal is exhaustively checked instead of relying
/// on runtime casts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    /// A leaf string value (`key: value`).
    Scalar(String),
    /// A nested block (`key:` followed by deeper lines).
    Mapping(BTreeMap<String, ConfigNode>),
}

impl ConfigNode {
    /// An empty mapping node, the usual tree root.
    pub fn empty() -> Self {
        ConfigNode::Mapping(BTreeMap::new())
    }

    /// Insert a scalar at `path` + `key`, creating intermediate mappings.
    ///
    /// A key that was previously bound to a scalar and is re-declared as
    /// a block (or vice versa) is replaced wholesale — last write wins,
    /// matching the merge policy for duplicate keys within one file.
    pub fn insert_scalar(&mut self, path: &[String], key: &str, value: String) {
        let target = self.descend(path);
        if let ConfigNode::Mapping(map) = target {
            map.insert(key.to_string(), ConfigNode::Scalar(value));
        }
    }

    /// Walk down `path`, converting any scalar in the way into a mapping.
    fn descend(&mut self, path: &[String]) -> &mut ConfigNode {
        let mut current = self;
        for segment in path {
            if let ConfigNode::Scalar(_) = current {
                *current = ConfigNode::empty();
            }
            let ConfigNode::Mapping(map) = current else {
                unreachable!("scalar was just converted to a mapping");
            };
            current = map
                .entry(segment.clone())
                .or_insert_with(ConfigNode::empty);
        }
        if let ConfigNode::Scalar(_) = current {
            *current = ConfigNode::empty();
        }
        current
    }

    /// Flatten this subtree into `dot.path -> value` entries.
    ///
    /// Scalar leaves become entries; mapping levels contribute a path
    /// segment. An empty mapping contributes nothing.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut BTreeMap<String, String>) {
        match self {
            ConfigNode::Scalar(value) => {
                if !prefix.is_empty() {
                    out.insert(prefix.to_string(), value.clone());
                }
            }
            ConfigNode::Mapping(map) => {
                for (key, child) in map {
                    let full = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    child.flatten_into(&full, out);
                }
            }
        }
    }
}
