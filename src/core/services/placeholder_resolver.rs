use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::core::traits::placeholder::PlaceholderSource;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Substitutes `${name}` tokens from an ordered chain of sources.
///
/// The first source with a value wins. A token no source can answer is
/// left untouched — never dropped, never replaced with an empty string —
/// so misconfiguration stays visible downstream. Substitution is a
/// single pass: a value produced by one substitution is not re-expanded,
/// which rules out nontermination on self-referential configuration.
pub struct PlaceholderResolver {
    sources: Vec<Box<dyn PlaceholderSource>>,
}

impl PlaceholderResolver {
    pub fn new(sources: Vec<Box<dyn PlaceholderSource>>) -> Self {
        Self { sources }
    }

    /// Resolve every `${name}` in a single value.
    pub fn resolve(&self, value: &str) -> String {
        placeholder_pattern()
            .replace_all(value, |caps: &Captures| {
                let name = &caps[1];
                self.lookup(name)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Resolve every value of a flat map, keeping keys untouched.
    pub fn resolve_map(
        &self,
        map: &std::collections::BTreeMap<String, String>,
    ) -> std::collections::BTreeMap<String, String> {
        map.iter()
            .map(|(k, v)| (k.clone(), self.resolve(v)))
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.lookup(name))
    }
}
