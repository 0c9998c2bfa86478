use crate::core::traits::placeholder::PlaceholderSource;

/// Placeholder source backed by the process environment.
///
/// Always the last source in the chain: anything not answered by
/// explicit properties falls through to `std::env::var`.
pub struct ProcessEnvSource;

impl PlaceholderSource for ProcessEnvSource {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
