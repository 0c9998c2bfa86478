/// Port for one source of placeholder values.
///
/// Sources are consulted in order; the first to return a value wins.
/// Typical chain: explicit properties (`--prop key=value`), then the
/// process environment.
pub trait PlaceholderSource: Send + Sync {
    /// Look up a value for `${name}`. `None` means "not mine", letting
    /// the next source in the chain answer.
    fn lookup(&self, name: &str) -> Option<String>;
}
