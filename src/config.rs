/// Nesting limit used by [`ParseConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for a single parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of nested arrays/objects. The root container counts as 1.
    pub max_depth: usize,
    /// Fail with `DuplicateKey` instead of letting the last entry win.
    pub reject_duplicate_keys: bool,
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_duplicate_keys: false,
        }
    }

    /// Tighter limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_depth: 64,
            reject_duplicate_keys: true,
        }
    }

    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn reject_duplicate_keys(mut self, reject: bool) -> Self {
        self.reject_duplicate_keys = reject;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.reject_duplicate_keys);
    }

    #[test]
    fn strict_is_tighter() {
        let strict = ParseConfig::strict();
        assert!(strict.max_depth < ParseConfig::new().max_depth);
        assert!(strict.reject_duplicate_keys);
    }

    #[test]
    fn builder_methods() {
        let config = ParseConfig::new().max_depth(3).reject_duplicate_keys(true);
        assert_eq!(config.max_depth, 3);
        assert!(config.reject_duplicate_keys);
    }
}
