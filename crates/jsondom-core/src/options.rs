//! Parser configuration.

/// Nesting limit used by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for [`parse_with`](crate::parse_with).
///
/// The recursive-descent parser uses one stack frame per nesting level, so
/// `max_depth` bounds stack use on hostile input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting (objects and arrays combined).
    pub max_depth: usize,
    /// Accept a bare scalar (`42`, `"s"`, `null`) as the whole document.
    pub allow_scalar_root: bool,
}

impl ParseOptions {
    /// Only an object or an array may appear at the top level.
    pub const fn strict() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_scalar_root: false,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_scalar_root(mut self, allow: bool) -> Self {
        self.allow_scalar_root = allow;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_scalar_root: true,
        }
    }
}
