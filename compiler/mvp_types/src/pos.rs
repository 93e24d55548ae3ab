//! Source positions attached to type nodes.

use std::fmt;
use std::sync::Arc;

/// Where a type node was introduced: a line number and the token or label
/// that introduced it.
///
/// Positions are diagnostics only. Unification never compares them.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilePos {
    line: u32,
    token: Arc<str>,
}

impl FilePos {
    /// Line used for nodes that have no source location.
    pub const BUILTIN_LINE: u32 = 0;

    pub fn new(line: u32, token: impl Into<Arc<str>>) -> Self {
        Self {
            line,
            token: token.into(),
        }
    }

    /// Position for types provided by the language itself.
    pub fn builtin() -> Self {
        Self::new(Self::BUILTIN_LINE, "<builtin>")
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_builtin(&self) -> bool {
        self.line == Self::BUILTIN_LINE
    }
}

impl fmt::Debug for FilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilePos({}, {:?})", self.line, self.token)
    }
}

impl fmt::Display for FilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.token)
    }
}
