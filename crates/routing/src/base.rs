use std::fmt;

use tracing::warn;

use crate::location_path;

/// Prefix applied to every route when the site is served below the root.
///
/// `/Blog/` and `/Blog` normalise to the same base. A full URL contributes
/// only its path, so a deployment URL like `https://example.org/Blog/` works
/// as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::root();
        }
        let Some(path) = location_path(raw) else {
            warn!(base = raw, "unusable base path, falling back to '/'");
            return Self::root();
        };
        Self {
            prefix: path.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Removes the base from an absolute path. The prefix must end on a
    /// segment boundary and is compared ASCII case-insensitively.
    pub fn strip<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.is_root() {
            return Some(path);
        }
        let head = path.get(..self.prefix.len())?;
        if !head.eq_ignore_ascii_case(&self.prefix) {
            return None;
        }
        match &path[self.prefix.len()..] {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }

    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.prefix)
        } else {
            format!("{}/{path}", self.prefix)
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.prefix)
    }
}

#[cfg(test)]
#[path = "tests/base_tests.rs"]
mod tests;
