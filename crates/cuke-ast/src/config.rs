//! Listener configuration.
//!
//! Path separator handling is an explicit value chosen by the caller. Nothing
//! in this module reads the process environment, so a given configuration
//! always produces the same locations regardless of the host platform.

use std::str::FromStr;

use thiserror::Error;

/// Path recorded when no `set_path` event arrives before the first node.
pub(crate) const UNKNOWN_FILE: &str = "UNKNOWN-FILE";

/// How path separators are rendered in node locations.
///
/// # Examples
///
/// ```
/// use cuke_ast::PathStyle;
///
/// assert_eq!(PathStyle::AsGiven.apply("features/a.feature"), "features/a.feature");
/// assert_eq!(PathStyle::Backslash.apply("features/a.feature"), r"features\a.feature");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// Keep the path exactly as the parser reported it.
    #[default]
    AsGiven,
    /// Rewrite every `/` to `\`.
    Backslash,
}

impl PathStyle {
    /// The separator style of the compilation target.
    ///
    /// This is resolved at compile time; callers who need reproducible output
    /// across platforms should pick a variant explicitly instead.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Backslash
        } else {
            Self::AsGiven
        }
    }

    /// Render `path` in this style.
    #[must_use]
    pub fn apply(self, path: &str) -> String {
        match self {
            Self::AsGiven => path.to_owned(),
            Self::Backslash => path.replace('/', "\\"),
        }
    }

    /// Return the canonical configuration spelling of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsGiven => "as-given",
            Self::Backslash => "backslash",
        }
    }
}

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The path style name is not recognised.
    #[error("unknown path style '{0}', expected one of: as-given, forward, unix, backslash, windows")]
    UnknownPathStyle(String),
}

impl FromStr for PathStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "as-given" | "forward" | "unix" => Ok(Self::AsGiven),
            "backslash" | "windows" => Ok(Self::Backslash),
            _ => Err(ConfigError::UnknownPathStyle(s.to_owned())),
        }
    }
}

/// Settings consumed by [`AstBuilder`](crate::AstBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Separator style applied to every path the listener records.
    pub path_style: PathStyle,
    /// Path used until the parser reports one.
    pub default_path: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            path_style: PathStyle::default(),
            default_path: UNKNOWN_FILE.to_owned(),
        }
    }
}

impl ListenerConfig {
    /// Create a new configuration with the specified path style.
    #[must_use]
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    /// Create a new configuration with the specified fallback path.
    #[must_use]
    pub fn with_default_path(mut self, path: impl Into<String>) -> Self {
        self.default_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("as-given", PathStyle::AsGiven)]
    #[case("Forward", PathStyle::AsGiven)]
    #[case(" unix ", PathStyle::AsGiven)]
    #[case("BACKSLASH", PathStyle::Backslash)]
    #[case("windows", PathStyle::Backslash)]
    fn parses_path_style_case_insensitively(#[case] input: &str, #[case] expected: PathStyle) {
        assert_eq!(input.parse::<PathStyle>().ok(), Some(expected));
    }

    #[test]
    fn rejects_unknown_path_style() {
        let Err(err) = "sideways".parse::<PathStyle>() else {
            panic!("expected unknown path style to be rejected");
        };
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for style in [PathStyle::AsGiven, PathStyle::Backslash] {
            assert_eq!(style.as_str().parse::<PathStyle>().ok(), Some(style));
        }
    }

    #[test]
    fn backslash_rewrites_every_separator() {
        assert_eq!(PathStyle::Backslash.apply("a/b/c.feature"), r"a\b\c.feature");
        assert_eq!(PathStyle::Backslash.apply(r"already\native"), r"already\native");
    }

    #[test]
    fn default_config_uses_unknown_file() {
        let config = ListenerConfig::default();
        assert_eq!(config.default_path, UNKNOWN_FILE);
        assert_eq!(config.path_style, PathStyle::AsGiven);
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = ListenerConfig::default()
            .with_path_style(PathStyle::Backslash)
            .with_default_path("stdin");
        assert_eq!(config.path_style, PathStyle::Backslash);
        assert_eq!(config.default_path, "stdin");
    }
}
