use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected \"dark\" or \"light\")")]
pub struct ThemeParseError(pub String);

impl Theme {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// A valid saved preference wins; otherwise follow `prefers-color-scheme`.
    pub fn resolve_initial(saved: Option<&str>, prefers_light: bool) -> Self {
        match saved.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            _ if prefers_light => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
