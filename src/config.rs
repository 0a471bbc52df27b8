use chrono::Locale;
use std::{env, path::PathBuf};
use tracing::warn;

use crate::error::{ExportError, Result};

/// Locale used when nothing in the environment names a usable one.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

/// Checked in order; the first non-empty value wins.
const LOCALE_VARS: &[&str] = &["ITINERARY_LOCALE", "LC_ALL", "LC_TIME", "LANG"];
const OUTPUT_DIR_VAR: &str = "ITINERARY_OUTPUT_DIR";
const STRICT_VAR: &str = "ITINERARY_STRICT";

/// Runtime settings for rendering and export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub locale: Locale,
    pub output_dir: PathBuf,
    pub strict: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            output_dir: PathBuf::from("."),
            strict: false,
        }
    }
}

impl ExportConfig {
    /// Resolve settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let locale_tag = LOCALE_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.trim().is_empty());
        if let Some(tag) = locale_tag {
            match parse_locale(&tag) {
                Some(locale) => config.locale = locale,
                None => warn!("unknown locale `{}`, falling back to en_US", tag),
            }
        }

        if let Some(dir) = lookup(OUTPUT_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(flag) = lookup(STRICT_VAR) {
            config.strict = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config
    }

    /// Override the locale with an explicitly requested tag.
    pub fn with_locale_tag(mut self, tag: &str) -> Result<Self> {
        self.locale = parse_locale(tag)
            .ok_or_else(|| ExportError::Config(format!("unknown locale `{}`", tag)))?;
        Ok(self)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Map a POSIX-style locale tag (`de_DE.UTF-8`, `fr_FR@euro`, `en-GB`) to a chrono locale.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let base = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}
