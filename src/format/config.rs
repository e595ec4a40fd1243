//! Immutable separator and digit-limit snapshot shared by the formatting pipeline.

use crate::config::ConfigError;
use crate::locale::{self, NumberLocale};

/// Default number of fractional digits a field accepts.
pub const DEFAULT_DIGITS_AFTER_SEPARATOR: usize = 2;

/// Locale-derived separators plus digit limits.
///
/// Grouping and decimal separators are always distinct. A config is never
/// mutated in place; the `with_*` methods return an updated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    grouping_separator: char,
    decimal_separator: char,
    /// `None` means unbounded
    digits_before_separator: Option<usize>,
    digits_after_separator: usize,
    locale: &'static str,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::from_locale(&locale::DEFAULT_LOCALE)
    }
}

impl FormatConfig {
    fn from_locale(locale: &NumberLocale) -> Self {
        Self {
            grouping_separator: locale.grouping_separator,
            decimal_separator: locale.decimal_separator,
            digits_before_separator: None,
            digits_after_separator: DEFAULT_DIGITS_AFTER_SEPARATOR,
            locale: locale.id,
        }
    }

    /// Build a config for a locale id with default digit limits.
    ///
    /// Unknown ids degrade to the default separator pair.
    pub fn for_locale(id: &str) -> Self {
        Self::from_locale(locale::resolve(id))
    }

    /// Build a config from an explicit separator pair.
    pub fn with_separators(grouping: char, decimal: char) -> Result<Self, ConfigError> {
        if grouping == decimal {
            return Err(ConfigError::SameSeparators(grouping));
        }
        Ok(Self {
            grouping_separator: grouping,
            decimal_separator: decimal,
            digits_before_separator: None,
            digits_after_separator: DEFAULT_DIGITS_AFTER_SEPARATOR,
            locale: "und",
        })
    }

    /// Re-derive separators for `id`, keeping the current digit limits.
    pub fn reload(&self, id: &str) -> Self {
        let locale = locale::resolve(id);
        tracing::debug!(
            "Reloaded format config for {}: grouping={:?} decimal={:?}",
            locale.id,
            locale.grouping_separator,
            locale.decimal_separator
        );
        Self {
            grouping_separator: locale.grouping_separator,
            decimal_separator: locale.decimal_separator,
            locale: locale.id,
            ..*self
        }
    }

    pub fn with_digits_before(self, limit: Option<usize>) -> Self {
        Self {
            digits_before_separator: limit,
            ..self
        }
    }

    pub fn with_digits_after(self, limit: usize) -> Self {
        Self {
            digits_after_separator: limit,
            ..self
        }
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn digits_before_separator(&self) -> Option<usize> {
        self.digits_before_separator
    }

    pub fn digits_after_separator(&self) -> usize {
        self.digits_after_separator
    }

    /// Canonical id of the locale the separators came from (`"und"` for explicit pairs)
    pub fn locale(&self) -> &'static str {
        self.locale
    }
}
