//! Edit validation: the ways a partially typed number becomes unrecoverable.

use super::config::FormatConfig;

/// Why an edit was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Integer part has more digits than allowed
    TooManyIntegerDigits { limit: usize, found: usize },
    /// Fractional part has more digits than allowed
    TooManyFractionDigits { limit: usize, found: usize },
    /// A grouping separator appears after the decimal separator
    GroupingAfterDecimal,
    /// The decimal separator appears more than once
    MultipleDecimalSeparators,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::TooManyIntegerDigits { limit, found } => {
                write!(f, "{} integer digits (max {})", found, limit)
            }
            Rejection::TooManyFractionDigits { limit, found } => {
                write!(f, "{} fraction digits (max {})", found, limit)
            }
            Rejection::GroupingAfterDecimal => write!(f, "grouping separator after decimal"),
            Rejection::MultipleDecimalSeparators => write!(f, "more than one decimal separator"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Check a reconciled text against the config's limits and separator rules.
pub fn validate(text: &str, config: &FormatConfig) -> Result<(), Rejection> {
    let decimal = config.decimal_separator();
    let grouping = config.grouping_separator();
    let (integer, fraction) = match text.split_once(decimal) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    if let Some(limit) = config.digits_before_separator() {
        let found = count_digits(integer);
        if found > limit {
            return Err(Rejection::TooManyIntegerDigits { limit, found });
        }
    }

    if let Some(fraction) = fraction {
        let limit = config.digits_after_separator();
        let found = count_digits(fraction);
        if found > limit {
            return Err(Rejection::TooManyFractionDigits { limit, found });
        }

        if fraction.contains(grouping) {
            return Err(Rejection::GroupingAfterDecimal);
        }

        if fraction.contains(decimal) {
            return Err(Rejection::MultipleDecimalSeparators);
        }
    }

    Ok(())
}

fn count_digits(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_pass() {
        let config = FormatConfig::default();
        assert_eq!(validate("", &config), Ok(()));
        assert_eq!(validate("1,234", &config), Ok(()));
        assert_eq!(validate("1,234.5", &config), Ok(()));
        assert_eq!(validate("1,234.", &config), Ok(()));
        assert_eq!(validate("12345678901234567890", &config), Ok(()));
    }

    #[test]
    fn test_fraction_limit() {
        let config = FormatConfig::default();
        assert_eq!(validate("1.25", &config), Ok(()));
        assert_eq!(
            validate("1.255", &config),
            Err(Rejection::TooManyFractionDigits { limit: 2, found: 3 })
        );
    }

    #[test]
    fn test_zero_fraction_limit_rejects_any_fraction_digit() {
        let config = FormatConfig::default().with_digits_after(0);
        assert_eq!(validate("12.", &config), Ok(()));
        assert!(validate("12.5", &config).is_err());
    }

    #[test]
    fn test_integer_limit_ignores_grouping() {
        let config = FormatConfig::default().with_digits_before(Some(4));
        assert_eq!(validate("1,234", &config), Ok(()));
        assert_eq!(validate("1,234.56", &config), Ok(()));
        assert_eq!(
            validate("12,345", &config),
            Err(Rejection::TooManyIntegerDigits { limit: 4, found: 5 })
        );
    }

    #[test]
    fn test_grouping_after_decimal() {
        let config = FormatConfig::default();
        assert_eq!(
            validate("1.2,", &config),
            Err(Rejection::GroupingAfterDecimal)
        );
    }

    #[test]
    fn test_multiple_decimal_separators() {
        let config = FormatConfig::default();
        assert_eq!(
            validate("1.2.", &config),
            Err(Rejection::MultipleDecimalSeparators)
        );
        let config = FormatConfig::for_locale("de-DE");
        assert_eq!(
            validate("1,2,", &config),
            Err(Rejection::MultipleDecimalSeparators)
        );
    }

    #[test]
    fn test_locale_separators_are_respected() {
        let config = FormatConfig::for_locale("de-DE");
        assert_eq!(validate("1.234,56", &config), Ok(()));
        assert_eq!(
            validate("1,23.", &config),
            Err(Rejection::GroupingAfterDecimal)
        );
    }
}
