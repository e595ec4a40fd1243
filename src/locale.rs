//! Locale registry for number separators
//!
//! Maps locale identifiers (BCP-47 tags or POSIX-style names) onto the
//! grouping/decimal separator pair a numeric field displays. Only the
//! separators are tracked; digit shapes and currency symbols are not.

/// Separator conventions for a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    /// Canonical BCP-47 id (e.g. `"de-DE"`)
    pub id: &'static str,
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    const fn new(id: &'static str, grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            id,
            grouping_separator,
            decimal_separator,
        }
    }
}

/// Locale used when an id is unknown or empty.
pub const DEFAULT_LOCALE: NumberLocale = NumberLocale::new("en-US", ',', '.');

const NBSP: char = '\u{00A0}';

static LOCALES: &[NumberLocale] = &[
    DEFAULT_LOCALE,
    NumberLocale::new("en-GB", ',', '.'),
    NumberLocale::new("en-AU", ',', '.'),
    NumberLocale::new("en-CA", ',', '.'),
    NumberLocale::new("en-IE", ',', '.'),
    NumberLocale::new("en-ZA", NBSP, ','),
    NumberLocale::new("de-DE", '.', ','),
    NumberLocale::new("de-AT", NBSP, ','),
    NumberLocale::new("de-CH", '\'', '.'),
    NumberLocale::new("fr-FR", NBSP, ','),
    NumberLocale::new("fr-CA", NBSP, ','),
    NumberLocale::new("fr-CH", '\'', '.'),
    NumberLocale::new("it-IT", '.', ','),
    NumberLocale::new("it-CH", '\'', '.'),
    NumberLocale::new("es-ES", '.', ','),
    NumberLocale::new("es-MX", ',', '.'),
    NumberLocale::new("pt-BR", '.', ','),
    NumberLocale::new("pt-PT", NBSP, ','),
    NumberLocale::new("nl-NL", '.', ','),
    NumberLocale::new("nl-BE", '.', ','),
    NumberLocale::new("da-DK", '.', ','),
    NumberLocale::new("nb-NO", NBSP, ','),
    NumberLocale::new("sv-SE", NBSP, ','),
    NumberLocale::new("fi-FI", NBSP, ','),
    NumberLocale::new("pl-PL", NBSP, ','),
    NumberLocale::new("cs-CZ", NBSP, ','),
    NumberLocale::new("ru-RU", NBSP, ','),
    NumberLocale::new("tr-TR", '.', ','),
    NumberLocale::new("id-ID", '.', ','),
    NumberLocale::new("ja-JP", ',', '.'),
    NumberLocale::new("ko-KR", ',', '.'),
    NumberLocale::new("zh-CN", ',', '.'),
    NumberLocale::new("zh-TW", ',', '.'),
    NumberLocale::new("hi-IN", ',', '.'),
];

/// Languages whose region-less tag resolves to a specific entry.
static LANGUAGE_DEFAULTS: &[(&str, &str)] = &[
    ("en", "en-US"),
    ("de", "de-DE"),
    ("fr", "fr-FR"),
    ("it", "it-IT"),
    ("es", "es-ES"),
    ("pt", "pt-PT"),
    ("nl", "nl-NL"),
    ("da", "da-DK"),
    ("nb", "nb-NO"),
    ("no", "nb-NO"),
    ("sv", "sv-SE"),
    ("fi", "fi-FI"),
    ("pl", "pl-PL"),
    ("cs", "cs-CZ"),
    ("ru", "ru-RU"),
    ("tr", "tr-TR"),
    ("id", "id-ID"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("zh", "zh-CN"),
    ("hi", "hi-IN"),
];

/// Normalize a locale tag to lowercase `lang-region` form.
///
/// Accepts `_` or `-` as the separator and drops POSIX encoding/modifier
/// suffixes (`de_DE.UTF-8`, `de_DE@euro`) as well as BCP-47 extensions
/// (`en-US-u-nu-latn`).
fn normalize(id: &str) -> String {
    let mut key: String = id
        .trim()
        .chars()
        .map(|ch| if ch == '_' { '-' } else { ch.to_ascii_lowercase() })
        .collect();

    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }
    key
}

/// Look up a locale by id. Returns `None` for unknown ids.
pub fn lookup(id: &str) -> Option<&'static NumberLocale> {
    let key = normalize(id);
    if key.is_empty() {
        return None;
    }

    if let Some(locale) = LOCALES.iter().find(|l| l.id.eq_ignore_ascii_case(&key)) {
        return Some(locale);
    }

    // Unlisted region variant (e.g. `de-LU`): fall back to the language default
    let lang = key.split('-').next().unwrap_or("");
    let canonical = LANGUAGE_DEFAULTS
        .iter()
        .find(|(l, _)| *l == lang)
        .map(|(_, id)| *id)?;
    LOCALES.iter().find(|l| l.id == canonical)
}

/// Look up a locale by id, degrading to [`DEFAULT_LOCALE`] when unknown.
pub fn resolve(id: &str) -> &'static NumberLocale {
    match lookup(id) {
        Some(locale) => locale,
        None => {
            tracing::warn!(
                "Unknown locale '{}', falling back to {} separators",
                id,
                DEFAULT_LOCALE.id
            );
            &LOCALES[0]
        }
    }
}
