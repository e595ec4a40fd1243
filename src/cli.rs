//! Command-line argument parsing for the `numeric-field` binary
//!
//! Supports:
//! - Locale and digit-limit overrides on top of the config file
//! - A default value rendered through a printf-style pattern
//! - Keystroke scripts, either as arguments or one per stdin line

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DefaultValue, FieldConfig};
use crate::editable::{MoveTarget, TextEditMsg};

/// Replay keystrokes through a live-formatted numeric field
#[derive(Parser, Debug)]
#[command(name = "numeric-field", version, about = "Replay keystrokes through a live-formatted numeric field")]
pub struct CliArgs {
    /// Keystroke script: characters are typed, <BS> <DEL> <LEFT> <RIGHT> <HOME> <END>
    /// <ALL> <CLEAR> <PASTE:text> <SET:text> are special keys
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Locale for separators (e.g. en-US, de-DE, fr-FR)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Maximum digits before the decimal separator
    #[arg(long, value_name = "N")]
    pub digits_before: Option<usize>,

    /// Maximum digits after the decimal separator
    #[arg(long, value_name = "N")]
    pub digits_after: Option<usize>,

    /// Value shown when the field is cleared
    #[arg(long, value_name = "VALUE")]
    pub default_value: Option<f64>,

    /// printf-style pattern for the default value
    #[arg(long, value_name = "PATTERN", default_value = "%.2f")]
    pub default_pattern: String,

    /// Maximum number of characters the input accepts, separators included
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Read field config from this YAML file instead of the user config
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit one JSON object per step
    #[arg(long)]
    pub json: bool,
}

/// One step of a keystroke script
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptKey {
    Edit(TextEditMsg),
    /// Reset the field to its default text
    Clear,
}

impl CliArgs {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_to(&self, mut config: FieldConfig) -> FieldConfig {
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if self.digits_before.is_some() {
            config.digits_before_decimal = self.digits_before;
        }
        if let Some(digits_after) = self.digits_after {
            config.digits_after_decimal = digits_after;
        }
        if let Some(value) = self.default_value {
            config.default_value = Some(DefaultValue {
                value,
                pattern: self.default_pattern.clone(),
            });
        }
        config
    }
}

/// Parse a keystroke script into steps
pub fn parse_script(script: &str) -> Result<Vec<ScriptKey>, String> {
    let mut keys = Vec::new();
    let mut rest = script;

    while let Some(ch) = rest.chars().next() {
        if ch == '<' {
            if let Some(end) = rest.find('>') {
                keys.push(parse_special(&rest[1..end])?);
                rest = &rest[end + 1..];
                continue;
            }
        }
        keys.push(ScriptKey::Edit(TextEditMsg::InsertChar(ch)));
        rest = &rest[ch.len_utf8()..];
    }

    Ok(keys)
}

fn parse_special(token: &str) -> Result<ScriptKey, String> {
    if let Some(text) = token.strip_prefix("PASTE:") {
        return Ok(ScriptKey::Edit(TextEditMsg::InsertText(text.to_string())));
    }
    if let Some(text) = token.strip_prefix("SET:") {
        return Ok(ScriptKey::Edit(TextEditMsg::SetText(text.to_string())));
    }

    let msg = match token.to_ascii_uppercase().as_str() {
        "BS" => TextEditMsg::DeleteBackward,
        "DEL" => TextEditMsg::DeleteForward,
        "LEFT" => TextEditMsg::Move(MoveTarget::Left),
        "RIGHT" => TextEditMsg::Move(MoveTarget::Right),
        "HOME" => TextEditMsg::Move(MoveTarget::Start),
        "END" => TextEditMsg::Move(MoveTarget::End),
        "ALL" => TextEditMsg::SelectAll,
        "CLEAR" => return Ok(ScriptKey::Clear),
        _ => return Err(format!("Unknown key <{}>", token)),
    };
    Ok(ScriptKey::Edit(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            keys: vec![],
            locale: None,
            digits_before: None,
            digits_after: None,
            default_value: None,
            default_pattern: "%.2f".to_string(),
            max_length: None,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_plain_characters() {
        let keys = parse_script("12.5").unwrap();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[2], ScriptKey::Edit(TextEditMsg::InsertChar('.')));
    }

    #[test]
    fn test_special_keys() {
        let keys = parse_script("1<bs><LEFT><CLEAR><PASTE:1,000>").unwrap();
        assert_eq!(
            keys,
            vec![
                ScriptKey::Edit(TextEditMsg::InsertChar('1')),
                ScriptKey::Edit(TextEditMsg::DeleteBackward),
                ScriptKey::Edit(TextEditMsg::Move(MoveTarget::Left)),
                ScriptKey::Clear,
                ScriptKey::Edit(TextEditMsg::InsertText("1,000".to_string())),
            ]
        );
    }

    #[test]
    fn test_unterminated_bracket_is_typed() {
        let keys = parse_script("<1").unwrap();
        assert_eq!(keys[0], ScriptKey::Edit(TextEditMsg::InsertChar('<')));
    }

    #[test]
    fn test_unknown_key() {
        assert!(parse_script("<F5>").is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let mut cli = args();
        cli.locale = Some("de-DE".to_string());
        cli.digits_after = Some(3);
        cli.default_value = Some(0.0);
        let config = cli.apply_to(FieldConfig::default());
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.digits_after_decimal, 3);
        assert_eq!(config.default_value.unwrap().pattern, "%.2f");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let base = FieldConfig {
            digits_before_decimal: Some(5),
            ..FieldConfig::default()
        };
        assert_eq!(args().apply_to(base.clone()), base);
    }
}
