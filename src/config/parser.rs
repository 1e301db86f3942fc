//! Parser for the sectioned `key = value` config format.
//!
//! Supports the subset of INI used by `mozdef_client_config.conf`:
//! - `[section]` headers (case-sensitive, no duplicates)
//! - `key = value` or `key: value` options (keys lower-cased, no duplicates)
//! - full-line `#` / `;` comments
//! - indented continuation lines joined with `\n`
//! - a `[DEFAULT]` section providing fallbacks for every other section

use std::sync::OnceLock;

use regex::Regex;

use super::types::{ResolvedConfig, DEFAULT_SECTION};
use crate::domain::ParseError;

const COMMENT_PREFIXES: &[char] = &['#', ';'];

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[(?P<header>.+)\]").expect("section pattern is valid"))
}

fn option_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<option>.*?)\s*[=:]\s*(?P<value>.*)$").expect("option pattern is valid")
    })
}

/// Parse config text into a [`ResolvedConfig`] with no origin.
pub fn parse(content: &str) -> Result<ResolvedConfig, ParseError> {
    let mut config = ResolvedConfig::empty();
    let mut section: Option<String> = None;
    // Option that indented lines continue, with the indent of its own line
    let mut continued: Option<(String, usize)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let stripped = raw.trim();

        if stripped.is_empty() {
            continued = None;
            continue;
        }
        if stripped.starts_with(COMMENT_PREFIXES) {
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        if let (Some(name), Some((option, option_indent))) = (&section, &continued) {
            if indent > *option_indent {
                if let Some(value) = config.entries_mut(name).get_mut(option) {
                    value.push('\n');
                    value.push_str(stripped);
                }
                continue;
            }
        }

        if let Some(caps) = section_re().captures(stripped) {
            let name = caps["header"].to_string();
            if name != DEFAULT_SECTION && config.has_section(&name) {
                return Err(ParseError::DuplicateSection {
                    line,
                    section: name,
                });
            }
            config.entries_mut(&name);
            section = Some(name);
            continued = None;
            continue;
        }

        let Some(name) = &section else {
            return Err(ParseError::MissingSectionHeader {
                line,
                content: raw.to_string(),
            });
        };

        let Some(caps) = option_re().captures(stripped) else {
            return Err(ParseError::Syntax {
                line,
                content: raw.to_string(),
            });
        };
        let option = caps["option"].trim().to_lowercase();
        if option.is_empty() {
            return Err(ParseError::Syntax {
                line,
                content: raw.to_string(),
            });
        }

        let entries = config.entries_mut(name);
        if entries.contains_key(&option) {
            return Err(ParseError::DuplicateOption {
                line,
                section: name.clone(),
                option,
            });
        }
        entries.insert(option.clone(), caps["value"].trim().to_string());
        continued = Some((option, indent));
    }

    Ok(config)
}

/// Interpret a config value as a boolean.
///
/// Accepts `1`/`yes`/`true`/`on` and `0`/`no`/`false`/`off`, case-insensitive.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
