// Copyright (c) 2024-2025 Catalog Registry Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Reader for Java-style `.properties` files
//!
//! Supports `#`/`!` comments, `=`, `:` or whitespace separators, backslash
//! line continuations and the standard escapes (`\t \n \r \f \uXXXX` and
//! escaped literal characters). Later duplicate keys replace earlier ones.

use crate::catalog::error::{CatalogError, CatalogResult};
use std::collections::BTreeMap;
use std::path::Path;

/// Read and parse a properties file
pub fn load_properties_from<P: AsRef<Path>>(path: P) -> CatalogResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_properties(&content)
}

/// Parse properties file content into a key/value map
pub fn parse_properties(input: &str) -> CatalogResult<BTreeMap<String, String>> {
    let mut properties = BTreeMap::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical);
        properties.insert(unescape(key)?, unescape(value)?);
    }

    Ok(properties)
}

// An odd run of trailing backslashes means the last one escapes the newline
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix('=').or_else(|| rest.strip_prefix(':')) {
        rest = stripped.trim_start();
    }
    (key, rest)
}

fn unescape(raw: &str) -> CatalogResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_code_unit(&mut chars)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: the low half must follow as another \uXXXX
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => read_code_unit(&mut chars)?,
                        _ => return Err(malformed_unicode()),
                    };
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(malformed_unicode());
                    }
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined).ok_or_else(malformed_unicode)?);
                } else {
                    out.push(char::from_u32(unit).ok_or_else(malformed_unicode)?);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> CatalogResult<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(malformed_unicode)?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

fn malformed_unicode() -> CatalogError {
    CatalogError::Configuration("Malformed \\uxxxx encoding in properties".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(map: &'a BTreeMap<String, String>, key: &str) -> &'a str {
        map.get(key).map(String::as_str).unwrap_or_else(|| panic!("missing key {}", key))
    }

    #[test]
    fn test_separators() {
        let map = parse_properties("a=1\nb: 2\nc 3\nd   =   4\ne\n").unwrap();
        assert_eq!(get(&map, "a"), "1");
        assert_eq!(get(&map, "b"), "2");
        assert_eq!(get(&map, "c"), "3");
        assert_eq!(get(&map, "d"), "4");
        assert_eq!(get(&map, "e"), "");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let map = parse_properties("# comment\n! also comment\n\n   \nconnector.name=memory\n").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(get(&map, "connector.name"), "memory");
    }

    #[test]
    fn test_line_continuation() {
        let map = parse_properties("hosts=a,\\\n    b,\\\n    c\nnext=x").unwrap();
        assert_eq!(get(&map, "hosts"), "a,b,c");
        assert_eq!(get(&map, "next"), "x");
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        let map = parse_properties("path=C:\\\\\nother=1").unwrap();
        assert_eq!(get(&map, "path"), "C:\\");
        assert_eq!(get(&map, "other"), "1");
    }

    #[test]
    fn test_escapes() {
        let map = parse_properties("key\\=with\\:seps=tab\\there\nuni=\\u0041\\u00e9\n").unwrap();
        assert_eq!(get(&map, "key=with:seps"), "tab\there");
        assert_eq!(get(&map, "uni"), "Aé");
    }

    #[test]
    fn test_surrogate_pair() {
        let map = parse_properties("emoji=\\uD83D\\uDE00").unwrap();
        assert_eq!(get(&map, "emoji"), "\u{1F600}");
    }

    #[test]
    fn test_malformed_unicode() {
        assert!(matches!(
            parse_properties("bad=\\u12G4"),
            Err(CatalogError::Configuration(_))
        ));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let map = parse_properties("a=1\na=2").unwrap();
        assert_eq!(get(&map, "a"), "2");
    }

    #[test]
    fn test_value_keeps_inner_separators() {
        let map = parse_properties("url=jdbc:postgresql://host:5432/db?a=b").unwrap();
        assert_eq!(get(&map, "url"), "jdbc:postgresql://host:5432/db?a=b");
    }
}
