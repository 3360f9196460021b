//! Lexical grammar for translation key references.
//!
//! A key reference is `t(` directly followed by a single- or double-quoted
//! literal that starts with a letter and continues with letters, digits,
//! `.`, `_` or `-`. The literal must be closed by `)` or `,`, or sit at the
//! end of a line. `t` must not be preceded by a word character, so calls
//! like `get('x')` or `format('x')` never count.
//!
//! The patterns are plain strings so the ripgrep scanner can pass the exact
//! same grammar to `rg`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::KeySet;

/// `t('key')` or `t('key', ...)`.
pub const CLOSED_CALL_PATTERN: &str = r#"\bt\(['"]([a-zA-Z][a-zA-Z0-9._-]*)['"][),]"#;

/// `t('key'` with the arguments continuing on the next line.
pub const LINE_END_CALL_PATTERN: &str = r#"\bt\(['"]([a-zA-Z][a-zA-Z0-9._-]*)['"]\r?$"#;

/// Both sub-patterns, in scan order.
pub const KEY_PATTERNS: [&str; 2] = [CLOSED_CALL_PATTERN, LINE_END_CALL_PATTERN];

static KEY_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(CLOSED_CALL_PATTERN).unwrap(),
        // Multi-line mode so `$` matches at every line end, as in `rg`.
        Regex::new(&format!("(?m){}", LINE_END_CALL_PATTERN)).unwrap(),
    ]
});

/// Add every key referenced in `content` to `keys`.
pub fn extract_keys_into(content: &str, keys: &mut KeySet) {
    for regex in KEY_REGEXES.iter() {
        for caps in regex.captures_iter(content) {
            if let Some(key) = caps.get(1) {
                keys.insert(key.as_str().to_string());
            }
        }
    }
}

/// Keys referenced in `content`.
pub fn extract_keys(content: &str) -> KeySet {
    let mut keys = KeySet::new();
    extract_keys_into(content, &mut keys);
    keys
}
