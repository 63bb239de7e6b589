//! Identifier normalization for generated Rust source.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
        "true", "try", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
    ]
    .into_iter()
    .collect()
});

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(s)
}

/// Turn arbitrary text into a snake_case Rust identifier.
///
/// Camel humps become `_`, everything is lowercased, runs of characters
/// outside `[a-z0-9]` collapse into a single `_`, and leading/trailing `_`
/// are trimmed. A leading digit gets a `_` prefix and keywords get a `_`
/// suffix. Returns an empty string when nothing usable is left.
///
/// The mapping is idempotent: `to_identifier(&to_identifier(s)) == to_identifier(s)`.
pub fn to_identifier(raw: &str) -> String {
    let mut snake = String::with_capacity(raw.len());
    let mut prev: Option<char> = None;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            let hump = ch.is_ascii_uppercase()
                && prev.map_or(false, |p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if hump && !snake.ends_with('_') {
                snake.push('_');
            }
            snake.push(ch.to_ascii_lowercase());
        } else if !snake.ends_with('_') {
            snake.push('_');
        }
        prev = Some(ch);
    }

    let trimmed = snake.trim_matches('_');
    if trimmed.is_empty() {
        return String::new();
    }

    let mut ident = String::with_capacity(trimmed.len() + 2);
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        ident.push('_');
    }
    ident.push_str(trimmed);
    if is_keyword(&ident) {
        ident.push('_');
    }
    ident
}

/// Whether `s` can be used as-is as a Rust identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first_ok = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => false,
    };
    first_ok
        && s != "_"
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_keyword(s)
}
