use apidoc_core::ConversionResult;
use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 120;

/// Windows-safe, deterministic page filename.
///
/// API pages are named after their full `python_api_name`
/// (`qiskit.circuit.QuantumCircuit.md`); other pages become
/// `page-{index}--{short_hash(markdown)}.md`.
pub fn page_filename(result: &ConversionResult, index: usize) -> String {
    match result.api_name().filter(|name| !name.is_empty()) {
        Some(name) => format!("{}.md", sanitize_stem(name)),
        None => format!("page-{index:04}--{}.md", short_hash(&result.markdown)),
    }
}

fn sanitize_stem(input: &str) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_matches(&['_', ' ', '.'][..]);

    let mut stem = String::with_capacity(trimmed.len());
    let mut prev_underscore = false;
    for c in trimmed.chars() {
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        stem.push(c);
    }
    if stem.is_empty() {
        stem.push_str("untitled");
    }
    if stem.len() > MAX_STEM_LEN {
        let mut end = MAX_STEM_LEN;
        while !stem.is_char_boundary(end) {
            end -= 1;
        }
        stem.truncate(end);
    }
    // Windows reserves device names even with an extension (`nul.foo`).
    let head_len = stem.find('.').unwrap_or(stem.len());
    if is_reserved_windows_name(&stem[..head_len]) {
        stem.insert(head_len, '_');
    }
    stem
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
