use regex::Regex;
use std::sync::LazyLock;

/// Separator characters that may dangle after a marker is removed.
const TRAILING_SEPARATORS: &[char] = &['_', '-', ' '];

/// Independent end-anchored recognizers for iteration markers, one per
/// marker family. Each is tried against the tail of the base name and the
/// one stripping the longest suffix wins, so precedence never depends on
/// alternation order inside a single pattern.
static MARKER_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // copy markers: "- 副本", "_副本", "(副本)", "（副本）"
        r"[-_]\s*副本$",
        r"[（(]副本[）)]$",
        // ASCII copy markers: " - copy", "_Copy", "(copy)"
        r"(?i)[-_]\s*copy$",
        r"(?i)[（(]copy[）)]$",
        // parenthesized duplicate number: "(3)", "（12）"
        r"[（(][0-9]+[）)]$",
        // version tag, separator optional: "_v2", "-Ver10", "V3"
        r"(?i)[-_]?v(?:er)?[0-9]+$",
        // separator followed by bare digits: "_12", "-3"
        r"[-_][0-9]+$",
        // bare trailing digit run: "report5"
        r"[0-9]+$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("marker pattern is valid"))
    .collect()
});

/// Map a filename to its series key.
///
/// The extension is dropped, then recognized iteration markers are stripped
/// from the tail until none remains, so the returned key is a fixed point:
/// normalizing an already-normalized name is a no-op. A stripping step that
/// would leave an empty key is discarded, keeping the last non-empty value
/// (a name that is nothing but a marker, like "(3)", keys as itself).
pub fn normalize(file_name: &str) -> String {
    let mut key = strip_extension(file_name);
    while let Some(start) = marker_start(key) {
        let stripped = key[..start].trim_end_matches(TRAILING_SEPARATORS);
        if stripped.trim().is_empty() {
            break;
        }
        key = stripped;
    }
    key.to_string()
}

/// Start offset of the longest marker suffix, if any recognizer matches.
fn marker_start(base: &str) -> Option<usize> {
    MARKER_RULES
        .iter()
        .filter_map(|rule| rule.find(base).map(|m| m.start()))
        .min()
}

/// Drop the text after the final `.`. A leading dot is not an extension
/// separator, so dotfiles like ".bashrc" pass through whole.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
