//! Outbound text normalization.
//!
//! DESIGN
//! ======
//! Only the payload sent to the chat endpoint is normalized. The message shown
//! in the conversation keeps the user's text exactly as typed.
//!
//! The word class is ASCII (`[A-Za-z0-9_]`), so accented letters and `ñ` are
//! dropped: "¿Cómo estás?" goes out as "cmo ests". The chat backend applies the
//! same fold to its intent patterns before training.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

/// Normalize user text before it goes on the wire.
///
/// Lower-cases, drops everything that is not an ASCII word character
/// (`A-Z`, `a-z`, `0-9`, `_`) or whitespace, collapses whitespace runs to a
/// single space, and trims both ends. Applying it twice yields the same string.
pub fn normalize_outbound(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if is_space(ch) {
            pending_space = true;
            continue;
        }
        if !is_word_char(ch) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }

    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Browser whitespace class: Unicode `White_Space` minus NEL, plus the BOM.
fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{0085}') || ch == '\u{feff}'
}
