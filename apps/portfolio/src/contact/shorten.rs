/// Appended to a shortened message.
pub const ELLIPSIS: &str = " ...";

/// Shortens `text` to at most `width` characters without splitting a word.
///
/// Text that already fits is returned untouched. Otherwise whitespace is
/// collapsed; if the collapsed text fits it is returned as is. Failing that,
/// whole words are kept while they fit alongside [`ELLIPSIS`], and the
/// ellipsis is appended. If not even the first word fits, only the ellipsis
/// (without its leading space) is returned.
pub fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(ELLIPSIS.chars().count());
    let mut out = String::new();
    let mut used = 0usize;

    for word in collapsed.split(' ') {
        let word_len = word.chars().count();
        let needed = if out.is_empty() { word_len } else { word_len + 1 };
        if used + needed > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        used += needed;
    }

    if out.is_empty() {
        return ELLIPSIS.trim_start().to_string();
    }
    out.push_str(ELLIPSIS);
    out
}
