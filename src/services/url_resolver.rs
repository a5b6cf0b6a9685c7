// Address bar input resolution.
// Turns free text into a destination: a web search for bare words, otherwise
// the text as a URL with an `https://` scheme added when missing.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a query component, matching JavaScript's
/// `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strips whitespace and byte order marks from both ends.
fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Returns true when the trimmed input is treated as a search query:
/// it has no `.` and does not start with `http`.
pub fn is_search_query(input: &str) -> bool {
    let trimmed = trim_input(input);
    !trimmed.contains('.') && !trimmed.starts_with("http")
}

/// Percent-encodes `text` for use as a query parameter value.
pub fn encode_query(text: &str) -> String {
    utf8_percent_encode(text, QUERY_COMPONENT).to_string()
}

/// Resolves address bar text to the URL a tab should load.
///
/// `search_url` is the prefix the encoded query is appended to, for example
/// `https://www.google.com/search?q=`. Inputs that look like hosts but are
/// not, such as `foo.bar baz`, pass through as URLs and fail to load in the view.
pub fn resolve(input: &str, search_url: &str) -> String {
    let trimmed = trim_input(input);
    if is_search_query(trimmed) {
        return format!("{}{}", search_url, encode_query(trimmed));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return format!("https://{}", trimmed);
    }
    trimmed.to_string()
}
