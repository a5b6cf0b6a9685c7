use rstest::rstest;
use tabshell::services::url_resolver::{is_search_query, resolve};
use tabshell::types::settings::DEFAULT_SEARCH_URL;

#[rstest]
#[case("openai", "https://www.google.com/search?q=openai")]
#[case("example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/x", "https://example.com/x")]
#[case("  example.com  ", "https://example.com")]
#[case("rust borrow checker", "https://www.google.com/search?q=rust%20borrow%20checker")]
#[case("c++", "https://www.google.com/search?q=c%2B%2B")]
#[case("localhost", "https://www.google.com/search?q=localhost")]
#[case("localhost:8080/app", "https://www.google.com/search?q=localhost%3A8080%2Fapp")]
#[case("what is 1.5 kg", "https://what is 1.5 kg")]
#[case("", "https://www.google.com/search?q=")]
#[case("\u{feff}weather", "https://www.google.com/search?q=weather")]
fn test_resolve(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolve(input, DEFAULT_SEARCH_URL), expected);
}

#[rstest]
#[case("weather", true)]
#[case("docs.rs", false)]
#[case("https", false)]
#[case("ftp://files", true)]
fn test_is_search_query(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_search_query(input), expected);
}

#[test]
fn test_custom_search_prefix() {
    assert_eq!(
        resolve("tokio", "https://duckduckgo.com/?q="),
        "https://duckduckgo.com/?q=tokio"
    );
}
