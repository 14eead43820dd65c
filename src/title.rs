use regex::Regex;
use std::sync::LazyLock;

/// Fallback when nothing in the source looks like a title.
pub const DEFAULT_TITLE: &str = "Streamlit App";

static PAGE_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"page_title\s*=\s*["']([^"']+)["']"#).unwrap());
static ST_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"st\.title\s*\(\s*["']([^"']+)["']"#).unwrap());
// Leading run of decorative symbols (emoji etc.) before the real title.
static DECOR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\w\s]+\s*").unwrap());

/// Guess the app title from `st.set_page_config(page_title=...)` or
/// `st.title(...)`. The page_config form wins regardless of where either
/// appears in the source.
pub fn detect_title_from_code(python_code: &str) -> String {
    if let Some(caps) = PAGE_TITLE_RE.captures(python_code) {
        return caps[1].to_string();
    }

    if let Some(caps) = ST_TITLE_RE.captures(python_code) {
        let raw = &caps[1];
        let stripped = DECOR_PREFIX_RE.replace(raw, "");
        if stripped.is_empty() {
            return raw.to_string();
        }
        return stripped.into_owned();
    }

    DEFAULT_TITLE.to_string()
}
