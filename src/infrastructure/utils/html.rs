use once_cell::sync::Lazy;
use regex::Regex;

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src=['"]([^'"]+)['"]"#).expect("img src pattern is valid")
});

/// Pulls the URL out of the first `<img src="...">` in an HTML
/// fragment. `None` when the fragment carries no usable source.
pub fn extract_img_src(fragment: &str) -> Option<String> {
    IMG_SRC
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|src| src.as_str().to_string())
        .filter(|src| !src.is_empty())
}

/// Escapes untrusted text for interpolation into an HTML document.
pub fn escape_html(text: &str) -> String {
    ammonia::clean_text(text)
}
