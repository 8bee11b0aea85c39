use url::Url;

/// Trim the input and prefix `https://` unless it already starts with
/// `http://` or `https://`.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// `/robots.txt` at the origin of `page_url`, if the URL parses.
pub fn robots_txt_url(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    parsed.join("/robots.txt").ok().map(String::from)
}

/// Host plus explicit port, e.g. `example.com:8443`.
pub fn host_label(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// File name of the persisted JSON report for `page_url`.
///
/// Dots in the host become underscores; unparseable URLs map to `unknown`.
pub fn report_file_name(page_url: &str) -> String {
    let host = host_label(page_url).unwrap_or_else(|| "unknown".to_string());
    format!("ai_visibility_report_{}.json", host.replace('.', "_"))
}
