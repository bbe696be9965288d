use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("static regex")
});

/// Prepends `https://` when the URL carries no scheme.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

pub fn validate_url(url: &str) -> bool {
    let normalized = normalize_url(url);

    let parsed = match Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host_str() {
        Some(host) => DOMAIN_REGEX.is_match(host),
        None => false,
    }
}

/// A bare `scheme://host[:port]` origin, as CORS expects it.
pub fn is_valid_origin(origin: &str) -> bool {
    match Url::parse(origin) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some()
                && parsed.origin().ascii_serialization() == origin
        }
        Err(_) => false,
    }
}
