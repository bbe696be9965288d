use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
    /// Body size as received, before content decoding.
    pub transfer_size: usize,
}

impl FetchedPage {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn is_https(&self) -> bool {
        self.url.starts_with("https://")
    }
}
