use std::collections::HashMap;
use std::io::Read;
use std::time::Duration;
use flate2::read::{GzDecoder, ZlibDecoder};
use reqwest::header::ACCEPT_ENCODING;
use reqwest::Client;
use crate::errors::{SitelyzerError, SitelyzerResult};
use crate::structs::config::fetch_config::FetchConfig;
use crate::structs::fetched_page::FetchedPage;

/// Only encodings `decode_body` can undo.
const ACCEPTED_ENCODINGS: &str = "gzip, deflate";

/// Fetches pages without transparent decompression, so `content-encoding`
/// stays visible to the analyzers.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> SitelyzerResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SitelyzerError::system_error("build HTTP client", &e.to_string()))?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> SitelyzerResult<FetchedPage> {
        let response = self.client
            .get(url)
            .header(ACCEPT_ENCODING, ACCEPTED_ENCODINGS)
            .send()
            .await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let raw = response.bytes().await?;

        let body = decode_body(headers.get("content-encoding").map(String::as_str), &raw)
            .map_err(|e| SitelyzerError::NetworkError {
                operation: "decode response body".to_string(),
                url: Some(final_url.clone()),
                status_code: Some(status),
                reason: e.to_string(),
            })?;

        log::debug!("Fetched {} ({} bytes on the wire, {} decoded, HTTP {})", final_url, raw.len(), body.len(), status);

        Ok(FetchedPage {
            url: final_url,
            status,
            headers,
            body,
            transfer_size: raw.len(),
        })
    }
}

/// Undoes gzip or deflate; anything else is read as-is.
pub fn decode_body(encoding: Option<&str>, raw: &[u8]) -> std::io::Result<String> {
    let mut decoded = Vec::new();
    match encoding.map(|e| e.trim().to_ascii_lowercase()).as_deref() {
        Some("gzip") | Some("x-gzip") => {
            GzDecoder::new(raw).read_to_end(&mut decoded)?;
        }
        Some("deflate") => {
            ZlibDecoder::new(raw).read_to_end(&mut decoded)?;
        }
        _ => decoded.extend_from_slice(raw),
    }
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}
