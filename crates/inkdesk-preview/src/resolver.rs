use serde::Deserialize;
use thiserror::Error;

use crate::url::host_of;

/// Best-effort metadata for a link. Fields the provider did not resolve
/// are empty strings; nothing here may be trusted to be non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub resolved_url: String,
}

impl LinkPreview {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image.is_empty()
            && self.resolved_url.is_empty()
    }
}

/// Wire shape of the metadata provider:
/// `{status: "success"|"error", data: {title?, description?, image: {url?}, url?}}`.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: ProviderData,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<ProviderImage>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderImage {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Error)]
enum ResolveError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider responded {0}")]
    Status(reqwest::StatusCode),
    #[error("provider reported an error status")]
    Provider,
}

/// A URL only earns a network round trip if it parses and its host looks
/// like a registrable name (contains a dot). Everything else short-circuits
/// to an empty preview.
pub fn has_plausible_host(url: &str) -> bool {
    host_of(url).is_some_and(|host| host.contains('.'))
}

/// Client for the third-party metadata-resolution endpoint. No caching and
/// no retry: every popup instance issues its own request.
#[derive(Debug, Clone)]
pub struct PreviewClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PreviewClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve `url` into displayable metadata. Infallible by contract:
    /// implausible hosts, transport failures, non-success responses and
    /// malformed payloads all collapse to the all-empty preview.
    pub async fn resolve(&self, url: &str) -> LinkPreview {
        if !has_plausible_host(url) {
            log::debug!("skipping preview fetch for implausible url {url:?}");
            return LinkPreview::default();
        }
        match self.try_resolve(url).await {
            Ok(preview) => preview,
            Err(err) => {
                log::debug!("link preview failed for {url}: {err}");
                LinkPreview::default()
            }
        }
    }

    async fn try_resolve(&self, url: &str) -> Result<LinkPreview, ResolveError> {
        let request_url = format!("{}?url={}", self.endpoint, urlencoding::encode(url));
        let response = self.http.get(&request_url).send().await?;
        if !response.status().is_success() {
            return Err(ResolveError::Status(response.status()));
        }
        let payload: ProviderResponse = response.json().await?;
        map_response(payload).ok_or(ResolveError::Provider)
    }
}

fn map_response(response: ProviderResponse) -> Option<LinkPreview> {
    if response.status != "success" {
        return None;
    }
    let data = response.data;
    Some(LinkPreview {
        title: data.title.unwrap_or_default(),
        description: data.description.unwrap_or_default(),
        image: data.image.and_then(|image| image.url).unwrap_or_default(),
        resolved_url: data.url.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> ProviderResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_payload_maps_with_empty_fallbacks() {
        let preview = map_response(parse(
            r#"{"status":"success","data":{"title":"Example","image":{"url":"https://example.com/og.png"}}}"#,
        ))
        .unwrap();
        assert_eq!(preview.title, "Example");
        assert_eq!(preview.description, "");
        assert_eq!(preview.image, "https://example.com/og.png");
        assert_eq!(preview.resolved_url, "");
    }

    #[test]
    fn error_status_maps_to_none() {
        assert_eq!(map_response(parse(r#"{"status":"error","data":{}}"#)), None);
        assert_eq!(map_response(parse(r#"{"data":{"title":"x"}}"#)), None);
    }

    #[test]
    fn success_without_data_is_an_empty_preview() {
        let preview = map_response(parse(r#"{"status":"success"}"#)).unwrap();
        assert!(preview.is_empty());
    }

    #[test]
    fn plausible_host_requires_a_dot() {
        assert!(has_plausible_host("https://example.com"));
        assert!(!has_plausible_host("https://localhost"));
        assert!(!has_plausible_host("localhost"));
        assert!(!has_plausible_host(""));
    }
}
