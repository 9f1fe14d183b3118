use reqwest::header::CONTENT_TYPE;

/// Load-check for the image dialog: can `url` actually be fetched as an
/// image? Any transport failure, non-success status or non-image payload
/// answers no; the dialog shows its inline error instead.
pub async fn probe_image(url: &str) -> bool {
    let response = match reqwest::get(url).await {
        Ok(response) => response,
        Err(err) => {
            log::debug!("image probe failed for {url}: {err}");
            return false;
        }
    };
    if !response.status().is_success() {
        return false;
    }
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("image/"))
}
