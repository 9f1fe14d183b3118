//! Resolver behavior against a scripted HTTP endpoint: success mapping,
//! provider errors, transport errors, and the no-network short-circuit.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pretty_assertions::assert_eq;

use inkdesk_preview::{LinkPreview, PreviewClient};

/// Serve exactly one canned HTTP response on a local port, recording
/// whether anything ever connected.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, Arc<AtomicBool>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let connected = Arc::new(AtomicBool::new(false));

    let flag = connected.clone();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            flag.store(true, Ordering::SeqCst);
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{addr}/preview"), connected)
}

#[tokio::test]
async fn maps_a_success_response() {
    let (endpoint, _) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"status":"success","data":{"title":"Example Site","description":"hello","image":{"url":"https://example.com/og.png"},"url":"https://example.com/"}}"#,
    );

    let preview = PreviewClient::new(endpoint)
        .resolve("https://example.com")
        .await;

    assert_eq!(
        preview,
        LinkPreview {
            title: "Example Site".into(),
            description: "hello".into(),
            image: "https://example.com/og.png".into(),
            resolved_url: "https://example.com/".into(),
        }
    );
}

#[tokio::test]
async fn provider_error_status_yields_empty_preview() {
    let (endpoint, _) = serve_once("HTTP/1.1 200 OK", r#"{"status":"error","data":{}}"#);

    let preview = PreviewClient::new(endpoint)
        .resolve("https://example.com")
        .await;

    assert!(preview.is_empty());
}

#[tokio::test]
async fn http_failure_yields_empty_preview() {
    let (endpoint, _) = serve_once("HTTP/1.1 500 Internal Server Error", "{}");

    let preview = PreviewClient::new(endpoint)
        .resolve("https://example.com")
        .await;

    assert!(preview.is_empty());
}

#[tokio::test]
async fn malformed_payload_yields_empty_preview() {
    let (endpoint, _) = serve_once("HTTP/1.1 200 OK", "this is not json");

    let preview = PreviewClient::new(endpoint)
        .resolve("https://example.com")
        .await;

    assert!(preview.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_yields_empty_preview() {
    // Nothing listens here; the transport error is swallowed.
    let preview = PreviewClient::new("http://127.0.0.1:1/preview")
        .resolve("https://example.com")
        .await;

    assert!(preview.is_empty());
}

#[tokio::test]
async fn implausible_host_short_circuits_without_a_network_call() {
    let (endpoint, connected) = serve_once("HTTP/1.1 200 OK", r#"{"status":"success","data":{}}"#);
    let client = PreviewClient::new(endpoint);

    assert!(client.resolve("https://localhost").await.is_empty());
    assert!(client.resolve("localhost").await.is_empty());
    assert!(client.resolve("").await.is_empty());

    assert!(!connected.load(Ordering::SeqCst), "resolver must not touch the network");
}
