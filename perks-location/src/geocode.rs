use std::time::Duration;

use serde::Deserialize;

/// Subset of the reverse-geocoding service's response body.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    locality: Option<String>,
    city: Option<String>,
}

/// Resolves coordinates to a human-readable place name.
///
/// Any failure (network, non-2xx, malformed body) falls back to the
/// coordinates formatted to four decimal places; lookups never error.
pub struct ReverseGeocoder {
    client: Option<reqwest::Client>,
    base_url: String,
}

impl ReverseGeocoder {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        // A client that fails to build leaves the geocoder permanently on
        // the coordinate fallback.
        let client = reqwest::Client::builder().timeout(timeout).build().ok();
        Self { client, base_url }
    }

    /// Place name for the coordinates, or `"{lat}, {lon}"` when the
    /// service cannot answer.
    pub async fn locality_name(&self, latitude: f64, longitude: f64) -> String {
        match self.lookup(latitude, longitude).await {
            Some(name) => name,
            None => format!("{latitude:.4}, {longitude:.4}"),
        }
    }

    async fn lookup(&self, latitude: f64, longitude: f64) -> Option<String> {
        let client = self.client.as_ref()?;

        let response = client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await
            .map_err(|e| tracing::debug!("reverse geocode request failed: {e}"))
            .ok()?;

        if !response.status().is_success() {
            tracing::debug!("reverse geocoder returned {}", response.status());
            return None;
        }

        let body: GeocodeResponse = response.json().await.ok()?;
        body.locality
            .or(body.city)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn serve_once(body: &'static str, status_line: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_locality_from_response() {
        let url = serve_once(r#"{"locality":"New Delhi","city":"Delhi"}"#, "HTTP/1.1 200 OK").await;
        let geocoder = ReverseGeocoder::new(url, Duration::from_secs(5));
        assert_eq!(geocoder.locality_name(28.6139, 77.2090).await, "New Delhi");
    }

    #[tokio::test]
    async fn test_city_when_locality_missing() {
        let url = serve_once(r#"{"city":"Mumbai"}"#, "HTTP/1.1 200 OK").await;
        let geocoder = ReverseGeocoder::new(url, Duration::from_secs(5));
        assert_eq!(geocoder.locality_name(19.0760, 72.8777).await, "Mumbai");
    }

    #[tokio::test]
    async fn test_non_2xx_falls_back_to_coordinates() {
        let url = serve_once("{}", "HTTP/1.1 500 Internal Server Error").await;
        let geocoder = ReverseGeocoder::new(url, Duration::from_secs(5));
        assert_eq!(
            geocoder.locality_name(28.6139, 77.2090).await,
            "28.6139, 77.2090"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_coordinates() {
        // Nothing listens on this port.
        let geocoder = ReverseGeocoder::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(500),
        );
        assert_eq!(
            geocoder.locality_name(28.6139, 77.2090).await,
            "28.6139, 77.2090"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back_to_coordinates() {
        let url = serve_once("not json at all", "HTTP/1.1 200 OK").await;
        let geocoder = ReverseGeocoder::new(url, Duration::from_secs(5));
        assert_eq!(
            geocoder.locality_name(12.9716, 77.5946).await,
            "12.9716, 77.5946"
        );
    }
}
