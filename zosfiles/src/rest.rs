//! REST transport seam and the reqwest-backed z/OSMF client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::session::Session;

pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const APPLICATION_JSON: &str = "application/json";
}

/// A single request header. Lists of headers keep their order on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn application_json() -> Self {
        Self::new(headers::CONTENT_TYPE, headers::APPLICATION_JSON)
    }
}

#[derive(Debug, Error)]
pub enum RestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("z/OSMF request failed ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),
}

/// Issues requests against a z/OSMF host.
///
/// Implementations own connection handling, authentication, TLS and timeouts.
/// Any non-success condition must come back as an `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// PUT `payload` to `endpoint` and return the response body as text.
    async fn put_expect_string(
        &self,
        session: &Session,
        endpoint: &str,
        headers: &[Header],
        payload: &str,
    ) -> Result<String, RestError>;
}

pub struct ZosmfRestClient {
    client: reqwest::Client,
    insecure_client: reqwest::Client,
}

impl ZosmfRestClient {
    pub fn new() -> Result<Self, RestError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            insecure_client: reqwest::Client::builder()
                .danger_accept_invalid_certs(true)
                .build()?,
        })
    }

    fn client_for(&self, session: &Session) -> &reqwest::Client {
        if session.reject_unauthorized {
            &self.client
        } else {
            &self.insecure_client
        }
    }

    /// `#` and `?` are legal in z/OS names but would end the URL path.
    pub fn url(session: &Session, endpoint: &str) -> String {
        let path = endpoint
            .trim_start_matches('/')
            .replace('#', "%23")
            .replace('?', "%3F");
        format!("{}/{}", session.base_url(), path)
    }

    fn header_map(headers: &[Header]) -> Result<HeaderMap, RestError> {
        let mut map = HeaderMap::with_capacity(headers.len() + 1);
        // z/OSMF rejects state-changing requests without this header
        map.insert(
            HeaderName::from_static("x-csrf-zosmf-header"),
            HeaderValue::from_static("true"),
        );
        for header in headers {
            let name = HeaderName::from_bytes(header.name.as_bytes())
                .map_err(|_| RestError::InvalidHeader(header.name.clone()))?;
            let value = HeaderValue::from_str(&header.value).map_err(|_| {
                RestError::InvalidHeader(format!("{}: {}", header.name, header.value))
            })?;
            map.append(name, value);
        }
        Ok(map)
    }

    /// Check response status; on error, read body for detail message.
    async fn ensure_ok(resp: reqwest::Response) -> Result<reqwest::Response, RestError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(RestError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Transport for ZosmfRestClient {
    async fn put_expect_string(
        &self,
        session: &Session,
        endpoint: &str,
        headers: &[Header],
        payload: &str,
    ) -> Result<String, RestError> {
        let mut req = self
            .client_for(session)
            .put(Self::url(session, endpoint))
            .headers(Self::header_map(headers)?)
            .body(payload.to_string());
        if let Some(user) = session.user.as_deref() {
            req = req.basic_auth(user, session.password.as_deref());
        }
        let resp = req.send().await?;
        Ok(Self::ensure_ok(resp).await?.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename;
    use crate::session::Protocol;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let session = Session::new("machine", 443);
        assert_eq!(
            ZosmfRestClient::url(&session, "/zosmf/restfiles/ds/USER.AFTER.SET"),
            "https://machine:443/zosmf/restfiles/ds/USER.AFTER.SET"
        );

        let session = session.with_base_path("gateway");
        assert_eq!(
            ZosmfRestClient::url(&session, "/zosmf/restfiles/ds/A(B)"),
            "https://machine:443/gateway/zosmf/restfiles/ds/A(B)"
        );
    }

    #[test]
    fn test_url_escapes_path_terminators() {
        let session = Session::new("machine", 443);
        assert_eq!(
            ZosmfRestClient::url(&session, "/zosmf/restfiles/ds/SYS1.#MACLIB(A?B)"),
            "https://machine:443/zosmf/restfiles/ds/SYS1.%23MACLIB(A%3FB)"
        );
        assert_eq!(
            ZosmfRestClient::url(&session, "/zosmf/restfiles/ds/SYS1.$@X"),
            "https://machine:443/zosmf/restfiles/ds/SYS1.$@X"
        );
    }

    /// Accepts one connection, answers 200 and returns the request head.
    async fn capture_one_request(listener: TcpListener) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        String::from_utf8_lossy(&head).into_owned()
    }

    #[tokio::test]
    async fn test_member_with_hash_reaches_the_wire_intact() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(capture_one_request(listener));

        let session = Session::new("127.0.0.1", port).with_protocol(Protocol::Http);
        let client = ZosmfRestClient::new().unwrap();
        let response = rename::data_set_member(&client, &session, "SYS1.PDS", "OLD", "#NEW")
            .await
            .unwrap();
        assert!(response.success);

        let head = server.await.unwrap();
        let request_line = head.lines().next().unwrap();
        assert_eq!(request_line, "PUT /zosmf/restfiles/ds/SYS1.PDS(%23NEW) HTTP/1.1");
        assert!(head.to_ascii_lowercase().contains("x-csrf-zosmf-header: true"));
    }

    #[test]
    fn test_header_map_keeps_given_headers() {
        let map = ZosmfRestClient::header_map(&[
            Header::application_json(),
            Header::new(headers::CONTENT_LENGTH, "42"),
        ])
        .unwrap();
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("content-length").unwrap(), "42");
        assert_eq!(map.get("x-csrf-zosmf-header").unwrap(), "true");
    }

    #[test]
    fn test_header_map_rejects_bad_name() {
        let err = ZosmfRestClient::header_map(&[Header::new("bad header", "x")]).unwrap_err();
        assert!(matches!(err, RestError::InvalidHeader(_)));
    }

    #[test]
    fn test_status_error_message_carries_body() {
        let err = RestError::Status {
            status: 404,
            body: "data set not found".to_string(),
        };
        assert_eq!(err.to_string(), "z/OSMF request failed (404): data set not found");
    }
}
