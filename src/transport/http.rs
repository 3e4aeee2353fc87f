//! `reqwest` backed transports.

use crate::endpoint::redact_token;
use crate::error::WeatherFlowError;
use crate::transport::{check_status, BlockingWeatherFlowApi, WeatherFlowApi};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::USER_AGENT;
use serde_json::Value;

/// Async transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpApi {
    pub fn new(client: reqwest::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl WeatherFlowApi for HttpApi {
    async fn request(&self, url: &str) -> Result<Value, WeatherFlowError> {
        let redacted = redact_token(url);
        debug!("GET {}", redacted);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                warn!("Request to {} failed: {}", redacted, e);
                WeatherFlowError::NetworkRequest(redacted.clone(), e)
            })?;

        if let Err(e) = check_status(url, response.status()) {
            warn!("HTTP error for {}: {}", redacted, response.status());
            return Err(e);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WeatherFlowError::JsonDecode(redacted, e.without_url()))
    }
}

/// Blocking transport over a shared [`reqwest::blocking::Client`].
///
/// Must not be driven from inside an async runtime; `reqwest` panics there.
#[derive(Debug, Clone)]
pub struct BlockingHttpApi {
    client: reqwest::blocking::Client,
    user_agent: String,
}

impl BlockingHttpApi {
    pub fn new(client: reqwest::blocking::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

impl BlockingWeatherFlowApi for BlockingHttpApi {
    fn request(&self, url: &str) -> Result<Value, WeatherFlowError> {
        let redacted = redact_token(url);
        debug!("GET {}", redacted);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| {
                let e = e.without_url();
                warn!("Request to {} failed: {}", redacted, e);
                WeatherFlowError::NetworkRequest(redacted.clone(), e)
            })?;

        if let Err(e) = check_status(url, response.status()) {
            warn!("HTTP error for {}: {}", redacted, response.status());
            return Err(e);
        }

        response
            .json::<Value>()
            .map_err(|e| WeatherFlowError::JsonDecode(redacted, e.without_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use crate::endpoint::Endpoint;
    use reqwest::StatusCode;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request on a local port and returns the request head.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/swd/rest", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            head
        });
        (base_url, handle)
    }

    fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    fn station_url(base_url: &str, token: &str) -> String {
        Endpoint::Station { station_id: 42 }
            .url(base_url, token)
            .unwrap()
    }

    fn async_api(user_agent: &str) -> HttpApi {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpApi::new(client, user_agent)
    }

    fn blocking_api(user_agent: &str) -> BlockingHttpApi {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        BlockingHttpApi::new(client, user_agent)
    }

    #[tokio::test]
    async fn test_async_request_sends_user_agent_and_decodes() {
        let (base_url, server) = serve_once("200 OK", r#"{"stations":[],"status":{"status_code":0}}"#);
        let api = async_api(DEFAULT_USER_AGENT);

        let payload = api.request(&station_url(&base_url, "a&b")).await.unwrap();
        assert_eq!(payload["status"]["status_code"], 0);

        let head = server.join().unwrap();
        assert!(head.starts_with("GET /swd/rest/stations/42?token=a%26b HTTP/1.1"));
        assert_eq!(header(&head, "user-agent"), Some(DEFAULT_USER_AGENT));
    }

    #[test]
    fn test_blocking_request_sends_configured_user_agent() {
        let (base_url, server) = serve_once("200 OK", "{}");
        let api = blocking_api("my-dashboard/2.0");

        assert_eq!(api.request(&station_url(&base_url, "abc")).unwrap(), Value::Object(Default::default()));
        let head = server.join().unwrap();
        assert_eq!(header(&head, "user-agent"), Some("my-dashboard/2.0"));
    }

    #[tokio::test]
    async fn test_async_status_errors() {
        let cases: [(&'static str, fn(&WeatherFlowError) -> bool); 5] = [
            ("400 Bad Request", |e| matches!(e, WeatherFlowError::BadRequest { .. })),
            ("401 Unauthorized", |e| matches!(e, WeatherFlowError::Unauthorized { .. })),
            ("404 Not Found", |e| matches!(e, WeatherFlowError::StationNotFound { .. })),
            ("500 Internal Server Error", |e| {
                matches!(e, WeatherFlowError::InternalServerError { .. })
            }),
            ("503 Service Unavailable", |e| {
                matches!(
                    e,
                    WeatherFlowError::HttpStatus {
                        status: StatusCode::SERVICE_UNAVAILABLE,
                        ..
                    }
                )
            }),
        ];
        let api = async_api(DEFAULT_USER_AGENT);

        for (status, expected) in cases {
            let (base_url, server) = serve_once(status, "{}");
            let err = api
                .request(&station_url(&base_url, "secret"))
                .await
                .unwrap_err();
            assert!(expected(&err), "{status} gave {err:?}");
            assert!(!err.to_string().contains("secret"), "{err}");
            server.join().unwrap();
        }
    }

    #[test]
    fn test_blocking_status_errors() {
        let api = blocking_api(DEFAULT_USER_AGENT);

        let (base_url, server) = serve_once("401 Unauthorized", "{}");
        let err = api.request(&station_url(&base_url, "secret")).unwrap_err();
        assert!(matches!(err, WeatherFlowError::Unauthorized { .. }));
        server.join().unwrap();

        let (base_url, server) = serve_once("404 Not Found", "{}");
        let err = api.request(&station_url(&base_url, "secret")).unwrap_err();
        assert!(matches!(err, WeatherFlowError::StationNotFound { .. }));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_async_invalid_json() {
        let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>");
        let err = async_api(DEFAULT_USER_AGENT)
            .request(&station_url(&base_url, "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherFlowError::JsonDecode(ref url, _) if url.ends_with("token=***")));
        server.join().unwrap();
    }

    #[test]
    fn test_blocking_invalid_json() {
        let (base_url, server) = serve_once("200 OK", "not json");
        let err = blocking_api(DEFAULT_USER_AGENT)
            .request(&station_url(&base_url, "secret"))
            .unwrap_err();
        assert!(matches!(err, WeatherFlowError::JsonDecode(..)));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/swd/rest", listener.local_addr().unwrap());
        drop(listener);

        let err = blocking_api(DEFAULT_USER_AGENT)
            .request(&station_url(&base_url, "secret"))
            .unwrap_err();
        assert!(matches!(err, WeatherFlowError::NetworkRequest(..)));
        assert!(!format!("{err:?}").contains("secret"));
    }
}
