//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiToken, Message, ValidationError, validate_and_encode};

const DEFAULT_MESSAGES_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// The `status` value the API reports for an accepted message.
const DELIVERY_ACCEPTED_STATUS: i64 = 1;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: std::fmt::Debug + Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(&'static str, String)>,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(&'static str, String)>,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in params {
                form = form.text(name, value);
            }
            let response = self.client.post(url).multipart(form).send().await?;
            let body = response.text().await?;
            Ok(body)
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushoverClient`].
///
/// This error preserves:
/// - local validation failures (nothing was sent),
/// - transport failures (DNS, TLS, timeouts, etc),
/// - API-level rejection (the response's `status` sentinel is not 1).
pub enum PushoverError {
    /// The message or token failed validation; no request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The endpoint override is not a parseable URL.
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("transport setup error: {0}")]
    TransportInit(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The API processed the request but did not accept the message.
    #[error("message rejected by the API: status {status}")]
    Rejected { status: i64 },
}

#[derive(Debug, Clone)]
/// Builder for [`PushoverClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct PushoverClientBuilder {
    token: ApiToken,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushoverClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the messages endpoint URL.
    ///
    /// The value must be an absolute URL; [`PushoverClientBuilder::build`]
    /// rejects anything `url::Url` cannot parse.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushoverClient`].
    pub fn build(self) -> Result<PushoverClient, PushoverError> {
        if let Err(source) = url::Url::parse(&self.endpoint) {
            return Err(PushoverError::InvalidEndpoint {
                url: self.endpoint,
                source,
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushoverError::TransportInit(Box::new(err)))?;

        Ok(PushoverClient {
            token: self.token,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug, Clone)]
/// High-level Pushover client.
///
/// This type holds the application token and orchestrates message
/// validation, form encoding, and response parsing. By default it posts to
/// `https://api.pushover.net/1/messages.json`.
///
/// A client is immutable once constructed; clone it freely and send from
/// as many tasks as you like.
pub struct PushoverClient {
    token: ApiToken,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl PushoverClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`PushoverClient::builder`].
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            endpoint: DEFAULT_MESSAGES_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ApiToken) -> PushoverClientBuilder {
        PushoverClientBuilder::new(token)
    }

    /// Send one message through Pushover.
    ///
    /// The message is validated and encoded before any network access, so a
    /// [`PushoverError::Validation`] failure means nothing was sent. The
    /// fields go out as one multipart form, token first. Acceptance is
    /// decided solely by the `status` sentinel in the response body: 1 is
    /// success, anything else becomes [`PushoverError::Rejected`] carrying
    /// the reported status. The HTTP status line is not consulted, so an API
    /// rejection delivered with a 4xx response still comes back as
    /// `Rejected` rather than a transport failure.
    pub async fn send(&self, message: &Message) -> Result<(), PushoverError> {
        let form = validate_and_encode(message, &self.token)?;

        let body = self
            .http
            .post_form(&self.endpoint, form.into_pairs())
            .await
            .map_err(PushoverError::Transport)?;

        let parsed = crate::transport::decode_status_json_response(&body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;

        if parsed.status != DELIVERY_ACCEPTED_STATUS {
            return Err(PushoverError::Rejected {
                status: parsed.status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{Message, ValidationError};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_params: Vec<(&'static str, String)>,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_params: Vec::new(),
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Vec<(&'static str, String)>) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_params.clone())
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(&'static str, String)>,
        ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let body = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_params = params;
                    state.response_body.clone()
                };
                Ok(body)
            })
        }
    }

    #[derive(Debug, Clone)]
    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn post_form<'a>(
            &'a self,
            _url: &'a str,
            _params: Vec<(&'static str, String)>,
        ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move { Err("connection refused".into()) })
        }
    }

    fn assert_field(params: &[(&'static str, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| *k == key && v == value),
            "missing field {key}={value}; got: {params:?}"
        );
    }

    fn test_token() -> ApiToken {
        ApiToken::new("azGDORePK8gMaC0QOYAMyEEuzJnyUi").unwrap()
    }

    fn test_message() -> Message {
        Message::new("uQiRzpo4DXghDmr9QzzfQu27cmVRsG", "backup finished")
    }

    fn make_client(transport: impl HttpTransport + 'static) -> PushoverClient {
        PushoverClient {
            token: test_token(),
            endpoint: "https://example.invalid/1/messages.json".to_owned(),
            http: Arc::new(transport),
        }
    }

    #[tokio::test]
    async fn send_posts_token_and_fields_and_accepts_status_one() {
        let transport = FakeTransport::new(
            r#"{"status":1,"request":"647d2300-702c-4b38-8b2f-d56326ae460b"}"#,
        );
        let client = make_client(transport.clone());

        client.send(&test_message()).await.unwrap();

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/1/messages.json"));
        assert_eq!(params[0].0, "token");
        assert_field(&params, "token", "azGDORePK8gMaC0QOYAMyEEuzJnyUi");
        assert_field(&params, "user", "uQiRzpo4DXghDmr9QzzfQu27cmVRsG");
        assert_field(&params, "message", "backup finished");
        assert_field(&params, "priority", "0");
    }

    #[tokio::test]
    async fn send_clamps_emergency_fields_on_the_wire() {
        let transport = FakeTransport::new(r#"{"status":1}"#);
        let client = make_client(transport.clone());

        let message = Message {
            priority: 2,
            retry: 10,
            expire: 999_999,
            ..test_message()
        };
        client.send(&message).await.unwrap();

        let (_, params) = transport.last_request();
        assert_field(&params, "priority", "2");
        assert_field(&params, "retry", "30");
        assert_field(&params, "expire", "86400");
    }

    #[tokio::test]
    async fn send_maps_status_zero_to_rejected() {
        let transport = FakeTransport::new(
            r#"{"user":"invalid","errors":["user identifier is invalid"],"status":0}"#,
        );
        let client = make_client(transport);

        let err = client.send(&test_message()).await.unwrap_err();
        assert!(matches!(err, PushoverError::Rejected { status: 0 }));
    }

    #[tokio::test]
    async fn send_keeps_an_unfamiliar_status_in_the_rejection() {
        let transport = FakeTransport::new(r#"{"status":7}"#);
        let client = make_client(transport);

        let err = client.send(&test_message()).await.unwrap_err();
        assert!(matches!(err, PushoverError::Rejected { status: 7 }));
    }

    #[tokio::test]
    async fn validation_failure_makes_no_request() {
        let transport = FakeTransport::new(r#"{"status":1}"#);
        let client = make_client(transport.clone());

        let err = client.send(&Message::default()).await.unwrap_err();
        assert!(matches!(
            err,
            PushoverError::Validation(ValidationError::BlankRequiredField { field: "user" })
        ));

        let (url, params) = transport.last_request();
        assert_eq!(url, None);
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn send_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new("<html>Bad Gateway</html>");
        let client = make_client(transport);

        let err = client.send(&test_message()).await.unwrap_err();
        assert!(matches!(err, PushoverError::Parse(_)));
    }

    #[tokio::test]
    async fn send_maps_transport_failures() {
        let client = make_client(FailingTransport);

        let err = client.send(&test_message()).await.unwrap_err();
        assert!(matches!(err, PushoverError::Transport(_)));
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let client = PushoverClient::builder(test_token())
            .endpoint("https://example.invalid/1/messages.json")
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/1/messages.json");

        let client = PushoverClient::builder(test_token()).build().unwrap();
        assert_eq!(client.endpoint, DEFAULT_MESSAGES_ENDPOINT);
    }

    #[test]
    fn builder_rejects_an_unparseable_endpoint() {
        let err = PushoverClient::builder(test_token())
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PushoverError::InvalidEndpoint { url, .. } if url == "not a url"
        ));
    }

    #[test]
    fn builder_accepts_timeout_and_user_agent() {
        let client = PushoverClient::builder(test_token())
            .timeout(Duration::from_secs(5))
            .user_agent("pushover-tests/1.0")
            .build();
        assert!(client.is_ok());
    }
}
