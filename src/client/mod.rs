//! Client layer: signs requests, dispatches them, and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::domain::{
    AccountSid, AppId, AuthToken, Host, Recipient, SendTemplateSms, SendTemplateSmsResponse,
    StatusCode, TemplateId, Timestamp, TimestampZone, ValidationError,
};
use crate::transport::{self, Endpoint, SignatureMaterial};

const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8;";
const JSON_ACCEPT: &str = "application/json;";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    url: Url,
    authorization: String,
    body: Vec<u8>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(request.url)
                .header(AUTHORIZATION, request.authorization)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .header(ACCEPT, JSON_ACCEPT)
                .body(request.body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials issued by the gateway.
///
/// The auth token only feeds the per-request signature; it is never sent as-is.
pub struct Credentials {
    account_sid: AccountSid,
    auth_token: AuthToken,
    app_id: AppId,
}

impl Credentials {
    /// Validate and bundle the account id, auth token, and application id.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
            app_id: AppId::new(app_id)?,
        })
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    fn sign(&self, timestamp: &Timestamp) -> SignatureMaterial {
        transport::sign(&self.account_sid, &self.auth_token, timestamp)
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClient`].
///
/// Every error is terminal for the call that produced it; nothing is retried.
pub enum SmsError {
    /// The request body could not be serialized. No request was sent.
    #[error("encode error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// HTTP client / network failure (DNS, connect, TLS, timeouts, body read).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a status other than `200 OK`.
    #[error("unexpected HTTP status: {status_line}")]
    HttpStatus {
        status: u16,
        status_line: String,
        body: Option<String>,
    },

    /// The response body could not be read as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway accepted the HTTP request but rejected the message.
    #[error("API error: {status_code} {status_text}")]
    Api {
        status_code: StatusCode,
        status_text: String,
    },

    /// The client could not be configured (HTTP client, base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClient`].
///
/// Use this when you need a custom base URL, timeouts, user-agent, clock zone, or a
/// shared `reqwest::Client`.
pub struct SmsClientBuilder {
    host: Host,
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    timestamp_zone: TimestampZone,
    http_client: Option<reqwest::Client>,
}

impl SmsClientBuilder {
    /// Create a builder for `https://{host}` with no timeout/user-agent override.
    pub fn new(host: Host, credentials: Credentials) -> Self {
        Self {
            host,
            credentials,
            base_url: None,
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            timestamp_zone: TimestampZone::default(),
            http_client: None,
        }
    }

    /// Replace `https://{host}` with another scheme/host/port (and optional path prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a timeout for the connect phase only.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Choose the clock used for the signing timestamp.
    pub fn timestamp_zone(mut self, zone: TimestampZone) -> Self {
        self.timestamp_zone = zone;
        self
    }

    /// Reuse an existing `reqwest::Client` (and its connection pool).
    ///
    /// When set, `timeout`, `connect_timeout`, and `user_agent` are ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`SmsClient`].
    pub fn build(self) -> Result<SmsClient, SmsError> {
        let raw_base = self
            .base_url
            .unwrap_or_else(|| format!("https://{}", self.host.as_str()));
        let base_url = Url::parse(&raw_base)
            .map_err(|err| SmsError::Config(format!("invalid base URL {raw_base:?}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SmsError::Config(format!(
                "base URL cannot carry a path: {raw_base}"
            )));
        }

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder
                    .build()
                    .map_err(|err| SmsError::Config(format!("HTTP client: {err}")))?
            }
        };

        Ok(SmsClient {
            config: Arc::new(ClientConfig {
                base_url,
                credentials: self.credentials,
                timestamp_zone: self.timestamp_zone,
            }),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug)]
struct ClientConfig {
    base_url: Url,
    credentials: Credentials,
    timestamp_zone: TimestampZone,
}

#[derive(Clone)]
/// High-level client for the templated SMS gateway.
///
/// Every call takes a fresh timestamp, signs it, and POSTs JSON to
/// `https://{host}/2013-12-26/Accounts/{accountSid}/{endpoint}?sig={signature}`.
/// Clones share configuration and the HTTP connection pool; calls are independent
/// and may run concurrently.
pub struct SmsClient {
    config: Arc<ClientConfig>,
    http: Arc<dyn HttpTransport>,
}

impl SmsClient {
    /// Create a client for `https://{host}` with default HTTP settings.
    ///
    /// Fails only when one of the values is empty or the host is malformed.
    pub fn new(
        host: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Result<Self, SmsError> {
        let host = Host::new(host)?;
        let credentials = Credentials::new(account_sid, auth_token, app_id)?;
        Self::builder(host, credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(host: Host, credentials: Credentials) -> SmsClientBuilder {
        SmsClientBuilder::new(host, credentials)
    }

    /// Credentials this client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.config.credentials
    }

    /// Fetch the account's message templates.
    ///
    /// The body is returned verbatim as text; its schema is left to the caller. Nothing
    /// is decoded beyond UTF-8, so a 200 response whose bytes are not valid UTF-8 is the
    /// one case that fails after a successful exchange.
    ///
    /// Errors:
    /// - [`SmsError::HttpStatus`] for any status other than 200,
    /// - [`SmsError::Transport`] for network failures,
    /// - [`SmsError::Parse`] if the body is not UTF-8.
    pub async fn get_templates(&self) -> Result<String, SmsError> {
        let body = transport::encode_query_templates_body(self.config.credentials.app_id())
            .map_err(SmsError::Encoding)?;
        let raw = self.execute(Endpoint::QuerySmsTemplate, body).await?;
        into_text(raw)
    }

    /// Fetch the sub-accounts registered under the main account.
    ///
    /// The body is returned verbatim as text; its schema is left to the caller.
    ///
    /// Errors are the same as for [`SmsClient::get_templates`], including
    /// [`SmsError::Parse`] for a body that is not UTF-8.
    pub async fn get_sub_accounts(&self) -> Result<String, SmsError> {
        let body = transport::encode_get_sub_accounts_body(self.config.credentials.app_id())
            .map_err(SmsError::Encoding)?;
        let raw = self.execute(Endpoint::GetSubAccounts, body).await?;
        into_text(raw)
    }

    /// Send a templated SMS and return the gateway's acceptance (`statusCode` `000000`
    /// and its `statusMsg`).
    ///
    /// Errors:
    /// - [`SmsError::HttpStatus`] for any status other than 200,
    /// - [`SmsError::Parse`] when the body is not the expected JSON,
    /// - [`SmsError::Api`] when the gateway's `statusCode` is not `000000`.
    pub async fn send_template_sms(
        &self,
        request: SendTemplateSms,
    ) -> Result<SendTemplateSmsResponse, SmsError> {
        let body =
            transport::encode_send_template_sms_body(self.config.credentials.app_id(), &request)
                .map_err(SmsError::Encoding)?;
        let raw = self.execute(Endpoint::TemplateSms, body).await?;

        let parsed = transport::decode_send_template_sms_json_response(&raw)
            .map_err(|err| SmsError::Parse(Box::new(err)))?;
        tracing::trace!(
            template_id = request.template_id().as_str(),
            status_code = parsed.status_code.as_str(),
            "template sms answered"
        );

        if !parsed.is_success() {
            return Err(SmsError::Api {
                status_code: parsed.status_code,
                status_text: parsed.status_text,
            });
        }

        Ok(parsed)
    }

    /// Send template `template_id` to `to`, filling its placeholders with `data` in order.
    ///
    /// `to` is a single number; a `,`-separated list is rejected with
    /// [`ValidationError::InvalidRecipient`] before anything is sent.
    pub async fn send_message<I, S>(
        &self,
        template_id: impl Into<String>,
        to: impl Into<String>,
        data: I,
    ) -> Result<(), SmsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request =
            SendTemplateSms::new(TemplateId::new(template_id)?, Recipient::new(to)?, data);
        self.send_template_sms(request).await.map(drop)
    }

    async fn execute(&self, endpoint: Endpoint, body: Vec<u8>) -> Result<Vec<u8>, SmsError> {
        let credentials = &self.config.credentials;
        let timestamp = Timestamp::now(self.config.timestamp_zone);
        let SignatureMaterial {
            signature,
            authorization,
        } = credentials.sign(&timestamp);

        let url = transport::endpoint_url(
            &self.config.base_url,
            credentials.account_sid(),
            endpoint,
            &signature,
        )
        .map_err(|err| SmsError::Config(err.to_string()))?;

        tracing::debug!(
            endpoint = endpoint.path(),
            url = %transport::redacted(&url),
            body_len = body.len(),
            "dispatching request"
        );

        let response = self
            .http
            .post_json(HttpRequest {
                url,
                authorization,
                body,
            })
            .await
            .map_err(SmsError::Transport)?;

        tracing::debug!(
            endpoint = endpoint.path(),
            status = response.status,
            body_len = response.body.len(),
            "received response"
        );

        if response.status != 200 {
            let body = String::from_utf8_lossy(&response.body);
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.into_owned())
            };
            return Err(SmsError::HttpStatus {
                status: response.status,
                status_line: status_line(response.status),
                body,
            });
        }

        Ok(response.body)
    }
}

fn status_line(status: u16) -> String {
    match reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

fn into_text(raw: Vec<u8>) -> Result<String, SmsError> {
    String::from_utf8(raw).map_err(|err| SmsError::Parse(Box::new(err)))
}
