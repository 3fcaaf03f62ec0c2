use anyhow::Context;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use tallgrass_protocol::client::{ACTION_PATH, BACKGROUNDS_PATH, START_PATH};
use tallgrass_protocol::{
    ActionBody, ActionRequest, Encounter, Reply, StartBody, StartRequest, parse_action_reply,
    parse_backgrounds, parse_start_reply,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// The authoritative turn resolver.
///
/// Implementations must not retry on their own; a failed call is reported
/// once and the user decides whether to try again.
pub trait Resolver {
    /// Open a session for `encounter`
    async fn start(&self, encounter: &Encounter) -> Result<StartBody, ClientError>;

    /// Resolve one turn (or a run attempt)
    async fn action(&self, action: &ActionRequest) -> Result<ActionBody, ClientError>;

    /// Arena background URLs. Failure is an empty list.
    async fn backgrounds(&self) -> Vec<String>;
}

/// Resolver reached over the game's HTTP API
pub struct HttpResolver {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpResolver {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.cookie {
            let value = HeaderValue::from_str(cookie).context("Invalid session cookie")?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    /// POST a JSON body, returning the status code and raw reply text
    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(u16, String), ClientError> {
        let url = self.config.endpoint(path);
        tracing::debug!(url = %url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(url = %url, status = status.as_u16(), bytes = text.len(), "Reply");
        Ok((status.as_u16(), text))
    }
}

/// Map a parsed reply plus its HTTP status onto the client's error taxonomy
fn settle_reply<T>(
    status: u16,
    reply: Result<Reply<T>, tallgrass_protocol::ProtocolError>,
) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        let error = match reply {
            Ok(Reply::Rejected { error }) => error,
            _ => None,
        };
        return Err(ClientError::Status { status, error });
    }

    match reply? {
        Reply::Accepted(body) => Ok(body),
        Reply::Rejected { error } => Err(ClientError::Rejected { error }),
    }
}

impl Resolver for HttpResolver {
    async fn start(&self, encounter: &Encounter) -> Result<StartBody, ClientError> {
        let (status, text) = self.post(START_PATH, &StartRequest { encounter }).await?;
        settle_reply(status, parse_start_reply(&text))
    }

    async fn action(&self, action: &ActionRequest) -> Result<ActionBody, ClientError> {
        let (status, text) = self.post(ACTION_PATH, action).await?;
        settle_reply(status, parse_action_reply(&text))
    }

    async fn backgrounds(&self) -> Vec<String> {
        let url = self.config.endpoint(BACKGROUNDS_PATH);

        let fetched = async {
            let response = self
                .client
                .get(&url)
                .timeout(self.config.timings.asset_timeout)
                .send()
                .await?
                .error_for_status()?;
            response.text().await
        }
        .await;

        match fetched {
            Ok(text) => parse_backgrounds(&text).results,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Background list unavailable");
                Vec::new()
            }
        }
    }
}
