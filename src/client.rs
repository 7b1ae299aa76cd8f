use anyhow::Context as _;

use crate::data::PlayerConfig;
use crate::matcher::VideoId;
use crate::Error;

const DEFAULT_EP: &str = "https://player.vimeo.com/";

/// Request configuration for the config endpoint.
///
/// There is deliberately no default credential. The endpoint wants a real
/// bearer token and sending a made-up one just turns a configuration
/// mistake into a confusing 401 later, so a blank token is rejected here.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    token: String,
    headers: Vec<(&'static str, String)>,
}

impl RequestOptions {
    pub fn bearer(token: impl ToString) -> Result<Self, Error> {
        let token = token.to_string();
        if token.trim().is_empty() {
            return Err(Error::MissingCredential);
        }

        Ok(Self {
            token,
            headers: vec![("Accept-Encoding", "identity".into())],
        })
    }

    /// Attach an extra header to every request.
    pub fn header(mut self, name: &'static str, value: impl ToString) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

/// Fetches player-config documents.
#[derive(Clone)]
pub struct VimeoClient {
    client: reqwest::Client,
    options: RequestOptions,
    ep: Option<String>,
}

impl VimeoClient {
    pub fn new(options: RequestOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
            ep: None,
        }
    }

    #[cfg(test)]
    pub fn with_ep(options: RequestOptions, ep: impl ToString) -> Self {
        Self {
            ep: Some(ep.to_string()),
            ..Self::new(options)
        }
    }

    /// Single-shot fetch of the config document for `id`.
    ///
    /// No retries. Transport, status, and decode failures all come back as
    /// errors; deciding whether that is fatal is the caller's business.
    pub async fn fetch_config(&self, id: &VideoId) -> anyhow::Result<PlayerConfig> {
        let url = format!(
            "{}video/{}/config",
            self.ep.as_deref().unwrap_or(DEFAULT_EP),
            id
        );

        let mut req = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.options.token));
        for (name, value) in &self.options.headers {
            req = req.header(*name, value.as_str());
        }

        self.client
            .execute(req.build()?)
            .await
            .with_context(|| format!("cannot get url '{}'", url))?
            .error_for_status()
            .with_context(|| format!("cannot get url '{}'", url))?
            .json()
            .await
            .with_context(|| format!("cannot get json for '{}'", url))
    }
}
