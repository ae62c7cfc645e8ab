// Async HTTP client for a posts collection resource.
//
// Collection: {base}          GET (list), POST (create)
// Item:       {base}/{id}     GET, PUT, PATCH, DELETE

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::ids::{IdGenerator, TimestampIds};
use crate::models::{Post, PostDraft, PostEcho, PostPatch};
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for one JSON collection of posts.
///
/// No retries and no caching: every call is exactly one HTTP exchange.
/// Failures always come back as an [`Error`] value.
pub struct PostsClient {
    http: reqwest::Client,
    base_url: Url,
    ids: Arc<dyn IdGenerator>,
    timeout: Option<Duration>,
}

impl PostsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for the collection at `base_url`
    /// (e.g. `https://jsonplaceholder.typicode.com/posts`).
    ///
    /// Created posts get millisecond-timestamp ids; see
    /// [`with_id_generator`](Self::with_id_generator) to swap that out.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            ids: Arc::new(TimestampIds::new()),
            timeout: Some(transport.timeout),
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            ids: Arc::new(TimestampIds::new()),
            timeout: None,
        })
    }

    /// Replace the id generator used for created posts.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// The collection URL, always with a trailing slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&path);
        url
    }

    fn item_url(&self, id: u64) -> Result<Url, Error> {
        Ok(self.base_url.join(&id.to_string())?)
    }

    // ── Operations ───────────────────────────────────────────────────

    /// `GET {base}`: every post, in server order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        let url = self.collection_url();
        debug!("GET {url}");

        let resp = self.send(self.http.get(url)).await?;
        self.handle_response(resp).await
    }

    /// `GET {base}/{id}`. A 404 or an empty object is [`Error::NotFound`].
    pub async fn get_post(&self, id: u64) -> Result<Post, Error> {
        let url = self.item_url(id)?;
        debug!("GET {url}");

        let resp = self.send(self.http.get(url)).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id });
        }

        let value: serde_json::Value = self.handle_response(resp).await?;
        if value.as_object().is_some_and(serde_json::Map::is_empty) {
            return Err(Error::NotFound { id });
        }
        let body = value.to_string();
        serde_json::from_value(value).map_err(|e| Error::Decode {
            message: e.to_string(),
            body,
        })
    }

    /// `POST {base}`. The echoed id is discarded and a fresh one assigned
    /// from the id generator.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, Error> {
        let url = self.collection_url();
        debug!("POST {url}");

        let resp = self.send(self.http.post(url).json(draft)).await?;
        let echo: PostEcho = self.handle_response(resp).await?;
        let id = self.ids.next_id();
        debug!(echoed = ?echo.id, assigned = id, "assigned id to created post");
        Ok(echo.into_post(id))
    }

    /// `PUT {base}/{id}` with full replacement semantics.
    pub async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, Error> {
        let url = self.item_url(id)?;
        debug!("PUT {url}");

        let resp = self.send(self.http.put(url).json(draft)).await?;
        let echo: PostEcho = self.handle_response(resp).await?;
        Ok(Self::keep_identity(id, echo))
    }

    /// `PATCH {base}/{id}` with only the fields set in `patch`.
    pub async fn patch_post(&self, id: u64, patch: &PostPatch) -> Result<Post, Error> {
        let url = self.item_url(id)?;
        debug!("PATCH {url}");

        let resp = self.send(self.http.patch(url).json(patch)).await?;
        let echo: PostEcho = self.handle_response(resp).await?;
        Ok(Self::keep_identity(id, echo))
    }

    /// `DELETE {base}/{id}`. Success is any 2xx; the body is ignored.
    pub async fn delete_post(&self, id: u64) -> Result<(), Error> {
        let url = self.item_url(id)?;
        debug!("DELETE {url}");

        let resp = self.send(self.http.delete(url)).await?;
        self.handle_empty(resp).await
    }

    // ── Request / response helpers ───────────────────────────────────

    fn keep_identity(id: u64, echo: PostEcho) -> Post {
        if let Some(echoed) = echo.id {
            if echoed != id {
                warn!(requested = id, echoed, "server echoed a different id; keeping requested");
            }
        }
        echo.into_post(id)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        req.send().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.map_or(0, |t| t.as_secs()),
            }
        } else {
            Error::Transport(err)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await.map_err(|e| self.transport_error(e))?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Decode {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Prefer a structured `{ "message" }` / `{ "error" }` payload, then the
    /// raw body, then the status line.
    async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let structured = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.message.or(e.error));

        let message = structured.unwrap_or_else(|| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed == "{}" {
                status.to_string()
            } else {
                trimmed.to_owned()
            }
        });

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> PostsClient {
        PostsClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let c = client("https://example.com/posts");
        assert_eq!(c.base_url().as_str(), "https://example.com/posts/");
    }

    #[test]
    fn collection_url_has_no_trailing_slash() {
        let c = client("https://example.com/posts/");
        assert_eq!(c.collection_url().as_str(), "https://example.com/posts");
    }

    #[test]
    fn item_url_appends_id() {
        let c = client("https://example.com/api/posts");
        assert_eq!(
            c.item_url(12).unwrap().as_str(),
            "https://example.com/api/posts/12"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PostsClient::from_reqwest("not a url", reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
