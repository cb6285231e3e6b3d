//! HTTP client for the remote notes service.
//!
//! [`NotesApi`] is the seam the notes store depends on; [`HttpNotesClient`]
//! implements it over reqwest and also owns the login/register/logout flow
//! that produces the session every notes call needs.

use std::future::Future;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::{validate_login, validate_registration, AuthSession, SessionPersistence};
use crate::config::ServiceConfig;
use crate::models::{Note, NoteDraft, NoteId, NotePatch};
use crate::util::compact_text;
use crate::{Error, Result};

/// Notes operations required by the notes store.
pub trait NotesApi: Send + Sync + 'static {
    fn list_notes(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;
    fn create_note(&self, draft: &NoteDraft) -> impl Future<Output = Result<Note>> + Send;
    fn update_note(
        &self,
        id: NoteId,
        patch: &NotePatch,
    ) -> impl Future<Output = Result<Note>> + Send;
    fn delete_note(&self, id: NoteId) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Clone)]
pub struct HttpNotesClient<S: SessionPersistence> {
    config: ServiceConfig,
    client: Client,
    store: S,
}

impl<S: SessionPersistence> HttpNotesClient<S> {
    pub fn new(config: ServiceConfig, store: S) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            config,
            client,
            store,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Exchange credentials for a session token and persist it.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        validate_login(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let request = self
            .client
            .post(self.config.endpoint("/login"))
            .header(ACCEPT, "application/json")
            .json(&payload);
        // Any rejection of the credentials is an authentication failure.
        let response =
            ensure_status(request.send().await?, |_, message| Error::Auth(message)).await?;
        let body = response.text().await?;
        let login = serde_json::from_str::<LoginResponse>(&body)?;
        let token = login
            .into_token()
            .ok_or_else(|| Error::Auth("Invalid credentials".to_string()))?;

        let session = AuthSession::new(token, Some(email.to_string()));
        self.store.save_session(&session)?;
        tracing::info!("Signed in as {}", email);
        Ok(session)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, email: &str, password: &str) -> Result<()> {
        let (email, password) = validate_registration(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let request = self
            .client
            .post(self.config.endpoint("/register"))
            .header(ACCEPT, "application/json")
            .json(&payload);
        ensure_success(request.send().await?).await?;
        tracing::info!("Registered account {}", email);
        Ok(())
    }

    /// Drop the stored session. The service has no logout endpoint.
    pub fn logout(&self) -> Result<()> {
        self.store.clear_session()?;
        tracing::info!("Cleared stored session");
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<AuthSession>> {
        self.store.load_session()
    }

    async fn send_authorized(&self, request: RequestBuilder) -> Result<Response> {
        let session = self
            .store
            .load_session()?
            .ok_or_else(Error::not_signed_in)?;
        let response = request
            .bearer_auth(&session.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        ensure_success(response).await
    }
}

impl<S: SessionPersistence> NotesApi for HttpNotesClient<S> {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        tracing::debug!("GET /notes");
        let request = self.client.get(self.config.endpoint("/notes"));
        let response = self.send_authorized(request).await?;
        parse_body(response).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        tracing::debug!("POST /notes");
        let request = self.client.post(self.config.endpoint("/notes")).json(draft);
        let response = self.send_authorized(request).await?;
        parse_body(response).await
    }

    async fn update_note(&self, id: NoteId, patch: &NotePatch) -> Result<Note> {
        tracing::debug!("PUT /notes/{}", id);
        let request = self
            .client
            .put(self.config.endpoint(&format!("/notes/{id}")))
            .json(patch);
        let response = self.send_authorized(request).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            // Accepted without echoing the record: the patch is what was stored.
            return Ok(Note {
                id,
                title: patch.title.clone(),
                body: patch.body.clone(),
                completed: patch.completed,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        tracing::debug!("DELETE /notes/{}", id);
        let request = self
            .client
            .delete(self.config.endpoint(&format!("/notes/{id}")));
        self.send_authorized(request).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
    access_token: Option<String>,
}

impl LoginResponse {
    fn into_token(self) -> Option<String> {
        self.token
            .or(self.access_token)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
    msg: Option<String>,
    detail: Option<String>,
}

async fn ensure_success(response: Response) -> Result<Response> {
    ensure_status(response, Error::from_status).await
}

async fn ensure_status(
    response: Response,
    to_error: impl FnOnce(StatusCode, String) -> Error,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("Notes service returned HTTP {}", status.as_u16());
    Err(to_error(status, parse_api_error(status, &body)))
}

/// Decode a JSON body; malformed payloads are serialization errors, not
/// network errors.
async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.error)
            .or(payload.msg)
            .or(payload.detail)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}
