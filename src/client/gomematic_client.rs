use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ConnectionTarget;
use crate::constants::API_KEY_HEADER;
use crate::error::{ErrorContext, GomematicError, GomematicResult};
use crate::gomematic_error;
use crate::logging::{log_debug, log_failure, log_request};
use crate::models::*;

/// Typed access to the REST API. One instance per invocation; calls are
/// made one after another.
pub struct GomematicClient {
    client: reqwest::Client,
    target: ConnectionTarget,
}

impl GomematicClient {
    pub fn new(target: ConnectionTarget) -> GomematicResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = target.token() {
            let mut value = HeaderValue::from_str(token)
                .map_err(|_| gomematic_error!(Config, "invalid token format"))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("x-api-key"), value);
            log_debug(&format!("Authenticating through the {} header", API_KEY_HEADER));
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, target })
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> GomematicResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.target.endpoint(segments)?;
        log_request(method.as_str(), url.as_str());

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log_failure(method.as_str(), url.as_str(), &e.to_string());
            GomematicError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let bytes = response.bytes().await?;
        log_failure(
            method.as_str(),
            url.as_str(),
            &format!("{} {}", status, String::from_utf8_lossy(&bytes)),
        );

        Err(error_from_body(status, &bytes))
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> GomematicResult<T> {
        self.execute::<T, ()>(Method::GET, segments, None).await
    }

    async fn send<T, B>(&self, method: Method, segments: &[&str], body: &B) -> GomematicResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(method, segments, Some(body)).await
    }

    // Auth and profile

    pub async fn login(&self, login: &AuthLogin) -> GomematicResult<AuthToken> {
        self.send(Method::POST, &["auth", "login"], login).await
    }

    pub async fn profile_token(&self) -> GomematicResult<AuthToken> {
        self.get(&["profile", "token"]).await
    }

    pub async fn profile_show(&self) -> GomematicResult<Profile> {
        self.get(&["profile", "self"]).await
    }

    pub async fn profile_update(&self, profile: &Profile) -> GomematicResult<Profile> {
        self.send(Method::PUT, &["profile", "self"], profile).await
    }

    // Teams

    pub async fn team_list(&self) -> GomematicResult<Vec<Team>> {
        self.get(&["teams"]).await
    }

    pub async fn team_show(&self, id: &str) -> GomematicResult<Team> {
        self.get(&["teams", id]).await
    }

    pub async fn team_create(&self, team: &Team) -> GomematicResult<Team> {
        self.send(Method::POST, &["teams"], team).await
    }

    pub async fn team_update(&self, id: &str, team: &Team) -> GomematicResult<Team> {
        self.send(Method::PUT, &["teams", id], team).await
    }

    pub async fn team_delete(&self, id: &str) -> GomematicResult<Notice> {
        self.execute::<_, ()>(Method::DELETE, &["teams", id], None).await
    }

    pub async fn team_users(&self, id: &str) -> GomematicResult<Vec<TeamUser>> {
        self.get(&["teams", id, "users"]).await
    }

    pub async fn team_user_append(&self, id: &str, params: &TeamUserParams) -> GomematicResult<Notice> {
        self.send(Method::POST, &["teams", id, "users"], params).await
    }

    pub async fn team_user_perm(&self, id: &str, params: &TeamUserParams) -> GomematicResult<Notice> {
        self.send(Method::PUT, &["teams", id, "users"], params).await
    }

    pub async fn team_user_remove(&self, id: &str, params: &TeamUserParams) -> GomematicResult<Notice> {
        self.send(Method::DELETE, &["teams", id, "users"], params).await
    }

    // Users

    pub async fn user_list(&self) -> GomematicResult<Vec<User>> {
        self.get(&["users"]).await
    }

    pub async fn user_show(&self, id: &str) -> GomematicResult<User> {
        self.get(&["users", id]).await
    }

    pub async fn user_create(&self, user: &User) -> GomematicResult<User> {
        self.send(Method::POST, &["users"], user).await
    }

    pub async fn user_update(&self, id: &str, user: &User) -> GomematicResult<User> {
        self.send(Method::PUT, &["users", id], user).await
    }

    pub async fn user_delete(&self, id: &str) -> GomematicResult<Notice> {
        self.execute::<_, ()>(Method::DELETE, &["users", id], None).await
    }

    pub async fn user_teams(&self, id: &str) -> GomematicResult<Vec<UserTeam>> {
        self.get(&["users", id, "teams"]).await
    }

    pub async fn user_team_append(&self, id: &str, params: &UserTeamParams) -> GomematicResult<Notice> {
        self.send(Method::POST, &["users", id, "teams"], params).await
    }

    pub async fn user_team_perm(&self, id: &str, params: &UserTeamParams) -> GomematicResult<Notice> {
        self.send(Method::PUT, &["users", id, "teams"], params).await
    }

    pub async fn user_team_remove(&self, id: &str, params: &UserTeamParams) -> GomematicResult<Notice> {
        self.send(Method::DELETE, &["users", id, "teams"], params).await
    }
}

/// Turns a non-success response body into the matching error. Bodies that
/// are not an API error payload keep only the status code.
fn error_from_body(status: StatusCode, body: &[u8]) -> GomematicError {
    match serde_json::from_slice::<ApiErrorPayload>(body) {
        Ok(payload) if payload.message.is_some() || payload.errors.is_some() => payload.into(),
        _ => gomematic_error!(Other, "unexpected response status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_with_message() {
        let err = error_from_body(StatusCode::NOT_FOUND, br#"{"status": 404, "message": "team not found"}"#);
        assert_eq!(err.normalize(), "team not found");
    }

    #[test]
    fn test_error_body_with_field_errors() {
        let err = error_from_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"message": "failed to validate team", "errors": [{"field": "slug", "message": "is already taken"}]}"#,
        );
        assert_eq!(
            err.normalize(),
            "failed to validate record:\n\nslug: is already taken"
        );
    }

    #[test]
    fn test_error_body_with_empty_error_list() {
        let err = error_from_body(StatusCode::UNPROCESSABLE_ENTITY, br#"{"errors": []}"#);
        assert_eq!(err.normalize(), "failed to validate record");
    }

    #[test]
    fn test_error_body_not_json() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.normalize(), "unexpected response status 502");

        let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"{}");
        assert_eq!(err.normalize(), "unexpected response status 500");
    }

    #[test]
    fn test_token_must_be_a_header_value() {
        let target = ConnectionTarget::parse("http://localhost:8080", Some("bad\ntoken")).unwrap();
        let err = GomematicClient::new(target).err().unwrap();
        assert_eq!(err.exit_code(), 1);
    }
}
