use std::collections::HashMap;

use crate::{
    ShoeId, UserId, requests,
    responses::{
        self, AnnualSales, DashboardSummary, Envelope, MonthlySales,
        SalePage, ShoePage, SuccessMessage, UserPage,
    },
};
use reqwest::StatusCode;
use serde::Serialize;

/// Page size used by every list endpoint.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// An API client for interfacing with the FAN-STOCK backend.
///
/// The credential token is attached as an `Authorization: Bearer` header on
/// every authenticated call. A client without a token refuses authenticated
/// calls before any network traffic happens.
pub struct ApiClient {
    pub address: String,
    pub token: Option<String>,
    pub inner_client: reqwest::Client,
}

/// Query parameters for list endpoints: page, fixed limit, an optional
/// search term, and an arbitrary filter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            search: None,
            filters: Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn page(page: u32) -> Self {
        Self { page: page.max(1), ..Self::default() }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_filters(mut self, filters: Vec<(String, String)>) -> Self {
        self.filters = filters;
        self
    }

    /// Renders the query as key/value pairs. The search term is trimmed
    /// and dropped entirely when blank; filters pass through untouched.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                pairs.push(("search".to_string(), trimmed.to_string()));
            }
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Helper methods for http actions
impl ApiClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    /// Returns the credential token, or `MissingCredential` so callers can
    /// short-circuit without issuing a network call.
    pub fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::MissingCredential)
    }

    async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        Ok(request.send().await?)
    }

    async fn authed_get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request = self
            .inner_client
            .get(self.format_url(path))
            .bearer_auth(token)
            .query(query);
        Ok(request.send().await?)
    }

    async fn authed_post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request = self
            .inner_client
            .post(self.format_url(path))
            .bearer_auth(token)
            .json(body);
        Ok(request.send().await?)
    }

    async fn authed_empty_post(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request =
            self.inner_client.post(self.format_url(path)).bearer_auth(token);
        Ok(request.send().await?)
    }

    async fn authed_put(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request = self
            .inner_client
            .put(self.format_url(path))
            .bearer_auth(token)
            .json(body);
        Ok(request.send().await?)
    }

    async fn authed_patch(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request = self
            .inner_client
            .patch(self.format_url(path))
            .bearer_auth(token)
            .json(body);
        Ok(request.send().await?)
    }

    async fn authed_delete(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.bearer()?;
        let request = self
            .inner_client
            .delete(self.format_url(path))
            .bearer_auth(token);
        Ok(request.send().await?)
    }
}

/// Methods on the backend API
impl ApiClient {
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<Envelope<responses::AuthSession>, ClientError> {
        let response = self.post("login", details).await?;
        ok_envelope(response).await
    }

    pub async fn signup(
        &self,
        details: &requests::Signup,
    ) -> Result<Envelope<SuccessMessage>, ClientError> {
        let response = self.post("signup", details).await?;
        ok_envelope(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.authed_empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Exchange the current token for a fresh one.
    pub async fn refresh(
        &self,
    ) -> Result<Envelope<responses::AuthSession>, ClientError> {
        let response = self.authed_empty_post("refresh").await?;
        ok_envelope(response).await
    }

    /// Request a password reset email. The only submission that does not
    /// require a credential.
    pub async fn forgot_password(
        &self,
        details: &requests::ForgotPassword,
    ) -> Result<Envelope<SuccessMessage>, ClientError> {
        let response = self.post("forgot-password", details).await?;
        ok_envelope(response).await
    }

    pub async fn list_users(
        &self,
        query: &ListQuery,
    ) -> Result<UserPage, ClientError> {
        let response = self.authed_get("users", &query.to_pairs()).await?;
        ok_data(response).await
    }

    pub async fn get_user(
        &self,
        user_id: &UserId,
    ) -> Result<responses::UserProfile, ClientError> {
        let response =
            self.authed_get(&format!("user/{user_id}"), &[]).await?;
        ok_data(response).await
    }

    pub async fn update_user(
        &self,
        details: &requests::UpdateUser,
    ) -> Result<Envelope<responses::UserProfile>, ClientError> {
        let response = self
            .authed_put(&format!("update-user/{}", details.user_id), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn update_display_status(
        &self,
        details: &requests::UpdateDisplayStatus,
    ) -> Result<Envelope<responses::UserProfile>, ClientError> {
        let response = self
            .authed_patch(
                &format!("user/{}/display-status", details.user_id),
                details,
            )
            .await?;
        ok_envelope(response).await
    }

    pub async fn list_shoes(
        &self,
        query: &ListQuery,
    ) -> Result<ShoePage, ClientError> {
        let response = self.authed_get("shoes", &query.to_pairs()).await?;
        ok_data(response).await
    }

    pub async fn get_shoe(
        &self,
        shoe_id: &ShoeId,
    ) -> Result<responses::Shoe, ClientError> {
        let response =
            self.authed_get(&format!("shoes/{shoe_id}"), &[]).await?;
        ok_data(response).await
    }

    pub async fn create_shoe(
        &self,
        details: &requests::CreateShoe,
    ) -> Result<Envelope<responses::Shoe>, ClientError> {
        let response = self.authed_post("shoes", details).await?;
        ok_envelope(response).await
    }

    pub async fn update_shoe(
        &self,
        details: &requests::UpdateShoe,
    ) -> Result<Envelope<responses::Shoe>, ClientError> {
        let response = self
            .authed_put(&format!("shoes/{}", details.shoe_id), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn delete_shoe(
        &self,
        shoe_id: &ShoeId,
    ) -> Result<Envelope<SuccessMessage>, ClientError> {
        let response = self.authed_delete(&format!("shoes/{shoe_id}")).await?;
        ok_envelope(response).await
    }

    /// Update the stocked quantity of one size of a shoe.
    pub async fn update_size_stock(
        &self,
        details: &requests::UpdateSizeStock,
    ) -> Result<Envelope<responses::Shoe>, ClientError> {
        let response = self
            .authed_patch(&format!("shoes/{}/size", details.shoe_id), details)
            .await?;
        ok_envelope(response).await
    }

    pub async fn list_sales(
        &self,
        query: &ListQuery,
    ) -> Result<SalePage, ClientError> {
        let response = self.authed_get("sales", &query.to_pairs()).await?;
        ok_data(response).await
    }

    pub async fn monthly_sales(
        &self,
        year: i16,
        month: i8,
    ) -> Result<MonthlySales, ClientError> {
        let query = [
            ("year".to_string(), year.to_string()),
            ("month".to_string(), month.to_string()),
        ];
        let response = self.authed_get("sales/monthly", &query).await?;
        ok_data(response).await
    }

    pub async fn annual_sales(
        &self,
        year: i16,
    ) -> Result<AnnualSales, ClientError> {
        let query = [("year".to_string(), year.to_string())];
        let response = self.authed_get("sales/annual", &query).await?;
        ok_data(response).await
    }

    pub async fn dashboard_summary(
        &self,
    ) -> Result<DashboardSummary, ClientError> {
        let response = self.authed_get("sales/summary", &[]).await?;
        ok_data(response).await
    }
}

/// Structured body of a failed response. Servers are inconsistent about
/// which of `message`/`error` they fill in; `errors` carries field-level
/// validation messages on a 400.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

impl ErrorBody {
    /// Parses a response body, falling back to the raw text as the message
    /// when it is not the structured JSON shape.
    pub fn from_text(text: &str) -> Self {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
            return body;
        }
        let trimmed = text.trim();
        Self {
            message: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..Self::default()
        }
    }

    pub fn primary_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A response outside [200, 300), with whatever body the server sent.
    #[error("{}", .body.primary_message().unwrap_or("Request failed"))]
    Api { status: StatusCode, body: ErrorBody },
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// A success status whose body did not decode as the expected
    /// envelope; carries the decoder's description.
    #[error("Received an unexpected response from the server.")]
    Decode(String),
    /// No stored credential; detected before any network call.
    #[error("Authentication required. Please login.")]
    MissingCredential,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Deserialize a successful response envelope and hand back its `data`
/// field verbatim, or return an appropriate error.
pub async fn ok_data<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    Ok(ok_envelope(response).await?.data)
}

/// Deserialize the full envelope, keeping the server's `message` for
/// success notifications.
pub async fn ok_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status,
            body: ErrorBody::from_text(&response.text().await?),
        });
    }
    // A 2xx with a malformed body is a decode failure, not a network one.
    response.json::<Envelope<T>>().await.map_err(|error| {
        if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Network(error)
        }
    })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status,
            body: ErrorBody::from_text(&response.text().await?),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient {
            address: "http://localhost:8000".to_string(),
            token: token.map(String::from),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn format_url_concatenates_base_and_path() {
        let client = client(None);
        assert_eq!(
            client.format_url("sales/summary"),
            "http://localhost:8000/api/sales/summary"
        );
    }

    #[test]
    fn missing_token_short_circuits_before_any_network_call() {
        let client = client(None);
        assert!(matches!(
            client.bearer(),
            Err(ClientError::MissingCredential)
        ));

        // Every authenticated verb refuses before building a request.
        let result =
            futures::executor::block_on(client.authed_get("shoes", &[]));
        assert!(matches!(result, Err(ClientError::MissingCredential)));
    }

    #[test]
    fn present_token_is_exposed() {
        let client = client(Some("tok-123"));
        assert_eq!(client.bearer().unwrap(), "tok-123");
    }

    #[test]
    fn list_query_includes_search_and_filters() {
        let query = ListQuery::page(3)
            .with_search("nike")
            .with_filters(vec![("status".into(), "low".into())]);
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("page".into(), "3".into())));
        assert!(pairs.contains(&("limit".into(), "10".into())));
        assert!(pairs.contains(&("search".into(), "nike".into())));
        assert!(pairs.contains(&("status".into(), "low".into())));
    }

    #[test]
    fn list_query_trims_and_drops_blank_search() {
        let pairs = ListQuery::page(1).with_search("  nike ").to_pairs();
        assert!(pairs.contains(&("search".into(), "nike".into())));

        let pairs = ListQuery::page(1).with_search("   ").to_pairs();
        assert!(!pairs.iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn list_query_clamps_page_to_one() {
        assert_eq!(ListQuery::page(0).page, 1);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let response = reqwest::Response::from(
            http::Response::builder()
                .status(200)
                .body("not an envelope")
                .unwrap(),
        );
        let result = futures::executor::block_on(ok_envelope::<
            SuccessMessage,
        >(response));
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn error_body_parses_structured_json() {
        let body = ErrorBody::from_text(
            r#"{"message": "Invalid shoe", "errors": {"name": "Name is required"}}"#,
        );
        assert_eq!(body.primary_message(), Some("Invalid shoe"));
        assert_eq!(
            body.errors.unwrap().get("name").map(String::as_str),
            Some("Name is required")
        );
    }

    #[test]
    fn error_body_falls_back_to_raw_text() {
        let body = ErrorBody::from_text("upstream exploded");
        assert_eq!(body.primary_message(), Some("upstream exploded"));
        assert!(body.errors.is_none());

        let empty = ErrorBody::from_text("   ");
        assert_eq!(empty.primary_message(), None);
    }

    #[test]
    fn error_body_prefers_message_over_error() {
        let body = ErrorBody::from_text(
            r#"{"message": "from message", "error": "from error"}"#,
        );
        assert_eq!(body.primary_message(), Some("from message"));

        let body = ErrorBody::from_text(r#"{"error": "from error"}"#);
        assert_eq!(body.primary_message(), Some("from error"));
    }
}
