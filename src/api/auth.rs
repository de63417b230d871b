use super::ApiClient;
use crate::common::ApiError;
use crate::types::*;

impl ApiClient {
    /// Exchanges credentials for a token. Does not touch the session store;
    /// the caller decides whether to persist the result.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let path = "/auth/login";
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send(path, self.http.post(self.url(path)).json(&body))
            .await
    }

    pub async fn signup(&self, username: &str, password: &str) -> Result<SignupResponse, ApiError> {
        let path = "/auth/signup";
        let body = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send(path, self.http.post(self.url(path)).json(&body))
            .await
    }

    /// Checks the stored token against the API.
    pub async fn validate_token(&self) -> Result<TokenValidation, ApiError> {
        let path = "/auth/validate";
        self.send(path, self.http.get(self.url(path))).await
    }
}
