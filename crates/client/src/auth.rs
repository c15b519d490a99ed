// Authentication operations

use serde_json::json;

use crate::error::Result;
use crate::models::{ApiResponse, LoginData, User};
use crate::ApiClient;

impl ApiClient {
    /// POST `/api/auth/login` with a JSON credential pair.
    ///
    /// Persisting the returned identity (and token, when present) into the
    /// session store is the caller's responsibility; this call itself goes
    /// out with whatever token was already cached.
    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse<LoginData>> {
        let body = json!({ "username": username, "password": password });
        self.send(self.http.post(self.url("/api/auth/login")).json(&body))
            .await
    }

    /// POST `/api/auth/register`. The backend takes this one as
    /// form-urlencoded rather than JSON.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<ApiResponse<User>> {
        let form = [
            ("username", username),
            ("password", password),
            ("email", email),
        ];
        self.send(self.http.post(self.url("/api/auth/register")).form(&form))
            .await
    }

    /// GET `/api/auth/user/{userId}`
    pub async fn current_user(&self, user_id: i64) -> Result<ApiResponse<User>> {
        self.send(self.http.get(self.url(&format!("/api/auth/user/{}", user_id))))
            .await
    }
}
