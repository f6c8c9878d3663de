use crate::{AuthResponse, ClientResult, SessionClient, UserProfile};

use log::{debug, info, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const LOGIN_PATH: &str = "/api/auth/local/callback";
const REGISTER_PATH: &str = "/api/auth/local/register";
const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
const CURRENT_USER_PATH: &str = "/api/users/me";

impl SessionClient {
    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with an identifier (username or email) and password.
    ///
    /// On success the credential and profile are stored together. On any
    /// failure the store is left as it was.
    pub async fn login(&self, identifier: &str, password: &str) -> ClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            identifier: &'a str,
            password: &'a str,
        }

        debug!("Attempting login for {identifier}");

        let body = LoginRequest {
            identifier,
            password,
        };
        let req = self
            .request(&self.http, Method::POST, LOGIN_PATH, &self.fallback_credential)
            .json(&body);

        let value = self
            .execute(req)
            .await
            .inspect_err(|e| warn!("Login failed: {e}"))?;

        let auth = self.accept_auth_response(value)?;
        info!("Logged in as {}", auth.user.username);
        Ok(auth)
    }

    /// Register a new account.
    ///
    /// Tries the primary transport first. Only when that fails without an
    /// HTTP response is the identical request sent once more over the
    /// secondary transport; HTTP error statuses are returned as-is.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            username: &'a str,
            email: &'a str,
            password: &'a str,
        }

        debug!("Attempting registration for {username} <{email}>");

        let body = RegisterRequest {
            username,
            email,
            password,
        };
        let primary = self
            .request(
                &self.http,
                Method::POST,
                REGISTER_PATH,
                &self.fallback_credential,
            )
            .json(&body);

        let value = match self.execute(primary).await {
            Err(err) if err.is_transport() => {
                warn!("Registration request failed in transport ({err}), retrying on secondary path");
                let secondary = self
                    .request(
                        &self.secondary_http,
                        Method::POST,
                        REGISTER_PATH,
                        &self.fallback_credential,
                    )
                    .json(&body);
                self.execute(secondary)
                    .await
                    .inspect_err(|e| warn!("Registration failed on secondary path: {e}"))?
            }
            result => result.inspect_err(|e| warn!("Registration failed: {e}"))?,
        };

        let auth = self.accept_auth_response(value)?;
        info!("Registered and logged in as {}", auth.user.username);
        Ok(auth)
    }

    /// Ask the backend to send a password reset email.
    /// Returns the backend's response body unchanged.
    pub async fn forgot_password(&self, email: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct ForgotPasswordRequest<'a> {
            email: &'a str,
        }

        debug!("Requesting password reset for {email}");

        let body = ForgotPasswordRequest { email };
        let req = self
            .request(
                &self.http,
                Method::POST,
                FORGOT_PASSWORD_PATH,
                &self.fallback_credential,
            )
            .json(&body);

        self.execute(req)
            .await
            .inspect_err(|e| warn!("Password reset request failed: {e}"))
    }

    // =========================================================================
    // Token checks
    // =========================================================================

    /// Fetch the remote user record for a credential.
    ///
    /// Credential resolution: explicit argument, else the stored credential,
    /// else the fallback credential. Empty strings are skipped.
    pub async fn verify_token(&self, token: Option<&str>) -> ClientResult<Value> {
        let credential = self.resolve_credential(token);
        let req = self.request(&self.http, Method::GET, CURRENT_USER_PATH, &credential);
        self.execute(req).await
    }

    /// Whether the backend accepts the resolved credential. Never fails;
    /// every error reads as `false`. Session state is not touched.
    pub async fn test_token(&self, token: Option<&str>) -> bool {
        match self.verify_token(token).await {
            Ok(_) => {
                info!("Token is valid");
                true
            }
            Err(e) => {
                warn!("Token check failed: {e}");
                false
            }
        }
    }

    /// Session check for protected views.
    ///
    /// No stored credential returns `None` without a backend call. A stored
    /// credential the backend does not accept is logged out. Otherwise the
    /// stored profile is returned.
    pub async fn verified_user(&self) -> ClientResult<Option<UserProfile>> {
        let Some(token) = self.get_token() else {
            debug!("No stored token, skipping verification");
            return Ok(None);
        };

        if !self.test_token(Some(&token)).await {
            info!("Stored token rejected, clearing session");
            self.logout()?;
            return Ok(None);
        }

        Ok(self.get_current_user())
    }

    fn resolve_credential(&self, token: Option<&str>) -> String {
        token
            .filter(|t| !t.is_empty())
            .map(String::from)
            .or_else(|| self.get_token())
            .unwrap_or_else(|| self.fallback_credential.clone())
    }

    /// Parse a `{jwt, user}` body and store the pair.
    fn accept_auth_response(&self, value: Value) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = serde_json::from_value(value)
            .inspect_err(|e| warn!("Unexpected authentication response: {e}"))?;
        self.persist(&auth.jwt, &auth.user)?;
        Ok(auth)
    }
}
