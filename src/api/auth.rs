//! Auth Endpoints
//!
//! `/auth/signin` and `/auth/signup`.

use async_trait::async_trait;

use super::{ensure_success, HttpBackend};
use crate::error::ApiResult;
use crate::models::{SignInRequest, SignInResponse, SignUpRequest};

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const SIGN_UP_PATH: &str = "/auth/signup";

/// Account operations offered by the backend
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for the user id
    async fn sign_in(&self, request: &SignInRequest) -> ApiResult<SignInResponse>;

    /// Register a new account
    async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl AuthApi for HttpBackend {
    async fn sign_in(&self, request: &SignInRequest) -> ApiResult<SignInResponse> {
        let response = self.client().post(self.url(SIGN_IN_PATH)).json(request).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<SignInResponse>().await?)
    }

    async fn sign_up(&self, request: &SignUpRequest) -> ApiResult<()> {
        let response = self.client().post(self.url(SIGN_UP_PATH)).json(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
