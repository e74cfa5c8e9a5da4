use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::assertions::{
    ResponseContract, INCORRECT_CREDENTIALS_MESSAGE, REQUIRED_FIELDS_MESSAGE, UNAUTHORISED_MESSAGE,
    USER_EXISTS_MESSAGE,
};
use crate::client::{ApiResponse, BurgerApiClient};
use crate::error::{ApiResult, ContractViolation};
use crate::model::User;

pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const USER_PATH: &str = "/api/auth/user";

/// Steps against the `/api/auth` resource.
#[derive(Debug, Clone)]
pub struct UserSteps {
    client: BurgerApiClient,
}

impl UserSteps {
    pub fn new(client: BurgerApiClient) -> Self {
        Self { client }
    }

    /// User registration. POST request to /api/auth/register
    #[instrument(name = "register_user", skip(self, user))]
    pub async fn register(&self, user: &User) -> ApiResult<ApiResponse> {
        self.client.post(REGISTER_PATH, user, None).await
    }

    /// User authorization. POST request to /api/auth/login
    #[instrument(name = "login_user", skip(self, user))]
    pub async fn login(&self, user: &User) -> ApiResult<ApiResponse> {
        self.client.post(LOGIN_PATH, user, None).await
    }

    /// Changing user data. PATCH request to /api/auth/user
    #[instrument(
        name = "update_user",
        skip(self, changes, token),
        fields(authorized = token.is_some())
    )]
    pub async fn update_profile(
        &self,
        changes: &User,
        token: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        self.client.patch(USER_PATH, changes, token).await
    }

    /// Deleting a user. DELETE request to /api/auth/user
    #[instrument(name = "delete_user", skip(self, token))]
    pub async fn delete(&self, token: &str) -> ApiResult<ApiResponse> {
        self.client.delete(USER_PATH, Some(token)).await
    }

    /// Deletes the account if a token is held, swallowing every failure.
    pub async fn delete_best_effort(&self, token: Option<&str>) {
        let Some(token) = token else {
            warn!("No access token held, skipping user deletion");
            return;
        };

        match self.delete(token).await {
            Ok(response) if response.status.is_success() => info!("Test user deleted"),
            Ok(response) => warn!(
                status = response.status_code(),
                body = %response.body,
                "User deletion was rejected"
            ),
            Err(e) => warn!(error = %e, "User deletion failed"),
        }
    }

    /// Successful registration: echoes the lower-cased email and the name, issues both tokens.
    pub fn assert_registered(
        &self,
        response: &ApiResponse,
        user: &User,
    ) -> Result<(), ContractViolation> {
        session_contract(user).verify(response)
    }

    /// Failed server response to a registration attempt with missing fields.
    pub fn assert_registration_rejected(
        &self,
        response: &ApiResponse,
    ) -> Result<(), ContractViolation> {
        ResponseContract::failure(403, REQUIRED_FIELDS_MESSAGE).verify(response)
    }

    /// Failed server response to registering an email twice.
    pub fn assert_user_already_exists(
        &self,
        response: &ApiResponse,
    ) -> Result<(), ContractViolation> {
        ResponseContract::failure(403, USER_EXISTS_MESSAGE).verify(response)
    }

    /// Successful login: same shape as a registration.
    pub fn assert_logged_in(
        &self,
        response: &ApiResponse,
        user: &User,
    ) -> Result<(), ContractViolation> {
        session_contract(user).verify(response)
    }

    /// Failed server response to a login attempt.
    pub fn assert_login_rejected(&self, response: &ApiResponse) -> Result<(), ContractViolation> {
        ResponseContract::failure(401, INCORRECT_CREDENTIALS_MESSAGE).verify(response)
    }

    /// Successful server response to a user data change.
    pub fn assert_profile_updated(
        &self,
        response: &ApiResponse,
        email: &str,
        name: &str,
    ) -> Result<(), ContractViolation> {
        ResponseContract::new()
            .success(true)
            .field_eq("user.email", email.to_lowercase())
            .field_eq("user.name", name)
            .status(200)
            .verify(response)
    }

    /// Unsuccessful server response to a user data change without a token.
    pub fn assert_profile_update_unauthorised(
        &self,
        response: &ApiResponse,
    ) -> Result<(), ContractViolation> {
        ResponseContract::failure(401, UNAUTHORISED_MESSAGE).verify(response)
    }
}

fn session_contract(user: &User) -> ResponseContract {
    let mut contract = ResponseContract::new().success(true);
    if let Some(email) = user.normalized_email() {
        contract = contract.field_eq("user.email", email);
    }
    if let Some(name) = &user.name {
        contract = contract.field_eq("user.name", Value::String(name.clone()));
    }
    contract.present("accessToken").present("refreshToken").status(200)
}
