//! Disposable user accounts.

use std::future::Future;
use std::panic::{resume_unwind, AssertUnwindSafe};
use std::sync::Arc;

use burger_api::{BurgerApiClient, SessionTokens, User, UserOrderSteps, UserSteps};
use futures::FutureExt;
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::data_generators::UserDataGenerator;
use crate::error::TestError;
use crate::polling::{poll_until, PollConfig};

#[derive(Debug, Default)]
struct Tracked {
    user: User,
    access_token: Option<String>,
}

/// A random account owned by a single test.
///
/// Clones share the tracked user and token, so profile changes recorded
/// through the handle given to [`UserFixture::run`] are what the teardown
/// acts on.
#[derive(Debug, Clone)]
pub struct UserFixture {
    steps: UserSteps,
    tracked: Arc<Mutex<Tracked>>,
}

impl UserFixture {
    fn new(steps: UserSteps, user: User, access_token: Option<String>) -> Self {
        Self {
            steps,
            tracked: Arc::new(Mutex::new(Tracked { user, access_token })),
        }
    }

    /// Registers a fresh random user and waits until its token is accepted.
    #[instrument(skip_all)]
    pub async fn setup(
        client: &BurgerApiClient,
        generator: &mut UserDataGenerator,
        poll: &PollConfig,
    ) -> Result<Self, TestError> {
        let user = generator.user();
        let steps = UserSteps::new(client.clone());

        let response = steps.register(&user).await?;
        if response.status_code() != 200 {
            return Err(TestError::Setup(format!(
                "registration returned status {}: {}",
                response.status_code(),
                response.body
            )));
        }
        let tokens: SessionTokens = response
            .json()
            .map_err(|e| TestError::Setup(format!("registration issued no tokens: {}", e)))?;
        let token = tokens.access_token;

        let fixture = Self::new(steps, user, Some(token.clone()));

        let history = UserOrderSteps::new(client.clone());
        let history = &history;
        let token = token.as_str();
        let ready = poll_until(
            poll,
            "account readiness",
            move || async move { history.user_orders(Some(token)).await },
            |response| response.status_code() == 200,
        )
        .await;

        if let Err(e) = ready {
            fixture.teardown().await;
            return Err(e);
        }

        info!(email = ?fixture.user().email, "Test user registered");
        Ok(fixture)
    }

    /// A random user that has not been registered. Teardown logs in to find
    /// out whether the test registered it.
    pub fn unregistered(client: &BurgerApiClient, generator: &mut UserDataGenerator) -> Self {
        Self::new(UserSteps::new(client.clone()), generator.user(), None)
    }

    pub fn steps(&self) -> &UserSteps {
        &self.steps
    }

    pub fn user(&self) -> User {
        self.tracked.lock().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.tracked.lock().access_token.clone()
    }

    /// Records a profile change the service accepted.
    pub fn apply_changes(&self, changes: &User) {
        self.tracked.lock().user.merge(changes);
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        self.tracked.lock().access_token = Some(token.into());
    }

    /// Deletes the account. Never fails; problems are logged.
    #[instrument(skip_all)]
    pub async fn teardown(self) {
        let (user, token) = {
            let tracked = self.tracked.lock();
            (tracked.user.clone(), tracked.access_token.clone())
        };

        let token = match token {
            Some(token) => Some(token),
            None => self.login_for_teardown(&user).await,
        };

        self.steps.delete_best_effort(token.as_deref()).await;
    }

    async fn login_for_teardown(&self, user: &User) -> Option<String> {
        match self.steps.login(&user.credentials()).await {
            Ok(response) if response.status_code() == 200 => {
                response.access_token().map(str::to_string)
            }
            Ok(response) => {
                debug!(status = response.status_code(), "No account to clean up");
                None
            }
            Err(e) => {
                warn!(error = %e, "Login before teardown failed");
                None
            }
        }
    }

    /// Runs `body` with a handle to this fixture, then tears down.
    ///
    /// Teardown happens whether the body succeeds, returns an error or
    /// panics. A panic is resumed once the account is gone.
    pub async fn run<F, Fut, T>(self, body: F) -> anyhow::Result<T>
    where
        F: FnOnce(UserFixture) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let handle = self.clone();
        let outcome = AssertUnwindSafe(async move { body(handle).await })
            .catch_unwind()
            .await;

        if let Ok(Err(e)) = &outcome {
            warn!(error = %e, "Test body failed");
        }

        self.teardown().await;

        match outcome {
            Ok(result) => result,
            Err(panic) => resume_unwind(panic),
        }
    }
}
