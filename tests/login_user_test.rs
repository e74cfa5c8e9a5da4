//! Login suite: valid credentials and each way credentials can be wrong.

use burger_api::User;
use burger_test_utils::UserDataGenerator;
use burger_tests::TestEnv;

#[tokio::test]
async fn registered_user_can_log_in() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.registered_user(&mut generator).await?;

    fixture
        .run(|fixture| async move {
            let user = fixture.user();
            let response = fixture.steps().login(&user.credentials()).await?;

            fixture.steps().assert_logged_in(&response, &user)?;
            anyhow::Ok(())
        })
        .await
}

/// Logs in with tampered credentials of a registered user and expects 401.
async fn login_is_rejected_with(
    tamper: fn(&mut User, &mut UserDataGenerator),
) -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.registered_user(&mut generator).await?;

    fixture
        .run(|fixture| async move {
            let mut credentials = fixture.user().credentials();
            tamper(&mut credentials, &mut generator);
            let response = fixture.steps().login(&credentials).await?;

            fixture.steps().assert_login_rejected(&response)?;
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn login_without_email_is_rejected() -> anyhow::Result<()> {
    login_is_rejected_with(|user, _| user.email = None).await
}

#[tokio::test]
async fn login_without_password_is_rejected() -> anyhow::Result<()> {
    login_is_rejected_with(|user, _| user.password = None).await
}

#[tokio::test]
async fn login_without_credentials_is_rejected() -> anyhow::Result<()> {
    login_is_rejected_with(|user, _| *user = User::default()).await
}

#[tokio::test]
async fn login_with_wrong_email_is_rejected() -> anyhow::Result<()> {
    login_is_rejected_with(|user, generator| user.set_email(generator.email())).await
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() -> anyhow::Result<()> {
    login_is_rejected_with(|user, generator| user.set_password(generator.password())).await
}
