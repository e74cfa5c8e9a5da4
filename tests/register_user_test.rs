//! Registration suite: a unique user, a duplicate and every combination of
//! missing required fields.

use burger_api::User;
use burger_tests::TestEnv;

#[tokio::test]
async fn unique_user_can_be_registered() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.unregistered_user(&mut generator);
    let fake = env.fake();

    fixture
        .run(|fixture| async move {
            let user = fixture.user();
            let response = fixture.steps().register(&user).await?;
            if let Some(token) = response.access_token() {
                fixture.set_access_token(token);
            }

            fixture.steps().assert_registered(&response, &user)?;
            if let Some(fake) = fake {
                let email = user.normalized_email().unwrap_or_default();
                assert!(fake.has_account(&email), "{} should be stored", email);
            }
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn registered_user_cannot_register_again() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.registered_user(&mut generator).await?;

    fixture
        .run(|fixture| async move {
            let response = fixture.steps().register(&fixture.user()).await?;

            fixture.steps().assert_user_already_exists(&response)?;
            anyhow::Ok(())
        })
        .await
}

/// Registers a copy of a random user with some fields stripped and expects
/// the "required fields" rejection.
async fn registration_is_rejected_without(strip: fn(&mut User)) -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.unregistered_user(&mut generator);

    fixture
        .run(|fixture| async move {
            let mut user = fixture.user();
            strip(&mut user);
            let response = fixture.steps().register(&user).await?;

            fixture.steps().assert_registration_rejected(&response)?;
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn user_without_name_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| user.name = None).await
}

#[tokio::test]
async fn user_without_email_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| user.email = None).await
}

#[tokio::test]
async fn user_without_password_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| user.password = None).await
}

#[tokio::test]
async fn user_without_name_and_email_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| {
        user.name = None;
        user.email = None;
    })
    .await
}

#[tokio::test]
async fn user_without_name_and_password_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| {
        user.name = None;
        user.password = None;
    })
    .await
}

#[tokio::test]
async fn user_without_email_and_password_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| {
        user.email = None;
        user.password = None;
    })
    .await
}

#[tokio::test]
async fn empty_user_is_rejected() -> anyhow::Result<()> {
    registration_is_rejected_without(|user| *user = User::default()).await
}
