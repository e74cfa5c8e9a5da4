//! Order history suite.

use anyhow::anyhow;
use assert_matches::assert_matches;
use burger_test_utils::{poll_until, OrderBuilder};
use burger_tests::TestEnv;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn orders_are_listed_for_authorized_user() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.registered_user(&mut generator).await?;
    let history = env.user_order_steps();

    fixture
        .run(|fixture| async move {
            let response = history.user_orders(fixture.access_token().as_deref()).await?;

            history.assert_orders_listed(&response)?;
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn placed_order_shows_up_in_the_history() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let mut generator = env.generator();
    let fixture = env.registered_user(&mut generator).await?;
    let orders = env.order_steps();
    let history = env.user_order_steps();
    let poll = env.poll().clone();

    fixture
        .run(|fixture| async move {
            let token = fixture
                .access_token()
                .ok_or_else(|| anyhow!("registered fixture holds no access token"))?;

            let catalog = orders.ingredients().await?;
            let order = OrderBuilder::from_catalog(&catalog).pick_all(&[1, 3, 5])?.build();
            let submitted = order.ingredients.clone();
            let created = orders.create_order(&order, Some(&token)).await?;
            let number = created
                .field("order.number")
                .and_then(Value::as_i64)
                .ok_or_else(|| anyhow!("order response carries no number: {}", created.body))?;

            let history = &history;
            let token = token.as_str();
            let listed = poll_until(
                &poll,
                "order in history",
                move || async move { history.user_orders(Some(token)).await },
                |response| {
                    response
                        .field("orders")
                        .and_then(Value::as_array)
                        .map_or(false, |orders| orders.iter().any(|o| o["number"] == number))
                },
            )
            .await?;

            history.assert_orders_listed(&listed)?;
            assert_matches!(
                listed.field("total").and_then(Value::as_i64),
                Some(total) if total >= 1
            );

            let entry = listed
                .field("orders")
                .and_then(Value::as_array)
                .and_then(|orders| orders.iter().find(|o| o["number"] == number))
                .ok_or_else(|| anyhow!("order {} missing from history", number))?;
            assert_eq!(entry["ingredients"], json!(submitted));
            anyhow::Ok(())
        })
        .await
}

#[tokio::test]
async fn orders_are_not_listed_without_token() -> anyhow::Result<()> {
    let env = TestEnv::start().await?;
    let history = env.user_order_steps();

    let response = history.user_orders(None).await?;

    history.assert_orders_unauthorised(&response)?;
    Ok(())
}
