//! In-process fake of the ordering service.
//!
//! [`FakeBurgerService`] starts a `wiremock` server whose responders share
//! one [`FakeState`], so registrations, sessions and orders persist across
//! requests the way they do against the real backend. The suites run
//! against it by default.

mod catalog;
mod state;

pub use catalog::{default_catalog, is_object_id};
pub use state::{FakeState, Reply, EMAIL_TAKEN_MESSAGE, USER_REMOVED_MESSAGE};

use std::sync::Arc;

use burger_api::client::AUTHORIZATION_HEADER;
use burger_api::steps::{INGREDIENTS_PATH, LOGIN_PATH, ORDERS_PATH, REGISTER_PATH, USER_PATH};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Register,
    Login,
    UpdateUser,
    DeleteUser,
    Ingredients,
    CreateOrder,
    UserOrders,
}

impl Route {
    const ALL: [Route; 7] = [
        Route::Register,
        Route::Login,
        Route::UpdateUser,
        Route::DeleteUser,
        Route::Ingredients,
        Route::CreateOrder,
        Route::UserOrders,
    ];

    fn endpoint(self) -> (&'static str, &'static str) {
        match self {
            Route::Register => ("POST", REGISTER_PATH),
            Route::Login => ("POST", LOGIN_PATH),
            Route::UpdateUser => ("PATCH", USER_PATH),
            Route::DeleteUser => ("DELETE", USER_PATH),
            Route::Ingredients => ("GET", INGREDIENTS_PATH),
            Route::CreateOrder => ("POST", ORDERS_PATH),
            Route::UserOrders => ("GET", ORDERS_PATH),
        }
    }
}

/// Routes one endpoint into the shared state.
struct StateResponder {
    route: Route,
    state: Arc<Mutex<FakeState>>,
}

impl Respond for StateResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        let token = request
            .headers
            .get(AUTHORIZATION_HEADER)
            .and_then(|value| value.to_str().ok());

        let reply = {
            let mut state = self.state.lock();
            match self.route {
                Route::Register => state.register(&body),
                Route::Login => state.login(&body),
                Route::UpdateUser => state.update_user(token, &body),
                Route::DeleteUser => state.delete_user(token),
                Route::Ingredients => state.ingredients(),
                Route::CreateOrder => state.create_order(token, &body),
                Route::UserOrders => state.user_orders(token),
            }
        };

        match reply {
            Reply::Json(status, body) => {
                debug!(route = ?self.route, status, "Fake service reply");
                ResponseTemplate::new(status).set_body_json(body)
            }
            Reply::Html(status, page) => {
                debug!(route = ?self.route, status, "Fake service error page");
                ResponseTemplate::new(status).set_body_raw(page, "text/html; charset=utf-8")
            }
        }
    }
}

/// A running fake of the ordering API.
pub struct FakeBurgerService {
    server: MockServer,
    state: Arc<Mutex<FakeState>>,
}

impl FakeBurgerService {
    /// Starts the fake with the default catalog.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state = Arc::new(Mutex::new(FakeState::new(default_catalog())));

        for route in Route::ALL {
            let (verb, endpoint) = route.endpoint();
            Mock::given(method(verb))
                .and(path(endpoint))
                .respond_with(StateResponder {
                    route,
                    state: Arc::clone(&state),
                })
                .named(format!("{} {}", verb, endpoint))
                .mount(&server)
                .await;
        }

        info!(uri = %server.uri(), "Fake ordering service started");
        Self { server, state }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn account_count(&self) -> usize {
        self.state.lock().account_count()
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.state.lock().has_account(email)
    }

    /// Lower-cased emails of every account currently registered.
    pub fn registered_users(&self) -> Vec<String> {
        self.state.lock().registered_users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_api::{BurgerApiClient, Order, OrderSteps, User, UserOrderSteps, UserSteps};

    #[tokio::test]
    async fn serves_the_full_contract_over_http() {
        let fake = FakeBurgerService::start().await;
        let client = BurgerApiClient::with_base_url(fake.uri()).unwrap();
        let users = UserSteps::new(client.clone());
        let orders = OrderSteps::new(client.clone());
        let history = UserOrderSteps::new(client);

        let user = User::new("abc123", "XYZ789@yandex.ru", "p@ssw0rd123");
        let registered = users.register(&user).await.unwrap();
        users.assert_registered(&registered, &user).unwrap();
        let token = registered.access_token().unwrap().to_string();
        assert_eq!(fake.registered_users(), vec!["xyz789@yandex.ru".to_string()]);

        let catalog = orders.ingredients().await.unwrap();
        let ids = catalog.ids_at(&[1, 3, 5]).unwrap();
        let expected_price = catalog.total_price(&ids);

        let created = orders.create_order(&Order::new(ids.clone()), Some(&token)).await.unwrap();
        orders.assert_order_created_for(&created, &user, expected_price).unwrap();

        let anonymous = orders.create_order(&Order::new(ids), None).await.unwrap();
        orders.assert_order_accepted(&anonymous, expected_price).unwrap();

        let listed = history.user_orders(Some(&token)).await.unwrap();
        history.assert_orders_listed(&listed).unwrap();
        assert_eq!(listed.field("orders").and_then(Value::as_array).map(Vec::len), Some(1));

        let deleted = users.delete(&token).await.unwrap();
        assert_eq!(deleted.status_code(), 202);
        assert!(fake.registered_users().is_empty());
    }

    #[tokio::test]
    async fn malformed_ids_get_an_html_error_page() {
        let fake = FakeBurgerService::start().await;
        let orders = OrderSteps::new(BurgerApiClient::with_base_url(fake.uri()).unwrap());

        let response = orders
            .create_order(&Order::new(vec!["not-a-hash".to_string()]), None)
            .await
            .unwrap();

        orders.assert_server_error(&response).unwrap();
        assert!(response.body.as_str().unwrap().contains("Internal Server Error"));
    }
}
