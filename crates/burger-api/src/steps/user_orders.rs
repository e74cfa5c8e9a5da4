use tracing::instrument;

use super::order::ORDERS_PATH;
use crate::assertions::{ResponseContract, UNAUTHORISED_MESSAGE};
use crate::client::{ApiResponse, BurgerApiClient};
use crate::error::{ApiResult, ContractViolation};

/// Steps against a user's order history.
#[derive(Debug, Clone)]
pub struct UserOrderSteps {
    client: BurgerApiClient,
}

impl UserOrderSteps {
    pub fn new(client: BurgerApiClient) -> Self {
        Self { client }
    }

    /// Getting the order list of a user. GET request to /api/orders
    #[instrument(name = "get_user_orders", skip(self, token), fields(authorized = token.is_some()))]
    pub async fn user_orders(&self, token: Option<&str>) -> ApiResult<ApiResponse> {
        self.client.get(ORDERS_PATH, token).await
    }

    /// Successful response for the order list of an authorized user.
    pub fn assert_orders_listed(&self, response: &ApiResponse) -> Result<(), ContractViolation> {
        ResponseContract::new()
            .success(true)
            .present("orders")
            .integer("total")
            .integer("totalToday")
            .status(200)
            .verify(response)
    }

    /// Unsuccessful response for the order list without authorization.
    pub fn assert_orders_unauthorised(
        &self,
        response: &ApiResponse,
    ) -> Result<(), ContractViolation> {
        ResponseContract::failure(401, UNAUTHORISED_MESSAGE).verify(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn listed_and_unauthorised_contracts() {
        let mock_server = MockServer::start().await;
        let steps = UserOrderSteps::new(BurgerApiClient::with_base_url(mock_server.uri()).unwrap());

        Mock::given(method("GET"))
            .and(path(ORDERS_PATH))
            .and(header("authorization", "Bearer t"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "orders": [],
                "total": 12,
                "totalToday": 3
            })))
            .with_priority(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(ORDERS_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": UNAUTHORISED_MESSAGE
            })))
            .with_priority(2)
            .mount(&mock_server)
            .await;

        let listed = steps.user_orders(Some("Bearer t")).await.unwrap();
        assert!(steps.assert_orders_listed(&listed).is_ok());

        let rejected = steps.user_orders(None).await.unwrap();
        assert!(steps.assert_orders_unauthorised(&rejected).is_ok());
        assert!(steps.assert_orders_listed(&rejected).is_err());
    }
}
