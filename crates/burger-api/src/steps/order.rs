use tracing::{debug, instrument};

use crate::assertions::{
    expect_status, ResponseContract, INGREDIENTS_REQUIRED_MESSAGE, ORDER_STATUS_DONE,
};
use crate::client::{ApiResponse, BurgerApiClient};
use crate::error::{ApiResult, ContractViolation};
use crate::model::{Ingredients, Order, User};

pub const INGREDIENTS_PATH: &str = "/api/ingredients";
pub const ORDERS_PATH: &str = "/api/orders";

/// Steps against the catalog and order creation.
#[derive(Debug, Clone)]
pub struct OrderSteps {
    client: BurgerApiClient,
}

impl OrderSteps {
    pub fn new(client: BurgerApiClient) -> Self {
        Self { client }
    }

    /// Getting the ingredient catalog. GET request to /api/ingredients
    #[instrument(name = "get_ingredients", skip(self))]
    pub async fn ingredients(&self) -> ApiResult<Ingredients> {
        let response = self.client.get(INGREDIENTS_PATH, None).await?;
        expect_status(&response, 200)?;
        let ingredients: Ingredients = response.json()?;
        debug!(count = ingredients.len(), "Fetched catalog");
        Ok(ingredients)
    }

    /// Creating an order. POST request to /api/orders
    #[instrument(
        name = "create_order",
        skip(self, order, token),
        fields(ingredients = order.len(), authorized = token.is_some())
    )]
    pub async fn create_order(&self, order: &Order, token: Option<&str>) -> ApiResult<ApiResponse> {
        self.client.post(ORDERS_PATH, order, token).await
    }

    /// Successful response to an order without authorization: computed price, no owner.
    pub fn assert_order_accepted(
        &self,
        response: &ApiResponse,
        expected_price: i64,
    ) -> Result<(), ContractViolation> {
        ResponseContract::new()
            .success(true)
            .present("name")
            .integer("order.number")
            .i64_eq("order.price", expected_price)
            .absent("order.owner")
            .status(200)
            .verify(response)
    }

    /// Successful response to an authorized order: owner echo, status and computed price.
    pub fn assert_order_created_for(
        &self,
        response: &ApiResponse,
        owner: &User,
        expected_price: i64,
    ) -> Result<(), ContractViolation> {
        let mut contract = ResponseContract::new()
            .success(true)
            .present("name")
            .integer("order.number")
            .present("order.ingredients")
            .present("order._id");
        if let Some(name) = &owner.name {
            contract = contract.field_eq("order.owner.name", name.as_str());
        }
        if let Some(email) = owner.normalized_email() {
            contract = contract.field_eq("order.owner.email", email);
        }
        contract
            .field_eq("order.status", ORDER_STATUS_DONE)
            .present("order.name")
            .i64_eq("order.price", expected_price)
            .status(200)
            .verify(response)
    }

    /// Unsuccessful response to an order without ingredients.
    pub fn assert_ingredients_required(
        &self,
        response: &ApiResponse,
    ) -> Result<(), ContractViolation> {
        ResponseContract::failure(400, INGREDIENTS_REQUIRED_MESSAGE).verify(response)
    }

    /// Server error for malformed ingredient ids. Only the status is part of the contract.
    pub fn assert_server_error(&self, response: &ApiResponse) -> Result<(), ContractViolation> {
        expect_status(response, 500)
    }
}
