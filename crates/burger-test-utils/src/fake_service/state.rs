//! In-memory state and request handling of the fake ordering service.

use std::collections::HashMap;

use burger_api::assertions::{
    INCORRECT_CREDENTIALS_MESSAGE, INGREDIENTS_REQUIRED_MESSAGE, ORDER_STATUS_DONE,
    REQUIRED_FIELDS_MESSAGE, UNAUTHORISED_MESSAGE, USER_EXISTS_MESSAGE,
};
use burger_api::{Ingredient, Ingredients};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use super::catalog::is_object_id;

pub const EMAIL_TAKEN_MESSAGE: &str = "User with such email already exists";
pub const USER_REMOVED_MESSAGE: &str = "User successfully removed";

const SERVER_ERROR_PAGE: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html lang=\"en\">\n",
    "<head>\n<meta charset=\"utf-8\">\n<title>Error</title>\n</head>\n",
    "<body>\n<pre>Internal Server Error</pre>\n</body>\n",
    "</html>\n",
);

/// What the fake answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json(u16, Value),
    Html(u16, String),
}

#[derive(Debug, Clone)]
struct Account {
    name: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    fn profile(&self) -> Value {
        json!({"email": self.email, "name": self.name})
    }
}

#[derive(Debug, Clone)]
struct StoredOrder {
    id: String,
    number: u64,
    name: String,
    ingredients: Vec<String>,
    owner: Option<String>,
    created_at: DateTime<Utc>,
}

impl StoredOrder {
    fn summary(&self) -> Value {
        json!({
            "_id": self.id,
            "ingredients": self.ingredients,
            "status": ORDER_STATUS_DONE,
            "name": self.name,
            "number": self.number,
            "createdAt": self.created_at.to_rfc3339(),
            "updatedAt": self.created_at.to_rfc3339(),
        })
    }
}

/// Accounts, sessions and orders of the fake, keyed by lower-cased email.
#[derive(Debug)]
pub struct FakeState {
    catalog: Ingredients,
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, String>,
    orders: Vec<StoredOrder>,
    next_order_number: u64,
}

fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn failure(status: u16, message: &str) -> Reply {
    Reply::Json(status, json!({"success": false, "message": message}))
}

fn new_object_id() -> String {
    Uuid::new_v4().simple().to_string()[..24].to_string()
}

impl FakeState {
    pub fn new(catalog: Ingredients) -> Self {
        Self {
            catalog,
            accounts: HashMap::new(),
            sessions: HashMap::new(),
            orders: Vec::new(),
            next_order_number: 1000,
        }
    }

    pub fn catalog(&self) -> &Ingredients {
        &self.catalog
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.contains_key(&email.to_lowercase())
    }

    /// Stored emails, sorted.
    pub fn registered_users(&self) -> Vec<String> {
        let mut emails: Vec<String> = self.accounts.keys().cloned().collect();
        emails.sort();
        emails
    }

    fn session_owner(&self, token: Option<&str>) -> Option<String> {
        token.and_then(|t| self.sessions.get(t)).cloned()
    }

    fn open_session(&mut self, email: &str) -> Value {
        let access_token = format!("Bearer {}", Uuid::new_v4());
        let refresh_token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(access_token.clone(), email.to_string());

        let profile = self.accounts.get(email).map(Account::profile).unwrap_or(Value::Null);
        json!({
            "success": true,
            "user": profile,
            "accessToken": access_token,
            "refreshToken": refresh_token,
        })
    }

    pub fn register(&mut self, body: &Value) -> Reply {
        let (Some(email), Some(password), Some(name)) = (
            non_empty_str(body, "email"),
            non_empty_str(body, "password"),
            non_empty_str(body, "name"),
        ) else {
            return failure(403, REQUIRED_FIELDS_MESSAGE);
        };

        let email = email.to_lowercase();
        if self.accounts.contains_key(&email) {
            return failure(403, USER_EXISTS_MESSAGE);
        }

        let now = Utc::now();
        self.accounts.insert(
            email.clone(),
            Account {
                name: name.to_string(),
                email: email.clone(),
                password: password.to_string(),
                created_at: now,
                updated_at: now,
            },
        );

        Reply::Json(200, self.open_session(&email))
    }

    pub fn login(&mut self, body: &Value) -> Reply {
        let (Some(email), Some(password)) =
            (non_empty_str(body, "email"), non_empty_str(body, "password"))
        else {
            return failure(401, INCORRECT_CREDENTIALS_MESSAGE);
        };

        let email = email.to_lowercase();
        let valid = self
            .accounts
            .get(&email)
            .map_or(false, |account| account.password == password);
        if !valid {
            return failure(401, INCORRECT_CREDENTIALS_MESSAGE);
        }

        Reply::Json(200, self.open_session(&email))
    }

    pub fn update_user(&mut self, token: Option<&str>, body: &Value) -> Reply {
        let Some(current_email) = self.session_owner(token) else {
            return failure(401, UNAUTHORISED_MESSAGE);
        };
        let Some(mut account) = self.accounts.remove(&current_email) else {
            return failure(401, UNAUTHORISED_MESSAGE);
        };

        if let Some(new_email) = non_empty_str(body, "email").map(str::to_lowercase) {
            if new_email != current_email && self.accounts.contains_key(&new_email) {
                self.accounts.insert(current_email, account);
                return failure(403, EMAIL_TAKEN_MESSAGE);
            }
            account.email = new_email;
        }
        if let Some(name) = non_empty_str(body, "name") {
            account.name = name.to_string();
        }
        if let Some(password) = non_empty_str(body, "password") {
            account.password = password.to_string();
        }
        account.updated_at = Utc::now();

        let new_email = account.email.clone();
        if new_email != current_email {
            for owner in self.sessions.values_mut().filter(|owner| **owner == current_email) {
                *owner = new_email.clone();
            }
            for order in &mut self.orders {
                if order.owner.as_deref() == Some(current_email.as_str()) {
                    order.owner = Some(new_email.clone());
                }
            }
        }

        let profile = account.profile();
        self.accounts.insert(new_email, account);
        Reply::Json(200, json!({"success": true, "user": profile}))
    }

    pub fn delete_user(&mut self, token: Option<&str>) -> Reply {
        let Some(email) = self.session_owner(token) else {
            return failure(401, UNAUTHORISED_MESSAGE);
        };

        self.accounts.remove(&email);
        self.sessions.retain(|_, owner| *owner != email);
        Reply::Json(202, json!({"success": true, "message": USER_REMOVED_MESSAGE}))
    }

    pub fn ingredients(&self) -> Reply {
        Reply::Json(200, json!({"success": true, "data": self.catalog.data}))
    }

    pub fn create_order(&mut self, token: Option<&str>, body: &Value) -> Reply {
        let ids: Vec<String> = match body.get("ingredients").and_then(Value::as_array) {
            Some(ids) => ids.iter().filter_map(Value::as_str).map(str::to_string).collect(),
            None => Vec::new(),
        };
        if ids.is_empty() {
            return failure(400, INGREDIENTS_REQUIRED_MESSAGE);
        }

        let mut picked: Vec<Ingredient> = Vec::with_capacity(ids.len());
        for id in &ids {
            if !is_object_id(id) {
                return Reply::Html(500, SERVER_ERROR_PAGE.to_string());
            }
            match self.catalog.iter().find(|ingredient| &ingredient.id == id) {
                Some(ingredient) => picked.push(ingredient.clone()),
                None => return Reply::Html(500, SERVER_ERROR_PAGE.to_string()),
            }
        }

        let burger_name = burger_name(&picked);
        let number = self.next_order_number;
        self.next_order_number += 1;

        let owner = self.session_owner(token).filter(|email| self.accounts.contains_key(email));
        let order = StoredOrder {
            id: new_object_id(),
            number,
            name: burger_name.clone(),
            ingredients: ids.clone(),
            owner: owner.clone(),
            created_at: Utc::now(),
        };
        self.orders.push(order.clone());

        let price = self.catalog.total_price(&ids);
        let Some(owner) = owner.and_then(|email| self.accounts.get(&email)) else {
            return Reply::Json(
                200,
                json!({
                    "success": true,
                    "name": burger_name,
                    "order": {"number": number, "price": price},
                }),
            );
        };

        Reply::Json(
            200,
            json!({
                "success": true,
                "name": burger_name,
                "order": {
                    "ingredients": picked,
                    "_id": order.id,
                    "owner": {
                        "name": owner.name,
                        "email": owner.email,
                        "createdAt": owner.created_at.to_rfc3339(),
                        "updatedAt": owner.updated_at.to_rfc3339(),
                    },
                    "status": ORDER_STATUS_DONE,
                    "name": burger_name,
                    "createdAt": order.created_at.to_rfc3339(),
                    "updatedAt": order.created_at.to_rfc3339(),
                    "number": number,
                    "price": price,
                }
            }),
        )
    }

    pub fn user_orders(&self, token: Option<&str>) -> Reply {
        let Some(email) = self.session_owner(token) else {
            return failure(401, UNAUTHORISED_MESSAGE);
        };

        let today = Utc::now().date_naive();
        let orders: Vec<Value> = self
            .orders
            .iter()
            .filter(|order| order.owner.as_deref() == Some(email.as_str()))
            .map(StoredOrder::summary)
            .collect();
        let total_today = self
            .orders
            .iter()
            .filter(|order| order.created_at.date_naive() == today)
            .count();

        Reply::Json(
            200,
            json!({
                "success": true,
                "orders": orders,
                "total": self.orders.len(),
                "totalToday": total_today,
            }),
        )
    }
}

fn burger_name(ingredients: &[Ingredient]) -> String {
    let mut words: Vec<&str> = Vec::new();
    for ingredient in ingredients {
        let word = ingredient.name.split_whitespace().next().unwrap_or("Space");
        if !words.contains(&word) {
            words.push(word);
        }
    }
    format!("{} burger", words.join(" "))
}
