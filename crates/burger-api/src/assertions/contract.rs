//! Declarative response contracts.

use serde_json::Value;

use super::response::{
    expect_absent, expect_field_eq, expect_i64_field, expect_integer, expect_message,
    expect_present, expect_status, expect_success,
};
use crate::client::ApiResponse;
use crate::error::ContractViolation;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Email, password and name are required fields";
pub const USER_EXISTS_MESSAGE: &str = "User already exists";
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "email or password are incorrect";
pub const UNAUTHORISED_MESSAGE: &str = "You should be authorised";
pub const INGREDIENTS_REQUIRED_MESSAGE: &str = "Ingredient ids must be provided";
pub const ORDER_STATUS_DONE: &str = "done";

#[derive(Debug, Clone, PartialEq)]
enum Check {
    Status(u16),
    Success(bool),
    Message(String),
    FieldEq(String, Value),
    Present(String),
    Absent(String),
    Integer(String),
    I64Eq(String, i64),
}

/// An ordered list of checks, verified against a response in order.
///
/// Body checks run before the status check so that a wrong status still
/// surfaces the body's `message` when that is the more telling mismatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseContract {
    checks: Vec<Check>,
}

impl ResponseContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error contract: `success == false`, literal `message`, and status.
    pub fn failure(status: u16, message: &str) -> Self {
        Self::new().success(false).message(message).status(status)
    }

    pub fn status(mut self, status: u16) -> Self {
        self.checks.push(Check::Status(status));
        self
    }

    pub fn success(mut self, expected: bool) -> Self {
        self.checks.push(Check::Success(expected));
        self
    }

    pub fn message(mut self, expected: impl Into<String>) -> Self {
        self.checks.push(Check::Message(expected.into()));
        self
    }

    pub fn field_eq(mut self, field: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.checks.push(Check::FieldEq(field.into(), expected.into()));
        self
    }

    pub fn present(mut self, field: impl Into<String>) -> Self {
        self.checks.push(Check::Present(field.into()));
        self
    }

    pub fn absent(mut self, field: impl Into<String>) -> Self {
        self.checks.push(Check::Absent(field.into()));
        self
    }

    pub fn integer(mut self, field: impl Into<String>) -> Self {
        self.checks.push(Check::Integer(field.into()));
        self
    }

    pub fn i64_eq(mut self, field: impl Into<String>, expected: i64) -> Self {
        self.checks.push(Check::I64Eq(field.into(), expected));
        self
    }

    /// Verifies every check, reporting the first violation.
    pub fn verify(&self, response: &ApiResponse) -> Result<(), ContractViolation> {
        for check in &self.checks {
            match check {
                Check::Status(status) => expect_status(response, *status)?,
                Check::Success(expected) => expect_success(response, *expected)?,
                Check::Message(expected) => expect_message(response, expected)?,
                Check::FieldEq(field, expected) => expect_field_eq(response, field, expected)?,
                Check::Present(field) => {
                    expect_present(response, field)?;
                }
                Check::Absent(field) => expect_absent(response, field)?,
                Check::Integer(field) => {
                    expect_integer(response, field)?;
                }
                Check::I64Eq(field, expected) => expect_i64_field(response, field, *expected)?,
            }
        }
        Ok(())
    }
}
