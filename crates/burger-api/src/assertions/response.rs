//! Single-aspect checks on an [`ApiResponse`].

use serde_json::Value;

use crate::client::ApiResponse;
use crate::error::ContractViolation;

/// Asserts that the response has the expected status code.
pub fn expect_status(response: &ApiResponse, expected: u16) -> Result<(), ContractViolation> {
    let actual = response.status_code();
    if actual != expected {
        return Err(ContractViolation::StatusMismatch {
            expected,
            actual,
            body: response.body.clone(),
        });
    }
    Ok(())
}

/// Asserts that the field exists and is not null, returning it.
pub fn expect_present<'a>(
    response: &'a ApiResponse,
    field: &str,
) -> Result<&'a Value, ContractViolation> {
    match response.field(field) {
        Some(Value::Null) | None => Err(ContractViolation::MissingField {
            field: field.to_string(),
            body: response.body.clone(),
        }),
        Some(value) => Ok(value),
    }
}

/// Asserts that the field is missing or null.
pub fn expect_absent(response: &ApiResponse, field: &str) -> Result<(), ContractViolation> {
    match response.field(field) {
        Some(Value::Null) | None => Ok(()),
        Some(_) => Err(ContractViolation::UnexpectedField {
            field: field.to_string(),
            body: response.body.clone(),
        }),
    }
}

/// Asserts that the field equals the expected JSON value.
pub fn expect_field_eq(
    response: &ApiResponse,
    field: &str,
    expected: &Value,
) -> Result<(), ContractViolation> {
    let actual = expect_present(response, field)?;
    if actual != expected {
        return Err(ContractViolation::FieldMismatch {
            field: field.to_string(),
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    Ok(())
}

/// Asserts that the field is the given string.
pub fn expect_str_field(
    response: &ApiResponse,
    field: &str,
    expected: &str,
) -> Result<(), ContractViolation> {
    expect_field_eq(response, field, &Value::String(expected.to_string()))
}

/// Asserts the `success` flag of the body.
pub fn expect_success(response: &ApiResponse, expected: bool) -> Result<(), ContractViolation> {
    expect_field_eq(response, "success", &Value::Bool(expected))
}

/// Asserts the `message` of an error body.
pub fn expect_message(response: &ApiResponse, expected: &str) -> Result<(), ContractViolation> {
    expect_str_field(response, "message", expected)
}

/// Asserts that the field holds an integer, returning it.
pub fn expect_integer(response: &ApiResponse, field: &str) -> Result<i64, ContractViolation> {
    let value = expect_present(response, field)?;
    value.as_i64().ok_or_else(|| ContractViolation::TypeMismatch {
        field: field.to_string(),
        expected: "integer",
        actual: value.clone(),
    })
}

/// Asserts that the field is an integer equal to `expected`.
pub fn expect_i64_field(
    response: &ApiResponse,
    field: &str,
    expected: i64,
) -> Result<(), ContractViolation> {
    let actual = expect_integer(response, field)?;
    if actual != expected {
        return Err(ContractViolation::FieldMismatch {
            field: field.to_string(),
            expected: Value::from(expected),
            actual: Value::from(actual),
        });
    }
    Ok(())
}
