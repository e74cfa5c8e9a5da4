use serde::{Deserialize, Serialize};

/// Request body for `POST /api/orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub ingredients: Vec<String>,
}

impl Order {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }

    /// An order the service rejects with 400.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ingredient_id: impl Into<String>) {
        self.ingredients.push(ingredient_id.into());
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_ingredient_list() {
        let mut order = Order::empty();
        order.push("a");
        order.push("b");
        assert_eq!(serde_json::to_value(&order).unwrap(), json!({"ingredients": ["a", "b"]}));
        assert_eq!(serde_json::to_value(Order::empty()).unwrap(), json!({"ingredients": []}));
    }
}
