use serde::{Deserialize, Serialize};

/// A catalog entry. Fields the suite does not use are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            kind: kind.into(),
        }
    }
}

/// The catalog as returned by `GET /api/ingredients`, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredients {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Ingredient>,
}

impl Ingredients {
    pub fn new(data: Vec<Ingredient>) -> Self {
        Self { success: true, data }
    }

    pub fn get(&self, index: usize) -> Option<&Ingredient> {
        self.data.get(index)
    }

    /// Ids of the entries at `indices`, or `None` if any index is out of range.
    pub fn ids_at(&self, indices: &[usize]) -> Option<Vec<String>> {
        indices
            .iter()
            .map(|&i| self.data.get(i).map(|ingredient| ingredient.id.clone()))
            .collect()
    }

    /// Sum of `price` over catalog entries whose id appears in `ids`.
    ///
    /// This is the value the service echoes as `order.price`. Each catalog
    /// entry contributes at most once; ids not in the catalog contribute nothing.
    pub fn total_price(&self, ids: &[String]) -> i64 {
        self.data
            .iter()
            .filter(|ingredient| ids.contains(&ingredient.id))
            .map(|ingredient| ingredient.price)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ingredient> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Ingredients {
        Ingredients::new(vec![
            Ingredient::new("a", "bun", 10, "bun"),
            Ingredient::new("b", "patty", 20, "main"),
            Ingredient::new("c", "sauce", 30, "sauce"),
        ])
    }

    #[test]
    fn decodes_catalog_response() {
        let ingredients: Ingredients = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"_id": "a", "name": "bun", "type": "bun", "price": 10, "calories": 420, "__v": 0}
            ]
        }))
        .unwrap();

        assert!(ingredients.success);
        assert_eq!(ingredients.get(0), Some(&Ingredient::new("a", "bun", 10, "bun")));
    }

    #[test]
    fn total_price_sums_selected_ids() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(catalog().total_price(&ids), 60);
    }

    #[test]
    fn total_price_ignores_unknown_ids() {
        let ids = vec!["b".to_string(), "zzz".to_string()];
        assert_eq!(catalog().total_price(&ids), 20);
    }

    #[test]
    fn ids_at_rejects_out_of_range() {
        assert_eq!(catalog().ids_at(&[2, 0]), Some(vec!["c".to_string(), "a".to_string()]));
        assert_eq!(catalog().ids_at(&[0, 3]), None);
    }
}
