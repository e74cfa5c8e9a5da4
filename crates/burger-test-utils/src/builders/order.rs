//! Order construction from a catalog.

use burger_api::{Ingredients, Order};

use crate::error::TestError;

/// Suffixes appended to catalog ids to produce malformed ingredient hashes.
pub const CORRUPTION_SUFFIXES: [&str; 2] = ["1234nhf8", "9876bgfj2"];

/// Assembles an [`Order`] by picking catalog entries by index.
///
/// ```ignore
/// let order = OrderBuilder::from_catalog(&catalog).pick_all(&[1, 3, 5])?.build();
/// ```
#[derive(Debug, Clone)]
pub struct OrderBuilder<'a> {
    catalog: &'a Ingredients,
    ids: Vec<String>,
}

impl<'a> OrderBuilder<'a> {
    pub fn from_catalog(catalog: &'a Ingredients) -> Self {
        Self {
            catalog,
            ids: Vec::new(),
        }
    }

    /// Adds the id of the catalog entry at `index`.
    pub fn pick(mut self, index: usize) -> Result<Self, TestError> {
        let id = self.id_at(index)?;
        self.ids.push(id);
        Ok(self)
    }

    pub fn pick_all(self, indices: &[usize]) -> Result<Self, TestError> {
        indices.iter().try_fold(self, |builder, &index| builder.pick(index))
    }

    /// Adds the id at `index` with `suffix` appended, which the service
    /// cannot resolve.
    pub fn corrupted(mut self, index: usize, suffix: &str) -> Result<Self, TestError> {
        let id = self.id_at(index)?;
        self.ids.push(format!("{}{}", id, suffix));
        Ok(self)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Price the service is expected to echo for the picked ids.
    pub fn expected_price(&self) -> i64 {
        self.catalog.total_price(&self.ids)
    }

    pub fn build(self) -> Order {
        Order::new(self.ids)
    }

    fn id_at(&self, index: usize) -> Result<String, TestError> {
        self.catalog
            .get(index)
            .map(|ingredient| ingredient.id.clone())
            .ok_or_else(|| {
                TestError::Setup(format!(
                    "catalog has {} ingredients, index {} is out of range",
                    self.catalog.len(),
                    index
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use burger_api::Ingredient;

    fn catalog() -> Ingredients {
        Ingredients::new(vec![
            Ingredient::new("a", "bun", 10, "bun"),
            Ingredient::new("b", "patty", 20, "main"),
            Ingredient::new("c", "sauce", 30, "sauce"),
        ])
    }

    #[test]
    fn picks_in_order_and_prices_selection() {
        let catalog = catalog();
        let builder = OrderBuilder::from_catalog(&catalog).pick_all(&[2, 0, 1]).unwrap();
        assert_eq!(builder.expected_price(), 60);
        assert_eq!(builder.build().ingredients, vec!["c", "a", "b"]);
    }

    #[test]
    fn corrupted_ids_do_not_count_towards_price() {
        let catalog = catalog();
        let builder = OrderBuilder::from_catalog(&catalog)
            .corrupted(0, CORRUPTION_SUFFIXES[0])
            .unwrap()
            .pick(1)
            .unwrap();
        assert_eq!(builder.ids(), ["a1234nhf8".to_string(), "b".to_string()]);
        assert_eq!(builder.expected_price(), 20);
    }

    #[test]
    fn out_of_range_index_is_setup_error() {
        let catalog = catalog();
        assert_matches!(OrderBuilder::from_catalog(&catalog).pick(3), Err(TestError::Setup(_)));
    }
}
