//! Pre-fitted categorical encoding

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ChurnError, Result};

/// One-hot encoder restored from the artifact.
///
/// Category lists are fixed at training time. A value outside the fitted
/// categories encodes to all zeros rather than erroring, so scoring degrades
/// gracefully on unseen levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    categories: HashMap<String, Vec<String>>,
}

impl OneHotEncoder {
    pub fn new(categories: HashMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    /// Fitted category list for a column, if the column is categorical.
    pub fn categories(&self, column: &str) -> Option<&[String]> {
        self.categories.get(column).map(|c| c.as_slice())
    }

    /// Number of one-hot outputs a column expands into.
    pub fn width(&self, column: &str) -> usize {
        self.categories.get(column).map_or(0, |c| c.len())
    }

    /// Encode one value against the fitted categories of `column`.
    pub fn encode_value(&self, column: &str, value: &str) -> Result<Vec<f64>> {
        let categories = self
            .categories
            .get(column)
            .ok_or_else(|| ChurnError::FeatureNotFound(column.to_string()))?;

        Ok(categories
            .iter()
            .map(|c| if c == value { 1.0 } else { 0.0 })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract_encoder() -> OneHotEncoder {
        let mut categories = HashMap::new();
        categories.insert(
            "ContractType".to_string(),
            vec![
                "Month-to-month".to_string(),
                "One year".to_string(),
                "Two year".to_string(),
            ],
        );
        OneHotEncoder::new(categories)
    }

    #[test]
    fn test_known_category_maps_to_unit_vector() {
        let encoder = contract_encoder();
        let encoded = encoder.encode_value("ContractType", "One year").unwrap();
        assert_eq!(encoded, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_unknown_category_maps_to_zeros() {
        let encoder = contract_encoder();
        let encoded = encoder.encode_value("ContractType", "Decade").unwrap();
        assert_eq!(encoded, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unfitted_column_is_an_error() {
        let encoder = contract_encoder();
        let result = encoder.encode_value("PaymentMethod", "Credit card");
        assert!(matches!(result, Err(ChurnError::FeatureNotFound(_))));
    }

    #[test]
    fn test_width() {
        let encoder = contract_encoder();
        assert_eq!(encoder.width("ContractType"), 3);
        assert_eq!(encoder.width("TenureMonths"), 0);
    }
}
