//! Request and response entities for the prediction endpoint

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ChurnError, Result};

/// Column names the pipeline consumes, in schema order.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "TenureMonths",
    "ContractType",
    "MonthlyCharges",
    "SupportTickets",
    "FeatureUsageScore",
    "TotalCharges",
];

/// Decision threshold applied to the positive-class probability. Fixed, not
/// configurable.
pub const CHURN_THRESHOLD: f64 = 0.5;

/// Label for the positive (churn) class
pub const LABEL_CHURN: &str = "Churn";

/// Label for the negative class
pub const LABEL_NO_CHURN: &str = "Não Churn";

/// One customer record as submitted to the prediction endpoint.
///
/// The wire field names (PascalCase) are used verbatim as the column names
/// the model was trained on; renaming a field here breaks the artifact
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerRecord {
    pub tenure_months: i64,
    pub contract_type: String,
    pub monthly_charges: f64,
    pub support_tickets: i64,
    pub feature_usage_score: i64,
    pub total_charges: f64,
}

impl CustomerRecord {
    /// Build the single-row DataFrame the pipeline consumes.
    pub fn to_row(&self) -> Result<DataFrame> {
        DataFrame::new(vec![
            Series::new("TenureMonths".into(), &[self.tenure_months]).into(),
            Series::new("ContractType".into(), &[self.contract_type.as_str()]).into(),
            Series::new("MonthlyCharges".into(), &[self.monthly_charges]).into(),
            Series::new("SupportTickets".into(), &[self.support_tickets]).into(),
            Series::new("FeatureUsageScore".into(), &[self.feature_usage_score]).into(),
            Series::new("TotalCharges".into(), &[self.total_charges]).into(),
        ])
        .map_err(|e| ChurnError::DataError(e.to_string()))
    }
}

/// Prediction returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub probability: f64,
}

impl PredictionResult {
    /// Apply the fixed decision threshold to a positive-class probability.
    /// The label is `Churn` only when the probability is strictly above the
    /// threshold.
    pub fn from_probability(probability: f64) -> Self {
        let prediction = if probability > CHURN_THRESHOLD {
            LABEL_CHURN
        } else {
            LABEL_NO_CHURN
        };

        Self {
            prediction: prediction.to_string(),
            probability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_record() {
        let json = r#"{
            "TenureMonths": 43,
            "ContractType": "One year",
            "MonthlyCharges": 102.80,
            "SupportTickets": 3,
            "FeatureUsageScore": 85,
            "TotalCharges": 4400.50
        }"#;

        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tenure_months, 43);
        assert_eq!(record.contract_type, "One year");
        assert!((record.monthly_charges - 102.80).abs() < 1e-10);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // TotalCharges omitted
        let json = r#"{
            "TenureMonths": 43,
            "ContractType": "One year",
            "MonthlyCharges": 102.80,
            "SupportTickets": 3,
            "FeatureUsageScore": 85
        }"#;

        assert!(serde_json::from_str::<CustomerRecord>(json).is_err());
    }

    #[test]
    fn test_wrong_typed_field_is_rejected() {
        let json = r#"{
            "TenureMonths": "forty",
            "ContractType": "One year",
            "MonthlyCharges": 102.80,
            "SupportTickets": 3,
            "FeatureUsageScore": 85,
            "TotalCharges": 4400.50
        }"#;

        assert!(serde_json::from_str::<CustomerRecord>(json).is_err());
    }

    #[test]
    fn test_row_columns_match_schema_order() {
        let record = CustomerRecord {
            tenure_months: 12,
            contract_type: "Month-to-month".to_string(),
            monthly_charges: 70.0,
            support_tickets: 1,
            feature_usage_score: 40,
            total_charges: 840.0,
        };

        let row = record.to_row().unwrap();
        assert_eq!(row.height(), 1);
        let names: Vec<String> = row
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, FEATURE_COLUMNS);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the threshold stays on the negative side
        let at = PredictionResult::from_probability(0.5);
        assert_eq!(at.prediction, LABEL_NO_CHURN);

        let above = PredictionResult::from_probability(0.500001);
        assert_eq!(above.prediction, LABEL_CHURN);

        let below = PredictionResult::from_probability(0.22);
        assert_eq!(below.prediction, LABEL_NO_CHURN);
    }
}
