use serde::{Deserialize, Serialize};

/// Quote calculator result (all amounts in RUB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    #[serde(rename = "materialCost")]
    pub material_cost: f64,
    #[serde(rename = "printCost")]
    pub print_cost: f64,
    #[serde(rename = "baseCost")]
    pub base_cost: f64,
    /// `base_cost` with the requested markup applied
    #[serde(rename = "suggestedPrice")]
    pub suggested_price: f64,
    /// Hourly rate that was used (first active printer or the fallback)
    #[serde(rename = "printerHourlyRate")]
    pub printer_hourly_rate: f64,
}
