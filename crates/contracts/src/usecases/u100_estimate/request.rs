use serde::{Deserialize, Serialize};

/// Quote calculator request: what-if costing without touching the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Material whose cost per gram is used
    #[serde(rename = "materialId")]
    pub material_id: String,
    #[serde(rename = "weightGrams")]
    pub weight_grams: f64,
    #[serde(rename = "printTimeMinutes")]
    pub print_time_minutes: f64,
    /// Markup percent (clamped server-side to [0, 500])
    #[serde(rename = "markupPercent", default = "default_markup")]
    pub markup_percent: f64,
}

fn default_markup() -> f64 {
    30.0
}
