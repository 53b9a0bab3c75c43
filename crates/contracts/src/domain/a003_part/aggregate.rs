use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::shared::costing::{self, CostBreakdown, CostInput};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId(pub Uuid);

impl PartId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PartId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PartId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A printable part in the catalog.
///
/// Cost columns are derived from the referenced material and the fleet's
/// hourly rate; they are recomputed on every write, never accepted from
/// the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(flatten)]
    pub base: BaseAggregate<PartId>,

    // Print parameters
    #[serde(rename = "materialId")]
    pub material_id: String,
    #[serde(rename = "weightGrams")]
    pub weight_grams: f64,
    #[serde(rename = "printTimeMinutes")]
    pub print_time_minutes: f64,

    // Derived costs
    #[serde(rename = "materialCost")]
    pub material_cost: f64,
    #[serde(rename = "printCost")]
    pub print_cost: f64,
    #[serde(rename = "baseCost")]
    pub base_cost: f64,

    // Pricing
    #[serde(rename = "defaultMarkupPercent")]
    pub default_markup_percent: f64,
    #[serde(rename = "suggestedPrice")]
    pub suggested_price: f64,

    // Catalog metadata
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Part {
    pub fn new_for_insert(code: String, dto: &PartDto) -> Self {
        let mut part = Self {
            base: BaseAggregate::new(PartId::new_v4(), code, dto.description.clone()),
            material_id: dto.material_id.clone(),
            weight_grams: 0.0,
            print_time_minutes: 0.0,
            material_cost: 0.0,
            print_cost: 0.0,
            base_cost: 0.0,
            default_markup_percent: 0.0,
            suggested_price: 0.0,
            category: None,
            tags: Vec::new(),
        };
        part.apply(dto);
        part
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Copy form fields onto the aggregate (cost columns untouched)
    pub fn apply(&mut self, dto: &PartDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.material_id = dto.material_id.clone();
        self.weight_grams = dto.weight_grams;
        self.print_time_minutes = dto.print_time_minutes;
        self.default_markup_percent = costing::clamp_markup(dto.default_markup_percent);
        self.category = dto.category.clone();
        self.tags = dto.tags.clone();
    }

    /// Recompute the derived cost columns from current print parameters.
    pub fn recalculate_costs(
        &mut self,
        material_cost_per_gram: f64,
        printer_hourly_rate: f64,
    ) -> anyhow::Result<CostBreakdown> {
        let breakdown = costing::calculate_part_cost(&CostInput {
            weight_grams: self.weight_grams,
            print_time_minutes: self.print_time_minutes,
            material_cost_per_gram,
            printer_hourly_rate,
        })?;

        self.material_cost = breakdown.material_cost;
        self.print_cost = breakdown.print_cost;
        self.base_cost = breakdown.base_cost;
        self.suggested_price = breakdown.suggested_price(self.default_markup_percent);
        Ok(breakdown)
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.base.description.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if name.chars().count() > 100 {
            return Err("Name is too long (max 100 characters)".into());
        }
        if self.material_id.trim().is_empty() {
            return Err("Material is required".into());
        }
        if !(self.weight_grams > 0.0) {
            return Err("Weight must be positive".into());
        }
        if self.weight_grams > 10_000.0 {
            return Err("Weight seems too high".into());
        }
        if !(self.print_time_minutes > 0.0) {
            return Err("Print time must be positive".into());
        }
        if self.print_time_minutes > 10_000.0 {
            return Err("Print time seems too high".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Part {
    type Id = PartId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "part"
    }

    fn element_name() -> &'static str {
        "Part"
    }

    fn list_name() -> &'static str {
        "Parts"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "materialId")]
    pub material_id: String,
    #[serde(rename = "weightGrams")]
    pub weight_grams: f64,
    #[serde(rename = "printTimeMinutes")]
    pub print_time_minutes: f64,
    #[serde(rename = "defaultMarkupPercent")]
    pub default_markup_percent: f64,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for PartDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            material_id: String::new(),
            weight_grams: 0.0,
            print_time_minutes: 0.0,
            default_markup_percent: 30.0,
            category: None,
            tags: Vec::new(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PartDto {
        PartDto {
            description: "Raspberry Pi 4 case".into(),
            material_id: Uuid::new_v4().to_string(),
            weight_grams: 50.0,
            print_time_minutes: 90.0,
            default_markup_percent: 30.0,
            ..PartDto::default()
        }
    }

    #[test]
    fn test_recalculate_costs() {
        let mut part = Part::new_for_insert("PRT-1".into(), &dto());
        part.recalculate_costs(2.0, 100.0).unwrap();
        assert_eq!(part.material_cost, 100.0);
        assert_eq!(part.print_cost, 150.0);
        assert_eq!(part.base_cost, 250.0);
        assert_eq!(part.suggested_price, 325.0);
    }

    #[test]
    fn test_apply_clamps_markup() {
        let mut over = dto();
        over.default_markup_percent = 900.0;
        let part = Part::new_for_insert("PRT-1".into(), &over);
        assert_eq!(part.default_markup_percent, 500.0);
    }

    #[test]
    fn test_validate_limits() {
        let mut bad = dto();
        bad.weight_grams = 20_000.0;
        let part = Part::new_for_insert("PRT-1".into(), &bad);
        assert!(part.validate().is_err());

        let mut bad = dto();
        bad.print_time_minutes = 0.0;
        let part = Part::new_for_insert("PRT-1".into(), &bad);
        assert!(part.validate().is_err());
    }
}
