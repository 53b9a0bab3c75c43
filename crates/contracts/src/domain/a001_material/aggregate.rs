use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::enums::MaterialType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub Uuid);

impl MaterialId {
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

impl AggregateId for MaterialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MaterialId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A filament spool / resin type stocked by the workshop.
///
/// `description` of the base aggregate is the material's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    #[serde(flatten)]
    pub base: BaseAggregate<MaterialId>,

    #[serde(rename = "materialType")]
    pub material_type: MaterialType,
    pub color: Option<String>,
    pub brand: Option<String>,

    // Cost
    #[serde(rename = "costPerGram")]
    pub cost_per_gram: f64,

    // Inventory
    #[serde(rename = "currentStockGrams")]
    pub current_stock_grams: f64,
    #[serde(rename = "lowStockThreshold")]
    pub low_stock_threshold: f64,

    // Printing properties
    #[serde(rename = "printTempMin")]
    pub print_temp_min: Option<f64>,
    #[serde(rename = "printTempMax")]
    pub print_temp_max: Option<f64>,
    #[serde(rename = "bedTempMin")]
    pub bed_temp_min: Option<f64>,
    #[serde(rename = "bedTempMax")]
    pub bed_temp_max: Option<f64>,
}

impl Material {
    pub fn new_for_insert(code: String, dto: &MaterialDto) -> Self {
        let mut material = Self {
            base: BaseAggregate::new(MaterialId::new_v4(), code, dto.description.clone()),
            material_type: dto.material_type,
            color: None,
            brand: None,
            cost_per_gram: 0.0,
            current_stock_grams: 0.0,
            low_stock_threshold: 0.0,
            print_temp_min: None,
            print_temp_max: None,
            bed_temp_min: None,
            bed_temp_max: None,
        };
        material.apply(dto);
        material
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// True when the remaining stock is at or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.current_stock_grams <= self.low_stock_threshold
    }

    /// Copy form fields onto the aggregate
    pub fn apply(&mut self, dto: &MaterialDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.material_type = dto.material_type;
        self.color = dto.color.clone();
        self.brand = dto.brand.clone();
        self.cost_per_gram = dto.cost_per_gram;
        self.current_stock_grams = dto.current_stock_grams;
        self.low_stock_threshold = dto.low_stock_threshold;
        self.print_temp_min = dto.print_temp_min;
        self.print_temp_max = dto.print_temp_max;
        self.bed_temp_min = dto.bed_temp_min;
        self.bed_temp_max = dto.bed_temp_max;
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.base.description.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if name.chars().count() > 50 {
            return Err("Name is too long (max 50 characters)".into());
        }
        if !(self.cost_per_gram > 0.0) {
            return Err("Cost per gram must be positive".into());
        }
        if self.current_stock_grams < 0.0 {
            return Err("Stock cannot be negative".into());
        }
        if self.low_stock_threshold < 0.0 {
            return Err("Low stock threshold cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Material {
    type Id = MaterialId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "material"
    }

    fn element_name() -> &'static str {
        "Material"
    }

    fn list_name() -> &'static str {
        "Materials"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "materialType")]
    pub material_type: MaterialType,
    pub color: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "costPerGram")]
    pub cost_per_gram: f64,
    #[serde(rename = "currentStockGrams", default)]
    pub current_stock_grams: f64,
    #[serde(rename = "lowStockThreshold", default)]
    pub low_stock_threshold: f64,
    #[serde(rename = "printTempMin")]
    pub print_temp_min: Option<f64>,
    #[serde(rename = "printTempMax")]
    pub print_temp_max: Option<f64>,
    #[serde(rename = "bedTempMin")]
    pub bed_temp_min: Option<f64>,
    #[serde(rename = "bedTempMax")]
    pub bed_temp_max: Option<f64>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for MaterialDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            material_type: MaterialType::Pla,
            color: None,
            brand: None,
            cost_per_gram: 0.0,
            current_stock_grams: 0.0,
            low_stock_threshold: 0.0,
            print_temp_min: None,
            print_temp_max: None,
            bed_temp_min: None,
            bed_temp_max: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> MaterialDto {
        MaterialDto {
            description: "Prusament PLA Galaxy Black".into(),
            cost_per_gram: 2.5,
            current_stock_grams: 750.0,
            low_stock_threshold: 200.0,
            ..MaterialDto::default()
        }
    }

    #[test]
    fn test_validate_accepts_good_material() {
        let material = Material::new_for_insert("MAT-1".into(), &dto());
        assert!(material.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_cost() {
        let mut bad = dto();
        bad.cost_per_gram = 0.0;
        let material = Material::new_for_insert("MAT-1".into(), &bad);
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_low_stock() {
        let mut material = Material::new_for_insert("MAT-1".into(), &dto());
        assert!(!material.is_low_stock());
        material.current_stock_grams = 200.0;
        assert!(material.is_low_stock());
        material.current_stock_grams = 199.0;
        assert!(material.is_low_stock());
    }
}
