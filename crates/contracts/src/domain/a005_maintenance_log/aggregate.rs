use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::enums::MaintenanceType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceLogId(pub Uuid);

impl MaintenanceLogId {
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

impl AggregateId for MaintenanceLogId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MaintenanceLogId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// One maintenance event of a printer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceLog {
    #[serde(flatten)]
    pub base: BaseAggregate<MaintenanceLogId>,

    #[serde(rename = "printerId")]
    pub printer_id: String,
    #[serde(rename = "maintenanceType")]
    pub maintenance_type: MaintenanceType,
    /// Printer's odometer (total print hours) at the time of maintenance
    #[serde(rename = "hoursAtMaintenance")]
    pub hours_at_maintenance: f64,
    pub cost: Option<f64>,
    #[serde(rename = "performedAt")]
    pub performed_at: DateTime<Utc>,
    #[serde(rename = "nextDueAt")]
    pub next_due_at: Option<DateTime<Utc>>,
}

impl MaintenanceLog {
    /// `description` of the base aggregate carries the work summary.
    pub fn new_for_insert(code: String, dto: &MaintenanceLogDto, hours_at_maintenance: f64) -> Self {
        Self {
            base: BaseAggregate::new(MaintenanceLogId::new_v4(), code, dto.description.clone()),
            printer_id: dto.printer_id.clone(),
            maintenance_type: dto.maintenance_type,
            hours_at_maintenance,
            cost: dto.cost,
            performed_at: Utc::now(),
            next_due_at: dto.next_due_at,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        let description = self.base.description.trim();
        if description.is_empty() {
            return Err("Description is required".into());
        }
        if description.chars().count() > 500 {
            return Err("Description is too long (max 500 characters)".into());
        }
        if self.printer_id.trim().is_empty() {
            return Err("Printer is required".into());
        }
        if let Some(cost) = self.cost {
            if cost < 0.0 {
                return Err("Cost cannot be negative".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for MaintenanceLog {
    type Id = MaintenanceLogId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "maintenance_log"
    }

    fn element_name() -> &'static str {
        "Maintenance record"
    }

    fn list_name() -> &'static str {
        "Maintenance log"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceLogDto {
    pub id: Option<String>,
    #[serde(rename = "printerId")]
    pub printer_id: String,
    #[serde(rename = "maintenanceType")]
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub cost: Option<f64>,
    #[serde(rename = "nextDueAt")]
    pub next_due_at: Option<DateTime<Utc>>,
}

impl Default for MaintenanceLogDto {
    fn default() -> Self {
        Self {
            id: None,
            printer_id: String::new(),
            maintenance_type: MaintenanceType::Cleaning,
            description: String::new(),
            cost: None,
            next_due_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let dto = MaintenanceLogDto {
            printer_id: Uuid::new_v4().to_string(),
            maintenance_type: MaintenanceType::NozzleChange,
            description: "Swapped 0.4mm brass nozzle".into(),
            cost: Some(350.0),
            ..MaintenanceLogDto::default()
        };
        let log = MaintenanceLog::new_for_insert("MNT-1".into(), &dto, 245.5);
        assert!(log.validate().is_ok());
        assert_eq!(log.hours_at_maintenance, 245.5);

        let mut bad = dto.clone();
        bad.description = String::new();
        let log = MaintenanceLog::new_for_insert("MNT-1".into(), &bad, 0.0);
        assert!(log.validate().is_err());

        let mut bad = dto;
        bad.cost = Some(-1.0);
        let log = MaintenanceLog::new_for_insert("MNT-1".into(), &bad, 0.0);
        assert!(log.validate().is_err());
    }
}
