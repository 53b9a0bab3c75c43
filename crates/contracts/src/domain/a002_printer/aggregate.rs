use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrinterId(pub Uuid);

impl PrinterId {
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

impl AggregateId for PrinterId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PrinterId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A printer in the workshop fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    #[serde(flatten)]
    pub base: BaseAggregate<PrinterId>,

    pub model: Option<String>,

    // Cost settings
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "powerConsumptionWatts")]
    pub power_consumption_watts: f64,
    #[serde(rename = "electricityCostPerKwh")]
    pub electricity_cost_per_kwh: f64,

    // Usage tracking
    #[serde(rename = "totalPrintHours", default)]
    pub total_print_hours: f64,
    #[serde(rename = "totalPrintCount", default)]
    pub total_print_count: i64,

    // Maintenance
    #[serde(rename = "lastMaintenanceAt")]
    pub last_maintenance_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "hoursAtLastMaintenance", default)]
    pub hours_at_last_maintenance: f64,
    #[serde(rename = "maintenanceIntervalHours")]
    pub maintenance_interval_hours: f64,

    // Status
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "currentJobOrderId")]
    pub current_job_order_id: Option<String>,
}

impl Printer {
    /// New printers start with zero counters and active status.
    pub fn new_for_insert(code: String, dto: &PrinterDto) -> Self {
        let mut printer = Self {
            base: BaseAggregate::new(PrinterId::new_v4(), code, dto.description.clone()),
            model: None,
            hourly_rate: 0.0,
            power_consumption_watts: 0.0,
            electricity_cost_per_kwh: 0.0,
            total_print_hours: 0.0,
            total_print_count: 0,
            last_maintenance_at: None,
            hours_at_last_maintenance: 0.0,
            maintenance_interval_hours: 0.0,
            is_active: true,
            current_job_order_id: None,
        };
        printer.apply(dto);
        printer
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Hours printed since the last recorded maintenance
    pub fn hours_since_maintenance(&self) -> f64 {
        (self.total_print_hours - self.hours_at_last_maintenance).max(0.0)
    }

    /// True when the printer has reached its maintenance interval
    pub fn is_maintenance_due(&self) -> bool {
        self.maintenance_interval_hours > 0.0
            && self.hours_since_maintenance() >= self.maintenance_interval_hours
    }

    /// Copy form fields onto the aggregate. Usage counters and
    /// maintenance stamps are not form-editable.
    pub fn apply(&mut self, dto: &PrinterDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.model = dto.model.clone();
        self.hourly_rate = dto.hourly_rate;
        self.power_consumption_watts = dto.power_consumption_watts;
        self.electricity_cost_per_kwh = dto.electricity_cost_per_kwh;
        self.maintenance_interval_hours = dto.maintenance_interval_hours;
        if let Some(is_active) = dto.is_active {
            self.is_active = is_active;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.base.description.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if name.chars().count() > 50 {
            return Err("Name is too long (max 50 characters)".into());
        }
        if self.hourly_rate < 0.0 {
            return Err("Hourly rate cannot be negative".into());
        }
        if !(0.0..=5000.0).contains(&self.power_consumption_watts) {
            return Err("Power consumption must be within 0..5000 W".into());
        }
        if self.electricity_cost_per_kwh < 0.0 {
            return Err("Electricity cost cannot be negative".into());
        }
        if !(self.maintenance_interval_hours > 0.0) {
            return Err("Maintenance interval must be positive".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Printer {
    type Id = PrinterId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "printer"
    }

    fn element_name() -> &'static str {
        "Printer"
    }

    fn list_name() -> &'static str {
        "Printers"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "powerConsumptionWatts", default)]
    pub power_consumption_watts: f64,
    #[serde(rename = "electricityCostPerKwh", default)]
    pub electricity_cost_per_kwh: f64,
    #[serde(rename = "maintenanceIntervalHours")]
    pub maintenance_interval_hours: f64,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for PrinterDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            model: None,
            hourly_rate: 0.0,
            power_consumption_watts: 0.0,
            electricity_cost_per_kwh: 0.0,
            maintenance_interval_hours: 0.0,
            is_active: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PrinterDto {
        PrinterDto {
            description: "Prusa MK4".into(),
            hourly_rate: 120.0,
            power_consumption_watts: 240.0,
            electricity_cost_per_kwh: 6.5,
            maintenance_interval_hours: 250.0,
            ..PrinterDto::default()
        }
    }

    #[test]
    fn test_new_printer_defaults() {
        let printer = Printer::new_for_insert("PRN-1".into(), &dto());
        assert!(printer.is_active);
        assert_eq!(printer.total_print_hours, 0.0);
        assert_eq!(printer.total_print_count, 0);
        assert!(printer.validate().is_ok());
    }

    #[test]
    fn test_maintenance_due() {
        let mut printer = Printer::new_for_insert("PRN-1".into(), &dto());
        assert!(!printer.is_maintenance_due());
        printer.total_print_hours = 260.0;
        assert!(printer.is_maintenance_due());
        // Maintenance resets the window
        printer.hours_at_last_maintenance = 260.0;
        assert!(!printer.is_maintenance_due());
    }

    #[test]
    fn test_validate_rejects_wattage_out_of_range() {
        let mut bad = dto();
        bad.power_consumption_watts = 6000.0;
        let printer = Printer::new_for_insert("PRN-1".into(), &bad);
        assert!(printer.validate().is_err());
    }
}
