use serde::{Deserialize, Serialize};

/// Kinds of printer maintenance recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Cleaning,
    Lubrication,
    BeltTension,
    NozzleChange,
    BedLeveling,
    FirmwareUpdate,
    Other,
}

impl MaintenanceType {
    /// Stable code used in the database and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            MaintenanceType::Cleaning => "cleaning",
            MaintenanceType::Lubrication => "lubrication",
            MaintenanceType::BeltTension => "belt_tension",
            MaintenanceType::NozzleChange => "nozzle_change",
            MaintenanceType::BedLeveling => "bed_leveling",
            MaintenanceType::FirmwareUpdate => "firmware_update",
            MaintenanceType::Other => "other",
        }
    }

    /// All maintenance kinds
    pub fn all() -> Vec<MaintenanceType> {
        vec![
            MaintenanceType::Cleaning,
            MaintenanceType::Lubrication,
            MaintenanceType::BeltTension,
            MaintenanceType::NozzleChange,
            MaintenanceType::BedLeveling,
            MaintenanceType::FirmwareUpdate,
            MaintenanceType::Other,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cleaning" => Some(MaintenanceType::Cleaning),
            "lubrication" => Some(MaintenanceType::Lubrication),
            "belt_tension" => Some(MaintenanceType::BeltTension),
            "nozzle_change" => Some(MaintenanceType::NozzleChange),
            "bed_leveling" => Some(MaintenanceType::BedLeveling),
            "firmware_update" => Some(MaintenanceType::FirmwareUpdate),
            "other" => Some(MaintenanceType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
