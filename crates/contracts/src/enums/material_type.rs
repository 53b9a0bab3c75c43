use serde::{Deserialize, Serialize};

/// Filament / resin types stocked by the workshop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    Pla,
    Petg,
    Abs,
    Tpu,
    Nylon,
    Asa,
    Pc,
    Other,
}

impl MaterialType {
    /// Stable code used in the database and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            MaterialType::Pla => "PLA",
            MaterialType::Petg => "PETG",
            MaterialType::Abs => "ABS",
            MaterialType::Tpu => "TPU",
            MaterialType::Nylon => "Nylon",
            MaterialType::Asa => "ASA",
            MaterialType::Pc => "PC",
            MaterialType::Other => "Other",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        // Trade names, same in every locale
        self.code()
    }

    /// All material types
    pub fn all() -> Vec<MaterialType> {
        vec![
            MaterialType::Pla,
            MaterialType::Petg,
            MaterialType::Abs,
            MaterialType::Tpu,
            MaterialType::Nylon,
            MaterialType::Asa,
            MaterialType::Pc,
            MaterialType::Other,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PLA" => Some(MaterialType::Pla),
            "PETG" => Some(MaterialType::Petg),
            "ABS" => Some(MaterialType::Abs),
            "TPU" => Some(MaterialType::Tpu),
            "Nylon" => Some(MaterialType::Nylon),
            "ASA" => Some(MaterialType::Asa),
            "PC" => Some(MaterialType::Pc),
            "Other" => Some(MaterialType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for t in MaterialType::all() {
            assert_eq!(MaterialType::from_code(t.code()), Some(t));
        }
        assert_eq!(MaterialType::from_code("wood"), None);
    }
}
