use serde::{Deserialize, Serialize};

/// Kinds of material stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Purchase,
    Consumption,
    Adjustment,
    Waste,
}

impl TransactionKind {
    /// Stable code used in the database and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Consumption => "consumption",
            TransactionKind::Adjustment => "adjustment",
            TransactionKind::Waste => "waste",
        }
    }

    /// All movement kinds
    pub fn all() -> Vec<TransactionKind> {
        vec![
            TransactionKind::Purchase,
            TransactionKind::Consumption,
            TransactionKind::Adjustment,
            TransactionKind::Waste,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "purchase" => Some(TransactionKind::Purchase),
            "consumption" => Some(TransactionKind::Consumption),
            "adjustment" => Some(TransactionKind::Adjustment),
            "waste" => Some(TransactionKind::Waste),
            _ => None,
        }
    }

    /// Sign applied to the material stock: purchases and adjustments add
    /// the amount, consumption and waste subtract it.
    pub fn stock_sign(&self) -> f64 {
        match self {
            TransactionKind::Purchase | TransactionKind::Adjustment => 1.0,
            TransactionKind::Consumption | TransactionKind::Waste => -1.0,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_sign() {
        assert_eq!(TransactionKind::Purchase.stock_sign(), 1.0);
        assert_eq!(TransactionKind::Adjustment.stock_sign(), 1.0);
        assert_eq!(TransactionKind::Consumption.stock_sign(), -1.0);
        assert_eq!(TransactionKind::Waste.stock_sign(), -1.0);
    }
}
