use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Printing,
    Finished,
    Delivered,
}

impl OrderStatus {
    /// Stable code used in the database and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Printing => "printing",
            OrderStatus::Finished => "finished",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// All statuses, in lifecycle order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Printing,
            OrderStatus::Finished,
            OrderStatus::Delivered,
        ]
    }

    /// Parse from the stable code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(OrderStatus::New),
            "printing" => Some(OrderStatus::Printing),
            "finished" => Some(OrderStatus::Finished),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Name of the timestamp column stamped when an order enters this
    /// status. `New` has no stamp of its own (created_at covers it).
    pub fn timestamp_field(&self) -> Option<&'static str> {
        match self {
            OrderStatus::New => None,
            OrderStatus::Printing => Some("started_at"),
            OrderStatus::Finished => Some("finished_at"),
            OrderStatus::Delivered => Some("delivered_at"),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for s in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(OrderStatus::from_code("cancelled"), None);
    }

    #[test]
    fn test_timestamp_fields() {
        assert_eq!(OrderStatus::New.timestamp_field(), None);
        assert_eq!(OrderStatus::Printing.timestamp_field(), Some("started_at"));
        assert_eq!(OrderStatus::Finished.timestamp_field(), Some("finished_at"));
        assert_eq!(
            OrderStatus::Delivered.timestamp_field(),
            Some("delivered_at")
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Printing).unwrap(),
            "\"printing\""
        );
        let s: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(s, OrderStatus::Delivered);
    }
}
