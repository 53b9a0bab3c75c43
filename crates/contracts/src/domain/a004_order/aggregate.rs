use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore,
};
use crate::enums::OrderStatus;
use crate::shared::costing;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Line items
// ============================================================================
/// One part line of an order. `price_at_order` snapshots the part's
/// suggested price at creation time; later catalog edits do not move it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "partId")]
    pub part_id: String,
    #[serde(rename = "partName")]
    pub part_name: String,
    pub quantity: u32,
    #[serde(rename = "priceAtOrder")]
    pub price_at_order: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A customer order (document).
///
/// `code` of the base aggregate is the order number; `description` holds
/// the customer name for list display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    // Customer info (embedded, the workshop keeps no customer register)
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: Option<String>,
    #[serde(rename = "customerEmail")]
    pub customer_email: Option<String>,
    #[serde(rename = "customerTelegram")]
    pub customer_telegram: Option<String>,

    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,

    // Financials (derived once at creation)
    pub subtotal: f64,
    /// Absolute markup amount, not the percent
    pub markup: f64,
    pub total: f64,

    // Lifecycle stamps
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(rename = "deliveredAt")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(rename = "estimatedCompletion")]
    pub estimated_completion: Option<DateTime<Utc>>,

    pub notes: Option<String>,
}

impl Order {
    /// Assemble a new order from priced lines.
    ///
    /// `order_number` becomes the business code, totals are computed
    /// through the costing module.
    pub fn new_for_insert(
        order_number: String,
        customer: CustomerInfo,
        lines: Vec<OrderLine>,
        markup_percent: f64,
        notes: Option<String>,
    ) -> anyhow::Result<Self> {
        let priced: Vec<(f64, u32)> = lines
            .iter()
            .map(|l| (l.price_at_order, l.quantity))
            .collect();
        let totals = costing::calculate_order_totals(&priced, markup_percent)?;

        Ok(Self {
            base: BaseAggregate::new(OrderId::new_v4(), order_number, customer.name.clone()),
            customer_name: customer.name,
            customer_phone: customer.phone,
            customer_email: customer.email,
            customer_telegram: customer.telegram,
            status: OrderStatus::New,
            lines,
            subtotal: totals.subtotal,
            markup: totals.markup,
            total: totals.total,
            started_at: None,
            finished_at: None,
            delivered_at: None,
            estimated_completion: None,
            notes,
        })
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// The order number is the business code.
    pub fn order_number(&self) -> &str {
        &self.base.code
    }

    /// Move the order into a status, stamping the matching timestamp.
    /// A stamp is written only the first time the status is reached.
    pub fn set_status(&mut self, status: OrderStatus) {
        let now = Utc::now();
        self.status = status;
        match status {
            OrderStatus::New => {}
            OrderStatus::Printing => {
                self.started_at.get_or_insert(now);
            }
            OrderStatus::Finished => {
                self.finished_at.get_or_insert(now);
            }
            OrderStatus::Delivered => {
                self.delivered_at.get_or_insert(now);
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_customer_name(&self.customer_name)?;
        if let Some(phone) = self.customer_phone.as_deref().filter(|s| !s.is_empty()) {
            validate_phone(phone)?;
        }
        if let Some(email) = self.customer_email.as_deref().filter(|s| !s.is_empty()) {
            validate_email(email)?;
        }
        if let Some(tg) = self.customer_telegram.as_deref().filter(|s| !s.is_empty()) {
            validate_telegram(tg)?;
        }
        if self.lines.is_empty() {
            return Err("Order must have at least one part".into());
        }
        if self.lines.iter().any(|l| l.quantity == 0) {
            return Err("Quantity must be positive".into());
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > 1000 {
                return Err("Notes are too long (max 1000 characters)".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

/// Embedded customer fields of an order form
#[derive(Debug, Clone, Default)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub telegram: Option<String>,
}

impl AggregateRoot for Order {
    type Id = OrderId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

// ============================================================================
// Order numbers
// ============================================================================
/// Format an order number: `ORD-YYYYMMDD-NNN` where `NNN` is the 1-based
/// sequence within the day.
pub fn format_order_number(day: NaiveDate, seq_in_day: u32) -> String {
    format!("ORD-{}-{:03}", day.format("%Y%m%d"), seq_in_day)
}

// ============================================================================
// Field validators
// ============================================================================
fn validate_customer_name(name: &str) -> Result<(), String> {
    let len = name.trim().chars().count();
    if len < 2 {
        return Err("Name must be at least 2 characters".into());
    }
    if len > 100 {
        return Err("Name too long".into());
    }
    Ok(())
}

/// Digits, spaces, dashes, parentheses, optional leading `+`
fn validate_phone(phone: &str) -> Result<(), String> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let ok = !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')');
    if ok {
        Ok(())
    } else {
        Err("Invalid phone format".into())
    }
}

/// Single `@` with a dot somewhere in the domain part
fn validate_email(email: &str) -> Result<(), String> {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("Invalid email format".into()),
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("Invalid email format".into());
    }
    Ok(())
}

/// Word characters with an optional leading `@`
fn validate_telegram(handle: &str) -> Result<(), String> {
    let rest = handle.strip_prefix('@').unwrap_or(handle);
    let ok = !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok {
        Ok(())
    } else {
        Err("Invalid Telegram username".into())
    }
}

// ============================================================================
// DTOs
// ============================================================================
/// Order creation form: part references only, prices are snapshotted
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDto {
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: Option<String>,
    #[serde(rename = "customerEmail")]
    pub customer_email: Option<String>,
    #[serde(rename = "customerTelegram")]
    pub customer_telegram: Option<String>,
    pub parts: Vec<OrderLineDto>,
    /// Markup percent (clamped server-side to [0, 500])
    pub markup: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderLineDto {
    #[serde(rename = "partId")]
    pub part_id: String,
    pub quantity: u32,
}

/// Status transition request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusDto {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                part_id: Uuid::new_v4().to_string(),
                part_name: "Case".into(),
                quantity: 2,
                price_at_order: 325.0,
            },
            OrderLine {
                part_id: Uuid::new_v4().to_string(),
                part_name: "Lid".into(),
                quantity: 1,
                price_at_order: 100.0,
            },
        ]
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ivan Petrov".into(),
            phone: Some("+7 (900) 123-45-67".into()),
            email: Some("ivan@example.com".into()),
            telegram: Some("@ivan_petrov".into()),
        }
    }

    #[test]
    fn test_new_order_totals() {
        let order =
            Order::new_for_insert("ORD-20250301-001".into(), customer(), lines(), 10.0, None)
                .unwrap();
        assert_eq!(order.subtotal, 750.0);
        assert_eq!(order.markup, 75.0);
        assert_eq!(order.total, 825.0);
        assert_eq!(order.status, OrderStatus::New);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_new_order_rejects_empty_lines() {
        assert!(
            Order::new_for_insert("ORD-20250301-001".into(), customer(), vec![], 10.0, None)
                .is_err()
        );
    }

    #[test]
    fn test_status_stamps_once() {
        let mut order =
            Order::new_for_insert("ORD-20250301-001".into(), customer(), lines(), 0.0, None)
                .unwrap();
        assert!(order.started_at.is_none());

        order.set_status(OrderStatus::Printing);
        let first = order.started_at.expect("started_at stamped");

        order.set_status(OrderStatus::Finished);
        assert!(order.finished_at.is_some());

        // Going back to printing keeps the original stamp
        order.set_status(OrderStatus::Printing);
        assert_eq!(order.started_at, Some(first));
    }

    #[test]
    fn test_format_order_number() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_order_number(day, 1), "ORD-20250301-001");
        assert_eq!(format_order_number(day, 42), "ORD-20250301-042");
        assert_eq!(format_order_number(day, 123), "ORD-20250301-123");
    }

    #[test]
    fn test_customer_field_validation() {
        let mut bad = customer();
        bad.name = "A".into();
        assert!(
            Order::new_for_insert("ORD-1".into(), bad, lines(), 0.0, None)
                .unwrap()
                .validate()
                .is_err()
        );

        let mut bad = customer();
        bad.email = Some("not-an-email".into());
        assert!(
            Order::new_for_insert("ORD-1".into(), bad, lines(), 0.0, None)
                .unwrap()
                .validate()
                .is_err()
        );

        let mut bad = customer();
        bad.telegram = Some("has spaces".into());
        assert!(
            Order::new_for_insert("ORD-1".into(), bad, lines(), 0.0, None)
                .unwrap()
                .validate()
                .is_err()
        );

        let mut bad = customer();
        bad.phone = Some("call me".into());
        assert!(
            Order::new_for_insert("ORD-1".into(), bad, lines(), 0.0, None)
                .unwrap()
                .validate()
                .is_err()
        );
    }
}
