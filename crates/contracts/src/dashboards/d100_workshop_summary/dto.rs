use serde::{Deserialize, Serialize};

/// Response of the workshop summary dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopSummaryResponse {
    /// Period in format "YYYY-MM" (current month, UTC)
    pub period: String,

    /// Orders created this month
    #[serde(rename = "ordersThisMonth")]
    pub orders_this_month: u64,
    /// Revenue this month (sum of order totals, RUB)
    #[serde(rename = "revenueThisMonth")]
    pub revenue_this_month: f64,
    /// Revenue / order count; 0 when the month is empty
    #[serde(rename = "averageOrderValue")]
    pub average_order_value: f64,

    /// Parts in the catalog
    #[serde(rename = "totalParts")]
    pub total_parts: u64,

    /// All-time order counts by status
    #[serde(rename = "ordersByStatus")]
    pub orders_by_status: OrdersByStatus,

    /// Materials at or below their reorder threshold
    #[serde(rename = "lowStockMaterials")]
    pub low_stock_materials: u64,
    /// Active printers past their maintenance interval
    #[serde(rename = "printersDueMaintenance")]
    pub printers_due_maintenance: u64,
}

/// Order counts per lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrdersByStatus {
    pub new: u64,
    pub printing: u64,
    pub finished: u64,
    pub delivered: u64,
}
