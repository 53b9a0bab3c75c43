pub mod maintenance_type;
pub mod material_type;
pub mod order_status;
pub mod transaction_kind;

pub use maintenance_type::MaintenanceType;
pub use material_type::MaterialType;
pub use order_status::OrderStatus;
pub use transaction_kind::TransactionKind;
