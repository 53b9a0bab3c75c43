pub mod common;

pub mod a001_material;
pub mod a002_printer;
pub mod a003_part;
pub mod a004_order;
pub mod a005_maintenance_log;
pub mod a006_inventory_transaction;
pub mod a007_user_settings;
pub mod a008_exchange_rates;
