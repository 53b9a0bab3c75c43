pub mod a001_material;
pub mod a002_printer;
pub mod a003_part;
pub mod a004_order;
