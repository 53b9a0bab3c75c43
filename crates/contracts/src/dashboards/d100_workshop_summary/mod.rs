pub mod dto;

pub use dto::{OrdersByStatus, WorkshopSummaryResponse};
