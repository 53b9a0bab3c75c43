//! Shared contracts between backend and frontend.
//!
//! Aggregate roots, DTOs, enums and the pure business arithmetic
//! (costing, currency). Compiled both natively and to wasm.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
