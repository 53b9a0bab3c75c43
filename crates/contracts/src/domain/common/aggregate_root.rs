use super::{EntityMetadata, EventStore};

/// Trait for aggregate roots
///
/// Required methods and class-level metadata for every aggregate in the
/// system.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance methods (data of a concrete record)
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "ORD-20250301-001")
    fn code(&self) -> &str;

    /// Description / display name of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Event store
    fn events(&self) -> &EventStore;

    /// Mutable event store
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Class-level metadata (static data)
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "material")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Material")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Materials")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name for the system (e.g. "a001_material")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Database table prefix (e.g. "a001_material_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
