pub use super::impls::default_relationship_property::DefaultRelationshipProperty;

/// Alias maintained for backwards compatibility with earlier modules that
/// referenced `RelationshipProperty` directly.
pub type RelationshipProperty = DefaultRelationshipProperty;
