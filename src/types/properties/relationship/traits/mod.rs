mod property_cursor;
mod relationship_consumer;
mod relationship_cursor;
mod relationship_iterator;
mod relationship_predicate;
mod relationship_with_property_consumer;

pub use property_cursor::{EmptyPropertyCursor, PropertyCursor, PropertyValue};
pub use relationship_consumer::RelationshipConsumer;
pub use relationship_cursor::{
    ModifiableRelationshipCursor, RelationshipCursor, RelationshipCursorBox,
};
pub use relationship_iterator::{RelationshipIterator, RelationshipIteratorExt, RelationshipStream};
pub use relationship_predicate::{
    all_relationships, no_relationships, not_relationships, RelationshipPredicate,
};
pub use relationship_with_property_consumer::RelationshipWithPropertyConsumer;
