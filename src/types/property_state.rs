use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle marker for a property column.
///
/// `Persistent` properties survive a store/export round-trip; `Transient` ones exist only
/// for the lifetime of the in-memory graph (e.g. a Pregel result materialized as a node
/// property so a downstream algorithm can consume it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyState {
    Persistent,
    Transient,
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyState::Persistent => write!(f, "PERSISTENT"),
            PropertyState::Transient => write!(f, "TRANSIENT"),
        }
    }
}
