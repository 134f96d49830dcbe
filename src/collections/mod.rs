//! Huge, paged collection types used for graph-scale in-memory storage.
//!
//! These mirror the paging strategy used throughout the store: arrays are split
//! into pages so that a single allocation never has to exceed [`PageUtil::MAX_ARRAY_LENGTH`].

pub mod array_util;
pub mod cursor;
pub mod huge_array;
pub mod huge_atomic_array;
pub mod huge_atomic_bitset;
pub mod huge_sparse_list;
pub mod utils;

pub use array_util::ArrayUtil;
pub use huge_array::{HugeDoubleArray, HugeIntArray, HugeLongArray, HugeObjectArray};
pub use huge_atomic_array::{HugeAtomicDoubleArray, HugeAtomicLongArray};
pub use huge_atomic_bitset::HugeAtomicBitSet;
pub use huge_sparse_list::HugeSparseLongArrayArrayList;
pub use utils::page_util::PageUtil;
