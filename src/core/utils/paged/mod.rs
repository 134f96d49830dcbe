//! Page-based allocation helpers for huge array initialization.

pub mod page_allocator;
pub mod parallel_long_page_creator;

pub use page_allocator::{DirectPageAllocator, PageAllocator, PageAllocatorFactory};
pub use parallel_long_page_creator::ParallelLongPageCreator;
