pub mod page_util;
