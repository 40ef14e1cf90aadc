pub mod sort_order;

pub use sort_order::SortOrder;
