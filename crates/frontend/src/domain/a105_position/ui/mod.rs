pub mod select;

pub use select::PositionSelect;
