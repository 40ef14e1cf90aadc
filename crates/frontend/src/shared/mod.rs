pub mod api_utils;
pub mod async_select;
pub mod config;
