pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod directory;
pub mod error;
pub mod icons;
pub mod list_transaction;
pub mod money;
pub mod object_diff;
pub mod query_params;
