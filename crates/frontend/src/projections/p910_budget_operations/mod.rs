pub mod api;
pub mod columns;
pub mod config;
pub mod filter_form;
pub mod labels;
pub mod query;
pub mod routes;
pub mod state;
pub mod tabs;
pub mod ui;
