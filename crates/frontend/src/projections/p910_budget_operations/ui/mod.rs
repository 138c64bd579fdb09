pub mod directories;
pub mod filter;
pub mod list;
pub mod page;
pub mod tabs;
pub mod view_model;

pub use page::BudgetOperationsPage;
