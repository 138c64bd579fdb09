pub mod date_input;
pub mod filter_panel;
pub mod loading_hero;
pub mod multi_select;
pub mod pagination_controls;
