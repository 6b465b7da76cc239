pub mod api;
pub mod main;
