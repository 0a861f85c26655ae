pub mod app;
pub mod data;
