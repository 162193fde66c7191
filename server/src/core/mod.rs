pub mod app;
pub mod config;
pub mod extract;
pub mod gate;

// vim: ts=4
