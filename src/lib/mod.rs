pub mod config;
pub mod scaffold;
