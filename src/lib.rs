pub mod combat;
pub mod config;
pub mod display;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod stats;
