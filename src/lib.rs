pub mod button;
pub mod config;
pub mod entities;
pub mod error;
pub mod formation;
pub mod game;
pub mod input;
pub mod limiter;
pub mod player;
pub mod render;
