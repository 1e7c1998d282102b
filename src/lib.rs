//! wordslot - a single-player word tile game
//!
//! Draw tiles from the bag, lay them on a row of bonus slots, and submit the
//! word for points.

pub mod app;
pub mod config;
pub mod game;
pub mod tui;
