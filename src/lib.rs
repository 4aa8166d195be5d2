//! Terminal calculator: a pure reducer over calculator state, an operand
//! formatter, and a ratatui front end that dispatches button presses to it.

pub mod calculator;
pub mod config;
pub mod logging;
pub mod ui;
