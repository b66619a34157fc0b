//! Terminal front-end for the recipe store: command-line parsing,
//! configuration, and the loop that drives the core state machine.
pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod runner;
pub mod session;
