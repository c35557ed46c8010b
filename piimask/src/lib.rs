// piimask/src/lib.rs
//! # piimask CLI
//!
//! The command-line front end for `piimask-core`. It only collects text (from
//! a file, stdin, or labeled fields), hands it to a `RedactionEngine` as one
//! string, and writes or summarises the result. All detection and masking
//! happens in the core crate.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::build_engine;
