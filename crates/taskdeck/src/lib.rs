//! Taskdeck - A personal task tracker.
//!
//! This crate provides both a CLI application and a library for task
//! tracking: dependency inference from task descriptions, ready-task
//! recommendations, and a reversible undo/redo action log over JSONL
//! storage.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod core;
pub mod domain;
pub mod error;
pub mod export;
pub mod store;

// Public CLI module (needed by binary)
pub mod cli;

// Command implementations
pub mod commands;

// Application context
pub mod app;

// Output formatting
pub mod output;
