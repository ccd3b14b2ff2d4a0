//! Command implementations that run outside an open tracker.

pub mod init;
