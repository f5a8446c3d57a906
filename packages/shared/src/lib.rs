//! Shared utilities for Realchat packages.

pub mod logger;
pub mod time;
