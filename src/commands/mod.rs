//! CLI commands

pub mod add;
pub mod build;
pub mod copy404;
pub mod dev;
pub mod list;
pub mod new;
pub mod watch;
