//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing and the interactive menu with the service layer.

pub mod expense;
pub mod menu;

pub use expense::{
    handle_add_command, handle_categories_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ExportCommands, ListArgs, SummaryArgs,
};
pub use menu::{Menu, MenuChoice};
