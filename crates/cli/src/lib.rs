//! Unitcuts CLI Library
//!
//! This crate provides the command-line interface for unitcuts. It parses
//! arguments, loads settings, picks the collaborators for the run and hands
//! them to the recipes in `unitcuts_core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and settings overrides
//! - [`collaborator_choice`]: Selector and advisor selection
//! - [`command_selection`]: Built-in list selector and yes/no prompter
//!
//! # Examples
//!
//! ```bash
//! # Pick any service, then an action
//! uc service
//!
//! # Narrow the list and skip the action menu
//! uc service ssh restart
//!
//! # Print the systemctl command instead of running it
//! uc --dry-run service nginx stop
//!
//! # Open a shell in a frequently used directory
//! uc jump projects
//! ```

pub mod cli_args;
pub mod collaborator_choice;
pub mod command_selection;
