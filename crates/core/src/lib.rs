//! Unitcuts Core Library
//!
//! This crate provides the recipes behind `uc`, a small runner that wraps
//! `systemctl`, `fzf`, `zoxide` and `aspell` behind interactive prompts.
//!
//! # Key Features
//!
//! - **Service recipe**: Pick a unit, pick an action, confirm twice, run it
//! - **Jump recipe**: Pick a frequent directory and open a shell rooted there
//! - **Collaborator traits**: Every external tool sits behind a trait
//! - **Settings**: YAML settings with prompt templates
//!
//! # Examples
//!
//! Filtering the unit list the way the service recipe does:
//!
//! ```
//! use unitcuts_core::candidates::CandidateSet;
//!
//! let records = ["nginx.service loaded active running", "sshd.service loaded active running"];
//! let offered = CandidateSet::from_records(&records).filter("NGI");
//! assert_eq!(offered.names(), ["nginx.service"]);
//! ```

pub mod action;
pub mod advice;
pub mod candidates;
pub mod collaborators;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod fzf;
pub mod interpolation;
pub mod jump;
pub mod outcome;
pub mod pipeline;
pub mod session;
pub mod systemctl;
