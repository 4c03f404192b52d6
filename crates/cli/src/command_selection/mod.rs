//! Interactive selection and confirmation on the terminal.
//!
//! This module provides the terminal-side collaborators for `uc`: a
//! built-in list selector for machines without fzf, and a line prompter for
//! the yes/no questions.
//!
//! # User Interface
//!
//! The list selector supports:
//! - Typing to filter the list (fuzzy search)
//! - Arrow keys or the mouse wheel to move the highlight
//! - Enter or a click to pick the highlighted entry
//! - Escape to clear the filter, or to cancel when it is empty

pub mod input;
pub mod types;
pub mod ui;

pub use input::StdinPrompter;
pub use types::ListChoice;
pub use ui::prompt_for_choice;

use unitcuts_core::collaborators::Selector;
use unitcuts_core::error::Result;

/// [`Selector`] backed by the built-in crossterm list.
pub struct BuiltinSelector;

impl Selector for BuiltinSelector {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<String>> {
        let choice = prompt_for_choice(prompt, items)?;

        Ok(chosen_item(&choice, items))
    }
}

fn chosen_item(choice: &ListChoice, items: &[String]) -> Option<String> {
    match choice {
        ListChoice::Index(index) => items.get(*index).cloned(),
        ListChoice::Quit => None,
    }
}
