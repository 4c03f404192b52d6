//! The `service` recipe: pick a unit, pick an action, confirm, run.
//!
//! The run is a straight chain of six stages. Every stage before the last
//! is a read-only query and can stop the chain with an [`AbortReason`]. Only
//! the last stage changes anything, by handing the action and unit to the
//! [`Executor`] exactly once.

use std::collections::HashMap;
use std::io::Write;

use itertools::Itertools;
use log::{debug, warn};

use crate::action::{Action, ActionChoice};
use crate::candidates::CandidateSet;
use crate::collaborators::{Advisor, Executor, Prompter, Selector, UnitEnumerator};
use crate::confirmation::ConfirmationAnswer;
use crate::error::Result;
use crate::interpolation::{render_prompt, ACTION_KEY, UNIT_KEY};
use crate::outcome::{AbortReason, Outcome};

/// Selector label for the unit list.
pub const UNIT_SELECT_PROMPT: &str = "unit";
/// Selector label for the action menu.
pub const ACTION_SELECT_PROMPT: &str = "action";

pub const DEFAULT_CONFIRM_SELECTION_PROMPT: &str = "Manage `{unit}`?";
pub const DEFAULT_CONFIRM_EXECUTION_PROMPT: &str = "Run `{action}` on `{unit}`?";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Answer both confirmations with yes without asking.
    pub assume_yes: bool,
    /// Reject a supplied action that is not one of [`Action::ALL`].
    pub strict_actions: bool,
    /// Template with a `{unit}` placeholder.
    pub confirm_selection_prompt: String,
    /// Template with `{unit}` and `{action}` placeholders.
    pub confirm_execution_prompt: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            assume_yes: false,
            strict_actions: false,
            confirm_selection_prompt: DEFAULT_CONFIRM_SELECTION_PROMPT.to_string(),
            confirm_execution_prompt: DEFAULT_CONFIRM_EXECUTION_PROMPT.to_string(),
        }
    }
}

pub struct Pipeline<'a> {
    pub enumerator: &'a dyn UnitEnumerator,
    pub selector: &'a dyn Selector,
    pub advisor: &'a dyn Advisor,
    pub prompter: &'a dyn Prompter,
    pub executor: &'a dyn Executor,
    pub options: PipelineOptions,
}

impl Pipeline<'_> {
    /// Runs the recipe once.
    ///
    /// `pattern` narrows the unit list, `action` skips the action menu. Empty
    /// strings count as absent. Informational text is written to `messages`.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails, a prompt template cannot
    /// be rendered, or a strict run is given an unknown action. Declined
    /// prompts and empty selections are not errors; they come back as
    /// [`Outcome::Aborted`].
    pub fn run<W: Write>(
        &self,
        pattern: Option<&str>,
        action: Option<&str>,
        messages: &mut W,
    ) -> Result<Outcome> {
        let supplied_action = match action.filter(|a| !a.is_empty()) {
            Some(action) => Some(ActionChoice::from_supplied(
                action,
                self.options.strict_actions,
            )?),
            None => None,
        };

        // Enumerate
        let records = self.enumerator.list_units()?;
        let candidates =
            CandidateSet::from_records(&records).filter(pattern.unwrap_or_default());
        debug!("{} candidate unit(s) after filtering", candidates.len());

        if candidates.is_empty() {
            return abort(AbortReason::NoCandidatesFound, messages);
        }

        // Select
        let Some(unit) = non_empty(self.selector.select(UNIT_SELECT_PROMPT, candidates.names())?)
        else {
            return abort(AbortReason::NoSelectionMade, messages);
        };

        // Advise
        self.advise(&unit, messages)?;

        // Confirm selection
        let mut context = HashMap::from([(UNIT_KEY.to_string(), unit.clone())]);
        let question = render_prompt(&self.options.confirm_selection_prompt, &context)?;
        if !self.confirm(&question)? {
            return abort(AbortReason::UserDeclined, messages);
        }

        // Select action
        let action = match supplied_action {
            Some(action) => action,
            None => {
                let Some(name) = non_empty(self.selector.select(ACTION_SELECT_PROMPT, &Action::names())?)
                else {
                    return abort(AbortReason::NoActionSelected, messages);
                };
                ActionChoice::from_supplied(&name, false)?
            }
        };

        // Confirm execution
        context.insert(ACTION_KEY.to_string(), action.to_string());
        let question = render_prompt(&self.options.confirm_execution_prompt, &context)?;
        if !self.confirm(&question)? {
            return abort(AbortReason::UserDeclined, messages);
        }

        let code = self.executor.execute(&action, &unit)?;
        debug!("Executor exited with {code}");

        Ok(Outcome::Executed(code))
    }

    fn advise<W: Write>(&self, unit: &str, messages: &mut W) -> Result<()> {
        match self.advisor.suggestions(unit) {
            Ok(suggestions) if suggestions.is_empty() => {}
            Ok(suggestions) => {
                writeln!(
                    messages,
                    "Warning: `{unit}` may be misspelled. Suggestions: {}",
                    suggestions.iter().join(", ")
                )?;
            }
            Err(e) => warn!("Advisory check failed: {e}"),
        }

        Ok(())
    }

    fn confirm(&self, question: &str) -> Result<bool> {
        if self.options.assume_yes {
            debug!("Assuming yes for: {question}");
            return Ok(true);
        }

        Ok(match self.prompter.ask(question)? {
            Some(answer) => ConfirmationAnswer::parse(&answer).is_affirmative(),
            // Closed input never counts as consent
            None => false,
        })
    }
}

fn non_empty(selection: Option<String>) -> Option<String> {
    selection.filter(|s| !s.trim().is_empty())
}

fn abort<W: Write>(reason: AbortReason, messages: &mut W) -> Result<Outcome> {
    writeln!(messages, "{reason}")?;
    Ok(Outcome::Aborted(reason))
}
