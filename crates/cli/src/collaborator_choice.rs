//! Picks the selector and advisor implementations for a run.

use log::{debug, info};
use unitcuts_core::advice::AspellAdvisor;
use unitcuts_core::collaborators::{Advisor, NoAdvice, Selector};
use unitcuts_core::config::SelectorKind;
use unitcuts_core::error::{Error, Result};
use unitcuts_core::execution::require_tool;
use unitcuts_core::fzf::{FzfSelector, FZF};

use crate::command_selection::BuiltinSelector;

/// Narrows `auto` down to a concrete selector.
///
/// # Errors
///
/// Returns [`Error::MissingTool`] when fzf is asked for explicitly but is
/// not installed.
pub fn resolve_selector(kind: SelectorKind, fzf_available: bool) -> Result<SelectorKind> {
    match kind {
        SelectorKind::Auto if fzf_available => Ok(SelectorKind::Fzf),
        SelectorKind::Auto | SelectorKind::Builtin => Ok(SelectorKind::Builtin),
        SelectorKind::Fzf if fzf_available => Ok(SelectorKind::Fzf),
        SelectorKind::Fzf => Err(Error::missing_tool(FZF)),
    }
}

/// # Errors
///
/// See [`resolve_selector`].
pub fn build_selector(kind: SelectorKind) -> Result<Box<dyn Selector>> {
    let resolved = resolve_selector(kind, require_tool(FZF).is_ok())?;
    if kind == SelectorKind::Auto && resolved == SelectorKind::Builtin {
        info!("`{FZF}` is not installed, using the built-in selector");
    }
    debug!("Using the {resolved} selector");

    Ok(match resolved {
        SelectorKind::Fzf => Box::new(FzfSelector),
        _ => Box::new(BuiltinSelector),
    })
}

/// The configured spell-checker when it is installed, a no-op otherwise.
#[must_use]
pub fn build_advisor(spell_checker: Option<&str>) -> Box<dyn Advisor> {
    match spell_checker {
        Some(program) if require_tool(program).is_ok() => Box::new(AspellAdvisor::new(program)),
        Some(program) => {
            info!("`{program}` is not installed, skipping advice");
            Box::new(NoAdvice)
        }
        None => Box::new(NoAdvice),
    }
}
