use std::fmt::{Display, Formatter};

/// Why a recipe stopped before doing anything.
///
/// None of these are failures. They all exit with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NoCandidatesFound,
    NoSelectionMade,
    UserDeclined,
    NoActionSelected,
}

impl Display for AbortReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AbortReason::NoCandidatesFound => "No matching candidates found.",
            AbortReason::NoSelectionMade => "Nothing selected.",
            AbortReason::UserDeclined => "Aborted.",
            AbortReason::NoActionSelected => "No action selected.",
        };
        f.write_str(message)
    }
}

/// Terminal state of a recipe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Aborted(AbortReason),
    /// The wrapped command ran and exited with this code.
    Executed(i32),
}

impl Outcome {
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Aborted(_) => 0,
            Outcome::Executed(code) => code,
        }
    }
}
