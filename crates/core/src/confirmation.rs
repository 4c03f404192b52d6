/// Answer given at a yes/no checkpoint.
///
/// Empty input counts as yes, so pressing enter accepts the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAnswer {
    Affirmative,
    Negative,
}

impl ConfirmationAnswer {
    /// Parses a line of user input. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "Y" | "y" => Self::Affirmative,
            _ => Self::Negative,
        }
    }

    #[must_use]
    pub fn is_affirmative(self) -> bool {
        self == Self::Affirmative
    }
}
