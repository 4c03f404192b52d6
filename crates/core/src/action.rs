//! Service actions offered by the `service` recipe.
//!
//! The interactive menu only offers the closed [`Action`] set, but an action
//! supplied on the command line is passed through as [`ActionChoice::Raw`]
//! unless strict validation is requested.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Status,
    Start,
    Stop,
    Restart,
    Enable,
    Disable,
    EnableNow,
    DisableNow,
}

impl Action {
    /// Menu order for the interactive action selector.
    pub const ALL: [Action; 8] = [
        Action::Status,
        Action::Start,
        Action::Stop,
        Action::Restart,
        Action::Enable,
        Action::Disable,
        Action::EnableNow,
        Action::DisableNow,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Action::Status => "status",
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::EnableNow => "enable-now",
            Action::DisableNow => "disable-now",
        }
    }

    /// The `systemctl` verb and flags this action expands to.
    #[must_use]
    pub fn systemctl_args(self) -> Vec<&'static str> {
        match self {
            Action::EnableNow => vec!["enable", "--now"],
            Action::DisableNow => vec!["disable", "--now"],
            other => vec![other.name()],
        }
    }

    /// Names of every action, in menu order.
    #[must_use]
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|a| a.name().to_string()).collect()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string(), Self::ALL.iter().join(", ")))
    }
}

/// An action as it reaches the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionChoice {
    Known(Action),
    /// Supplied directly by the caller and not checked against [`Action`].
    Raw(String),
}

impl ActionChoice {
    /// Interprets a caller-supplied action.
    ///
    /// Known names become [`ActionChoice::Known`]. Anything else is kept as
    /// [`ActionChoice::Raw`] when `strict` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAction`] for an unknown name when `strict` is set.
    pub fn from_supplied(value: &str, strict: bool) -> Result<Self> {
        match value.parse::<Action>() {
            Ok(action) => Ok(Self::Known(action)),
            Err(e) if strict => Err(e),
            Err(_) => Ok(Self::Raw(value.to_string())),
        }
    }

    /// Arguments handed to `systemctl` ahead of the unit name.
    #[must_use]
    pub fn systemctl_args(&self) -> Vec<String> {
        match self {
            Self::Known(action) => action
                .systemctl_args()
                .into_iter()
                .map(str::to_string)
                .collect(),
            Self::Raw(raw) => vec![raw.clone()],
        }
    }
}

impl Display for ActionChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(action) => write!(f, "{action}"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}
