use anyhow::anyhow;
use derive_more::Display;
use std::str::FromStr;

/// The options offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MenuAction {
    Insert,
    Delete,
    Print,
    Quit,
}

impl MenuAction {
    /// All actions, in menu order
    pub const ALL: [MenuAction; 4] = [Self::Insert, Self::Delete, Self::Print, Self::Quit];

    /// The number the user types to pick this action
    pub fn number(self) -> usize {
        match self {
            Self::Insert => 1,
            Self::Delete => 2,
            Self::Print => 3,
            Self::Quit => 4,
        }
    }
}

impl FromStr for MenuAction {
    type Err = anyhow::Error;

    /// Accepts the menu number or the action name, in any case
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let choice = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| {
                choice == action.number().to_string()
                    || choice.eq_ignore_ascii_case(&action.to_string())
            })
            .ok_or_else(|| anyhow!("`{}` is not an option", choice))
    }
}
