//! Member rename rules (`rename_all = "..."`).
//!
//! Rust identifiers are `snake_case`; the rule decides the display name stored in the descriptor.

use std::str::FromStr;

use thiserror::Error;

/// How a member's Rust identifier is turned into its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    /// Keep the identifier as written.
    #[default]
    None,
    /// `eat_old` -> `EatOld`
    PascalCase,
    /// `eat_old` -> `eatOld`
    CamelCase,
    /// `eat_old` -> `eat_old`
    SnakeCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rename rule `{0}`; expected one of \"PascalCase\", \"camelCase\", \"snake_case\"")]
pub struct UnknownRenameRule(pub String);

impl FromStr for RenameRule {
    type Err = UnknownRenameRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            other => Err(UnknownRenameRule(other.to_string())),
        }
    }
}

impl RenameRule {
    /// Apply the rule to a `snake_case` identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::None => ident.to_string(),
            RenameRule::SnakeCase => ident.to_lowercase(),
            RenameRule::PascalCase => words(ident).map(capitalize).collect(),
            RenameRule::CamelCase => words(ident)
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
        }
    }
}

fn words(ident: &str) -> impl Iterator<Item = &str> {
    ident.split('_').filter(|w| !w.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
