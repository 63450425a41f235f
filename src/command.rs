use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of command whose outcome is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CommandName {
    /// Preview proposed changes.
    Plan,
    /// Execute previously planned changes.
    Apply,
}

impl CommandName {
    /// Title-cased form used in comment headings, e.g. `Plan`.
    pub fn label(&self) -> String {
        title_case(&self.to_string())
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandName::Plan => f.write_str("plan"),
            CommandName::Apply => f.write_str("apply"),
        }
    }
}

/// Uppercase the first letter of every whitespace-separated word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(CommandName::Plan.to_string(), "plan");
        assert_eq!(CommandName::Apply.to_string(), "apply");
    }

    #[test]
    fn test_label_is_title_cased() {
        assert_eq!(CommandName::Plan.label(), "Plan");
        assert_eq!(CommandName::Apply.label(), "Apply");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("policy check"), "Policy Check");
        assert_eq!(title_case("state_rm"), "State_rm");
    }

    #[test]
    fn test_title_case_keeps_existing_capitals() {
        assert_eq!(title_case("aPPLY"), "APPLY");
        assert_eq!(title_case(""), "");
    }
}
