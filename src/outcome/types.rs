use serde::{Deserialize, Serialize};

/// Result of a whole command run. Exactly one shape applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The command could not run at all.
    Error { message: String },
    /// The command ran but failed outright.
    Failure { message: String },
    /// The command ran once per project.
    ProjectResults { results: Vec<ProjectResult> },
}

/// Outcome of the command in a single project directory.
///
/// A result whose outcome is missing or malformed still parses, as
/// [`ProjectOutcome::Unrecognized`], so one bad project never loses the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProjectResult")]
pub struct ProjectResult {
    pub path: String,
    #[serde(flatten)]
    pub outcome: ProjectOutcome,
}

#[derive(Deserialize)]
struct RawProjectResult {
    path: String,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl From<RawProjectResult> for ProjectResult {
    fn from(raw: RawProjectResult) -> Self {
        let outcome = if raw.fields.contains_key("kind") {
            serde_json::from_value(serde_json::Value::Object(raw.fields)).unwrap_or_else(|e| {
                tracing::warn!(path = %raw.path, error = %e, "Malformed project outcome");
                ProjectOutcome::Unrecognized
            })
        } else {
            tracing::warn!(path = %raw.path, "Project result has no outcome kind");
            ProjectOutcome::Unrecognized
        };

        Self {
            path: raw.path,
            outcome,
        }
    }
}

impl ProjectResult {
    pub fn new(path: impl Into<String>, outcome: ProjectOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectOutcome {
    Error { message: String },
    Failure { message: String },
    PlanSuccess { diff: String, lock_key: String },
    ApplySuccess { output: String },
    /// A result the executor produced without any known shape.
    #[serde(other)]
    Unrecognized,
}
