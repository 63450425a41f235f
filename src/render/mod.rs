pub mod templates;

use minijinja::context;
use serde::Serialize;

use crate::command::CommandName;
use crate::lock_url::LockUrlBuilder;
use crate::outcome::{CommandOutcome, ProjectOutcome, ProjectResult};
use templates::render_template;

/// Fields shared by every rendered document.
#[derive(Debug, Clone, Serialize)]
pub struct PresentationContext<'a> {
    pub command_label: String,
    pub verbose: bool,
    pub log: &'a str,
}

#[derive(Serialize)]
struct ErrorData<'a> {
    error: &'a str,
    #[serde(flatten)]
    common: &'a PresentationContext<'a>,
}

#[derive(Serialize)]
struct FailureData<'a> {
    failure: &'a str,
    #[serde(flatten)]
    common: &'a PresentationContext<'a>,
}

/// One project's rendered fragment, keyed by its path.
#[derive(Serialize)]
struct ProjectSection<'a> {
    path: &'a str,
    body: String,
}

#[derive(Serialize)]
struct ResultData<'a> {
    projects: Vec<ProjectSection<'a>>,
    #[serde(flatten)]
    common: &'a PresentationContext<'a>,
}

/// Renders command outcomes as markdown suitable for a pull request comment.
///
/// Rendering never fails: template problems and malformed project results
/// show up as bug notices inside the returned text.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer<B> {
    lock_url_builder: B,
}

impl<B: LockUrlBuilder> MarkdownRenderer<B> {
    pub fn new(lock_url_builder: B) -> Self {
        Self { lock_url_builder }
    }

    /// Format the outcome into a single markdown document.
    pub fn render(
        &self,
        outcome: &CommandOutcome,
        command: CommandName,
        log: &str,
        verbose: bool,
    ) -> String {
        let common = PresentationContext {
            command_label: command.label(),
            verbose,
            log,
        };

        match outcome {
            CommandOutcome::Error { message } => render_template(
                templates::ERROR_WITH_LOG,
                ErrorData {
                    error: message,
                    common: &common,
                },
            ),
            CommandOutcome::Failure { message } => render_template(
                templates::FAILURE_WITH_LOG,
                FailureData {
                    failure: message,
                    common: &common,
                },
            ),
            CommandOutcome::ProjectResults { results } => {
                self.render_project_results(results, &common)
            }
        }
    }

    fn render_project_results(
        &self,
        results: &[ProjectResult],
        common: &PresentationContext<'_>,
    ) -> String {
        let projects: Vec<ProjectSection<'_>> = results
            .iter()
            .map(|result| ProjectSection {
                path: &result.path,
                body: self.render_project(&result.outcome, &common.command_label),
            })
            .collect();

        let template = if projects.len() == 1 {
            templates::SINGLE_PROJECT
        } else {
            templates::MULTI_PROJECT
        };

        tracing::debug!(
            command = %common.command_label,
            projects = projects.len(),
            template = template,
            "Rendering project results"
        );

        render_template(template, ResultData { projects, common })
    }

    fn render_project(&self, outcome: &ProjectOutcome, command_label: &str) -> String {
        match outcome {
            ProjectOutcome::Error { message } => render_template(
                templates::ERROR,
                context! { command_label => command_label, error => message },
            ),
            ProjectOutcome::Failure { message } => render_template(
                templates::FAILURE,
                context! { command_label => command_label, failure => message },
            ),
            ProjectOutcome::PlanSuccess { diff, lock_key } => {
                let lock_url = self.lock_url_builder.lock_url(lock_key);
                render_template(
                    templates::PLAN_SUCCESS,
                    context! { diff => diff, lock_url => lock_url },
                )
            }
            ProjectOutcome::ApplySuccess { output } => {
                render_template(templates::APPLY_SUCCESS, context! { output => output })
            }
            ProjectOutcome::Unrecognized => {
                tracing::warn!("Project result has no recognized outcome");
                templates::NO_TEMPLATE.to_string()
            }
        }
    }
}
