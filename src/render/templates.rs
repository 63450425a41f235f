//! The fixed set of comment templates.
//!
//! Templates are compiled once into a shared, read-only environment. Any
//! failure while rendering one of them is turned into inline text instead
//! of an error, so a comment is always produced.

use minijinja::{Environment, UndefinedBehavior};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const SINGLE_PROJECT: &str = "single_project";
pub const MULTI_PROJECT: &str = "multi_project";
pub const PLAN_SUCCESS: &str = "plan_success";
pub const APPLY_SUCCESS: &str = "apply_success";
pub const ERROR: &str = "error";
pub const ERROR_WITH_LOG: &str = "error_with_log";
pub const FAILURE: &str = "failure";
pub const FAILURE_WITH_LOG: &str = "failure_with_log";

/// Shown in place of a project whose outcome has no template.
pub const NO_TEMPLATE: &str = "Found no template. This is a bug!";

// Collapsible log, appended once at the end of a document.
macro_rules! log_section {
    () => {
        "{% if verbose %}\n<details><summary>Log</summary>\n  <p>\n\n```\n{{ log }}```\n</p></details>{% endif %}\n"
    };
}

macro_rules! error_text {
    () => {
        "**{{ command_label }} Error**\n```\n{{ error }}\n```\n"
    };
}

macro_rules! failure_text {
    () => {
        "**{{ command_label }} Failed**: {{ failure }}\n"
    };
}

const SOURCES: &[(&str, &str)] = &[
    (
        SINGLE_PROJECT,
        concat!(
            "{% for project in projects %}{{ project.body }}{% endfor %}\n",
            log_section!()
        ),
    ),
    (
        MULTI_PROJECT,
        concat!(
            "Ran {{ command_label }} in {{ projects|length }} directories:\n",
            "{% for project in projects %} * `{{ project.path }}`\n{% endfor %}\n",
            "{% for project in projects %}## {{ project.path }}/\n{{ project.body }}\n---\n{% endfor %}",
            log_section!()
        ),
    ),
    (
        PLAN_SUCCESS,
        "```diff\n{{ diff }}\n```\n\n* To **discard** this plan click [here]({{ lock_url }}).",
    ),
    (APPLY_SUCCESS, "```diff\n{{ output }}\n```"),
    (ERROR, error_text!()),
    (ERROR_WITH_LOG, concat!(error_text!(), log_section!())),
    (FAILURE, failure_text!()),
    (FAILURE_WITH_LOG, concat!(failure_text!(), log_section!())),
];

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    for &(name, source) in SOURCES {
        // A template that fails to compile stays missing and renders as a bug report.
        if let Err(e) = env.add_template(name, source) {
            tracing::error!(template = %name, error = %e, "Failed to compile template");
        }
    }
    env
});

/// Render the named template, falling back to a descriptive bug string.
pub fn render_template<S: Serialize>(name: &str, ctx: S) -> String {
    let rendered = TEMPLATES
        .get_template(name)
        .and_then(|tmpl| tmpl.render(ctx));

    match rendered {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(template = %name, error = %e, "Failed to render template");
            format!("Failed to render template, this is a bug: {e}")
        }
    }
}
