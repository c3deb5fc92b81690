//! Check-run request payloads.
//!
//! [`CheckRunInputs`] is what a caller asks for; [`CheckRunFields`] is what
//! goes over the wire. [`build_fields`] maps one onto the other and is shared
//! by create and update.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ActkitError;

/// Lifecycle state of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Queued,
    InProgress,
    Completed,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Queued => "queued",
            CheckStatus::InProgress => "in_progress",
            CheckStatus::Completed => "completed",
        }
    }
}

impl FromStr for CheckStatus {
    type Err = ActkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(CheckStatus::Queued),
            "in_progress" => Ok(CheckStatus::InProgress),
            "completed" => Ok(CheckStatus::Completed),
            other => Err(ActkitError::InvalidEnum {
                kind: "check status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result of a completed check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    ActionRequired,
    Cancelled,
    Failure,
    Neutral,
    Success,
    Skipped,
    Stale,
    TimedOut,
}

impl CheckConclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckConclusion::ActionRequired => "action_required",
            CheckConclusion::Cancelled => "cancelled",
            CheckConclusion::Failure => "failure",
            CheckConclusion::Neutral => "neutral",
            CheckConclusion::Success => "success",
            CheckConclusion::Skipped => "skipped",
            CheckConclusion::Stale => "stale",
            CheckConclusion::TimedOut => "timed_out",
        }
    }
}

impl FromStr for CheckConclusion {
    type Err = ActkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action_required" => Ok(CheckConclusion::ActionRequired),
            "cancelled" => Ok(CheckConclusion::Cancelled),
            "failure" => Ok(CheckConclusion::Failure),
            "neutral" => Ok(CheckConclusion::Neutral),
            "success" => Ok(CheckConclusion::Success),
            "skipped" => Ok(CheckConclusion::Skipped),
            "stale" => Ok(CheckConclusion::Stale),
            "timed_out" => Ok(CheckConclusion::TimedOut),
            other => Err(ActkitError::InvalidEnum {
                kind: "check conclusion",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CheckConclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A button shown on the check run page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAction {
    pub label: String,
    pub description: String,
    pub identifier: String,
}

/// Severity of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

/// A message attached to a range of lines in a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    pub annotation_level: AnnotationLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_details: Option<String>,
}

/// An image rendered in the check run output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckImage {
    pub alt: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Requested output block.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OutputInput {
    /// Title; the check run name is used when absent.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Markdown body, sent as `output.text`.
    #[serde(default)]
    pub text_description: Option<String>,
}

/// Caller-facing description of a check run create or update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckRunInputs {
    pub status: CheckStatus,
    #[serde(default)]
    pub output: Option<OutputInput>,
    #[serde(default)]
    pub actions: Option<Vec<CheckAction>>,
    #[serde(default)]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(default)]
    pub images: Option<Vec<CheckImage>>,
    #[serde(default)]
    pub conclusion: Option<CheckConclusion>,
    #[serde(default, alias = "detailsURL")]
    pub details_url: Option<String>,
    #[serde(default, alias = "actionURL")]
    pub action_url: Option<String>,
}

impl CheckRunInputs {
    /// Inputs with only a status set.
    pub fn with_status(status: CheckStatus) -> Self {
        Self {
            status,
            output: None,
            actions: None,
            annotations: None,
            images: None,
            conclusion: None,
            details_url: None,
            action_url: None,
        }
    }

    fn has_actions(&self) -> bool {
        self.actions.as_ref().is_some_and(|a| !a.is_empty())
    }
}

/// `output` object sent to the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<CheckAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<CheckImage>>,
}

/// Fields shared by the create and update requests.
///
/// Absent optionals are omitted from the JSON rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRunFields {
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<CheckAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<CheckConclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
}

/// Body of `POST /repos/{owner}/{repo}/check-runs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCheckRun {
    pub name: String,
    pub head_sha: String,
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: CheckRunFields,
}

/// Result of [`build_fields`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltFields {
    pub fields: CheckRunFields,
    /// Set when a details URL was dropped in favour of the action URL.
    pub notice: Option<String>,
}

/// Map caller inputs onto the wire fields.
///
/// `display_name` is the output title fallback. `now` stamps `completed_at`
/// when the status is [`CheckStatus::Completed`].
pub fn build_fields(display_name: &str, inputs: &CheckRunInputs, now: DateTime<Utc>) -> BuiltFields {
    let output = inputs.output.as_ref().map(|out| OutputPayload {
        title: out
            .title
            .clone()
            .unwrap_or_else(|| display_name.to_string()),
        summary: out.summary.clone(),
        text: out.text_description.clone(),
        actions: inputs.actions.clone(),
        annotations: inputs.annotations.clone(),
        images: inputs.images.clone(),
    });

    let action_required = inputs.conclusion == Some(CheckConclusion::ActionRequired);
    let has_actions = inputs.has_actions();

    let mut notice = None;
    let details_url = if action_required || has_actions {
        if inputs.details_url.is_some() {
            let mut reasons = Vec::new();
            if action_required {
                reasons.push("conclusion is 'action_required'");
            }
            if has_actions {
                reasons.push("actions are provided");
            }
            notice = Some(format!(
                "'details_url' is ignored in favor of 'action_url' because {}",
                reasons.join(" and ")
            ));
        }
        inputs.action_url.clone()
    } else {
        inputs.details_url.clone()
    };

    let completed_at = (inputs.status == CheckStatus::Completed).then_some(now);

    BuiltFields {
        fields: CheckRunFields {
            status: inputs.status,
            output,
            actions: inputs.actions.clone(),
            conclusion: inputs.conclusion,
            completed_at,
            details_url,
        },
        notice,
    }
}
