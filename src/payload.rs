//! Slack webhook payload structures and the notification builder.

use serde::{Deserialize, Serialize};

use crate::event::WebhookEvent;
use crate::labels::Language;
use crate::{NotifyConfig, RunContext};

/// Body text shown when the event carries no usable commit message.
const MISSING_MESSAGE: &str = "N/A";

/// Footer icon used when no override is configured.
pub const DEFAULT_FOOTER_ICON: &str =
    "https://github.githubassets.com/assets/GitHub-Mark-ea2971cee799.png";

/// Top-level message document posted to the Slack webhook.
/// Field names and nesting follow the chat.postMessage attachment schema
/// and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackPayload {
    pub channel: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub color: String,
    pub author_name: String,
    pub author_icon: String,
    pub fields: Vec<AttachmentField>,
    pub text: String,
    pub footer: String,
    pub footer_icon: String,
    pub mrkdwn_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl AttachmentField {
    fn short(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
            short: true,
        }
    }
}

/// Builds the notification payload for one workflow run.
///
/// Pure function over its arguments: no I/O, no error paths. Missing
/// optional event data degrades to empty strings or "N/A" instead of
/// failing. Field titles come from the configured language; any code
/// other than "zh" renders English.
pub fn build_payload(
    event: &WebhookEvent,
    context: &RunContext,
    config: &NotifyConfig,
) -> SlackPayload {
    let labels = Language::from_code(&config.language).labels();

    let footer = if config.footer_text.is_empty() {
        labels.footer.to_string()
    } else {
        config.footer_text.clone()
    };
    let footer_icon = if config.footer_icon.is_empty() {
        DEFAULT_FOOTER_ICON.to_string()
    } else {
        config.footer_icon.clone()
    };

    let message = event.commit_message().unwrap_or(MISSING_MESSAGE);

    SlackPayload {
        channel: context.channel_id.clone(),
        text: format!(
            "{} notification for {}",
            config.service_name, context.repository
        ),
        attachments: vec![Attachment {
            color: config.color.clone(),
            author_name: context.actor.clone(),
            author_icon: event.avatar_url().to_string(),
            fields: vec![
                AttachmentField::short(labels.reference, context.ref_name.clone()),
                AttachmentField::short(labels.event, context.event_name.clone()),
                AttachmentField::short(
                    labels.actions_url,
                    format!("<{}|{}>", context.actions_url(), config.service_name),
                ),
                AttachmentField::short(
                    labels.commit,
                    format!("<{}|{}>", context.commit_url(), context.short_sha()),
                ),
            ],
            text: format!("*{}*\n{}", labels.message, message),
            footer,
            footer_icon,
            mrkdwn_in: vec!["fields".to_string(), "text".to_string()],
        }],
    }
}
