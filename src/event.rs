//! Typed view of the workflow event document.

use serde::Deserialize;

/// The slice of a webhook event payload the notification cares about.
/// Events are arbitrarily shaped; every key not listed here is ignored
/// during deserialization, and all listed keys are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub head_commit: Option<HeadCommit>,
    #[serde(default)]
    pub sender: Option<Sender>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadCommit {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sender {
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl WebhookEvent {
    /// Returns the commit message, treating an empty message the same as
    /// a missing one.
    pub fn commit_message(&self) -> Option<&str> {
        self.head_commit
            .as_ref()
            .and_then(|commit| commit.message.as_deref())
            .filter(|message| !message.is_empty())
    }

    /// Returns the sender's avatar URL, or "" when the event has no
    /// sender info.
    pub fn avatar_url(&self) -> &str {
        self.sender
            .as_ref()
            .and_then(|sender| sender.avatar_url.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_empty_event() {
        let event: WebhookEvent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(event.commit_message(), None);
        assert_eq!(event.avatar_url(), "");
    }

    #[test]
    fn ignores_unrelated_keys() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "ref": "refs/heads/main",
            "repository": {"name": "example"},
            "commits": []
        }))
        .unwrap();
        assert_eq!(event.commit_message(), None);
    }

    #[test]
    fn tolerates_null_head_commit() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "head_commit": null,
            "sender": null
        }))
        .unwrap();
        assert_eq!(event.commit_message(), None);
        assert_eq!(event.avatar_url(), "");
    }

    #[test]
    fn extracts_commit_and_sender_info() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "head_commit": {"message": "feat: update deploy", "id": "abc123"},
            "sender": {"avatar_url": "https://example.com/avatar.png", "login": "forecho"}
        }))
        .unwrap();
        assert_eq!(event.commit_message(), Some("feat: update deploy"));
        assert_eq!(event.avatar_url(), "https://example.com/avatar.png");
    }

    #[test]
    fn empty_commit_message_counts_as_missing() {
        let event: WebhookEvent = serde_json::from_value(json!({
            "head_commit": {"message": ""}
        }))
        .unwrap();
        assert_eq!(event.commit_message(), None);
    }
}
