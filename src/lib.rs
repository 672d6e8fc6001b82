pub mod error;
pub mod event;
pub mod labels;
pub mod payload;
pub mod utils;

/// Facts about the current workflow run, collected by the caller.
/// All values are opaque strings; a value the environment did not supply
/// stays empty and flows into the payload as-is.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub ref_name: String,
    pub event_name: String,
    pub server_url: String,
    pub repository: String,
    pub run_id: String,
    pub sha: String,
    pub actor: String,
    pub channel_id: String,
}

impl RunContext {
    /// Returns the URL of this workflow run on the Actions tab.
    pub fn actions_url(&self) -> String {
        format!(
            "{}/{}/actions/runs/{}",
            self.server_url, self.repository, self.run_id
        )
    }

    /// Returns the URL of the full commit this run was triggered for.
    pub fn commit_url(&self) -> String {
        format!("{}/{}/commit/{}", self.server_url, self.repository, self.sha)
    }

    /// Returns the first 7 characters of the SHA, or the whole string
    /// when it is shorter than that.
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(7) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }
}

/// Rendering options for a notification.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Language code; anything other than "zh" renders English labels.
    pub language: String,
    pub service_name: String,
    /// Attachment sidebar color, passed through verbatim.
    pub color: String,
    /// Footer text override; empty means the language default.
    pub footer_text: String,
    /// Footer icon override; empty means the GitHub mark.
    pub footer_icon: String,
}
