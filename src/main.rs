use slack_deploy_notify::error::NotifyError;
use slack_deploy_notify::event::WebhookEvent;
use slack_deploy_notify::payload::{SlackPayload, build_payload};
use slack_deploy_notify::utils::write_ascii_json;
use slack_deploy_notify::{NotifyConfig, RunContext};
use std::fs;
use std::io::BufWriter;
use tracing::{self, info};

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_SERVICE_NAME: &str = "Deploy";
const DEFAULT_COLOR: &str = "#2eb886";
const DEFAULT_OUTPUT_PATH: &str = "payload.json";

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Load and parse the workflow event document
fn load_event(path: &str) -> Result<WebhookEvent, NotifyError> {
    let event_str = fs::read_to_string(path).map_err(|e| {
        NotifyError::ConfigError(format!("Failed to read event file '{}': {}", path, e))
    })?;

    let event: WebhookEvent = serde_json::from_str(&event_str).map_err(|e| {
        NotifyError::ConfigError(format!("Failed to parse event file '{}': {}", path, e))
    })?;

    Ok(event)
}

/// Collect run facts from the workflow environment. Unset variables
/// become empty strings and flow into the payload unchanged.
fn read_context() -> RunContext {
    RunContext {
        ref_name: env_or("GITHUB_REF", ""),
        event_name: env_or("GITHUB_EVENT_NAME", ""),
        server_url: env_or("GITHUB_SERVER_URL", ""),
        repository: env_or("GITHUB_REPOSITORY", ""),
        run_id: env_or("GITHUB_RUN_ID", ""),
        sha: env_or("GITHUB_SHA", ""),
        actor: env_or("GITHUB_ACTOR", ""),
        channel_id: env_or("SLACK_DEPLOY_CHANNEL_ID", ""),
    }
}

fn read_config() -> NotifyConfig {
    NotifyConfig {
        language: env_or("SLACK_DEPLOY_LANGUAGE", DEFAULT_LANGUAGE),
        service_name: env_or("SLACK_DEPLOY_SERVICE_NAME", DEFAULT_SERVICE_NAME),
        color: env_or("SLACK_DEPLOY_COLOR", DEFAULT_COLOR),
        footer_text: env_or("SLACK_DEPLOY_FOOTER_TEXT", ""),
        footer_icon: env_or("SLACK_DEPLOY_FOOTER_ICON", ""),
    }
}

fn write_payload(path: &str, payload: &SlackPayload) -> Result<(), NotifyError> {
    let file = fs::File::create(path)?;
    write_ascii_json(BufWriter::new(file), payload)?;
    Ok(())
}

fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let event_path = std::env::var("GITHUB_EVENT_PATH").unwrap_or_default();
    if event_path.is_empty() {
        eprintln!("Configuration error: GITHUB_EVENT_PATH is required");
        std::process::exit(1);
    }

    let event = match load_event(&event_path) {
        Ok(ev) => ev,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Read event from {:?}", event_path);

    let context = read_context();
    let config = read_config();
    let output_path = env_or("SLACK_DEPLOY_OUTPUT", DEFAULT_OUTPUT_PATH);

    let payload = build_payload(&event, &context, &config);

    if let Err(e) = write_payload(&output_path, &payload) {
        eprintln!("Failed to write payload to '{}': {}", output_path, e);
        std::process::exit(1);
    }

    info!(
        "Wrote {} notification for '{}' to {:?}",
        config.service_name, context.repository, output_path
    );
}
