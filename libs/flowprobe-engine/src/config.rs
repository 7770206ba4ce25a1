use serde::Deserialize;

use crate::error::EngineError;

/// Root configuration — parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Engine HTTP operations gateway.
    pub gateway: GatewayConfig,

    /// Lifecycle event stream.
    pub stream: StreamConfig,

    /// Scenario parameters.
    pub run: RunConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway, e.g. `http://localhost:5000`.
    pub contact_point: String,

    /// Path the process definition is uploaded to.
    #[serde(default = "default_deploy_path")]
    pub deploy_path: String,

    /// Path prefix for launching instances; the process id is appended.
    #[serde(default = "default_workflow_path")]
    pub workflow_path: String,

    /// Process definition source: a local path or an http(s) URL.
    pub definition: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// Broker bootstrap servers, comma separated.
    pub brokers: String,

    /// Topic the engine exports lifecycle events to.
    pub topic: String,

    /// Per-poll wait, in milliseconds.
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Process id the deployed definition registers under.
    pub process_id: String,

    /// Number of instances to launch — and poll cycles to run.
    pub workflows: u32,

    /// When false the stream consumer is skipped entirely.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Message embedded in each launch request body.
    #[serde(default = "default_launch_message")]
    pub launch_message: String,
}

fn default_deploy_path() -> String {
    "/zeebe/upload".to_string()
}

fn default_workflow_path() -> String {
    "/channel/workflow/".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_poll_timeout_ms() -> u64 {
    100
}

fn default_enabled() -> bool {
    true
}

fn default_launch_message() -> String {
    "test".to_string()
}

impl ProbeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [gateway]
        contact_point = "http://localhost:5000"
        deploy_path = "/zeebe/upload"
        workflow_path = "/channel/workflow/"
        definition = "zeebe-test.bpmn"
        request_timeout_ms = 5000

        [stream]
        brokers = "broker-1:9092,broker-2:9092"
        topic = "zeebe-export"
        poll_timeout_ms = 250

        [run]
        process_id = "zeebe-test"
        workflows = 10
        enabled = false
        launch_message = "hello"
    "#;

    #[test]
    fn parses_full_config() {
        let config = ProbeConfig::parse(FULL).unwrap();
        assert_eq!(config.gateway.contact_point, "http://localhost:5000");
        assert_eq!(config.stream.brokers, "broker-1:9092,broker-2:9092");
        assert_eq!(config.stream.poll_timeout_ms, 250);
        assert_eq!(config.run.workflows, 10);
        assert!(!config.run.enabled);
        assert_eq!(config.run.launch_message, "hello");
    }

    #[test]
    fn optional_fields_take_defaults() {
        let config = ProbeConfig::parse(
            r#"
            [gateway]
            contact_point = "http://localhost:5000"
            definition = "zeebe-test.bpmn"

            [stream]
            brokers = "localhost:9092"
            topic = "zeebe-export"

            [run]
            process_id = "zeebe-test"
            workflows = 3
        "#,
        )
        .unwrap();
        assert_eq!(config.gateway.deploy_path, "/zeebe/upload");
        assert_eq!(config.gateway.workflow_path, "/channel/workflow/");
        assert_eq!(config.gateway.request_timeout_ms, 30_000);
        assert_eq!(config.stream.poll_timeout_ms, 100);
        assert!(config.run.enabled);
        assert_eq!(config.run.launch_message, "test");
    }

    #[test]
    fn missing_required_field_is_a_config_error() {
        let err = ProbeConfig::parse(
            r#"
            [gateway]
            contact_point = "http://localhost:5000"
            definition = "zeebe-test.bpmn"

            [stream]
            brokers = "localhost:9092"

            [run]
            process_id = "zeebe-test"
            workflows = 3
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.contains("topic")));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ProbeConfig::load("/nonexistent/flowprobe.toml").unwrap_err();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.contains("/nonexistent")));
    }
}
