use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart;

use crate::config::GatewayConfig;
use crate::error::EngineError;

/// HTTP client for the engine's operations gateway.
///
/// Deploys process definitions and launches instances. Any non-200 response
/// is fatal to the scenario; response bodies are returned for logging, not
/// asserted on.
pub struct GatewayClient {
    http: reqwest::Client,
    contact_point: String,
    deploy_path: String,
    workflow_path: String,
}

impl GatewayClient {
    pub fn new(gateway: &GatewayConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(gateway.request_timeout_ms))
            .build()
            .map_err(|e| EngineError::Gateway(format!("build http client: {e}")))?;

        Ok(Self {
            http,
            contact_point: gateway.contact_point.trim_end_matches('/').to_string(),
            deploy_path: gateway.deploy_path.clone(),
            workflow_path: gateway.workflow_path.clone(),
        })
    }

    /// Fetch the process definition from a local path or an http(s) URL.
    pub async fn fetch_definition(&self, source: &str) -> Result<String, EngineError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = self.http.get(source).send().await?;
            let status = response.status();
            if status != StatusCode::OK {
                return Err(EngineError::Gateway(format!(
                    "fetch definition {source}: status {status}"
                )));
            }
            Ok(response.text().await?)
        } else {
            std::fs::read_to_string(source)
                .map_err(|e| EngineError::Config(format!("definition '{source}': {e}")))
        }
    }

    /// Upload a process definition to the gateway.
    pub async fn deploy(&self, process_id: &str, definition: String) -> Result<String, EngineError> {
        let url = format!("{}{}", self.contact_point, self.deploy_path);
        let part = multipart::Part::text(definition)
            .file_name(format!("{process_id}.bpmn"))
            .mime_str("text/plain")
            .map_err(|e| EngineError::Gateway(format!("deploy: {e}")))?;
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        Self::expect_ok(response, "deploy").await
    }

    /// Launch one workflow instance.
    pub async fn launch(&self, process_id: &str, message: &str) -> Result<String, EngineError> {
        let url = format!("{}{}{}", self.contact_point, self.workflow_path, process_id);
        let body = serde_json::json!({ "message": message });

        let response = self.http.post(&url).json(&body).send().await?;
        Self::expect_ok(response, "launch").await
    }

    async fn expect_ok(response: reqwest::Response, op: &str) -> Result<String, EngineError> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Gateway(format!(
                "{op}: status {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }
        Ok(response.text().await?)
    }
}
