use std::time::Duration;

use flowprobe_api::counters::EventCounters;
use flowprobe_api::verify::verify;

use crate::client::GatewayClient;
use crate::config::ProbeConfig;
use crate::error::EngineError;
use crate::identity::SubscriberIdentity;
use crate::kafka::KafkaEventStream;
use crate::session::ConsumerSession;

/// Outcome of one verification scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioReport {
    pub expected: u32,
    pub counters: EventCounters,
}

/// Run the full verification scenario: deploy the process definition,
/// launch the configured number of instances, consume the lifecycle stream,
/// verify the counts.
///
/// A deploy or launch failure aborts before the consumer loop is ever
/// entered. With the consumer gate off, zeroed counters still go through
/// verification, so a gated-off run only passes when no workflows were
/// requested.
pub async fn run_scenario(config: &ProbeConfig) -> Result<ScenarioReport, EngineError> {
    let client = GatewayClient::new(&config.gateway)?;

    // --- 1. Deploy the process definition ---
    let definition = client
        .fetch_definition(&config.gateway.definition)
        .await
        .map_err(|e| e.with_context("definition"))?;
    let response = client.deploy(&config.run.process_id, definition).await?;
    tracing::info!(process = %config.run.process_id, response = %response, "deployed process definition");

    // --- 2. Launch workflow instances ---
    for instance in 0..config.run.workflows {
        let response = client
            .launch(&config.run.process_id, &config.run.launch_message)
            .await?;
        tracing::info!(instance, response = %response, "workflow launch accepted");
    }

    // --- 3. Consume lifecycle events ---
    let counters = if config.run.enabled {
        let identity = SubscriberIdentity::resolve();
        let stream = KafkaEventStream::subscribe(&config.stream, &identity)
            .map_err(|e| e.with_context("consumer setup"))?;
        let session = ConsumerSession::new(stream, config.run.process_id.clone());
        session
            .run(
                config.run.workflows,
                Duration::from_millis(config.stream.poll_timeout_ms),
            )
            .await?
    } else {
        tracing::info!("stream consumption disabled, skipping poll loop");
        EventCounters::new()
    };

    // --- 4. Verify ---
    tracing::info!(
        expected = config.run.workflows,
        started = counters.started,
        ended = counters.ended,
        "verifying lifecycle counts"
    );
    verify(config.run.workflows, &counters)?;

    Ok(ScenarioReport {
        expected: config.run.workflows,
        counters,
    })
}
