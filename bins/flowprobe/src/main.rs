use clap::Parser;

#[derive(Parser)]
#[command(
    name = "flowprobe",
    about = "End-to-end lifecycle verifier for a workflow orchestration engine"
)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(long, default_value = "flowprobe.toml", env = "FLOWPROBE_CONFIG")]
    config: String,

    /// Override the number of workflow instances to launch and verify.
    #[arg(long, env = "FLOWPROBE_WORKFLOWS")]
    workflows: Option<u32>,

    /// Override the process definition source (local path or URL).
    #[arg(long)]
    definition: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!(config = %cli.config, "loading configuration");
    let mut config = match flowprobe_engine::config::ProbeConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };
    if let Some(workflows) = cli.workflows {
        config.run.workflows = workflows;
    }
    if let Some(definition) = cli.definition {
        config.gateway.definition = definition;
    }

    tracing::info!(
        process = %config.run.process_id,
        workflows = config.run.workflows,
        topic = %config.stream.topic,
        "starting verification scenario"
    );
    match flowprobe_engine::scenario::run_scenario(&config).await {
        Ok(report) => {
            tracing::info!(
                expected = report.expected,
                started = report.counters.started,
                ended = report.counters.ended,
                "verification passed"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "verification scenario failed");
            std::process::exit(1);
        }
    }
}
