use anyhow::Result;
use clap::Parser;
use toolcall_smoke::{Agent, Cli, Config, LlmClient, ToolRegistry, Transcript};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Optional .env next to the binary's working dir; a missing file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "toolcall_smoke=debug"
    } else {
        "toolcall_smoke=info"
    };
    // stdout is reserved for the answer
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(&cli);
    tracing::info!(url = %config.completions_url(), model = %config.model, "starting tool-call smoke test");

    let tools = ToolRegistry::new();
    let tool_names: Vec<&str> = tools.specs().iter().map(|spec| spec.name).collect();
    tracing::debug!(tools = ?tool_names, "advertising tools");

    let llm = LlmClient::new(&config)?;
    let agent = Agent::new(Box::new(llm), tools);
    let mut transcript = Transcript::new();

    agent
        .run_and_print(&config.question, &mut transcript, &mut std::io::stdout())
        .await
}
