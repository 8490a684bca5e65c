use reps::agents::LlmRunner;
use reps::cli::{self, Output, Printer};
use reps::llm::LLMClientFactory;
use reps::research::ResearchManager;
use reps::tools::ToolRegistry;
use reps::types::Result;
use reps::utils::config::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    // Diagnostics go to stderr so they never interleave with the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reps=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let output = Output::new();
    output.banner();

    let query = cli::read_query()?;
    if query.is_empty() {
        output.error("No query given");
        return Ok(());
    }

    let factory = LLMClientFactory::new(config.provider()?);
    let runner = Arc::new(LlmRunner::new(
        factory,
        Arc::new(ToolRegistry::with_default_tools()),
    ));
    let printer = Arc::new(Printer::new(Output::new()));

    ResearchManager::new(runner, printer, config.models)
        .run(&query)
        .await
}
