use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use ai_client::OpenAiClient;
use rivalscan_core::{AppConfig, NameExtractor, PageExtractor, ReportWriter, WebSearcher};
use rivalscan_workflow::adapters::{
    HttpPageExtractor, LlmNameExtractor, LlmReportWriter, SamplePageExtractor,
    SampleReportWriter, SampleSearcher, SerperSearcher, TokenNameExtractor,
};
use rivalscan_workflow::{Workflow, WorkflowDeps};

/// Competitor research: discover rivals for a company, or generate an
/// analysis report for a company website or a selected competitor.
#[derive(Parser)]
#[command(name = "rivalscan")]
struct Args {
    /// Company name or website URL to analyze
    company: String,

    /// Geographic scope for competitor discovery
    #[arg(long, default_value = "global")]
    location: String,

    /// Competitor (from a previous --list-competitors run) to analyze
    #[arg(long)]
    competitor: Option<String>,

    /// Only list discovered competitor names, one per line
    #[arg(long)]
    list_competitors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rivalscan=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    let workflow = Workflow::new(wire_deps(&config));

    if args.list_competitors {
        for name in workflow.get_competitors(&args.company, &args.location).await {
            println!("{name}");
        }
        return Ok(());
    }

    let state = workflow
        .run(&args.company, &args.location, args.competitor.as_deref())
        .await;

    match state.error_message {
        Some(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        None => {
            println!("{}", state.analysis_report);
            Ok(())
        }
    }
}

/// Select real or offline adapters per port, once, at startup. The
/// workflow core never sees which one it got.
fn wire_deps(config: &AppConfig) -> WorkflowDeps {
    // Without a search key the run is a fully-offline demo, so pages are
    // sampled too rather than scraped live.
    let (searcher, extractor): (Arc<dyn WebSearcher>, Arc<dyn PageExtractor>) =
        match &config.serper_api_key {
            Some(key) => (
                Arc::new(SerperSearcher::new(key)) as Arc<dyn WebSearcher>,
                Arc::new(HttpPageExtractor::new()) as Arc<dyn PageExtractor>,
            ),
            None => {
                warn!("SERPER_API_KEY not set, using sample search results and pages");
                (
                    Arc::new(SampleSearcher) as Arc<dyn WebSearcher>,
                    Arc::new(SamplePageExtractor) as Arc<dyn PageExtractor>,
                )
            }
        };

    let (names, reporter): (Arc<dyn NameExtractor>, Arc<dyn ReportWriter>) =
        match &config.openai_api_key {
            Some(key) => {
                let client = Arc::new(OpenAiClient::new(key));
                (
                    Arc::new(LlmNameExtractor::new(client.clone(), &config.openai_model))
                        as Arc<dyn NameExtractor>,
                    Arc::new(LlmReportWriter::new(client, &config.openai_model))
                        as Arc<dyn ReportWriter>,
                )
            }
            None => {
                warn!("OPENAI_API_KEY not set, using heuristic extraction and sample reports");
                (
                    Arc::new(TokenNameExtractor) as Arc<dyn NameExtractor>,
                    Arc::new(SampleReportWriter) as Arc<dyn ReportWriter>,
                )
            }
        };

    WorkflowDeps {
        searcher,
        extractor,
        names,
        reporter,
    }
}
