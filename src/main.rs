use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use claimlens::config::{default_log_filter, AnalysisConfig, APP_NAME, APP_VERSION};
use claimlens::llm::GeminiClient;
use claimlens::pipeline::extraction::{PdfTextExtractor, PlainTextExtractor, TextExtractor};
use claimlens::pipeline::runner::{ClaimAnalyzer, PipelineError};

/// Analyze an insurance claim query against a policy document.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version = APP_VERSION)]
struct Cli {
    /// Policy document to analyze (.pdf or plain text).
    input: PathBuf,

    /// The claim query, e.g. "46M, knee surgery, Pune, 3-month policy".
    query: String,

    /// Model identifier to use.
    #[arg(long)]
    model: Option<String>,

    /// Soft character budget per chunk.
    #[arg(long)]
    max_chunk_chars: Option<usize>,

    /// Cap on concurrent per-chunk model calls.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the full report as JSON instead of a human summary.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AnalysisConfig::from_env()
        .context("Set GEMINI_API_KEY in the environment or a .env file")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(chars) = cli.max_chunk_chars {
        config.max_chunk_chars = chars;
    }
    if let Some(cap) = cli.concurrency {
        config.max_concurrency = cap;
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("Cannot read {}", cli.input.display()))?;

    let extractor: Box<dyn TextExtractor> = match cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => Box::new(PdfTextExtractor),
        _ => Box::new(PlainTextExtractor),
    };

    let llm = Arc::new(GeminiClient::new(&config));
    let analyzer = ClaimAnalyzer::new(llm, &config);

    match analyzer.analyze_document(extractor.as_ref(), &bytes, &cli.query).await {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Verdict:       {}", report.decision.verdict());
                match report.decision.amount.as_deref() {
                    Some(amount) => println!("Amount:        ₹{amount}"),
                    None => println!("Amount:        Not specified"),
                }
                if let Some(justification) = report.decision.justification.as_deref() {
                    println!("Justification: {justification}");
                }
                if report.degraded_chunks > 0 {
                    println!(
                        "Note: {}/{} document parts could not be analyzed (model quota).",
                        report.degraded_chunks, report.chunk_count
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(PipelineError::Decision(e)) => {
            eprintln!("Could not complete analysis: {e}");
            if let Some(raw) = e.raw_response() {
                eprintln!("Model response was:\n{raw}");
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
