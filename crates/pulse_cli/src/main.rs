use clap::{Parser, Subcommand};
use pulse_analysis::{create_model, GoogleTranslateTts, ModelConfig, Pipeline};
use pulse_core::Result;
use pulse_web::AppState;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage backend for reports and audio
    #[arg(long, default_value = "memory")]
    storage: String,

    /// HuggingFace inference API key; without it the offline lexicon
    /// classifier is used
    #[arg(long)]
    hf_api_key: Option<String>,

    /// Classifier model name override
    #[arg(long)]
    model: Option<String>,

    /// Locale for the rendered summary and speech
    #[arg(long, default_value = "hi")]
    locale: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze news coverage for a company and print the report as JSON
    Analyze {
        company: String,

        /// Number of articles to collect
        #[arg(long, default_value_t = 10)]
        articles: usize,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = pulse_storage::create_store(&cli.storage)?;
    info!("💾 Report store initialized (using {})", cli.storage);

    let model = create_model(Some(ModelConfig {
        api_key: cli.hf_api_key.clone(),
        model_name: cli.model.clone(),
    }))?;
    info!("🧠 Sentiment model initialized (using {})", model.name());

    let synthesizer = Arc::new(GoogleTranslateTts::new()?);
    let pipeline = Pipeline::new(model, synthesizer, store.clone())?.with_locale(&cli.locale);

    match cli.command {
        Commands::Analyze { company, articles } => {
            info!("📰 Analyzing news coverage for {}", company);
            let report = pipeline.run(&company, articles).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Serve { port } => {
            let state = AppState::new(Arc::new(pipeline), store);
            let app = pulse_web::create_app(state).await;
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            info!("🌐 Serving API on port {}", port);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
