use anyhow::Result;
use clap::Parser;

mod config;
mod logger;
mod providers;
mod resolver;
mod responder;
mod session;
mod ui;
mod web_summary;

use config::Config;
use providers::DuckDuckGoProvider;
use resolver::AnswerResolver;
use responder::OfflineResponder;
use session::Session;
use ui::{Palette, UIHandler};
use web_summary::{NoopProvider, SummaryProvider};

#[derive(Parser)]
#[command(name = "shizu", version, about = "ShizuAi - assistant hors ligne avec recherche web optionnelle")]
struct Args {
    /// Question to ask directly; leave empty for an interactive session
    question: Vec<String>,
    /// Disable web summaries (offline replies only)
    #[arg(long)]
    no_web: bool,
    /// Disable grey/red terminal colors
    #[arg(long)]
    no_color: bool,
    /// Maximum time in seconds for a web summary (at least 0.1)
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    timeout: Option<f64>,
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let mut config = Config::load(&args.config)?;
    config.merge_with_args(args.no_web, args.no_color, args.timeout);

    let provider: Box<dyn SummaryProvider> = if config.web.enabled {
        Box::new(DuckDuckGoProvider::from_config(&config.web))
    } else {
        Box::new(NoopProvider)
    };
    let responder = OfflineResponder::new(config.phrases.clone(), config.ui.wrap_width);
    let resolver = AnswerResolver::new(responder, provider);
    let ui = UIHandler::new(Palette::grey_red(config.ui.colorful));
    let session = Session::new(&resolver, &ui, config.web.enabled, config.timeout());

    if args.question.is_empty() {
        session.interactive().await
    } else {
        session.one_shot(&args.question.join(" ")).await
    }
}
