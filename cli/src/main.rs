//! CLI entrypoint for Commons Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use commons_application::{CompletionProvider, Council, FollowUpInput};
use commons_domain::{ConversationContext, ConversationHistory, RandomSource};
use commons_infrastructure::{
    API_KEY_ENV, ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatProvider,
    SeededRandom, ThreadRandom,
};
use commons_presentation::{Cli, Command, ConsoleFormatter, HttpOptions, router};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid configuration: {}", e);
        }
        bail!("{} configuration error(s); see log for details", errors.len());
    }

    // === Dependency Injection ===
    let council = Arc::new(build_council(&config, cli.seed)?);

    match command {
        Command::Serve { bind } => serve(council, &config, bind).await,
        Command::Ask {
            message,
            topic,
            participant,
            follow_up,
            json,
        } => {
            ask(
                &council,
                &message,
                topic,
                participant.as_deref(),
                follow_up,
                json,
            )
            .await
        }
        Command::Select { message, topic } => {
            let context = context_for(topic);
            let result = council.select(&message, &context);
            print!(
                "{}",
                ConsoleFormatter::format_selection(&result, council.registry())
            );
            Ok(())
        }
        Command::Participants => {
            print!(
                "{}",
                ConsoleFormatter::format_participants(&council.list_participants())
            );
            Ok(())
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "commons-council.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn build_council(config: &FileConfig, seed: Option<u64>) -> Result<Council> {
    let provider = Arc::new(
        OpenAiCompatProvider::from_config(&config.provider)
            .context("Failed to create completion provider")?,
    );
    if !provider.is_configured() {
        warn!(
            "No provider API key (set provider.api_key or {}); replies will come from fallback catalogs",
            API_KEY_ENV
        );
    }

    let random: Arc<dyn RandomSource> = match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let council = Council::builtin(provider, random, config.generation_params())
        .context("Invalid participant configuration")?;

    let council = match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::open(path) {
            Ok(logger) => {
                info!("Conversation log: {}", logger.path().display());
                council.with_conversation_logger(Arc::new(logger))
            }
            Err(e) => {
                warn!("Conversation log disabled, cannot open {}: {}", path.display(), e);
                council
            }
        },
        None => council,
    };

    Ok(council)
}

fn context_for(topic: Option<String>) -> ConversationContext {
    match topic {
        Some(topic) => ConversationContext::new().with_topic(topic),
        None => ConversationContext::new(),
    }
}

async fn ask(
    council: &Council,
    message: &str,
    topic: Option<String>,
    participant: Option<&str>,
    follow_up: bool,
    json: bool,
) -> Result<()> {
    let context = context_for(topic);
    let mut history = ConversationHistory::new();

    let reply = council
        .chat(message, &context, &mut history, participant)
        .await?;

    let follow = if follow_up {
        let input = FollowUpInput::new(message, reply.response.text.as_str())
            .with_context(context)
            .excluding(reply.participant_id.as_str());
        council.follow_up(input).await
    } else {
        None
    };

    let output = if json {
        ConsoleFormatter::format_json(&reply, follow.as_ref())
    } else {
        ConsoleFormatter::format_reply(&reply, follow.as_ref())
    };
    println!("{}", output);

    Ok(())
}

async fn serve(council: Arc<Council>, config: &FileConfig, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let options = HttpOptions {
        cors_origins: config.server.cors_origins.clone(),
        body_limit_bytes: config.server.body_limit_bytes,
    };
    let app = router(council.clone(), &options);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;

    info!(
        bind = %bind,
        model = council.model_name(),
        participants = council.registry().len(),
        "Commons Council listening"
    );

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutting down gracefully");
                trigger.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
