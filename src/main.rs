//! Verify Countdown - drives a single countdown display element
//!
//! This is the main entry point for the verify-countdown binary.

use tracing::info;

use verify_countdown::{
    config::{Config, OutputFormat},
    controller::CountdownController,
    display::{DisplaySink, JsonLinesSink, TerminalSink},
    host::{Element, Host, InlineHost, PageHost, REMAINING_KEY},
    scheduler::TokioScheduler,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the display
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting verify-countdown v{}", env!("CARGO_PKG_VERSION"));

    let host: Box<dyn Host> = match &config.page {
        Some(path) => Box::new(PageHost::load(path).await?),
        None => {
            let mut element = Element::new(config.element_id.as_str());
            if let Some(raw) = &config.remaining {
                element = element.with_data(REMAINING_KEY, raw.as_str());
            }
            Box::new(InlineHost::single(element))
        }
    };

    let sink: Box<dyn DisplaySink> = match config.format {
        OutputFormat::Text => Box::new(TerminalSink::stdout()),
        OutputFormat::Json => Box::new(JsonLinesSink::stdout()),
    };

    let Some(mut controller) = CountdownController::mount(host.as_ref(), &config.element_id, sink)
    else {
        return Ok(());
    };

    let mut scheduler = TokioScheduler;
    tokio::select! {
        _ = controller.run(&mut scheduler) => {
            info!("Countdown finished");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received, countdown abandoned");
        }
    }

    Ok(())
}
