use dotenv::dotenv;
use restaurant_console::lifecycle::{exit_message, setup_tracing, AppConfig, InterruptWatch};
use restaurant_console::order::OrderAccumulator;
use restaurant_console::pipeline::{OrderPipeline, StdoutSink};
use restaurant_console::session::{SessionController, SessionError, SessionReport};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};

const FAREWELL: &str = "Thanks for visiting our restaurant. Have a great day!";

async fn run_session(config: &AppConfig) -> Result<SessionReport, SessionError> {
    let menu = config.load_menu()?;

    let order = Arc::new(OrderAccumulator::new(config.order_number.clone()));
    let pipeline = OrderPipeline::start(order, Arc::new(StdoutSink));

    let mut session = SessionController::new(
        menu,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    session.run(pipeline).await
}

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv().ok();
    setup_tracing();

    let config = AppConfig::from_env();
    info!(?config, "Starting restaurant console");

    let interrupts = InterruptWatch::spawn();
    let result = run_session(&config).await;

    match &result {
        Ok(report) => info!(outcome = ?report.outcome, pipeline = ?report.pipeline, "Session finished"),
        Err(e) => error!(error = %e, "Session failed"),
    }
    if let Some(line) = exit_message(interrupts.stop(), result.is_ok()) {
        println!("{line}");
    }
    println!("{FAREWELL}");

    result.map(|_| ()).map_err(|e| e.to_string())
}
