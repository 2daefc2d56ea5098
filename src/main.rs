use jurispro::api::GeminiClient;
use jurispro::{config, logging, ui};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    config::initialize_config()?;
    let _logger = logging::initialize_logging()?;
    log::info!("JurisPro starting");

    let client = GeminiClient::from_config();
    ui::run_ui(client).await
}
