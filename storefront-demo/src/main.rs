mod error;
mod markup;
mod script;

use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};
use storefront::{Page, WidgetConfig};
use themedom::Document;

use script::Visit;

#[tokio::main]
async fn main() {
    let log_file = File::create("storefront-demo.log").expect("Failed to create log file");
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Debug, Config::default(), log_file),
    ])
    .expect("Failed to initialize logger");

    // `--fast` skips the wall-clock pacing.
    let paced = !std::env::args().any(|a| a == "--fast");

    let page = match Page::with_config(Document::new(markup::home_page()), WidgetConfig::new()) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    if let Err(e) = Visit::new(page, paced).run().await {
        eprintln!("Error: {}", e);
    }
}
