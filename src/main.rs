use colored::Colorize;
use gn_address_audit::{run_batch, Config};
use std::error::Error;
use std::io::BufRead;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    log::info!("#Start main()");

    let config_file = std::env::args().nth(1);
    let config = Config::load(config_file.as_deref())?;

    let result = run_batch(&config);
    match &result {
        Ok(summary) => println!(
            "#{}# processed={} skipped={} reports_with_diff={}",
            "DONE".on_green(),
            summary.processed_count(),
            summary.skipped_count(),
            summary.reports_with_diff()
        ),
        Err(e) => log::error!("Run failed: {e}"),
    }

    if config.pause_on_exit {
        println!("Press Enter to exit...");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    result.map(|_| ())
}
// cargo watch -x 'fmt' -x 'run'  // 'run -- gn_audit.json'
