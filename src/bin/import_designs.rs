//! Bulk loader reading designs from a CSV file into the catalog database.
//!
//! Usage: `import_designs <path/to/designs.csv>`

use std::env;
use std::fs::File;

use config::Config;
use dotenvy::dotenv;

use wall_catalog::db::establish_connection_pool;
use wall_catalog::forms::import::parse_designs_csv;
use wall_catalog::models::config::ServerConfig;
use wall_catalog::repository::DieselRepository;
use wall_catalog::services::import::import_designs;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(csv_path) = env::args().nth(1) else {
        log::error!("Usage: import_designs <designs.csv>");
        std::process::exit(2);
    };

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {}", err);
            std::process::exit(1);
        }
    };

    let file = match File::open(&csv_path) {
        Ok(file) => file,
        Err(e) => {
            log::error!("Cannot open {csv_path}: {e}");
            std::process::exit(1);
        }
    };

    let rows = match parse_designs_csv(file) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Rejected {csv_path}: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match import_designs(&repo, rows) {
        Ok(count) => log::info!("Imported {count} designs from {csv_path}"),
        Err(e) => {
            log::error!("Import aborted: {e}");
            std::process::exit(1);
        }
    }
}
