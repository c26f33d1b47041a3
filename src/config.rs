use std::env;

pub const DEFAULT_REGION_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_addr: String,
    pub log_level: String,

    // Database
    pub database_url: String,
    pub db_max_connections: u32,

    // Reference data
    pub region_data_path: String,
    pub region_batch_size: usize,
    pub load_regions_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            http_addr: env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://premium.db?mode=rwc".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),

            region_data_path: env::var("REGION_DATA_PATH")
                .unwrap_or_else(|_| "data/postcodes.csv".to_string()),
            region_batch_size: env::var("REGION_BATCH_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_REGION_BATCH_SIZE),
            load_regions_on_startup: env::var("LOAD_REGIONS_ON_STARTUP")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        })
    }
}
