use clap::Parser;

/// Process settings, read once at startup. Every flag can also be set through
/// the environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "hotels-api", about = "Read API over merged hotel data")]
pub struct Config {
    /// sqlx connection string for the hotel store.
    #[arg(long, env = "DB_URI")]
    pub db_uri: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// `production` switches logging to plain timestamped output.
    #[arg(long, env = "ENV", default_value = "development")]
    pub env: String,

    /// env_logger filter, e.g. `info` or `hotels_api=debug,sqlx=warn`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}
