/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Maximum accepted request body when `BODY_LIMIT_BYTES` is not set (100 KiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub body_limit_bytes: usize,
    pub scoring_seed: Option<u64>, // Fixed seed for reproducible mock scores
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            scoring_seed: None,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!("Body limit: {} bytes", config.body_limit_bytes);
        if let Some(seed) = config.scoring_seed {
            tracing::info!("Mock scorer seeded with {}", seed);
        }

        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            port: match read("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 0-65535"))?,
                None => DEFAULT_PORT,
            },
            body_limit_bytes: match read("BODY_LIMIT_BYTES") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("BODY_LIMIT_BYTES must be a positive integer"))
                    .and_then(|limit: usize| {
                        if limit == 0 {
                            anyhow::bail!("BODY_LIMIT_BYTES cannot be zero");
                        }
                        Ok(limit)
                    })?,
                None => DEFAULT_BODY_LIMIT_BYTES,
            },
            scoring_seed: read("SCORING_SEED")
                .map(|raw| {
                    raw.trim()
                        .parse()
                        .map_err(|_| anyhow::anyhow!("SCORING_SEED must be an unsigned 64-bit integer"))
                })
                .transpose()?,
        })
    }
}
