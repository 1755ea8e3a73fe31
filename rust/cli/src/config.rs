use dailyset_engine::generator::{
    DEFAULT_BOARD_SIZE, DEFAULT_TARGET_SETS, GeneratorConfig, MAX_ATTEMPTS,
};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "DAILYSET_CONFIG";
pub const SETS_ENV: &str = "DAILYSET_SETS";
pub const BOARD_SIZE_ENV: &str = "DAILYSET_BOARD_SIZE";
pub const MAX_ATTEMPTS_ENV: &str = "DAILYSET_MAX_ATTEMPTS";
pub const SEED_ENV: &str = "DAILYSET_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub target_sets: usize,
    pub board_size: usize,
    pub max_attempts: u32,
    /// Seed for practice boards; daily boards always use the date
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub target_sets: ValueSource,
    pub board_size: ValueSource,
    pub max_attempts: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            target_sets: ValueSource::Default,
            board_size: ValueSource::Default,
            max_attempts: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_sets: DEFAULT_TARGET_SETS,
            board_size: DEFAULT_BOARD_SIZE,
            max_attempts: MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl Config {
    /// Generator parameters, with command-line overrides applied on top.
    pub fn generator(&self, sets: Option<usize>, size: Option<usize>) -> GeneratorConfig {
        GeneratorConfig::new(
            sets.unwrap_or(self.target_sets),
            size.unwrap_or(self.board_size),
        )
        .with_max_attempts(self.max_attempts)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.target_sets {
            cfg.target_sets = v;
            sources.target_sets = ValueSource::File;
        }
        if let Some(v) = f.board_size {
            cfg.board_size = v;
            sources.board_size = ValueSource::File;
        }
        if let Some(v) = f.max_attempts {
            cfg.max_attempts = v;
            sources.max_attempts = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(sets) = std::env::var(SETS_ENV)
        && !sets.is_empty()
    {
        cfg.target_sets = sets
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid target sets".into()))?;
        sources.target_sets = ValueSource::Env;
    }
    if let Ok(size) = std::env::var(BOARD_SIZE_ENV)
        && !size.is_empty()
    {
        cfg.board_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid board size".into()))?;
        sources.board_size = ValueSource::Env;
    }
    if let Ok(attempts) = std::env::var(MAX_ATTEMPTS_ENV)
        && !attempts.is_empty()
    {
        cfg.max_attempts = attempts
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max attempts".into()))?;
        sources.max_attempts = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    target_sets: Option<usize>,
    #[serde(default)]
    board_size: Option<usize>,
    #[serde(default)]
    max_attempts: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.board_size < 3 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: board_size must be >=3".into(),
        ));
    }
    if cfg.max_attempts == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_attempts must be >0".into(),
        ));
    }
    Ok(())
}
