// src/config.rs
use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_BASE_URL, NOTION_API_MAX_PAGE_SIZE,
    NOTION_API_VERSION,
};
use crate::error::AppError;
use crate::types::{ApiKey, BaseUrl};
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;

/// How a query without a filter is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AbsentFilter {
    /// Leave the `filter` key out of the body.
    #[default]
    Omit,
    /// Send `"filter": null`.
    Null,
}

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// How to encode a query that has no filter
    #[arg(long, global = true, value_enum, default_value_t = AbsentFilter::Omit)]
    pub absent_filter: AbsentFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve one database's schema
    Get {
        /// Database URL or ID
        database: String,
    },
    /// List databases shared with the integration
    List {
        /// Results per page (0 = service default)
        #[arg(long, default_value_t = NOTION_API_MAX_PAGE_SIZE)]
        page_size: u32,

        /// Continue from a cursor returned by an earlier call
        #[arg(long)]
        start_cursor: Option<String>,

        /// Follow cursors until every page has been fetched
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Query the rows of a database
    Query {
        /// Database URL or ID
        database: String,

        /// Filter expression as JSON
        #[arg(long)]
        filter: Option<String>,

        /// Sort clause `Property[:asc|:desc]`, repeatable, applied in order
        #[arg(long = "sort")]
        sorts: Vec<String>,

        /// Results per page (0 = service default)
        #[arg(long, default_value_t = NOTION_API_MAX_PAGE_SIZE)]
        page_size: u32,

        /// Continue from a cursor returned by an earlier call
        #[arg(long)]
        start_cursor: Option<String>,

        /// Follow cursors until every page has been fetched
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Stop after this many pages when following cursors
        #[arg(long)]
        max_pages: Option<u32>,
    },
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: BaseUrl,
    pub notion_version: String,
    pub timeout: Duration,
    pub absent_filter: AbsentFilter,
}

impl ClientConfig {
    /// Defaults for the public API with the given key.
    pub fn new(api_key: ApiKey) -> Result<Self, AppError> {
        Ok(Self {
            api_key,
            base_url: BaseUrl::parse(NOTION_API_BASE_URL)?,
            notion_version: NOTION_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            absent_filter: AbsentFilter::default(),
        })
    }

    /// Reads `NOTION_API_KEY`, and optionally `NOTION_API_BASE_URL` and
    /// `NOTION_VERSION`, from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_key = lookup("NOTION_API_KEY").ok_or_else(|| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut config = Self::new(ApiKey::new(api_key)?)?;

        if let Some(base_url) = lookup("NOTION_API_BASE_URL") {
            config.base_url = BaseUrl::parse(&base_url)?;
        }
        if let Some(version) = lookup("NOTION_VERSION") {
            config.notion_version = version;
        }

        Ok(config)
    }

    /// Applies the global command-line overrides.
    pub fn with_cli(mut self, cli: &CommandLineInput) -> Self {
        self.timeout = Duration::from_secs(cli.timeout);
        self.absent_filter = cli.absent_filter;
        self
    }
}
