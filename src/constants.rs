// src/constants.rs
//! Domain constants that define the operational boundaries of the client.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Where the public Notion API lives.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// The API version sent in the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// The largest page the Notion API will return. Used as the CLI default.
pub const NOTION_API_MAX_PAGE_SIZE: u32 = 100;

/// Request timeout applied by the HTTP transport, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing undecodable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
