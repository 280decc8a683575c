// src/config/consts.rs

// Net config
pub const DEFAULT_PROXY: &str = "socks5h://127.0.0.1:9050";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:78.0) Gecko/20100101 Firefox/68.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 60; // onion circuits are slow
pub const REQUEST_PAUSE_MS: u64 = 0;

// Environment overrides (also read from .env)
pub const ENV_URL: &str = "MARKET_URL";
pub const ENV_PROXY: &str = "MARKET_PROXY";
pub const ENV_COOKIES: &str = "MARKET_COOKIES";
pub const ENV_USER_AGENT: &str = "MARKET_USER_AGENT";
pub const ENV_PAUSE_MS: &str = "MARKET_PAUSE_MS";

// Link filters (substring match on href)
pub const PROFILE_HREF: &str = "profile";
pub const OFFERS_HREF: [&str; 2] = ["items", "vendor"];

// Local data
pub const DEFAULT_DATA_DIR: &str = "data";
pub const OFFERS_FILE: &str = "offers.csv";
pub const VENDORS_FILE: &str = "vendors.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";

// Dashboard
pub const MIN_OFFERS_LO: u32 = 10;
pub const MIN_OFFERS_HI: u32 = 500;
pub const MIN_OFFERS_STEP: u32 = 10;
pub const MIN_OFFERS_DEFAULT: u32 = 50;
pub const HISTOGRAM_BINS: usize = 50;
pub const REFERENCE_DATE: (i32, u32, u32) = (2021, 4, 18);
pub const DATA_PREVIEW_ROWS: usize = 10;
pub const REPORT_OFFER_ROWS: usize = 5;
pub const REPORT_VENDOR_ROWS: usize = 3;

// Labels
pub const ALL_COUNTRIES: &str = "All countries";
pub const ALL_LEVELS: &str = "All levels";
pub const ALL_RANKS: &str = "All ranks";
pub const OTHER_COUNTRIES: &str = "Other countries";
pub const NO_VERIFICATION: &str = "No verification level";
pub const UNKNOWN: &str = "Unknown";
pub const WORLDWIDE: &str = "Worldwide";
