//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const SELECT_OPTIONS_LIMIT: u32 = 100;
pub const DASHBOARD_RECENT_LIMIT: u32 = 5;

pub const SESSION_COOKIE_NAME: &str = "auth-token";
pub const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 30;

pub const ADMIN_ROLE: &str = "admin";
pub const FILTER_ALL: &str = "all";
pub const DEFAULT_CUSTOMER_TITLES: &str = "Mr.,Mrs.,Ms.,Dr.,Prof.";
