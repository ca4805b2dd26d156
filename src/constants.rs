// Remote API
pub const DEFAULT_API_URL: &str = "http://api.valantis.store:40000/";
pub const AUTH_HEADER: &str = "X-Auth";
pub const AUTH_PREFIX: &str = "Valantis_";

// Action names accepted by the remote endpoint
pub const ACTION_GET_IDS: &str = "get_ids";
pub const ACTION_GET_ITEMS: &str = "get_items";
pub const ACTION_FILTER: &str = "filter";

// Pagination and filtering
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 50;
pub const DEFAULT_FILTER_DEBOUNCE_MS: u64 = 500;

// Viewer server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";

// Error messages
pub const ERR_REMOTE_UNAVAILABLE: &str = "Catalog service unavailable";
pub const ERR_REMOTE_TIMEOUT: &str = "Catalog service timed out";
pub const ERR_RENDER_FAILED: &str = "Failed to render page";
