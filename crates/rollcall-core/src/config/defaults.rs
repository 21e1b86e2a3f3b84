// Single source of truth for all default values.

// --- Extraction ---
/// One capitalized name token: "Smith", "O'Brien", "McDonald", "Jean-Luc".
pub const DEFAULT_NAME_TOKEN_PATTERN: &str = r"[A-Z][A-Za-z'-]*[a-z]";
/// Characters accepted inside the parenthesized student identifier.
pub const DEFAULT_ID_PATTERN: &str = r"[A-Za-z0-9][A-Za-z0-9_-]*";
pub const DEFAULT_MAX_NAME_TOKENS: usize = 3;
pub const DEFAULT_BARE_NAME_FALLBACK: bool = true;

// --- Validation ---
pub const DEFAULT_AUTO_FIX: bool = false;
pub const DEFAULT_STRICT: bool = false;

// --- Confidence ---
pub const DEFAULT_VALID_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_INVALID_CONFIDENCE: f64 = 0.6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
