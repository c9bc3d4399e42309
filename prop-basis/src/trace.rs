/*! Defines the names of the fields and events that conversions report through `tracing`,
and a subscriber that writes them to a JSON log. */
pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// conversion log record fields:
pub const EVENT_FIELD: &str = "event";
pub const BASIS_FIELD: &str = "basis";
pub const INPUT_FIELD: &str = "input";
pub const OUTPUT_FIELD: &str = "output";

// log event types:
/// A formula was converted to a basis.
pub const CONVERT: &str = "@convert";
