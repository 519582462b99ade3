//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros,
//! the production logger and the test capture layer. `tracing` field names
//! are identifiers at the emit site, so the macros spell them out; readers
//! of captured events look them up through these constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_MESSAGE: &str = "message";

// Calculator fields
pub const FIELD_OP_COUNT: &str = "op_count";
pub const FIELD_TOTAL: &str = "total";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_EMIT: &str = "emit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_MESSAGE.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_EMIT.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        let names = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_EMIT];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
