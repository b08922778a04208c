//! Row-level encoding helpers shared by the repositories.
//!
//! Identifiers and timestamps are stored as TEXT. Timestamps use RFC 3339
//! with fixed microsecond precision so that lexicographic comparison in
//! SQL matches chronological order.

use chrono::SecondsFormat;

use devman_domain::time::Timestamp;

/// Encode a timestamp for storage.
pub(crate) fn encode_ts(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp, mapping failures to a sqlx decode error.
pub(crate) fn decode_ts(raw: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrap any decoding failure as a sqlx decode error.
pub(crate) fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use devman_domain::time;

    #[test]
    fn should_roundtrip_timestamp_at_microsecond_precision() {
        let ts = time::now();
        let decoded = decode_ts(&encode_ts(ts)).unwrap();
        assert_eq!(decoded.timestamp_micros(), ts.timestamp_micros());
    }

    #[test]
    fn should_keep_lexicographic_order_chronological() {
        let earlier = time::now();
        let later = earlier + chrono::Duration::milliseconds(1);
        assert!(encode_ts(earlier) < encode_ts(later));
    }

    #[test]
    fn should_fail_on_garbage_input() {
        assert!(decode_ts("yesterday").is_err());
    }
}
