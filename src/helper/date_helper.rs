use chrono::{DateTime, TimeZone, Utc};

/// Before SNTP sync the RTC starts at the epoch; anything earlier than this is not a real time.
pub fn clock_sync_threshold() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn is_clock_synchronized(now: DateTime<Utc>) -> bool {
    now >= clock_sync_threshold()
}

pub fn reading_timestamp(now: DateTime<Utc>) -> Option<i64> {
    if is_clock_synchronized(now) {
        Some(now.timestamp_millis())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsynchronized_clock_has_no_timestamp() {
        let boot = Utc.timestamp_opt(42, 0).unwrap();
        assert!(!is_clock_synchronized(boot));
        assert_eq!(reading_timestamp(boot), None);
    }

    #[test]
    fn test_synchronized_clock_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert!(is_clock_synchronized(now));
        assert_eq!(reading_timestamp(now), Some(1_714_564_800_000));
    }

    #[test]
    fn test_timestamp_appears_once_clock_is_set() {
        let before_sync = Utc.timestamp_opt(5, 0).unwrap();
        let after_sync = Utc.with_ymd_and_hms(2025, 3, 2, 8, 30, 0).unwrap();
        let readings: Vec<Option<i64>> = [before_sync, before_sync, after_sync]
            .into_iter()
            .map(reading_timestamp)
            .collect();
        assert_eq!(
            readings,
            vec![None, None, Some(after_sync.timestamp_millis())]
        );
    }

    #[test]
    fn test_sync_threshold_boundary() {
        assert!(is_clock_synchronized(clock_sync_threshold()));
        let just_before = clock_sync_threshold() - chrono::Duration::seconds(1);
        assert!(!is_clock_synchronized(just_before));
    }
}
