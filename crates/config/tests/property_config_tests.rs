//! Property-based tests for configuration validation.
//!
//! Test coverage:
//! - Any timeout inside the accepted range builds; anything above it fails.
//! - Inactivity minutes map to `minutes * 60` countdown seconds.
//! - Trailing slashes never survive URL normalization.

use std::time::Duration;

use proptest::prelude::*;

use preeval_config::ConfigLoader;
use preeval_config::constants::{MAX_INACTIVITY_MINUTES, MAX_TIMEOUT_SECS};

/// Strategy for generating valid base URLs.
fn base_url_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![
        Just("localhost"),
        Just("eval.example.com"),
        Just("127.0.0.1"),
        Just("preeval.internal"),
    ];
    (scheme, host, 1024u16..=65535u16)
        .prop_map(|(scheme, host, port)| format!("{scheme}://{host}:{port}"))
}

proptest! {
    #[test]
    fn prop_timeout_in_range_builds(secs in 1u64..=MAX_TIMEOUT_SECS) {
        let config = ConfigLoader::new()
            .with_timeout(Duration::from_secs(secs))
            .build()
            .unwrap();
        prop_assert_eq!(config.timeout, Duration::from_secs(secs));
    }

    #[test]
    fn prop_timeout_above_range_fails(secs in (MAX_TIMEOUT_SECS + 1)..=u64::from(u32::MAX)) {
        let result = ConfigLoader::new()
            .with_timeout(Duration::from_secs(secs))
            .build();
        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_inactivity_minutes_to_seconds(minutes in 1u32..=MAX_INACTIVITY_MINUTES) {
        let config = ConfigLoader::new()
            .with_inactivity_minutes(minutes)
            .build()
            .unwrap();
        prop_assert_eq!(config.inactivity.total_seconds(), minutes * 60);
    }

    #[test]
    fn prop_trailing_slashes_stripped(base in base_url_strategy(), slashes in 0usize..4) {
        let raw = format!("{base}{}", "/".repeat(slashes));
        let config = ConfigLoader::new().with_api_url(raw).build().unwrap();
        prop_assert_eq!(&config.api_url, &base);
        prop_assert_eq!(config.advanced_url, format!("{base}/advanced"));
    }
}
