//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::sync::Arc;

use chrono::{TimeZone, Utc};

#[allow(unused_imports)]
pub use es_client::testing::load_fixture;

#[allow(unused_imports)]
pub use es_client::{EsClient, FixedClock, SearchEngine, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// 2018-11-30T12:00:00Z
#[allow(dead_code)]
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2018, 11, 30, 12, 0, 0).unwrap(),
    ))
}

/// Client against `mock_server` using [`fixed_clock`].
#[allow(dead_code)]
pub fn client_for(mock_server: &MockServer) -> EsClient {
    EsClient::builder()
        .endpoint(mock_server.uri())
        .clock(fixed_clock())
        .build()
        .unwrap()
}
