//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point both base URLs at the same mock server; the
//!   advanced API lives under `/advanced`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use preeval_client::testing::load_fixture;

#[allow(unused_imports)]
pub use preeval_client::{
    ClientError, CreditApplication, Decision, EmploymentType, PreevalClient, endpoints,
};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client whose evaluation and advanced URLs both point at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PreevalClient {
    PreevalClient::builder()
        .api_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build against the mock server")
}

/// A complete application that satisfies every local input rule.
#[allow(dead_code)]
pub fn sample_application() -> CreditApplication {
    CreditApplication {
        name: "Ana Torres".to_string(),
        age: 34,
        monthly_income: 25_000.0,
        monthly_debt: 3_000.0,
        employment_type: EmploymentType::Employee,
        months_of_experience: 48,
        credit_score: 720,
        amount: 100_000.0,
        term: 36,
        active_defaults: false,
    }
}
