//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers stand in for both the STS and the search host
//!
//! # What this does NOT handle
//! - Test-specific assertions or test logic

#[allow(unused_imports)]
pub use ffs_client::testing::{event_page, load_fixture};

#[allow(unused_imports)]
pub use ffs_client::{ClientError, FfsClient, StaticCredentials};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use wiremock::matchers::{method, path};

/// Path of the search endpoint on the mock server.
#[allow(dead_code)]
pub const SEARCH_PATH: &str = "/forensic-search/queryservice/api/v1/fileevent";

/// Credentials used by every test login.
#[allow(dead_code)]
pub fn test_credentials() -> StaticCredentials {
    StaticCredentials::new(
        "analyst@example.com",
        SecretString::new("test-password".to_string().into()),
    )
    .expect("valid test credentials")
}

/// A client whose STS and search endpoints both point at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> FfsClient {
    FfsClient::builder()
        .sts_url(server.uri())
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Mount a successful two-step STS login.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/LoginConfiguration"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_config_local.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/login-user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/login_success.json")),
        )
        .mount(server)
        .await;
}

/// A client that has already logged in against `server`.
#[allow(dead_code)]
pub async fn authenticated_client(server: &MockServer) -> FfsClient {
    mount_login(server).await;
    let mut client = client_for(server);
    client
        .authenticate(&test_credentials())
        .await
        .expect("login should succeed");
    client
}
