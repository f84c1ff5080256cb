//! Shared test utilities for ffs-search integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the STS login exchange on a mock server.
//!
//! Invariants / Assumptions:
//! - Every `FFS_*` variable from the host is cleared.
//! - `FFS_USERNAME`/`FFS_PASSWORD` are set so no test ever reaches the password prompt.

#![allow(dead_code)]

use assert_cmd::Command;
use ffs_client::testing::load_fixture;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/forensic-search/queryservice/api/v1/fileevent";

/// Returns a hermetic `ffs-search` command.
pub fn ffs_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ffs-search");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("FFS_STS_URL")
        .env_remove("FFS_BASE_URL")
        .env_remove("FFS_SKIP_VERIFY")
        .env_remove("FFS_TIMEOUT")
        .env_remove("FFS_SOURCE")
        .env_remove("FFS_PAGE_SIZE")
        .env_remove("FFS_MAX_RESULTS")
        .env_remove("FFS_PROFILE")
        .env_remove("FFS_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd.env("FFS_USERNAME", "analyst@example.com")
        .env("FFS_PASSWORD", "test-password");

    cmd
}

/// Returns a hermetic command with both hosts pointed at `server`.
pub fn ffs_cmd_for(server: &MockServer) -> Command {
    let mut cmd = ffs_cmd();
    cmd.env("FFS_STS_URL", server.uri())
        .env("FFS_BASE_URL", server.uri())
        .arg("--quiet");
    cmd
}

/// Mount a successful two-step STS login.
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
