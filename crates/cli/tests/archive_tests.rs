//! Integration tests for the `archive` command.
//!
//! Invariants:
//! - Only indices whose name date is older than --days are touched
//! - A snapshot precedes each delete unless the repository is `-`
//! - The first failure stops the run

mod common;

use common::{janitor_cmd_for, listing};
use predicates::prelude::*;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OLD_A: &str = "filebeat-6.4.3-2018.11.21";
const OLD_B: &str = "metricbeat-6.4.3-2018.11.22";
const FUTURE: &str = "filebeat-6.4.3-2999.01.01";

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .and(query_param("format", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing(&[".kibana", OLD_A, FUTURE, OLD_B])),
        )
        .mount(server)
        .await;
}

fn snapshot_path(repository: &str, index: &str) -> String {
    format!(
        r"^/_snapshot/{}/index-{}-on-\d{{4}}-\d{{2}}-\d{{2}}T\d{{2}}:\d{{2}}:\d{{2}}Z$",
        repository,
        index.replace('.', r"\.")
    )
}

#[tokio::test]
async fn test_archive_snapshots_and_deletes_old_indices() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    for index in [OLD_A, OLD_B] {
        Mock::given(method("PUT"))
            .and(path_regex(snapshot_path("backups", index)))
            .and(query_param("wait_for_completion", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/{index}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("DELETE"))
        .and(path(format!("/{FUTURE}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "backups")
        .args(["--days", "30", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{OLD_A}\tindex-{OLD_A}-on-")))
        .stdout(predicate::str::contains(format!("{OLD_B}\tindex-{OLD_B}-on-")))
        .stdout(predicate::str::contains(FUTURE).not())
        .stdout(predicate::str::contains(".kibana").not());
}

#[tokio::test]
async fn test_archive_is_the_default_command() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "-")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{OLD_A}\t-")))
        .stdout(predicate::str::contains(format!("{OLD_B}\t-")));
}

#[tokio::test]
async fn test_skip_sentinel_makes_no_snapshot_calls() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "-")
        .args(["archive"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_snapshot_failure_stops_before_delete() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("PUT"))
        .and(path_regex(snapshot_path("backups", OLD_A)))
        .respond_with(ResponseTemplate::new(500).set_body_string("burn"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "backups")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!("failed to snapshot index {OLD_A}: ")))
        .stderr(predicate::str::contains(format!("failed to snapshot index-{OLD_A}-on-")))
        .stderr(predicate::str::contains("response code: 500, response body: burn"));
}

#[tokio::test]
async fn test_delete_failure_reports_index_status_and_body() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("/{OLD_A}")))
        .respond_with(ResponseTemplate::new(500).set_body_string("burn"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/{OLD_B}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "-")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "failed to delete index {OLD_A}, response code: 500, response body: burn"
        )));
}

#[tokio::test]
async fn test_nothing_to_archive() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(&[".kibana", FUTURE])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    janitor_cmd_for(&server.uri(), "backups")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
