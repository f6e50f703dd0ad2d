//! Testing utilities for the search-engine client.
//!
//! Provides fixture loading and [`FakeSearchEngine`], an in-memory
//! [`SearchEngine`] that records every call and can be told to fail.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use es_client::testing::FakeSearchEngine;
//!
//! let engine = FakeSearchEngine::with_index_names(&[".kibana", "logs-2018.11.21"]);
//! engine.fail_snapshot_for("logs-2018.11.21");
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::clock::{Clock, SystemClock};
use crate::engine::SearchEngine;
use crate::error::{ClientError, Result};
use crate::models::{Index, snapshot_name};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A call observed by [`FakeSearchEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    CatIndices,
    DeleteIndex(String),
    SnapshotIndex { repository: String, index: String },
    RestoreSnapshot { repository: String, snapshot: String },
}

/// A snapshot held by [`FakeSearchEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub repository: String,
    pub name: String,
    pub index: Index,
}

#[derive(Debug, Default)]
struct FakeState {
    indices: Vec<Index>,
    snapshots: Vec<StoredSnapshot>,
    calls: Vec<EngineCall>,
    fail_listing: bool,
    fail_snapshot: HashSet<String>,
    fail_delete: HashSet<String>,
}

/// In-memory search engine.
///
/// Deleting removes the index from later listings; restoring a known
/// snapshot puts its index back. Injected failures surface as
/// [`ClientError::ApiError`] with status 500 and body `burn`.
#[derive(Debug)]
pub struct FakeSearchEngine {
    clock: Arc<dyn Clock>,
    state: Mutex<FakeState>,
}

impl Default for FakeSearchEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FakeSearchEngine {
    pub fn new(indices: Vec<Index>) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            state: Mutex::new(FakeState {
                indices,
                ..FakeState::default()
            }),
        }
    }

    /// Create an engine holding indices with the given names only.
    pub fn with_index_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| Index::named(*n)).collect())
    }

    /// Use `clock` for generated snapshot names.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Make every listing fail.
    pub fn fail_listing(&self) {
        self.state().fail_listing = true;
    }

    /// Make snapshots of `index` fail.
    pub fn fail_snapshot_for(&self, index: &str) {
        self.state().fail_snapshot.insert(index.to_string());
    }

    /// Make deletion of `index` fail.
    pub fn fail_delete_for(&self, index: &str) {
        self.state().fail_delete.insert(index.to_string());
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.state().calls.clone()
    }

    /// Names of the indices still present.
    pub fn index_names(&self) -> Vec<String> {
        self.state().indices.iter().map(|i| i.name.clone()).collect()
    }

    /// Snapshots taken so far, in order.
    pub fn snapshots(&self) -> Vec<StoredSnapshot> {
        self.state().snapshots.clone()
    }

    /// Number of delete calls, successful or not.
    pub fn delete_calls(&self) -> usize {
        self.count(|c| matches!(c, EngineCall::DeleteIndex(_)))
    }

    /// Number of snapshot calls, successful or not.
    pub fn snapshot_calls(&self) -> usize {
        self.count(|c| matches!(c, EngineCall::SnapshotIndex { .. }))
    }

    fn count(&self, pred: impl Fn(&EngineCall) -> bool) -> usize {
        self.state().calls.iter().filter(|c| pred(c)).count()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn injected_failure(operation: String, path: &str) -> ClientError {
    ClientError::ApiError {
        operation,
        status: 500,
        url: format!("fake://{path}"),
        body: "burn".to_string(),
    }
}

#[async_trait]
impl SearchEngine for FakeSearchEngine {
    async fn cat_indices(&self) -> Result<Vec<Index>> {
        let mut state = self.state();
        state.calls.push(EngineCall::CatIndices);
        if state.fail_listing {
            return Err(injected_failure(
                "list indices".to_string(),
                "_cat/indices",
            ));
        }
        Ok(state.indices.clone())
    }

    async fn delete_index(&self, name: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(EngineCall::DeleteIndex(name.to_string()));
        if state.fail_delete.contains(name) {
            return Err(injected_failure(format!("delete index {name}"), name));
        }
        let before = state.indices.len();
        state.indices.retain(|i| i.name != name);
        if state.indices.len() == before {
            return Err(ClientError::ApiError {
                operation: format!("delete index {name}"),
                status: 404,
                url: format!("fake://{name}"),
                body: format!("no such index [{name}]"),
            });
        }
        Ok(())
    }

    async fn snapshot_index(&self, repository: &str, index_name: &str) -> Result<String> {
        let name = snapshot_name(index_name, self.clock.now());
        let mut state = self.state();
        state.calls.push(EngineCall::SnapshotIndex {
            repository: repository.to_string(),
            index: index_name.to_string(),
        });
        if state.fail_snapshot.contains(index_name) {
            return Err(injected_failure(
                format!("snapshot {name}"),
                &format!("_snapshot/{repository}/{name}"),
            ));
        }
        let index = state
            .indices
            .iter()
            .find(|i| i.name == index_name)
            .cloned()
            .unwrap_or_else(|| Index::named(index_name));
        state.snapshots.push(StoredSnapshot {
            repository: repository.to_string(),
            name: name.clone(),
            index,
        });
        Ok(name)
    }

    async fn restore_snapshot(&self, repository: &str, snapshot_name: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(EngineCall::RestoreSnapshot {
            repository: repository.to_string(),
            snapshot: snapshot_name.to_string(),
        });

        let mut restored = Vec::new();
        for wanted in snapshot_name.split(',') {
            let found = state
                .snapshots
                .iter()
                .find(|s| s.repository == repository && s.name == wanted);
            match found {
                Some(snapshot) => restored.push(snapshot.index.clone()),
                None => {
                    return Err(ClientError::ApiError {
                        operation: format!("restore snapshot {snapshot_name}"),
                        status: 404,
                        url: format!("fake://_snapshot/{repository}/{snapshot_name}/_restore"),
                        body: format!("[{repository}:{wanted}] is missing"),
                    });
                }
            }
        }
        for index in restored {
            if !state.indices.iter().any(|i| i.name == index.name) {
                state.indices.push(index);
            }
        }
        Ok(())
    }
}
