//! Bulk installation from a requirements manifest
//!
//! Entries are installed strictly in file order, one at a time: pip is not
//! safe to run concurrently against one environment. A failed entry is
//! recorded and the job moves on; the job itself only fails when the
//! manifest cannot be read, before anything is installed.

mod manifest;
mod state;

pub use manifest::{parse_manifest, read_manifest};
pub use state::{BulkJobState, EntryResult};

use std::path::Path;

use crate::error::Result;
use crate::installer::PackageInstaller;

/// Runs one manifest through a [`PackageInstaller`]
pub struct BulkJobRunner<'a> {
    installer: &'a mut PackageInstaller,
}

impl<'a> BulkJobRunner<'a> {
    pub fn new(installer: &'a mut PackageInstaller) -> Self {
        Self { installer }
    }

    /// Install every entry of the manifest at `manifest_path`.
    ///
    /// `on_progress` receives the percent complete after each entry; the
    /// values never decrease and the last one is exactly 100. An empty
    /// manifest reports 100 once.
    pub fn run(
        &mut self,
        manifest_path: &Path,
        mut on_progress: impl FnMut(f64),
    ) -> Result<BulkJobState> {
        let entries = read_manifest(manifest_path)?;
        let mut state = BulkJobState::new(entries.len());
        tracing::info!(
            manifest = %manifest_path.display(),
            total = entries.len(),
            "starting bulk install"
        );

        if entries.is_empty() {
            on_progress(state.percent());
            return Ok(state);
        }

        for (index, entry) in entries.iter().enumerate() {
            state.start_entry(index);
            let outcome = self.installer.install(entry);
            match &outcome {
                Ok(outcome) => tracing::info!(entry = %entry, %outcome, "entry done"),
                Err(e) => tracing::warn!(entry = %entry, error = %e, "entry failed"),
            }
            state.record(entry, &outcome);
            on_progress(state.percent());
        }

        tracing::info!(
            succeeded = state.succeeded(),
            failed = state.failed(),
            "bulk install finished"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::PipdeckError;
    use crate::runtime::PipStep;
    use crate::test_fixtures::{FakeEnvironment, create_temp_dir, write_manifest};

    fn installer(env: &Arc<FakeEnvironment>) -> PackageInstaller {
        PackageInstaller::new(env.clone(), env.clone(), env.clone())
    }

    #[test]
    fn test_partial_failure_runs_every_entry() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["requests", "broken", "", "flask", "bad"]);
        let env = Arc::new(
            FakeEnvironment::new()
                .with_failing_step(PipStep::Install("broken".to_string()))
                .with_failing_step(PipStep::Install("bad".to_string())),
        );
        let mut installer = installer(&env);

        let state = BulkJobRunner::new(&mut installer)
            .run(&manifest, |_| {})
            .unwrap();

        assert_eq!(state.total(), 4);
        assert_eq!(state.completed(), 4);
        assert_eq!(state.results().len(), 4);
        assert_eq!(state.succeeded(), 2);
        let outcomes: Vec<(&str, bool)> = state
            .results()
            .iter()
            .map(|r| (r.entry.as_str(), r.success))
            .collect();
        assert_eq!(
            outcomes,
            [
                ("requests", true),
                ("broken", false),
                ("flask", true),
                ("bad", false)
            ]
        );
    }

    #[test]
    fn test_every_entry_failing_still_completes() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["a", "b"]);
        let env = Arc::new(FakeEnvironment::new().with_spawn_failure());
        let mut installer = installer(&env);

        let mut progress = Vec::new();
        let state = BulkJobRunner::new(&mut installer)
            .run(&manifest, |p| progress.push(p))
            .unwrap();

        assert_eq!(state.completed(), 2);
        assert_eq!(state.succeeded(), 0);
        assert_eq!(progress, [50.0, 100.0]);
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_100() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["a", "b", "c", "d", "e", "f", "g"]);
        let env = Arc::new(
            FakeEnvironment::new().with_failing_step(PipStep::Install("c".to_string())),
        );
        let mut installer = installer(&env);

        let mut progress = Vec::new();
        BulkJobRunner::new(&mut installer)
            .run(&manifest, |p| progress.push(p))
            .unwrap();

        assert_eq!(progress.len(), 7);
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.last().copied(), Some(100.0));
    }

    #[test]
    fn test_entries_installed_in_file_order() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["zeta", "alpha", "mid"]);
        let env = Arc::new(FakeEnvironment::new());
        let mut installer = installer(&env);

        BulkJobRunner::new(&mut installer)
            .run(&manifest, |_| {})
            .unwrap();

        let installs: Vec<String> = env
            .calls()
            .into_iter()
            .filter_map(|step| match step {
                PipStep::Install(name) => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(installs, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_already_installed_entries_count_as_success() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["requests"]);
        let env = Arc::new(FakeEnvironment::new().with_importable("requests"));
        let mut installer = installer(&env);

        let state = BulkJobRunner::new(&mut installer)
            .run(&manifest, |_| {})
            .unwrap();

        assert_eq!(state.succeeded(), 1);
        assert!(env.calls().is_empty());
    }

    #[test]
    fn test_blank_manifest_completes_immediately() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &["", "   ", "\t"]);
        let env = Arc::new(FakeEnvironment::new());
        let mut installer = installer(&env);

        let mut progress = Vec::new();
        let state = BulkJobRunner::new(&mut installer)
            .run(&manifest, |p| progress.push(p))
            .unwrap();

        assert_eq!(state.total(), 0);
        assert!(state.is_finished());
        assert_eq!(progress, [100.0]);
        assert!(env.calls().is_empty());
    }

    #[test]
    fn test_missing_manifest_fails_before_any_work() {
        let temp = create_temp_dir();
        let env = Arc::new(FakeEnvironment::new());
        let mut installer = installer(&env);

        let mut progress = Vec::new();
        let err = BulkJobRunner::new(&mut installer)
            .run(&temp.path().join("missing.txt"), |p| progress.push(p))
            .unwrap_err();

        assert!(matches!(err, PipdeckError::ManifestNotFound { .. }));
        assert!(progress.is_empty());
        assert!(env.probes().is_empty());
    }

    #[test]
    fn test_invalid_entry_is_a_failed_outcome() {
        let temp = create_temp_dir();
        let manifest = write_manifest(temp.path(), &[">=1.0", "six"]);
        let env = Arc::new(FakeEnvironment::new());
        let mut installer = installer(&env);

        let state = BulkJobRunner::new(&mut installer)
            .run(&manifest, |_| {})
            .unwrap();

        assert_eq!(state.completed(), 2);
        assert!(!state.results()[0].success);
        assert!(state.results()[0].detail.contains("Invalid package name"));
        assert!(state.results()[1].success);
    }
}
