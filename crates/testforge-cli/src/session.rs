//! One CLI session: a store plus a manager backed by the simulated worker.

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tracing::debug;

use testforge_core::{
    Config, HistoryEntry, ManagerError, RunProgress, SessionStore, SimulatedOutcomeSource,
    SuiteManager, TestGenerationConfig, TestStatus, TestSuite, WorkerOutcomeSource,
};

pub struct Session {
    manager: SuiteManager<WorkerOutcomeSource>,
    store: SessionStore,
}

impl Session {
    /// Starts a session. A `seed` given on the command line wins over the config.
    pub fn start(config: &Config, seed: Option<u64>) -> Self {
        let runner = config.runner.clone();
        let simulator = SimulatedOutcomeSource::new(seed.or(runner.seed))
            .with_pass_rate(runner.pass_rate)
            .with_latency(runner.simulate_latency);
        let worker = WorkerOutcomeSource::spawn(simulator, runner.worker_queue);

        Self {
            manager: SuiteManager::with_config(worker, runner),
            store: SessionStore::new(),
        }
    }

    pub fn generate(
        &mut self,
        source: &str,
        generation: &TestGenerationConfig,
    ) -> Result<TestSuite, ManagerError> {
        self.manager.generate_suite(&mut self.store, source, generation)
    }

    /// Runs a suite, drawing a progress bar when `show_progress` is set.
    pub async fn run(
        &mut self,
        suite_id: &str,
        show_progress: bool,
    ) -> Result<HistoryEntry, ManagerError> {
        if !show_progress {
            return self.manager.run_suite(&mut self.store, suite_id).await;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let renderer = tokio::spawn(render_progress(rx));

        let result = self
            .manager
            .run_suite_with_progress(&mut self.store, suite_id, Some(&tx))
            .await;

        drop(tx);
        let _ = renderer.await;
        result
    }

    pub fn suite(&self, suite_id: &str) -> Result<&TestSuite, ManagerError> {
        self.store
            .suite(suite_id)
            .ok_or_else(|| ManagerError::SuiteNotFound(suite_id.to_string()))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Ends the session: drops all suites and stops the worker.
    pub async fn finish(mut self) {
        self.store.clear();
        self.manager.into_outcomes().shutdown().await;
        debug!("session finished");
    }
}

async fn render_progress(mut rx: mpsc::UnboundedReceiver<RunProgress>) {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("=> "));
    }

    while let Some(event) = rx.recv().await {
        match event {
            RunProgress::Started { total, .. } => bar.set_length(total as u64),
            RunProgress::CaseStarted { name, .. } => bar.set_message(name),
            RunProgress::CaseFinished { status, .. } => {
                if status == TestStatus::Failed {
                    bar.println(format!("  {} failed", bar.message()));
                }
                bar.inc(1);
            }
            RunProgress::Completed { results } => {
                bar.finish_with_message(format!(
                    "{} passed, {} failed",
                    results.passed, results.failed
                ));
            }
        }
    }

    if !bar.is_finished() {
        bar.abandon_with_message("run interrupted");
    }
}
