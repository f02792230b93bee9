pub mod ci;
pub mod compare;
pub mod config;
pub mod export;
pub mod framework;
pub mod generation;
pub mod history;
pub mod manager;
pub mod outcome;
pub mod store;
pub mod suite;
pub mod template;

pub use ci::{ci_config, ci_export, CiProvider};
pub use compare::{compare, history_view, HistoryRow, Metric, MetricRow, SuiteComparison};
pub use config::{Config, ConfigError, ExportConfig, RunnerConfig};
pub use export::{export_case, export_suite, ExportError, ExportFile, ExportSink, FileExporter};
pub use framework::{Framework, TestType};
pub use generation::TestGenerationConfig;
pub use history::{HistoryEntry, RunResults};
pub use manager::{ManagerError, RunProgress, SuiteManager};
pub use outcome::{
    Outcome, OutcomeError, OutcomeRequest, OutcomeSource, ScriptedOutcome, ScriptedOutcomeSource,
    SimulatedOutcomeSource, WorkerOutcomeSource,
};
pub use store::SessionStore;
pub use suite::{StatusBreakdown, TestCase, TestStatus, TestSuite};
pub use template::{extract_component_name, render, TemplateError};
