use testforge_core::compare::UNKNOWN_SUITE;
use testforge_core::{
    compare, history_view, Framework, Metric, RunnerConfig, ScriptedOutcome,
    ScriptedOutcomeSource, SessionStore, SuiteManager, TestGenerationConfig, TestType,
};

#[tokio::test]
async fn test_compare_two_runs() {
    let config = RunnerConfig {
        settle_delay_ms: 0,
        ..RunnerConfig::default()
    };
    let manager = SuiteManager::with_config(
        ScriptedOutcomeSource::new(vec![
            ScriptedOutcome::pass(300, 90),
            ScriptedOutcome::fail(700, 72),
            ScriptedOutcome::pass(100, 80),
        ]),
        config,
    );
    let mut store = SessionStore::new();

    let one = manager
        .generate_suite(
            &mut store,
            "export function Form() {}",
            &TestGenerationConfig::new(Framework::Jest, [TestType::Unit, TestType::Integration]),
        )
        .unwrap();
    let two = manager
        .generate_suite(
            &mut store,
            "export class Grid {}",
            &TestGenerationConfig::new(Framework::Cypress, [TestType::E2e]),
        )
        .unwrap();

    manager.run_suite(&mut store, &one.id).await.unwrap();
    manager.run_suite(&mut store, &two.id).await.unwrap();

    let diff = compare(&store, &one.id, &two.id).unwrap();
    assert_eq!(diff.row(Metric::TotalTests).unwrap().delta, -1);
    assert_eq!(diff.row(Metric::FailedTests).unwrap().left, 1);
    assert_eq!(diff.row(Metric::Coverage).unwrap().left, 81);
    assert_eq!(diff.row(Metric::Coverage).unwrap().right, 80);
    assert_eq!(diff.row(Metric::Duration).unwrap().delta, 100 - 1000);
    assert_eq!(diff.left_cases.len(), 2);
    assert_eq!(diff.right_cases.len(), 1);

    store.remove_suite(&one.id);
    assert!(compare(&store, &one.id, &two.id).is_none());

    let rows = history_view(&store);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].suite_name, UNKNOWN_SUITE);
    assert_eq!(rows[1].suite_name, "Grid Tests");
    assert_eq!(rows[1].results.passed, 1);
}
