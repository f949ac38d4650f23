//! Classifier settings: unresolved-reference policy and de-duplication.

use adhoc_filter::classify::{Classifier, ClassifyContext};
use adhoc_filter::config::{ClassifierSettings, Settings, UnresolvedPolicy};
use adhoc_filter::model::{SavedMetric, SelectableOption};
use adhoc_filter::FilterError;

fn context() -> ClassifyContext {
    ClassifyContext::new(Vec::new(), vec![SavedMetric::new("sum__value", "SUM(value)")])
}

fn selection() -> Vec<SelectableOption> {
    vec![
        SelectableOption::column("source"),
        SelectableOption::saved_metric("missing"),
        SelectableOption::saved_metric("sum__value"),
        SelectableOption::column("source"),
    ]
}

#[test]
fn test_default_classifier_rejects_batch() {
    let err = Classifier::default()
        .classify(&selection(), &context())
        .unwrap_err();
    assert!(matches!(err, FilterError::UnresolvedReference { ref name } if name == "missing"));
}

#[test]
fn test_skip_policy_drops_unresolved_element() {
    let classifier = Classifier::new(ClassifierSettings {
        on_unresolved: UnresolvedPolicy::Skip,
        dedupe: false,
    });
    let filters = classifier.classify(&selection(), &context()).unwrap();

    let subjects: Vec<&str> = filters.iter().map(|f| f.subject()).collect();
    assert_eq!(subjects, vec!["source", "SUM(value)", "source"]);
}

#[test]
fn test_dedupe_removes_repeats() {
    let classifier = Classifier::new(ClassifierSettings {
        on_unresolved: UnresolvedPolicy::Skip,
        dedupe: true,
    });
    let filters = classifier.classify(&selection(), &context()).unwrap();

    let subjects: Vec<&str> = filters.iter().map(|f| f.subject()).collect();
    assert_eq!(subjects, vec!["source", "SUM(value)"]);
}

#[test]
fn test_settings_from_toml_drive_classifier() {
    let settings = Settings::from_str("[classifier]\non_unresolved = \"skip\"\n").unwrap();
    let classifier = Classifier::new(settings.classifier);
    assert_eq!(classifier.settings().on_unresolved, UnresolvedPolicy::Skip);

    let filters = classifier
        .classify(&[SelectableOption::saved_metric("missing")], &context())
        .unwrap();
    assert!(filters.is_empty());
}
