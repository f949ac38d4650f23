//! Existing filters survive when new options are added to the selection.

use adhoc_filter::classify::{classify, merge_selection, ClassifyContext};
use adhoc_filter::filter::{AdhocFilter, Clause, Comparator, ExpressionType, FilterPatch, Operator};
use adhoc_filter::model::{Column, SavedMetric, SelectableOption};

fn context() -> ClassifyContext {
    ClassifyContext::new(
        vec![Column::new("source"), Column::new("target"), Column::new("value")],
        vec![SavedMetric::new("sum__value", "SUM(value)")],
    )
}

fn value_gt_10() -> AdhocFilter {
    AdhocFilter::new(
        ExpressionType::Simple,
        "value",
        Operator::GreaterThan,
        "10",
        Clause::Where,
    )
}

#[test]
fn test_existing_filter_kept_and_new_column_appended() {
    let existing = value_gt_10();
    let filters = classify(
        &[
            SelectableOption::from(existing.clone()),
            SelectableOption::column("source"),
        ],
        &context(),
    )
    .unwrap();

    assert_eq!(filters.len(), 2);
    assert!(filters[0].equals(&existing));
    assert!(filters[1].equals(&AdhocFilter::new(
        ExpressionType::Simple,
        "source",
        Operator::Equals,
        "",
        Clause::Where,
    )));
}

#[test]
fn test_edited_filter_is_not_recomputed() {
    // A column filter the user has since filled in must not fall back to
    // the column defaults.
    let edited = AdhocFilter::new(
        ExpressionType::Simple,
        "target",
        Operator::Equals,
        "",
        Clause::Where,
    )
    .duplicate_with(FilterPatch {
        operator: Some(Operator::NotEquals),
        comparator: Some(Comparator::text("dev")),
        ..Default::default()
    });

    let filters = merge_selection(
        std::slice::from_ref(&edited),
        vec![SelectableOption::saved_metric("sum__value")],
        &context(),
    )
    .unwrap();

    assert_eq!(filters[0], edited);
    assert_eq!(filters[0].operator(), Operator::NotEquals);
    assert_eq!(filters[1].subject(), "SUM(value)");
}

#[test]
fn test_merge_preserves_positions() {
    let first = value_gt_10();
    let second = AdhocFilter::new(
        ExpressionType::Sql,
        "SUM(value)",
        Operator::LessThan,
        100_i64,
        Clause::Having,
    );

    let filters = merge_selection(
        &[first.clone(), second.clone()],
        vec![SelectableOption::column("target"), SelectableOption::column("source")],
        &context(),
    )
    .unwrap();

    assert_eq!(filters.len(), 4);
    assert_eq!(filters[0], first);
    assert_eq!(filters[1], second);
    assert_eq!(filters[2].subject(), "target");
    assert_eq!(filters[3].subject(), "source");
}

#[test]
fn test_merge_with_nothing_added() {
    let existing = vec![value_gt_10()];
    let filters = merge_selection(&existing, Vec::new(), &context()).unwrap();
    assert_eq!(filters, existing);
}

#[test]
fn test_reclassifying_output_is_identity() {
    let options = vec![
        SelectableOption::column("value"),
        SelectableOption::saved_metric("sum__value"),
    ];
    let first = classify(&options, &context()).unwrap();
    let second = merge_selection(&first, Vec::new(), &context()).unwrap();
    assert_eq!(first, second);
}
