//! Classification of each option kind into its default filter.

use adhoc_filter::classify::{classify, ClassifyContext};
use adhoc_filter::filter::{AdhocFilter, Clause, Comparator, ExpressionType, Operator};
use adhoc_filter::model::{Aggregate, AdhocMetric, Column, SavedMetric, SelectableOption};
use adhoc_filter::FilterError;

fn columns() -> Vec<Column> {
    vec![
        Column::new("source").with_type("VARCHAR(255)"),
        Column::new("target").with_type("VARCHAR(255)"),
        Column::new("value").with_type("DOUBLE"),
    ]
}

fn context() -> ClassifyContext {
    ClassifyContext::new(columns(), vec![SavedMetric::new("sum__value", "SUM(value)")])
}

fn sum_source() -> AdhocMetric {
    AdhocMetric::simple(
        Column::new("source").with_type("VARCHAR(255)"),
        Aggregate::Sum,
    )
}

#[test]
fn test_saved_metric_defaults() {
    let filters = classify(&[SelectableOption::saved_metric("sum__value")], &context()).unwrap();

    assert_eq!(filters.len(), 1);
    assert!(filters[0].equals(&AdhocFilter::new(
        ExpressionType::Sql,
        "SUM(value)",
        Operator::GreaterThan,
        0_i64,
        Clause::Having,
    )));
}

#[test]
fn test_adhoc_metric_defaults() {
    let filters = classify(&[SelectableOption::from(sum_source())], &context()).unwrap();

    assert!(filters[0].equals(&AdhocFilter::new(
        ExpressionType::Sql,
        "SUM(source)",
        Operator::GreaterThan,
        0_i64,
        Clause::Having,
    )));
}

#[test]
fn test_adhoc_metric_uses_custom_label() {
    let metric = sum_source().with_label("Total source");
    let filters = classify(&[SelectableOption::from(metric)], &context()).unwrap();
    assert_eq!(filters[0].subject(), "Total source");
}

#[test]
fn test_sql_adhoc_metric_uses_expression_label() {
    let filters = classify(
        &[SelectableOption::from(AdhocMetric::sql("MAX(value) - MIN(value)"))],
        &context(),
    )
    .unwrap();
    assert_eq!(filters[0].subject(), "MAX(value) - MIN(value)");
    assert_eq!(filters[0].clause(), Clause::Having);
}

#[test]
fn test_column_defaults() {
    let filters = classify(&[SelectableOption::column("target")], &context()).unwrap();

    assert!(filters[0].equals(&AdhocFilter::new(
        ExpressionType::Simple,
        "target",
        Operator::Equals,
        "",
        Clause::Where,
    )));
    assert_eq!(filters[0].comparator(), &Comparator::text(""));
}

#[test]
fn test_existing_filter_passes_through() {
    let existing = AdhocFilter::new(
        ExpressionType::Simple,
        "value",
        Operator::GreaterThan,
        "10",
        Clause::Where,
    );
    let filters = classify(&[SelectableOption::from(existing.clone())], &context()).unwrap();
    assert!(filters[0].equals(&existing));
}

#[test]
fn test_order_and_length_preserved() {
    let options = vec![
        SelectableOption::column("value"),
        SelectableOption::saved_metric("sum__value"),
        SelectableOption::column("source"),
        sum_source().into(),
        SelectableOption::column("target"),
    ];
    let filters = classify(&options, &context()).unwrap();

    let subjects: Vec<&str> = filters.iter().map(|f| f.subject()).collect();
    assert_eq!(
        subjects,
        vec!["value", "SUM(value)", "source", "SUM(source)", "target"]
    );
}

#[test]
fn test_clause_matches_expression_type() {
    let options = vec![
        SelectableOption::column("value"),
        SelectableOption::saved_metric("sum__value"),
        sum_source().into(),
    ];
    for filter in classify(&options, &context()).unwrap() {
        match filter.expression_type() {
            ExpressionType::Sql => assert_eq!(filter.clause(), Clause::Having),
            ExpressionType::Simple => assert_eq!(filter.clause(), Clause::Where),
        }
    }
}

#[test]
fn test_empty_selection() {
    assert!(classify(&[], &context()).unwrap().is_empty());
}

#[test]
fn test_unresolved_saved_metric_fails() {
    let err = classify(
        &[SelectableOption::saved_metric("does_not_exist")],
        &ClassifyContext::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        FilterError::UnresolvedReference { ref name } if name == "does_not_exist"
    ));
}

#[test]
fn test_unresolved_reference_rejects_whole_batch() {
    let options = vec![
        SelectableOption::column("source"),
        SelectableOption::saved_metric("avg__value"),
        SelectableOption::column("target"),
    ];
    let result = classify(&options, &context());
    assert!(result.unwrap_err().is_unresolved_reference());
}

#[test]
fn test_classify_from_json_selection() {
    let selection = serde_json::json!([
        { "saved_metric_name": "sum__value" },
        {
            "expressionType": "SIMPLE",
            "column": { "type": "VARCHAR(255)", "column_name": "source" },
            "aggregate": "SUM",
        },
        { "type": "VARCHAR(255)", "column_name": "source" },
    ]);
    let options = SelectableOption::from_json_list(&selection).unwrap();
    let filters = classify(&options, &context()).unwrap();

    let sql: Vec<String> = filters.iter().map(|f| f.to_sql()).collect();
    assert_eq!(sql, vec!["SUM(value) > 0", "SUM(source) > 0", "source = ''"]);
}

#[test]
fn test_duplicate_saved_metric_resolves_to_first_definition() {
    let ctx = ClassifyContext::new(
        Vec::new(),
        vec![
            SavedMetric::new("m", "SUM(a)"),
            SavedMetric::new("m", "SUM(b)"),
        ],
    );
    let filters = classify(&[SelectableOption::saved_metric("m")], &ctx).unwrap();
    assert_eq!(filters[0].subject(), "SUM(a)");
}

#[test]
fn test_metric_default_serializes_integer_comparator() {
    let filters = classify(&[SelectableOption::saved_metric("sum__value")], &context()).unwrap();
    let json = serde_json::to_string(&filters).unwrap();
    assert!(json.contains("\"comparator\":0,"), "{}", json);

    let back: Vec<AdhocFilter> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, filters);
}
