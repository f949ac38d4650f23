//! Option-to-filter classification.

use std::collections::HashSet;

use super::context::ClassifyContext;
use crate::config::{ClassifierSettings, UnresolvedPolicy};
use crate::defaults;
use crate::error::{FilterError, FilterResult};
use crate::filter::{AdhocFilter, Clause, ExpressionType};
use crate::model::SelectableOption;

/// Turns selector options into adhoc filters.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    settings: ClassifierSettings,
}

impl Classifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Classify a full selection, preserving its order.
    ///
    /// With the default settings the output has one filter per option. An
    /// unresolved saved-metric reference fails the batch, unless the policy
    /// is [`UnresolvedPolicy::Skip`], in which case the element is dropped.
    pub fn classify(
        &self,
        options: &[SelectableOption],
        ctx: &ClassifyContext,
    ) -> FilterResult<Vec<AdhocFilter>> {
        let mut filters = Vec::with_capacity(options.len());

        for (index, option) in options.iter().enumerate() {
            match classify_option(option, ctx) {
                Ok(filter) => filters.push(filter),
                Err(FilterError::UnresolvedReference { name })
                    if self.settings.on_unresolved == UnresolvedPolicy::Skip =>
                {
                    tracing::warn!(index, metric = %name, "Skipping unresolved saved metric");
                }
                Err(e) => return Err(e),
            }
        }

        if self.settings.dedupe {
            filters = dedup_filters(filters);
        }

        tracing::debug!(
            options = options.len(),
            filters = filters.len(),
            "Classified selection"
        );
        Ok(filters)
    }
}

/// Classify a selection with the default settings.
pub fn classify(
    options: &[SelectableOption],
    ctx: &ClassifyContext,
) -> FilterResult<Vec<AdhocFilter>> {
    Classifier::default().classify(options, ctx)
}

/// Classify a single option.
pub fn classify_option(option: &SelectableOption, ctx: &ClassifyContext) -> FilterResult<AdhocFilter> {
    match option {
        SelectableOption::ExistingFilter(filter) => Ok(filter.clone()),
        SelectableOption::SavedMetricRef { saved_metric_name } => {
            let metric = ctx
                .saved_metric(saved_metric_name)
                .ok_or_else(|| FilterError::unresolved(saved_metric_name.as_str()))?;
            Ok(metric_filter(metric.expression.clone()))
        }
        SelectableOption::AdhocMetricRef(metric) => Ok(metric_filter(metric.label())),
        SelectableOption::ColumnRef { column_name } => {
            let d = defaults::for_clause(Clause::Where);
            Ok(AdhocFilter::new(
                ExpressionType::Simple,
                column_name.as_str(),
                d.operator,
                d.comparator,
                Clause::Where,
            ))
        }
    }
}

fn metric_filter(subject: String) -> AdhocFilter {
    let d = defaults::for_clause(Clause::Having);
    AdhocFilter::new(ExpressionType::Sql, subject, d.operator, d.comparator, Clause::Having)
}

/// Drop structurally equal repeats, keeping the first occurrence.
pub fn dedup_filters(filters: Vec<AdhocFilter>) -> Vec<AdhocFilter> {
    let mut seen = HashSet::new();
    filters
        .into_iter()
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

/// Append newly selected options to previously accepted filters and classify
/// the combined list. Existing filters keep their positions.
pub fn merge_selection(
    existing: &[AdhocFilter],
    added: impl IntoIterator<Item = SelectableOption>,
    ctx: &ClassifyContext,
) -> FilterResult<Vec<AdhocFilter>> {
    let combined: Vec<SelectableOption> = existing
        .iter()
        .cloned()
        .map(SelectableOption::ExistingFilter)
        .chain(added)
        .collect();
    classify(&combined, ctx)
}
