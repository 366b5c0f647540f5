//! Display surfaces
//!
//! The text fields, chart host and placeholder areas that the renderer writes into.
//! The TUI draws from these, and headless mode prints them.

use super::chart::{ChartId, ChartOwner, ChartSpec};
use crate::stats::DashboardStats;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Stable keys of the text surfaces
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StatField {
    ApprovedCount,
    PendingCount,
    RejectedCount,
    TotalCount,
    RecentActivityText,
}

impl StatField {
    pub const ALL: [StatField; 5] = [
        StatField::ApprovedCount,
        StatField::PendingCount,
        StatField::RejectedCount,
        StatField::TotalCount,
        StatField::RecentActivityText,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            StatField::ApprovedCount => "approved-count",
            StatField::PendingCount => "pending-count",
            StatField::RejectedCount => "rejected-count",
            StatField::TotalCount => "total-count",
            StatField::RecentActivityText => "recent-activity-text",
        }
    }

    fn value_of(&self, stats: &DashboardStats) -> String {
        match self {
            StatField::ApprovedCount => stats.approved.to_string(),
            StatField::PendingCount => stats.pending.to_string(),
            StatField::RejectedCount => stats.rejected.to_string(),
            StatField::TotalCount => stats.total.to_string(),
            StatField::RecentActivityText => stats.recent_activity_text(),
        }
    }
}

impl Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_key())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Display surface '{0}' is missing")]
    MissingSurface(StatField),
}

/// What the stats grid currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsGrid {
    Loading,
    Stats,
    Error { message: String },
}

/// The dashboard's display surfaces.
#[derive(Debug)]
pub struct DashboardView {
    fields: BTreeMap<StatField, String>,
    chart_host: Option<ChartOwner>,
    stats_grid: StatsGrid,
    chart_loading: bool,
}

impl DashboardView {
    /// A view with every surface present, showing the loading placeholders.
    pub fn standard() -> Self {
        Self {
            fields: StatField::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            chart_host: Some(ChartOwner::new()),
            stats_grid: StatsGrid::Loading,
            chart_loading: true,
        }
    }

    /// Remove a text surface from the view.
    pub fn without_field(mut self, field: StatField) -> Self {
        self.fields.remove(&field);
        self
    }

    /// Remove the chart host from the view.
    pub fn without_chart_host(mut self) -> Self {
        self.chart_host = None;
        self
    }

    pub fn field(&self, field: StatField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Present text surfaces in key order
    pub fn fields(&self) -> impl Iterator<Item = (StatField, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn chart(&self) -> Option<&ChartOwner> {
        self.chart_host.as_ref()
    }

    pub fn stats_grid(&self) -> &StatsGrid {
        &self.stats_grid
    }

    pub fn chart_loading(&self) -> bool {
        self.chart_loading
    }

    /// Swap both placeholder areas to their loading state.
    pub fn show_loading(&mut self) {
        self.stats_grid = StatsGrid::Loading;
        self.chart_loading = true;
    }

    /// Replace the stats grid with the error placeholder.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.stats_grid = StatsGrid::Error {
            message: message.into(),
        };
    }

    /// Show the stats grid contents again after a successful render.
    pub fn show_stats(&mut self) {
        self.stats_grid = StatsGrid::Stats;
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::standard()
    }
}

/// Write `stats` into the view's text surfaces and redraw the chart.
///
/// Every present field is written and the chart is always attempted, even when a
/// text surface is missing. The error names the first missing surface.
pub fn render_stats(stats: &DashboardStats, view: &mut DashboardView) -> Result<(), RenderError> {
    let mut missing = None;
    for field in StatField::ALL {
        match view.fields.get_mut(&field) {
            Some(slot) => *slot = field.value_of(stats),
            None => {
                log::warn!("Display surface '{}' not found", field);
                missing.get_or_insert(field);
            }
        }
    }

    render_chart(stats, view);

    match missing {
        Some(field) => Err(RenderError::MissingSurface(field)),
        None => Ok(()),
    }
}

/// Replace the chart with one built from `stats`. Skipped when the view has no chart host.
pub fn render_chart(stats: &DashboardStats, view: &mut DashboardView) -> Option<ChartId> {
    let Some(owner) = view.chart_host.as_mut() else {
        log::warn!("Chart host 'loanChart' not found, skipping chart");
        return None;
    };
    let id = owner.replace(ChartSpec::from_stats(stats));
    view.chart_loading = false;
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario_stats() -> DashboardStats {
        DashboardStats::from_json(&json!({
            "loan_stats": {"pending": "5", "approved": "3", "rejected": "2", "total": "10"},
            "recent_count": "5",
            "role": "loan_officer"
        }))
    }

    #[test]
    fn test_render_scenario_payload() {
        let mut view = DashboardView::standard();
        render_stats(&scenario_stats(), &mut view).unwrap();

        assert_eq!(view.field(StatField::ApprovedCount), Some("3"));
        assert_eq!(view.field(StatField::PendingCount), Some("5"));
        assert_eq!(view.field(StatField::RejectedCount), Some("2"));
        assert_eq!(view.field(StatField::TotalCount), Some("10"));
        assert_eq!(
            view.field(StatField::RecentActivityText),
            Some("5 new applications pending review")
        );

        let chart = view.chart().unwrap().current().unwrap();
        let values: Vec<u64> = chart.spec.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3, 5, 2]);
        assert_eq!(chart.spec.tooltip_label(0), "Approved: 3 (30%)");
        assert_eq!(chart.spec.tooltip_label(1), "Pending: 5 (50%)");
        assert_eq!(chart.spec.tooltip_label(2), "Rejected: 2 (20%)");
        assert!(!view.chart_loading());
    }

    #[test]
    fn test_render_fallback_stats() {
        let mut view = DashboardView::standard();
        render_stats(&DashboardStats::fallback(), &mut view).unwrap();

        assert_eq!(view.field(StatField::ApprovedCount), Some("0"));
        assert_eq!(view.field(StatField::PendingCount), Some("2"));
        assert_eq!(view.field(StatField::RejectedCount), Some("0"));
        assert_eq!(view.field(StatField::TotalCount), Some("2"));
        assert_eq!(
            view.field(StatField::RecentActivityText),
            Some("2 new applications pending review")
        );
    }

    #[test]
    fn test_missing_field_still_writes_the_rest() {
        let mut view = DashboardView::standard()
            .without_field(StatField::RejectedCount)
            .without_field(StatField::RecentActivityText);

        let err = render_stats(&scenario_stats(), &mut view).unwrap_err();
        assert_eq!(err, RenderError::MissingSurface(StatField::RejectedCount));
        assert_eq!(err.to_string(), "Display surface 'rejected-count' is missing");

        assert_eq!(view.field(StatField::ApprovedCount), Some("3"));
        assert_eq!(view.field(StatField::TotalCount), Some("10"));
        assert_eq!(view.field(StatField::RejectedCount), None);
        // The chart is still drawn
        assert_eq!(view.chart().unwrap().live_instances(), 1);
    }

    #[test]
    fn test_missing_chart_host_skips_chart_only() {
        let mut view = DashboardView::standard().without_chart_host();
        assert!(render_stats(&scenario_stats(), &mut view).is_ok());
        assert!(view.chart().is_none());
        assert_eq!(view.field(StatField::PendingCount), Some("5"));
        assert!(view.chart_loading());
    }

    #[test]
    fn test_two_cycles_leave_one_chart() {
        let mut view = DashboardView::standard();
        render_stats(&scenario_stats(), &mut view).unwrap();
        render_stats(&DashboardStats::fallback(), &mut view).unwrap();

        let owner = view.chart().unwrap();
        assert_eq!(owner.live_instances(), 1);
        assert_eq!(owner.current().unwrap().id, ChartId(2));
        assert_eq!(owner.current().unwrap().spec.slices[1].value, 2);
    }

    #[test]
    fn test_placeholders() {
        let mut view = DashboardView::standard();
        assert_eq!(view.stats_grid(), &StatsGrid::Loading);

        view.show_error("Failed to load dashboard data");
        assert!(matches!(view.stats_grid(), StatsGrid::Error { .. }));

        view.show_loading();
        assert_eq!(view.stats_grid(), &StatsGrid::Loading);
        assert!(view.chart_loading());
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<&str> = StatField::ALL.iter().map(StatField::as_key).collect();
        assert_eq!(
            keys,
            vec![
                "approved-count",
                "pending-count",
                "rejected-count",
                "total-count",
                "recent-activity-text"
            ]
        );
    }
}
