//! Loan status chart
//!
//! Holds the doughnut chart drawn in the chart host. The owner keeps at most one
//! live instance; replacing it destroys the old one first.

use crate::stats::DashboardStats;
use ratatui::prelude::Color;

/// Slice colours, in Approved/Pending/Rejected order.
pub const APPROVED_COLOR: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const PENDING_COLOR: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const REJECTED_COLOR: Color = Color::Rgb(0xef, 0x44, 0x44);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u64,
    pub color: Color,
}

/// Doughnut chart description: three slices in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub slices: [ChartSlice; 3],
}

impl ChartSpec {
    pub fn from_stats(stats: &DashboardStats) -> Self {
        Self {
            slices: [
                ChartSlice {
                    label: "Approved",
                    value: stats.approved,
                    color: APPROVED_COLOR,
                },
                ChartSlice {
                    label: "Pending",
                    value: stats.pending,
                    color: PENDING_COLOR,
                },
                ChartSlice {
                    label: "Rejected",
                    value: stats.rejected,
                    color: REJECTED_COLOR,
                },
            ],
        }
    }

    /// Sum of the displayed slices. Not the reported `total`.
    ///
    /// Widened so three `u64::MAX` slices still add up exactly.
    pub fn displayed_total(&self) -> u128 {
        self.slices.iter().map(|slice| u128::from(slice.value)).sum()
    }

    /// Share of slice `index` in whole percent, rounded half up. Zero when nothing is displayed.
    pub fn percentage(&self, index: usize) -> u64 {
        let total = self.displayed_total();
        match self.slices.get(index) {
            Some(slice) if total > 0 => {
                // round(100 * v / t) == floor((200 * v + t) / (2 * t)); fits in u128
                let share = (u128::from(slice.value) * 200 + total) / (total * 2);
                share as u64
            }
            _ => 0,
        }
    }

    /// Tooltip text for slice `index`, e.g. `"Approved: 3 (30%)"`.
    pub fn tooltip_label(&self, index: usize) -> String {
        match self.slices.get(index) {
            Some(slice) => format!(
                "{}: {} ({}%)",
                slice.label,
                slice.value,
                self.percentage(index)
            ),
            None => String::new(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChartId(pub u64);

/// A constructed chart bound to the chart host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstance {
    pub id: ChartId,
    pub spec: ChartSpec,
}

/// Owner of the single chart slot.
#[derive(Debug, Default)]
pub struct ChartOwner {
    current: Option<ChartInstance>,
    created: u64,
    destroyed: u64,
}

impl ChartOwner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy the live chart, if any, then construct one from `spec`.
    pub fn replace(&mut self, spec: ChartSpec) -> ChartId {
        if let Some(old) = self.current.take() {
            self.destroy(old);
        }
        self.created += 1;
        let id = ChartId(self.created);
        self.current = Some(ChartInstance { id, spec });
        id
    }

    fn destroy(&mut self, instance: ChartInstance) {
        log::trace!("Destroying chart {:?}", instance.id);
        self.destroyed += 1;
    }

    pub fn current(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    /// Charts constructed and not yet destroyed. Never more than one.
    pub fn live_instances(&self) -> u64 {
        self.created - self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(approved: u64, pending: u64, rejected: u64) -> DashboardStats {
        DashboardStats {
            approved,
            pending,
            rejected,
            total: approved + pending + rejected,
            recent_count: 0,
            role: None,
        }
    }

    #[test]
    fn test_tooltip_percentages() {
        let spec = ChartSpec::from_stats(&stats(3, 5, 2));
        assert_eq!(spec.tooltip_label(0), "Approved: 3 (30%)");
        assert_eq!(spec.tooltip_label(1), "Pending: 5 (50%)");
        assert_eq!(spec.tooltip_label(2), "Rejected: 2 (20%)");
    }

    #[test]
    fn test_all_zero_percentages_are_zero() {
        let spec = ChartSpec::from_stats(&stats(0, 0, 0));
        for i in 0..3 {
            assert_eq!(spec.percentage(i), 0);
        }
        assert_eq!(spec.tooltip_label(1), "Pending: 0 (0%)");
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        // 1/3 = 33.3%, 2/3 = 66.7%
        let spec = ChartSpec::from_stats(&stats(1, 2, 0));
        assert_eq!(spec.percentage(0), 33);
        assert_eq!(spec.percentage(1), 67);
        assert_eq!(spec.percentage(7), 0);
    }

    #[test]
    fn test_percentage_uses_displayed_total_not_reported() {
        let mut s = stats(1, 1, 0);
        s.total = 100;
        let spec = ChartSpec::from_stats(&s);
        assert_eq!(spec.percentage(0), 50);
    }

    #[test]
    fn test_percentages_do_not_saturate_on_huge_counts() {
        let spec = ChartSpec {
            slices: [
                ChartSlice {
                    value: u64::MAX,
                    ..ChartSpec::from_stats(&stats(0, 0, 0)).slices[0].clone()
                },
                ChartSlice {
                    value: u64::MAX,
                    ..ChartSpec::from_stats(&stats(0, 0, 0)).slices[1].clone()
                },
                ChartSlice {
                    value: 0,
                    ..ChartSpec::from_stats(&stats(0, 0, 0)).slices[2].clone()
                },
            ],
        };
        assert_eq!(spec.displayed_total(), u128::from(u64::MAX) * 2);
        assert_eq!(spec.percentage(0), 50);
        assert_eq!(spec.percentage(1), 50);
        assert_eq!(spec.percentage(2), 0);

        let mut even = spec.clone();
        even.slices[2].value = u64::MAX;
        for i in 0..3 {
            assert_eq!(even.percentage(i), 33);
        }
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1/8 = 12.5%, 7/8 = 87.5%
        let spec = ChartSpec::from_stats(&stats(1, 7, 0));
        assert_eq!(spec.percentage(0), 13);
        assert_eq!(spec.percentage(1), 88);
    }

    #[test]
    fn test_replace_keeps_single_instance() {
        let mut owner = ChartOwner::new();
        assert_eq!(owner.live_instances(), 0);

        let first = owner.replace(ChartSpec::from_stats(&stats(1, 1, 1)));
        let second = owner.replace(ChartSpec::from_stats(&stats(2, 2, 2)));

        assert!(second > first);
        assert_eq!(owner.live_instances(), 1);
        assert_eq!(owner.current().map(|c| c.id), Some(second));
        assert_eq!(owner.current().unwrap().spec.slices[0].value, 2);
    }
}
