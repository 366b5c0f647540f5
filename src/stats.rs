//! Loan statistics model
//!
//! Normalizes the loosely-typed stats payload into [`DashboardStats`].

use crate::consts::cli_consts::fallback;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// One snapshot of the loan statistics shown on the dashboard.
///
/// The counts are parsed independently; `total` is not checked against the
/// sum of the other three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub approved: u64,
    pub pending: u64,
    pub rejected: u64,
    pub total: u64,
    pub recent_count: u64,
    pub role: Option<String>,
}

impl DashboardStats {
    /// Stats displayed when the backend cannot be reached.
    pub fn fallback() -> Self {
        Self {
            approved: fallback::APPROVED,
            pending: fallback::PENDING,
            rejected: fallback::REJECTED,
            total: fallback::TOTAL,
            recent_count: fallback::RECENT_COUNT,
            role: Some(fallback::ROLE.to_string()),
        }
    }

    /// Build stats from a decoded `/dashboard/api/stats` body.
    ///
    /// Expected shape: `{ loan_stats: { pending, approved, rejected, total }, recent_count, role }`,
    /// where any count may be a number or a numeric string. `loans` is accepted in place of
    /// `loan_stats`.
    pub fn from_json(body: &Value) -> Self {
        let empty = Map::new();
        let loan_stats = body
            .get("loan_stats")
            .or_else(|| body.get("loans"))
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let count = |key: &str| loan_stats.get(key).map(parse_count).unwrap_or(0);

        Self {
            approved: count("approved"),
            pending: count("pending"),
            rejected: count("rejected"),
            total: count("total"),
            recent_count: body.get("recent_count").map(parse_count).unwrap_or(0),
            role: body.get("role").and_then(passthrough_role),
        }
    }

    /// Sentence shown in the recent activity field.
    pub fn recent_activity_text(&self) -> String {
        format!("{} new applications pending review", self.recent_count)
    }
}

impl Display for DashboardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "approved={} pending={} rejected={} total={} recent={}",
            self.approved, self.pending, self.rejected, self.total, self.recent_count
        )
    }
}

/// Result of a fetch cycle. Both variants carry displayable stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Stats decoded from a successful response.
    Live(DashboardStats),
    /// The request failed; `stats` holds the fallback values.
    Fallback { stats: DashboardStats, reason: String },
}

impl FetchOutcome {
    pub fn fallback(reason: impl Into<String>) -> Self {
        FetchOutcome::Fallback {
            stats: DashboardStats::fallback(),
            reason: reason.into(),
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        match self {
            FetchOutcome::Live(stats) => stats,
            FetchOutcome::Fallback { stats, .. } => stats,
        }
    }

    pub fn into_stats(self) -> DashboardStats {
        match self {
            FetchOutcome::Live(stats) => stats,
            FetchOutcome::Fallback { stats, .. } => stats,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }
}

/// Parse a count leniently: the leading integer of a string or the integer part of a
/// number. Anything else, including negative values, counts as zero.
pub fn parse_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(f) = n.as_f64() {
                if f.is_finite() && f >= 1.0 {
                    // `as` saturates at u64::MAX
                    f.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => parse_leading_integer(s),
        _ => 0,
    }
}

fn parse_leading_integer(s: &str) -> u64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }

    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

fn passthrough_role(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_parse_to_integers() {
        assert_eq!(parse_count(&json!("7")), 7);
        assert_eq!(parse_count(&json!(" 12 ")), 12);
        assert_eq!(parse_count(&json!("3.9")), 3);
        assert_eq!(parse_count(&json!("42abc")), 42);
        assert_eq!(parse_count(&json!("+8")), 8);
    }

    #[test]
    fn test_non_numeric_values_become_zero() {
        assert_eq!(parse_count(&json!("abc")), 0);
        assert_eq!(parse_count(&json!("")), 0);
        assert_eq!(parse_count(&json!(null)), 0);
        assert_eq!(parse_count(&json!(true)), 0);
        assert_eq!(parse_count(&json!([1, 2])), 0);
        assert_eq!(parse_count(&json!({"n": 1})), 0);
    }

    #[test]
    fn test_negative_and_fractional_numbers() {
        assert_eq!(parse_count(&json!("-3")), 0);
        assert_eq!(parse_count(&json!(-3)), 0);
        assert_eq!(parse_count(&json!(0.4)), 0);
        assert_eq!(parse_count(&json!(7.8)), 7);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_count(&json!("99999999999999999999999")), u64::MAX);
    }

    #[test]
    fn test_from_json_mixed_payload() {
        let body = json!({
            "loan_stats": {"pending": "5", "approved": "3", "rejected": "2", "total": "10"},
            "recent_count": "5",
            "role": "loan_officer"
        });
        let stats = DashboardStats::from_json(&body);
        assert_eq!(
            stats,
            DashboardStats {
                approved: 3,
                pending: 5,
                rejected: 2,
                total: 10,
                recent_count: 5,
                role: Some("loan_officer".to_string()),
            }
        );
        assert_eq!(
            stats.recent_activity_text(),
            "5 new applications pending review"
        );
    }

    #[test]
    fn test_from_json_missing_fields_default_to_zero() {
        let body = json!({"loan_stats": {"approved": 4, "pending": null}});
        let stats = DashboardStats::from_json(&body);
        assert_eq!(stats.approved, 4);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.recent_count, 0);
        assert_eq!(stats.role, None);
    }

    #[test]
    fn test_from_json_without_loan_stats() {
        let stats = DashboardStats::from_json(&json!({"recent_count": 9}));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.recent_count, 9);

        let stats = DashboardStats::from_json(&json!({"loan_stats": "oops"}));
        assert_eq!(stats.approved, 0);
    }

    #[test]
    fn test_from_json_accepts_loans_alias() {
        let body = json!({"loans": {"approved": 1, "pending": 2, "rejected": 3, "total": 6}});
        let stats = DashboardStats::from_json(&body);
        assert_eq!((stats.approved, stats.pending, stats.rejected), (1, 2, 3));
        assert_eq!(stats.total, 6);
    }

    #[test]
    fn test_role_passthrough() {
        let stats = DashboardStats::from_json(&json!({"role": 42}));
        assert_eq!(stats.role.as_deref(), Some("42"));
        let stats = DashboardStats::from_json(&json!({"role": null}));
        assert_eq!(stats.role, None);
    }

    #[test]
    fn test_fallback_outcome() {
        let outcome = FetchOutcome::fallback("HTTP 500");
        assert!(outcome.is_fallback());
        assert_eq!(outcome.stats(), &DashboardStats::fallback());
        assert_eq!(
            outcome.into_stats(),
            DashboardStats {
                approved: 0,
                pending: 2,
                rejected: 0,
                total: 2,
                recent_count: 2,
                role: Some("admin".to_string()),
            }
        );
    }
}
