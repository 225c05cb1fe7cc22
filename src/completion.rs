//! Route-run completion bookkeeping.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UnknownRouteStatus;

/// Lifecycle status of a route run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Planned => "planned",
            RouteStatus::InProgress => "in_progress",
            RouteStatus::Completed => "completed",
            RouteStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteStatus {
    type Err = UnknownRouteStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(RouteStatus::Planned),
            "in_progress" => Ok(RouteStatus::InProgress),
            "completed" => Ok(RouteStatus::Completed),
            "cancelled" => Ok(RouteStatus::Cancelled),
            other => Err(UnknownRouteStatus(other.to_string())),
        }
    }
}

/// What to record when a route run is marked complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionPlan {
    /// The run was already completed; nothing to record.
    AlreadyCompleted,
    Pending {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_minutes: i64,
    },
}

impl CompletionPlan {
    pub fn is_already_completed(&self) -> bool {
        matches!(self, CompletionPlan::AlreadyCompleted)
    }
}

/// Completion plan for a run, measured up to the current instant.
pub fn completion_plan(
    status: Option<RouteStatus>,
    start_time: Option<DateTime<Utc>>,
) -> CompletionPlan {
    completion_plan_at(status, start_time, Utc::now())
}

/// Completion plan for a run ending at `now`.
///
/// A missing start counts as starting at `now`. Starts in the future
/// (clock skew) clamp the duration to zero.
pub fn completion_plan_at(
    status: Option<RouteStatus>,
    start_time: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> CompletionPlan {
    if status == Some(RouteStatus::Completed) {
        return CompletionPlan::AlreadyCompleted;
    }

    let start = start_time.unwrap_or(now);
    let elapsed_ms = (now - start).num_milliseconds() as f64;
    let duration_minutes = ((elapsed_ms / 60_000.0).round() as i64).max(0);

    CompletionPlan::Pending {
        start,
        end: now,
        duration_minutes,
    }
}

/// Mean of recorded run durations, `None` if nothing was recorded.
pub fn average_duration_minutes(durations: &[i64]) -> Option<f64> {
    if durations.is_empty() {
        return None;
    }
    let total: i64 = durations.iter().sum();
    Some(total as f64 / durations.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_completed_is_noop() {
        let plan = completion_plan_at(Some(RouteStatus::Completed), Some(now()), now());
        assert_eq!(plan, CompletionPlan::AlreadyCompleted);
        assert!(completion_plan(Some(RouteStatus::Completed), None).is_already_completed());
    }

    #[test]
    fn test_missing_start_defaults_to_now() {
        let plan = completion_plan_at(Some(RouteStatus::InProgress), None, now());
        assert_eq!(
            plan,
            CompletionPlan::Pending {
                start: now(),
                end: now(),
                duration_minutes: 0,
            }
        );
    }

    #[test]
    fn test_elapsed_rounds_to_minutes() {
        let start = now() - Duration::minutes(95) - Duration::seconds(30);
        match completion_plan_at(Some(RouteStatus::InProgress), Some(start), now()) {
            CompletionPlan::Pending { start: s, duration_minutes, .. } => {
                assert_eq!(s, start);
                assert_eq!(duration_minutes, 96);
            }
            other => panic!("unexpected plan {:?}", other),
        }

        let start = now() - Duration::seconds(29);
        match completion_plan_at(None, Some(start), now()) {
            CompletionPlan::Pending { duration_minutes, .. } => assert_eq!(duration_minutes, 0),
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_future_start_clamps_to_zero() {
        let start = now() + Duration::minutes(10);
        match completion_plan_at(Some(RouteStatus::Planned), Some(start), now()) {
            CompletionPlan::Pending { duration_minutes, .. } => assert_eq!(duration_minutes, 0),
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("in_progress".parse::<RouteStatus>(), Ok(RouteStatus::InProgress));
        assert_eq!(RouteStatus::Cancelled.to_string(), "cancelled");
        assert!("done".parse::<RouteStatus>().is_err());
    }

    #[test]
    fn test_average_duration() {
        assert_eq!(average_duration_minutes(&[]), None);
        assert_eq!(average_duration_minutes(&[60, 90]), Some(75.0));
    }
}
