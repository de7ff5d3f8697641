// services/line-dash/src/state.rs
//
// Dashboard state management

use chrono::{DateTime, Local};

use linekit::config::TrackingConfig;
use linekit::drives::{DriveReading, DriveSummary};
use linekit::{DateSelector, FetchOutcome, LineReport};

/// Fetch-and-render cycle. Re-entered on every filter change or refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase {
    Idle,
    Loading { seq: u64 },
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    // Filters
    pub shifts: Vec<String>,
    pub shift_index: usize,
    pub date: DateSelector,

    // Fetch cycle
    pub phase: FetchPhase,
    pub report: Option<LineReport>,
    pub last_updated: Option<DateTime<Local>>,

    // Drives
    pub drives: Vec<DriveReading>,
    pub drive_summary: DriveSummary,

    // Activity log
    pub activity_log: Vec<LogEntry>,

    // UI state
    pub selected_trend: usize,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: String, // INFO, WARN, ERROR
    pub message: String,
}

impl DashboardState {
    pub fn new(shifts: Vec<String>, default_shift: &str) -> Self {
        let shift_index = shifts.iter().position(|s| s == default_shift).unwrap_or(0);
        Self {
            shifts,
            shift_index,
            date: DateSelector::Today,
            phase: FetchPhase::Idle,
            report: None,
            last_updated: None,
            drives: Vec::new(),
            drive_summary: DriveSummary::default(),
            activity_log: Vec::new(),
            selected_trend: 0,
            scroll_offset: 0,
        }
    }

    pub fn shift(&self) -> &str {
        self.shifts
            .get(self.shift_index)
            .map(String::as_str)
            .unwrap_or("Shift A")
    }

    pub fn next_shift(&mut self) {
        if !self.shifts.is_empty() {
            self.shift_index = (self.shift_index + 1) % self.shifts.len();
        }
    }

    pub fn set_shift(&mut self, shift: &str) -> bool {
        match self.shifts.iter().position(|s| s.eq_ignore_ascii_case(shift)) {
            Some(idx) => {
                self.shift_index = idx;
                true
            }
            None => false,
        }
    }

    pub fn next_date(&mut self) {
        self.date = self.date.next();
    }

    pub fn step_date(&mut self, days: i64) {
        self.date = self.date.shift_days(Local::now().date_naive(), days);
    }

    pub fn begin_fetch(&mut self, seq: u64) {
        self.phase = FetchPhase::Loading { seq };
    }

    /// Apply the outcome of the latest request. A failure replaces the
    /// whole screen with the error; there is no partial rendering.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome, tracking: &TrackingConfig) {
        match outcome.result {
            Ok(payload) => {
                let report = LineReport::from_payload(&payload, tracking);
                self.add_log(
                    "INFO",
                    &format!(
                        "Loaded {} / {}: {:.0} sets, quality {:.2}%",
                        outcome.query.shift,
                        outcome.query.date,
                        report.total_sets(),
                        report.quality_percent
                    ),
                );
                self.report = Some(report);
                self.phase = FetchPhase::Ready;
                self.last_updated = Some(Local::now());
                self.clamp_selection();
            }
            Err(e) => {
                self.add_log("ERROR", &format!("Fetch failed: {}", e));
                self.report = None;
                self.phase = FetchPhase::Failed(e.to_string());
            }
        }
    }

    pub fn set_drives(&mut self, total: u32, drives: Vec<DriveReading>) {
        self.drive_summary = DriveSummary::from_readings(total, &drives);
        self.drives = drives;
    }

    pub fn trend_count(&self) -> usize {
        self.report.as_ref().map(|r| r.trends.len()).unwrap_or(0)
    }

    pub fn next_trend(&mut self) {
        let count = self.trend_count();
        if count > 0 {
            self.selected_trend = (self.selected_trend + 1) % count;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_trend >= self.trend_count() {
            self.selected_trend = 0;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading { .. })
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.activity_log.len() {
            self.scroll_offset += 1;
        }
    }

    pub fn add_log(&mut self, level: &str, message: &str) {
        self.activity_log.push(LogEntry {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.to_string(),
        });

        // Keep last 100 entries
        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linekit::{DashError, DataQuery, Payload};
    use serde_json::json;

    fn state() -> DashboardState {
        DashboardState::new(TrackingConfig::default().shifts, "Shift B")
    }

    fn outcome(seq: u64, result: linekit::Result<Payload>) -> FetchOutcome {
        FetchOutcome {
            seq,
            query: DataQuery::new(&TrackingConfig::default(), "Shift B", DateSelector::Today),
            result,
        }
    }

    #[test]
    fn test_shift_cycling() {
        let mut s = state();
        assert_eq!(s.shift(), "Shift B");
        s.next_shift();
        s.next_shift();
        assert_eq!(s.shift(), "Shift A");
        assert!(s.set_shift("shift c"));
        assert_eq!(s.shift(), "Shift C");
        assert!(!s.set_shift("Night"));
    }

    #[test]
    fn test_fetch_cycle_success() {
        let mut s = state();
        assert_eq!(s.phase, FetchPhase::Idle);
        s.begin_fetch(1);
        assert!(s.is_loading());

        let payload = Payload::from_value(json!({
            "Front_Line": { "total_production_set": [{ "value": 12 }] }
        }));
        s.apply_outcome(outcome(1, Ok(payload)), &TrackingConfig::default());
        assert_eq!(s.phase, FetchPhase::Ready);
        assert_eq!(s.report.as_ref().unwrap().total_sets(), 12.0);
        assert!(s.last_updated.is_some());
    }

    #[test]
    fn test_failure_replaces_report() {
        let mut s = state();
        s.apply_outcome(outcome(1, Ok(Payload::default())), &TrackingConfig::default());
        assert!(s.report.is_some());

        s.begin_fetch(2);
        s.apply_outcome(
            outcome(2, Err(DashError::BackendError("Influx offline".to_string()))),
            &TrackingConfig::default(),
        );
        assert_eq!(s.phase, FetchPhase::Failed("Influx offline".to_string()));
        assert!(s.report.is_none());
        assert_eq!(s.activity_log.last().unwrap().level, "ERROR");
    }

    #[test]
    fn test_trend_selection_wraps() {
        let mut s = state();
        s.next_trend();
        assert_eq!(s.selected_trend, 0);

        s.apply_outcome(outcome(1, Ok(Payload::default())), &TrackingConfig::default());
        for _ in 0..s.trend_count() {
            s.next_trend();
        }
        assert_eq!(s.selected_trend, 0);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut s = state();
        for i in 0..150 {
            s.add_log("INFO", &format!("entry {}", i));
        }
        assert_eq!(s.activity_log.len(), 100);
        assert_eq!(s.activity_log[0].message, "entry 50");
    }
}
