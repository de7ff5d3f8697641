use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, HistogramVec,
    IntCounter, IntCounterVec,
};

lazy_static! {
    pub static ref FETCH_DURATION: HistogramVec = register_histogram_vec!(
        "line_data_fetch_duration_seconds",
        "Line data fetch duration in seconds",
        &["source", "status"]
    ).unwrap();

    pub static ref FETCH_COUNTER: IntCounterVec = register_int_counter_vec!(
        "line_data_fetches_total",
        "Total number of line data fetches",
        &["source", "status"]
    ).unwrap();

    pub static ref STALE_RESPONSES: IntCounter = register_int_counter!(
        "line_data_stale_responses_total",
        "Fetch results dropped because a newer request was issued"
    ).unwrap();
}

pub fn record_fetch(source: &str, success: bool, duration: f64) {
    let status = if success { "success" } else { "failure" };
    FETCH_DURATION
        .with_label_values(&[source, status])
        .observe(duration);
    FETCH_COUNTER
        .with_label_values(&[source, status])
        .inc();
}

pub fn record_stale() {
    STALE_RESPONSES.inc();
}

pub fn stale_count() -> u64 {
    STALE_RESPONSES.get()
}

pub fn fetch_count(source: &str, success: bool) -> u64 {
    let status = if success { "success" } else { "failure" };
    FETCH_COUNTER.with_label_values(&[source, status]).get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fetch_counts_by_status() {
        let before_ok = fetch_count("metrics-test", true);
        let before_err = fetch_count("metrics-test", false);

        record_fetch("metrics-test", true, 0.05);
        record_fetch("metrics-test", true, 0.10);
        record_fetch("metrics-test", false, 1.0);

        assert_eq!(fetch_count("metrics-test", true), before_ok + 2);
        assert_eq!(fetch_count("metrics-test", false), before_err + 1);
    }
}
