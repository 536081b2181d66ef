use chrono::{DateTime, Duration, Utc};

/// Format of `start`/`end` in requests and in rendered backend queries.
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Lookback applied when `start` is omitted.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// One telemetry query: a datum of a site over `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatumQuery {
    pub site: String,
    pub datum_name: String,
    pub start: String,
    pub end: String,
}

impl DatumQuery {
    /// Builds a query, filling a missing or empty `start`/`end` from `now`.
    ///
    /// Both defaults derive from the same instant, so the default window is
    /// exactly [`DEFAULT_WINDOW_HOURS`] long.
    pub fn with_defaults(
        site: String,
        datum_name: String,
        start: Option<String>,
        end: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let start = non_empty(start).unwrap_or_else(|| {
            format_query_time(now - Duration::hours(DEFAULT_WINDOW_HOURS))
        });
        let end = non_empty(end).unwrap_or_else(|| format_query_time(now));

        Self {
            site,
            datum_name,
            start,
            end,
        }
    }
}

pub fn format_query_time(t: DateTime<Utc>) -> String {
    t.format(QUERY_TIME_FORMAT).to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
