//! Query API DTOs

use chrono::{DateTime, Utc};

use crate::domain::query::model::datum_query::DatumQuery;
use crate::domain::query::model::query_mode::QueryMode;

/// Query string of `GET /query`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DatumQueryParams {
    pub site: Option<String>,
    pub datumname: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SSZ`, defaults to 24h before `end`.
    pub start: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SSZ`, defaults to now.
    pub end: Option<String>,
    pub agg: Option<String>,
}

impl DatumQueryParams {
    /// Builds the params from decoded key/value pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "site" => &mut params.site,
                "datumname" => &mut params.datumname,
                "start" => &mut params.start,
                "end" => &mut params.end,
                "agg" => &mut params.agg,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn mode(&self) -> QueryMode {
        QueryMode::from_agg_param(self.agg.as_deref())
    }

    pub fn into_datum_query(self, now: DateTime<Utc>) -> DatumQuery {
        DatumQuery::with_defaults(
            self.site.unwrap_or_default(),
            self.datumname.unwrap_or_default(),
            self.start,
            self.end,
            now,
        )
    }
}
