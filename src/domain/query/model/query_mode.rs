/// Which backend response shape a query asks for.
///
/// The set is closed: the backend either returns raw documents or the two
/// 15-minute bucket aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Aggregated,
    Raw,
}

impl QueryMode {
    /// Interprets the `agg` query parameter.
    ///
    /// Absent, empty or exactly `"true"` selects aggregation. Every other value,
    /// including `"false"` and `"TRUE"`, selects raw hits.
    pub fn from_agg_param(agg: Option<&str>) -> Self {
        match agg {
            None | Some("") | Some("true") => QueryMode::Aggregated,
            Some(_) => QueryMode::Raw,
        }
    }

    /// File name of the search template for this mode.
    pub fn template_file_name(self) -> &'static str {
        match self {
            QueryMode::Aggregated => "aggsearchtemplate.json",
            QueryMode::Raw => "searchtemplate.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryMode::Aggregated => "aggregated",
            QueryMode::Raw => "raw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agg_param_enables_aggregation_only_when_absent_or_true() {
        assert_eq!(QueryMode::from_agg_param(None), QueryMode::Aggregated);
        assert_eq!(QueryMode::from_agg_param(Some("")), QueryMode::Aggregated);
        assert_eq!(QueryMode::from_agg_param(Some("true")), QueryMode::Aggregated);

        assert_eq!(QueryMode::from_agg_param(Some("false")), QueryMode::Raw);
        assert_eq!(QueryMode::from_agg_param(Some("banana")), QueryMode::Raw);
        assert_eq!(QueryMode::from_agg_param(Some("TRUE")), QueryMode::Raw);
    }

    #[test]
    fn each_mode_has_its_own_template() {
        assert_eq!(
            QueryMode::Aggregated.template_file_name(),
            "aggsearchtemplate.json"
        );
        assert_eq!(QueryMode::Raw.template_file_name(), "searchtemplate.json");
    }
}
