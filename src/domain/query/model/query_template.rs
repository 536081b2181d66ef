//! Parsed search template with `{{.Field}}` placeholders

use crate::domain::query::model::datum_query::DatumQuery;
use crate::errors::AppError;

/// Query fields a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Site,
    DatumName,
    Start,
    End,
}

impl QueryField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Site" => Some(QueryField::Site),
            "DatumName" => Some(QueryField::DatumName),
            "Start" => Some(QueryField::Start),
            "End" => Some(QueryField::End),
            _ => None,
        }
    }

    fn value(self, query: &DatumQuery) -> &str {
        match self {
            QueryField::Site => &query.site,
            QueryField::DatumName => &query.datum_name,
            QueryField::Start => &query.start,
            QueryField::End => &query.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(QueryField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    segments: Vec<Segment>,
}

impl QueryTemplate {
    /// Parses template source. `name` only appears in error messages.
    pub fn parse(name: &str, source: &str) -> Result<Self, AppError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }

            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| {
                let offset = source.len() - rest.len() + open;
                let line = source[..offset].matches('\n').count() + 1;
                AppError::Render(format!("{}:{}: unclosed action", name, line))
            })?;

            let action = after_open[..close].trim();
            let field_name = action.strip_prefix('.').ok_or_else(|| {
                AppError::Render(format!(
                    "{}: unsupported action `{}`, expected `.Field`",
                    name, action
                ))
            })?;
            let field = QueryField::from_name(field_name).ok_or_else(|| {
                AppError::Render(format!(
                    "{}: can't evaluate field `{}` of a datum query",
                    name, field_name
                ))
            })?;

            segments.push(Segment::Field(field));
            rest = &after_open[close + 2..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Substitutes the query's fields. Values are escaped for a JSON string
    /// context, since every placeholder sits inside quotes.
    pub fn render(&self, query: &DatumQuery) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&escape_json_str(field.value(query))),
            }
        }
        out
    }
}

fn escape_json_str(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
