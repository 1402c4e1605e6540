use serde::Deserialize;
use thiserror::Error;

use crate::models::job::{EmploymentType, WorkModality};

/// Sentinel meaning "no restriction" for any selector.
pub const ALL: &str = "all";

#[derive(Debug, Error, PartialEq)]
pub enum CriteriaError {
    #[error("Unknown employment type '{0}'")]
    UnknownEmploymentType(String),

    #[error("Unknown work modality '{0}'")]
    UnknownModality(String),

    #[error("days_ago must be a non-negative integer or 'all', got '{0}'")]
    InvalidDaysAgo(String),
}

/// Raw selector values as they arrive from a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub search: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub modality: Option<String>,
    pub technology: Option<String>,
    pub source: Option<String>,
    pub days_ago: Option<String>,
}

/// Validated filter selection. `None` means the selector is set to "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub country: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub modality: Option<WorkModality>,
    pub technology: Option<String>,
    pub source: Option<String>,
    pub days_ago: Option<u32>,
}

impl TryFrom<FilterQuery> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        Ok(FilterCriteria {
            search: query.search.unwrap_or_default(),
            country: selector(query.country),
            employment_type: selector(query.employment_type)
                .map(|s| s.parse::<EmploymentType>())
                .transpose()?,
            modality: selector(query.modality)
                .map(|s| s.parse::<WorkModality>())
                .transpose()?,
            technology: selector(query.technology),
            source: selector(query.source),
            days_ago: selector(query.days_ago)
                .map(|s| {
                    s.parse::<u32>()
                        .map_err(|_| CriteriaError::InvalidDaysAgo(s.clone()))
                })
                .transpose()?,
        })
    }
}

/// Maps the "all" sentinel and blank values to `None`.
fn selector(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_is_unrestricted() {
        let query = FilterQuery {
            country: Some("all".into()),
            employment_type: Some("ALL".into()),
            days_ago: Some("all".into()),
            technology: Some("".into()),
            ..Default::default()
        };
        let criteria = FilterCriteria::try_from(query).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_parses_typed_selectors() {
        let query = FilterQuery {
            search: Some("react ".into()),
            country: Some("BR".into()),
            employment_type: Some("contractor".into()),
            modality: Some("hybrid".into()),
            days_ago: Some("7".into()),
            ..Default::default()
        };
        let criteria = FilterCriteria::try_from(query).unwrap();
        assert_eq!(criteria.search, "react ");
        assert_eq!(criteria.country.as_deref(), Some("BR"));
        assert_eq!(criteria.employment_type, Some(EmploymentType::Contractor));
        assert_eq!(criteria.modality, Some(WorkModality::Hybrid));
        assert_eq!(criteria.days_ago, Some(7));
    }

    #[test]
    fn test_rejects_bad_days_ago() {
        let query = FilterQuery {
            days_ago: Some("-3".into()),
            ..Default::default()
        };
        assert_eq!(
            FilterCriteria::try_from(query),
            Err(CriteriaError::InvalidDaysAgo("-3".into()))
        );
    }

    #[test]
    fn test_rejects_unknown_modality() {
        let query = FilterQuery {
            modality: Some("moon".into()),
            ..Default::default()
        };
        assert!(matches!(
            FilterCriteria::try_from(query),
            Err(CriteriaError::UnknownModality(_))
        ));
    }
}
