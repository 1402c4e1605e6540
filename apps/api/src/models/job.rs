use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::filter::CriteriaError;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Salaried, full-time employment (CLT in Brazil).
    FullTime,
    /// Contractor billing through their own company (PJ in Brazil).
    Contractor,
    Internship,
    Freelance,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::Contractor,
        EmploymentType::Internship,
        EmploymentType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::Contractor => "contractor",
            EmploymentType::Internship => "internship",
            EmploymentType::Freelance => "freelance",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmploymentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownEmploymentType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkModality {
    OnSite,
    Remote,
    Hybrid,
}

impl WorkModality {
    pub const ALL: [WorkModality; 3] = [
        WorkModality::OnSite,
        WorkModality::Remote,
        WorkModality::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkModality::OnSite => "on_site",
            WorkModality::Remote => "remote",
            WorkModality::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for WorkModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkModality {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkModality::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownModality(s.to_string()))
    }
}

/// A single job listing, either synthetic or mapped from an external board.
/// Never mutated once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub logo: String,
    pub location: String,
    pub country: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub modality: WorkModality,
    /// Display string only, e.g. "R$ 12.000" or "$ 140.000/yr".
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub technologies: Vec<String>,
    pub source: String,
    pub source_url: String,
    pub posted_at: DateTime<Utc>,
    pub urgent: bool,
    pub views: u32,
}

impl JobPosting {
    /// Whole days elapsed since posting, floor of the millisecond difference.
    /// Negative for postings dated in the future.
    pub fn days_since_posted(&self, now: DateTime<Utc>) -> i64 {
        (now - self.posted_at)
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY)
    }

    pub fn has_technology(&self, tech: &str) -> bool {
        self.technologies.iter().any(|t| t == tech)
    }
}

/// Relative label shown on cards and in the detail view.
pub fn posted_label(days: i64) -> String {
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d => format!("{d} days ago"),
    }
}
