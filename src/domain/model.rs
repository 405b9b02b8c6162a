use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::error::{ReportError, Result};
use crate::utils::validation;

/// Wire form of the input document. All dates are `YYYY-MM-DD` strings;
/// everything is validated in one pass by [`InputDocument::into_report_input`]
/// before any computation starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<ScheduleEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ScheduleEntry>>,
    #[serde(default)]
    pub developers: Vec<DeveloperEntry>,
    #[serde(default)]
    pub local_holidays: Vec<LocalHolidayEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub since: String,
    pub until: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_days: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperEntry {
    pub id: i64,
    pub birthday: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalHolidayEntry {
    pub day: String,
}

/// Inclusive date range. `until >= since` is guaranteed at construction time
/// by the document validation, so the calendar math never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub since: NaiveDate,
    pub until: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub id: i64,
    pub range: DateRange,
    pub effort_days: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Developer {
    pub id: i64,
    /// Only month and day matter for recurrence; the year is a parsing
    /// artifact of the input format.
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalHoliday {
    pub day: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Periods,
    Projects,
}

/// Validated input, ready for the calculators.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub kind: ReportKind,
    pub entries: Vec<Period>,
    pub developers: Vec<Developer>,
    pub local_holidays: Vec<LocalHoliday>,
}

#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub availabilities: Vec<AvailabilityRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_id: Option<i64>,
    pub total_days: i64,
    pub workdays: i64,
    pub weekend_days: i64,
    pub holidays: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDocument {
    pub availabilities: Vec<AvailabilityRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

impl ReportKind {
    pub fn entity_name(self) -> &'static str {
        match self {
            ReportKind::Periods => "period",
            ReportKind::Projects => "project",
        }
    }
}

impl InputDocument {
    /// Validate the whole document and convert it into domain types.
    /// Fail-fast: the first bad date, inverted range, or structural problem
    /// aborts the run before any record is computed.
    pub fn into_report_input(self) -> Result<ReportInput> {
        let (kind, raw_entries) = match (self.periods, self.projects) {
            (Some(periods), None) => (ReportKind::Periods, periods),
            (None, Some(projects)) => (ReportKind::Projects, projects),
            (Some(_), Some(_)) => {
                return Err(ReportError::InvalidDocument {
                    message: "document carries both periods and projects".to_string(),
                })
            }
            (None, None) => {
                return Err(ReportError::InvalidDocument {
                    message: "document carries neither periods nor projects".to_string(),
                })
            }
        };

        let entity = kind.entity_name();
        let mut entries = Vec::with_capacity(raw_entries.len());
        for entry in raw_entries {
            let id = entry.id.to_string();
            let since = validation::parse_date(entity, &id, &entry.since)?;
            let until = validation::parse_date(entity, &id, &entry.until)?;
            if until < since {
                return Err(ReportError::InvalidRange {
                    entity: entity.to_string(),
                    id: entry.id,
                });
            }
            if kind == ReportKind::Projects && entry.effort_days.is_none() {
                return Err(ReportError::InvalidDocument {
                    message: format!("missing effort_days in project {}", entry.id),
                });
            }
            entries.push(Period {
                id: entry.id,
                range: DateRange { since, until },
                effort_days: entry.effort_days,
            });
        }

        let developers = self
            .developers
            .into_iter()
            .map(|dev| {
                let birthday =
                    validation::parse_date("developer", &dev.id.to_string(), &dev.birthday)?;
                Ok(Developer {
                    id: dev.id,
                    birthday,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let local_holidays = self
            .local_holidays
            .into_iter()
            .map(|holiday| {
                let day = validation::parse_date("local holiday", &holiday.day, &holiday.day)?;
                Ok(LocalHoliday { day })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ReportInput {
            kind,
            entries,
            developers,
            local_holidays,
        })
    }
}
