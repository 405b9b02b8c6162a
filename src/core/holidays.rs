use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::core::calendar;
use crate::domain::model::{DateRange, Developer, LocalHoliday};
use crate::utils::error::{ReportError, Result};

/// Per-id negotiated holiday allowances. The mapping is injected rather than
/// hard-coded so deployments can carry their own policy; ids without an entry
/// get no allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowanceTable {
    allowances: HashMap<i64, i64>,
}

impl AllowanceTable {
    pub fn new(allowances: HashMap<i64, i64>) -> Self {
        Self { allowances }
    }

    pub fn allowance(&self, id: i64) -> i64 {
        self.allowances.get(&id).copied().unwrap_or(0)
    }
}

impl Default for AllowanceTable {
    /// The legacy policy table: id 1 gets 10 days, id 2 gets 3.
    fn default() -> Self {
        Self::new(HashMap::from([(1, 10), (2, 3)]))
    }
}

/// Adjusted holiday count for one range: the base allowance, plus the
/// developer's birthday recurrences that land on working days (birthday
/// re-anchored onto the range's starting year), plus every local holiday's
/// working-day recurrences. Local holidays keep their parsed year, which
/// feeds the recurrence year guard.
pub fn adjusted_holidays(
    base: i64,
    range: &DateRange,
    developer: Option<&Developer>,
    local_holidays: &[LocalHoliday],
) -> Result<i64> {
    let mut holidays = base;

    if let Some(dev) = developer {
        let anchored = NaiveDate::from_ymd_opt(
            range.since.year(),
            dev.birthday.month(),
            dev.birthday.day(),
        )
        .ok_or_else(|| invalid_date("developer", dev.id.to_string()))?;

        holidays += calendar::working_recurrences_in_range(anchored, range)
            .map_err(|_| invalid_date("developer", dev.id.to_string()))?;
    }

    for holiday in local_holidays {
        holidays += calendar::working_recurrences_in_range(holiday.day, range)
            .map_err(|_| invalid_date("local holiday", holiday.day.to_string()))?;
    }

    Ok(holidays)
}

fn invalid_date(entity: &str, id: String) -> ReportError {
    ReportError::InvalidDate {
        entity: entity.to_string(),
        id,
    }
}
