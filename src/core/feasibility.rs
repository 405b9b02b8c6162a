use crate::core::calendar;
use crate::core::holidays::{self, AllowanceTable};
use crate::domain::model::{AvailabilityRecord, Developer, LocalHoliday, Period};
use crate::utils::error::{ReportError, Result};

/// The project variant: availability plus a feasibility verdict obtained by
/// summing every developer's working-day contribution over the project range.
pub struct FeasibilityEvaluator<'a> {
    allowances: &'a AllowanceTable,
    local_holidays: &'a [LocalHoliday],
    developers: &'a [Developer],
}

impl<'a> FeasibilityEvaluator<'a> {
    pub fn new(
        allowances: &'a AllowanceTable,
        local_holidays: &'a [LocalHoliday],
        developers: &'a [Developer],
    ) -> Self {
        Self {
            allowances,
            local_holidays,
            developers,
        }
    }

    pub fn records_for(&self, projects: &[Period]) -> Result<Vec<AvailabilityRecord>> {
        projects
            .iter()
            .map(|project| self.project_record(project))
            .collect()
    }

    pub fn project_record(&self, project: &Period) -> Result<AvailabilityRecord> {
        let range = &project.range;
        let total_days = calendar::inclusive_day_count(range);
        let wdays_with_holidays = calendar::working_days_in_range(range);
        let base = self.allowances.allowance(project.id);
        let holidays = holidays::adjusted_holidays(base, range, None, self.local_holidays)?;
        let workdays = wdays_with_holidays - holidays;

        let effort_days = project
            .effort_days
            .ok_or_else(|| ReportError::InvalidDocument {
                message: format!("missing effort_days in project {}", project.id),
            })?;

        // Declared effort beyond the project's own working days is a broken
        // configuration, not a feasibility=false verdict.
        if effort_days > workdays {
            return Err(ReportError::InfeasibleConfiguration { id: project.id });
        }

        // Each developer contributes wdays_with_holidays - dev_holidays + base.
        // Adding base back compensates for subtracting it twice: once inside
        // dev_holidays, once at the project level. The accounting identity is
        // inherited policy; keep the arithmetic exactly as written.
        let mut total_working_days_for_project = 0;
        for developer in self.developers {
            let dev_holidays =
                holidays::adjusted_holidays(base, range, Some(developer), self.local_holidays)?;
            total_working_days_for_project += wdays_with_holidays - dev_holidays + base;
        }

        Ok(AvailabilityRecord {
            period_id: None,
            project_id: Some(project.id),
            developer_id: None,
            total_days,
            workdays,
            weekend_days: total_days - wdays_with_holidays,
            holidays,
            feasibility: Some(total_working_days_for_project >= effort_days),
        })
    }
}
