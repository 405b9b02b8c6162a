use crate::core::calendar;
use crate::core::holidays::{self, AllowanceTable};
use crate::domain::model::{AvailabilityRecord, Developer, LocalHoliday, Period};
use crate::utils::error::Result;

/// Produces one availability record per period, or per (period, developer)
/// pair when developers are present. Records are emitted in input iteration
/// order, period-major.
pub struct AvailabilityCalculator<'a> {
    allowances: &'a AllowanceTable,
    local_holidays: &'a [LocalHoliday],
}

impl<'a> AvailabilityCalculator<'a> {
    pub fn new(allowances: &'a AllowanceTable, local_holidays: &'a [LocalHoliday]) -> Self {
        Self {
            allowances,
            local_holidays,
        }
    }

    pub fn records_for(
        &self,
        periods: &[Period],
        developers: &[Developer],
    ) -> Result<Vec<AvailabilityRecord>> {
        let mut records = Vec::new();
        for period in periods {
            if developers.is_empty() {
                records.push(self.period_record(period, None)?);
            } else {
                for developer in developers {
                    records.push(self.period_record(period, Some(developer))?);
                }
            }
        }
        Ok(records)
    }

    /// One record. `workdays` may go negative when the allowance exceeds the
    /// range's working days; that is the policy table speaking, not a bug.
    pub fn period_record(
        &self,
        period: &Period,
        developer: Option<&Developer>,
    ) -> Result<AvailabilityRecord> {
        let range = &period.range;
        let total_days = calendar::inclusive_day_count(range);
        let wdays_with_holidays = calendar::working_days_in_range(range);
        let base = self.allowances.allowance(period.id);
        let holidays =
            holidays::adjusted_holidays(base, range, developer, self.local_holidays)?;

        Ok(AvailabilityRecord {
            period_id: Some(period.id),
            project_id: None,
            developer_id: developer.map(|dev| dev.id),
            total_days,
            workdays: wdays_with_holidays - holidays,
            weekend_days: total_days - wdays_with_holidays,
            holidays,
            feasibility: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DateRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(id: i64, since: (i32, u32, u32), until: (i32, u32, u32)) -> Period {
        Period {
            id,
            range: DateRange {
                since: date(since.0, since.1, since.2),
                until: date(until.0, until.1, until.2),
            },
            effort_days: None,
        }
    }

    #[test]
    fn full_week_with_id_one_allowance_goes_negative() {
        // 2024-01-01..07 covers exactly Mon..Sun: 5 working days (Tue-Sat),
        // and the id-1 allowance of 10 pushes workdays below zero.
        let table = AllowanceTable::default();
        let calc = AvailabilityCalculator::new(&table, &[]);
        let record = calc
            .period_record(&period(1, (2024, 1, 1), (2024, 1, 7)), None)
            .unwrap();

        assert_eq!(record.period_id, Some(1));
        assert_eq!(record.developer_id, None);
        assert_eq!(record.total_days, 7);
        assert_eq!(record.holidays, 10);
        assert_eq!(record.workdays, -5);
        assert_eq!(record.weekend_days, 2);
    }

    #[test]
    fn record_decomposition_holds() {
        let table = AllowanceTable::default();
        let calc = AvailabilityCalculator::new(&table, &[]);
        for id in [1, 2, 3] {
            let record = calc
                .period_record(&period(id, (2024, 3, 1), (2024, 3, 31)), None)
                .unwrap();
            assert_eq!(
                record.total_days,
                record.workdays + record.weekend_days + record.holidays,
                "decomposition failed for period {id}"
            );
        }
    }

    #[test]
    fn developer_birthday_raises_holidays_by_one() {
        // March 2024 has 22 working days; 2024-03-20 (the re-anchored
        // birthday) is a Wednesday inside the range.
        let table = AllowanceTable::default();
        let calc = AvailabilityCalculator::new(&table, &[]);
        let p = period(3, (2024, 3, 1), (2024, 3, 31));
        let dev = Developer {
            id: 7,
            birthday: date(1990, 3, 20),
        };

        let without = calc.period_record(&p, None).unwrap();
        let with = calc.period_record(&p, Some(&dev)).unwrap();

        assert_eq!(without.holidays, 0);
        assert_eq!(without.workdays, 22);
        assert_eq!(with.holidays, 1);
        assert_eq!(with.workdays, 21);
        assert_eq!(with.developer_id, Some(7));
    }

    #[test]
    fn cross_product_is_period_major() {
        let table = AllowanceTable::default();
        let calc = AvailabilityCalculator::new(&table, &[]);
        let periods = [
            period(1, (2024, 1, 1), (2024, 1, 7)),
            period(2, (2024, 2, 1), (2024, 2, 7)),
        ];
        let developers = [
            Developer {
                id: 10,
                birthday: date(1990, 6, 1),
            },
            Developer {
                id: 11,
                birthday: date(1991, 6, 2),
            },
        ];

        let records = calc.records_for(&periods, &developers).unwrap();
        let pairs: Vec<_> = records
            .iter()
            .map(|r| (r.period_id.unwrap(), r.developer_id.unwrap()))
            .collect();
        assert_eq!(pairs, vec![(1, 10), (1, 11), (2, 10), (2, 11)]);
    }

    #[test]
    fn no_developers_yields_one_record_per_period() {
        let table = AllowanceTable::default();
        let calc = AvailabilityCalculator::new(&table, &[]);
        let periods = [
            period(1, (2024, 1, 1), (2024, 1, 7)),
            period(2, (2024, 2, 1), (2024, 2, 7)),
        ];

        let records = calc.records_for(&periods, &[]).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.developer_id.is_none()));
    }
}
