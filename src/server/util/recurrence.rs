use chrono::{DateTime, Duration, Months, Utc};

use crate::server::{error::AppError, model::scheduled_task::Frequency};

/// Computes the first occurrence of a recurrence strictly after `now`.
///
/// Occurrences are `start + k * period` for k = 0, 1, 2, ...; a start date in the
/// future is itself the next run. Month and year steps are taken from `start` each
/// time so a day-31 start clamps to short months without drifting.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Next run time
/// - `Err(AppError::BadRequest)` - Date arithmetic overflowed the supported range
pub fn next_run(
    start: DateTime<Utc>,
    frequency: Frequency,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    if start > now {
        return Ok(start);
    }

    match frequency {
        Frequency::Daily => Ok(step_fixed(start, Duration::days(1), now)),
        Frequency::Weekly => Ok(step_fixed(start, Duration::weeks(1), now)),
        Frequency::Monthly => step_months(start, 1, now),
        Frequency::Yearly => step_months(start, 12, now),
    }
}

fn step_fixed(start: DateTime<Utc>, period: Duration, now: DateTime<Utc>) -> DateTime<Utc> {
    let elapsed = (now - start).num_seconds();
    let periods = elapsed / period.num_seconds() + 1;
    start + period * periods as i32
}

fn step_months(
    start: DateTime<Utc>,
    months_per_period: u32,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AppError> {
    let mut periods: u32 = 1;
    loop {
        let candidate = periods
            .checked_mul(months_per_period)
            .and_then(|months| start.checked_add_months(Months::new(months)))
            .ok_or_else(|| AppError::BadRequest("Start date out of range".to_string()))?;

        if candidate > now {
            return Ok(candidate);
        }
        periods += 1;
    }
}
