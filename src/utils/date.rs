use chrono::{DateTime, Local, Months, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a single period token (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) to its first and last day.
fn token_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if p.len() == 10
        && let Some(d) = parse_date(p)
    {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Some(first) = parse_date(&format!("{p}-01"))
    {
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| format!("Invalid period: {p}"))?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - ranges `start:end` where both sides share the same shape
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        if start_raw.trim().len() != end_raw.trim().len() {
            return Err("start and end must have same format".to_string());
        }

        let (start, _) = token_bounds(start_raw)?;
        let (_, end) = token_bounds(end_raw)?;

        if end < start {
            return Err(format!("Invalid range: {start} is after {end}"));
        }
        return Ok((start, end));
    }

    token_bounds(p)
}

/// Instant on `date` at the wall-clock time of `reference`.
///
/// Falls back to noon when that time does not exist locally (DST gap).
pub fn local_instant(date: NaiveDate, reference: DateTime<Local>) -> DateTime<Local> {
    if date == reference.date_naive() {
        return reference;
    }

    Local
        .from_local_datetime(&date.and_time(reference.time()))
        .earliest()
        .or_else(|| {
            date.and_hms_opt(12, 0, 0)
                .and_then(|noon| Local.from_local_datetime(&noon).earliest())
        })
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).expect("valid date")
    }

    #[test]
    fn period_shapes() {
        assert_eq!(period_bounds("2025"), Ok((d("2025-01-01"), d("2025-12-31"))));
        assert_eq!(period_bounds("2024-02"), Ok((d("2024-02-01"), d("2024-02-29"))));
        assert_eq!(period_bounds("2025-09-03"), Ok((d("2025-09-03"), d("2025-09-03"))));
        assert_eq!(
            period_bounds("2025-08:2025-09"),
            Ok((d("2025-08-01"), d("2025-09-30")))
        );
    }

    #[test]
    fn period_errors() {
        assert!(period_bounds("2025-09:2025").is_err());
        assert!(period_bounds("2025-09-10:2025-09-01").is_err());
        assert!(period_bounds("yesterday").is_err());
    }

    #[test]
    fn instant_keeps_wall_clock_time() {
        let reference = Local::now();
        let other = d("2025-09-01");

        let at = local_instant(other, reference);
        assert_eq!(at.date_naive(), other);

        assert_eq!(local_instant(reference.date_naive(), reference), reference);
    }
}
