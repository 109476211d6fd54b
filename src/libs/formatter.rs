//! Hour value formatting for user-facing display.
//!
//! Worked hours are fractional (a 7 hour 30 minute interval is 7.5 hours),
//! but most days come out whole. To keep tables and calendar cells compact,
//! display formatting strips the fractional part when it carries no
//! information: `8` rather than `8.00`, `7.5` rather than `7.50`.
//!
//! Values are rounded to two decimal places before stripping, so derived
//! hours and re-aggregated totals print identically.

/// Formats an hours value, dropping trailing fractional zeros.
///
/// Whole numbers print with no decimal part. Fractional values are rounded
/// to two decimals, then trailing zeros and a dangling decimal point are
/// removed. The caller must not pass non-finite values.
///
/// # Examples
///
/// ```
/// use kintai::libs::formatter::format_hours;
///
/// assert_eq!(format_hours(3.0), "3");
/// assert_eq!(format_hours(3.5), "3.5");
/// assert_eq!(format_hours(3.25), "3.25");
/// assert_eq!(format_hours(3.2500001), "3.25");
/// ```
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        return format!("{}", hours as i64);
    }
    format!("{:.2}", hours).trim_end_matches('0').trim_end_matches('.').to_string()
}
