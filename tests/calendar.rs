#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kintai::libs::calendar::{MonthCursor, MonthGrid};
    use kintai::libs::entry::TimeEntry;
    use kintai::libs::week::WeekStart;

    fn entry(date: &str, hours: &str) -> TimeEntry {
        TimeEntry {
            date: date.to_string(),
            start: "09:00".to_string(),
            end: "17:00".to_string(),
            hours: hours.to_string(),
            memo: String::new(),
        }
    }

    fn build(year: i32, month: u32, entries: &[TimeEntry], week_start: WeekStart) -> MonthGrid {
        MonthGrid::build(MonthCursor::new(year, month).unwrap(), entries, week_start).unwrap()
    }

    #[test]
    fn test_every_row_has_seven_cells() {
        for (year, month) in [(2024, 2), (2024, 3), (2024, 12), (2025, 1), (2026, 2)] {
            for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                let grid = build(year, month, &[], week_start);
                assert!(!grid.rows.is_empty());
                for row in &grid.rows {
                    assert_eq!(row.cells.len(), 7, "{}-{} with {:?}", year, month, week_start);
                    assert_eq!(row.week_start, row.cells[0].date);
                }
            }
        }
    }

    #[test]
    fn test_in_month_cells_cover_month_exactly() {
        // Every day 1..=days_in_month appears once, ascending, no gaps.
        for (year, month, days) in [(2024, 2, 29), (2023, 2, 28), (2024, 3, 31), (2024, 4, 30)] {
            let grid = build(year, month, &[], WeekStart::Sunday);
            let in_month: Vec<u32> = grid
                .rows
                .iter()
                .flat_map(|row| &row.cells)
                .filter(|cell| cell.in_month)
                .map(|cell| cell.day)
                .collect();
            let expected: Vec<u32> = (1..=days).collect();
            assert_eq!(in_month, expected, "{}-{}", year, month);
        }
    }

    #[test]
    fn test_leap_year_february_has_29_in_month_days() {
        let grid = build(2024, 2, &[], WeekStart::Sunday);
        let count = grid.rows.iter().flat_map(|row| &row.cells).filter(|cell| cell.in_month).count();
        assert_eq!(count, 29);
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_cells() {
        // September 2024 starts on a Sunday.
        let grid = build(2024, 9, &[], WeekStart::Sunday);
        let first = &grid.rows[0].cells[0];
        assert!(first.in_month);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
    }

    #[test]
    fn test_exact_fit_month_has_no_trailing_overflow_row() {
        // February 2026 starts on a Sunday and has exactly 28 days: four
        // full rows, no overflow cells at all.
        let grid = build(2026, 2, &[], WeekStart::Sunday);
        assert_eq!(grid.rows.len(), 4);
        assert!(grid.rows.iter().flat_map(|row| &row.cells).all(|cell| cell.in_month));
    }

    #[test]
    fn test_leading_cells_come_from_previous_month() {
        // March 2024 starts on a Friday: five leading February cells.
        let grid = build(2024, 3, &[], WeekStart::Sunday);
        let leading: Vec<_> = grid.rows[0].cells.iter().take_while(|cell| !cell.in_month).collect();
        assert_eq!(leading.len(), 5);
        for cell in &leading {
            assert_eq!(cell.month, 2);
        }
        assert_eq!(leading[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    }

    #[test]
    fn test_leading_cells_cross_year_boundary() {
        // January 2024 starts on a Monday; with Sunday-anchored weeks the
        // single leading cell is the last day of December 2023.
        let grid = build(2024, 1, &[], WeekStart::Sunday);
        let first = &grid.rows[0].cells[0];
        assert!(!first.in_month);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(first.month, 12);
    }

    #[test]
    fn test_trailing_cells_cross_year_boundary() {
        // December 2024 ends on a Tuesday: the last row is padded with
        // January 2025 cells.
        let grid = build(2024, 12, &[], WeekStart::Sunday);
        let last_row = grid.rows.last().unwrap();
        let trailing: Vec<_> = last_row.cells.iter().filter(|cell| !cell.in_month).collect();
        assert_eq!(trailing.len(), 4);
        for (offset, cell) in trailing.iter().enumerate() {
            assert_eq!(cell.date, NaiveDate::from_ymd_opt(2025, 1, offset as u32 + 1).unwrap());
            assert_eq!(cell.month, 1);
        }
    }

    #[test]
    fn test_monday_anchored_grid_aligns_first_column() {
        // March 2024 under Monday-anchored weeks: leading cells run from
        // Monday February 26th.
        let grid = build(2024, 3, &[], WeekStart::Monday);
        assert_eq!(grid.rows[0].cells[0].date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        let leading = grid.rows[0].cells.iter().take_while(|cell| !cell.in_month).count();
        assert_eq!(leading, 4);
    }

    #[test]
    fn test_cells_carry_daily_totals() {
        let entries = vec![entry("2024-03-04", "8.00"), entry("2024-03-04", "1.50"), entry("2024-03-05", "6.00")];
        let grid = build(2024, 3, &entries, WeekStart::Sunday);

        let cells: Vec<_> = grid.rows.iter().flat_map(|row| &row.cells).collect();
        let day4 = cells.iter().find(|cell| cell.in_month && cell.day == 4).unwrap();
        let day5 = cells.iter().find(|cell| cell.in_month && cell.day == 5).unwrap();
        let day6 = cells.iter().find(|cell| cell.in_month && cell.day == 6).unwrap();
        assert_eq!(day4.hours, 9.5);
        assert_eq!(day5.hours, 6.0);
        assert_eq!(day6.hours, 0.0);
    }

    #[test]
    fn test_week_subtotal_includes_overflow_days() {
        // 2024-02-29 (Thursday) and 2024-03-01 (Friday) share the week of
        // February 25th; the March grid's first row counts both.
        let entries = vec![entry("2024-02-29", "4.00"), entry("2024-03-01", "3.00")];
        let grid = build(2024, 3, &entries, WeekStart::Sunday);
        assert_eq!(grid.rows[0].week_start, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(grid.rows[0].total, 7.0);
    }

    #[test]
    fn test_row_totals_match_cell_sums() {
        let entries = vec![
            entry("2024-03-01", "2.50"),
            entry("2024-03-08", "8.00"),
            entry("2024-03-15", "7.25"),
            entry("2024-03-31", "1.00"),
        ];
        let grid = build(2024, 3, &entries, WeekStart::Sunday);
        for row in &grid.rows {
            let cell_sum: f64 = row.cells.iter().map(|cell| cell.hours).sum();
            assert!((row.total - cell_sum).abs() < 1e-9);
        }
    }

    #[test]
    fn test_running_totals_accumulate_row_totals() {
        let entries = vec![entry("2024-03-01", "2.00"), entry("2024-03-08", "8.00"), entry("2024-03-20", "4.50")];
        let grid = build(2024, 3, &entries, WeekStart::Sunday);
        let running = grid.running_totals();

        assert_eq!(running.len(), grid.rows.len());
        let mut acc = 0.0;
        for (row, cumulative) in grid.rows.iter().zip(&running) {
            acc += row.total;
            assert!((acc - cumulative).abs() < 1e-9);
        }
        let grand: f64 = grid.rows.iter().map(|row| row.total).sum();
        assert!((running.last().unwrap() - grand).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log_yields_zeroed_grid() {
        let grid = build(2024, 6, &[], WeekStart::Sunday);
        assert!(grid.rows.iter().flat_map(|row| &row.cells).all(|cell| cell.hours == 0.0));
        assert!(grid.rows.iter().all(|row| row.total == 0.0));
    }

    #[test]
    fn test_advance_carries_december_into_next_year() {
        let cursor = MonthCursor::new(2024, 12).unwrap().advance(1);
        assert_eq!(cursor, MonthCursor::new(2025, 1).unwrap());
    }

    #[test]
    fn test_advance_carries_january_into_previous_year() {
        let cursor = MonthCursor::new(2024, 1).unwrap().advance(-1);
        assert_eq!(cursor, MonthCursor::new(2023, 12).unwrap());
    }

    #[test]
    fn test_advance_supports_multi_year_jumps() {
        let cursor = MonthCursor::new(2024, 3).unwrap();
        assert_eq!(cursor.advance(25), MonthCursor::new(2026, 4).unwrap());
        assert_eq!(cursor.advance(-15), MonthCursor::new(2022, 12).unwrap());
        assert_eq!(cursor.advance(12).advance(-12), cursor);
    }

    #[test]
    fn test_out_of_range_month_is_rejected() {
        assert!(MonthCursor::new(2024, 0).is_err());
        assert!(MonthCursor::new(2024, 13).is_err());
    }
}
