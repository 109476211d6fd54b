use crate::libs::calendar::MonthGrid;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::format_hours;
use crate::libs::summary::{MonthlyTotals, WeeklyTotals};
use crate::libs::week::WeekStart;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Entry log, one row per interval. The index column is the handle for
    /// `record --edit` and `delete`.
    pub fn entries(entries: &[TimeEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "START", "END", "HOURS", "MEMO"]);
        for (index, entry) in entries.iter().enumerate() {
            table.add_row(row![
                index,
                entry.date,
                entry.start,
                entry.end,
                entry.hours_value().map(format_hours).unwrap_or_else(|| entry.hours.clone()),
                entry.memo
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-month hour totals, oldest month first.
    pub fn monthly(totals: &MonthlyTotals) -> Result<()> {
        let mut months: Vec<_> = totals.iter().collect();
        months.sort_by_key(|((year, month), _)| (*year, *month));

        let mut table = Table::new();
        table.add_row(row!["MONTH", "HOURS"]);
        for ((year, month), hours) in months {
            table.add_row(row![format!("{}-{:02}", year, month), format_hours(*hours)]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-week hour totals keyed by week-start date, oldest week first.
    pub fn weekly(totals: &WeeklyTotals) -> Result<()> {
        let mut weeks: Vec<_> = totals.iter().collect();
        weeks.sort_by_key(|(week_start, _)| **week_start);

        let mut table = Table::new();
        table.add_row(row!["WEEK OF", "HOURS"]);
        for (week_start, hours) in weeks {
            table.add_row(row![week_start.format("%Y-%m-%d"), format_hours(*hours)]);
        }
        table.printstd();

        Ok(())
    }

    /// Month grid: weekday columns per the configured week start, one cell
    /// per day, and a trailing WEEK column with the week subtotal.
    ///
    /// Overflow days from adjacent months are parenthesized. When
    /// `running_totals` is given, each WEEK cell also shows the cumulative
    /// month total below the subtotal.
    pub fn calendar(grid: &MonthGrid, week_start: WeekStart, running_totals: Option<&[f64]>) -> Result<()> {
        let mut table = Table::new();

        let mut header: Vec<Cell> = week_start.labels().iter().map(|label| Cell::new(label)).collect();
        header.push(Cell::new("WEEK"));
        table.add_row(Row::new(header));

        for (row_index, week) in grid.rows.iter().enumerate() {
            let mut cells: Vec<Cell> = Vec::with_capacity(8);
            for cell in &week.cells {
                let label = if cell.in_month {
                    format!("{}/{}", cell.month, cell.day)
                } else {
                    format!("({}/{})", cell.month, cell.day)
                };
                let text = if cell.hours > 0.0 {
                    format!("{}\n{} h", label, format_hours(cell.hours))
                } else {
                    label
                };
                cells.push(Cell::new(&text));
            }

            let total = match running_totals.and_then(|totals| totals.get(row_index)) {
                Some(cumulative) => format!("{} h\n{} h", format_hours(week.total), format_hours(*cumulative)),
                None => format!("{} h", format_hours(week.total)),
            };
            cells.push(Cell::new(&total));

            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }
}
