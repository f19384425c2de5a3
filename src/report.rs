use std::io::{self, Write};

use crate::data::model::{Column, Table};
use crate::data::stats;

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------
//
// All sections write to a caller-supplied `io::Write` in a fixed order, so
// two runs over the same table produce byte-identical output.

const HEAD_ROWS: usize = 5;
const INDEX_WIDTH: usize = 3;
const STAT_WIDTH: usize = 5;
const SPECIES_WIDTH: usize = 10;

/// Write the full summary report: head, schema info, missing values,
/// descriptive statistics, and per-species means.
pub fn write_summary<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    write_head(w, table)?;
    write_info(w, table)?;
    write_missing(w, table)?;
    write_describe(w, table)?;
    write_group_means(w, table)?;
    Ok(())
}

/// Write the four fixed observation lines shown after the charts.
pub fn write_findings<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Findings & Observations:")?;
    writeln!(w, "1. Setosa has smaller petals compared to the other two species.")?;
    writeln!(w, "2. Virginica generally has the longest petals and sepals.")?;
    writeln!(
        w,
        "3. The scatter plot shows clear separation between Setosa and the other two species."
    )?;
    writeln!(w, "4. Sepal width is concentrated between 2.5 and 3.5 cm.")?;
    Ok(())
}

fn write_head<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    writeln!(w, "First 5 rows of the dataset:")?;
    write!(w, "{:>INDEX_WIDTH$}", "")?;
    for column in Column::ALL {
        write!(w, "  {}", column.label())?;
    }
    writeln!(w, "  species")?;

    for (i, r) in table.records().iter().take(HEAD_ROWS).enumerate() {
        write!(w, "{i:>INDEX_WIDTH$}")?;
        for column in Column::ALL {
            write!(w, "  {:>width$.1}", r.value(column), width = column.label().len())?;
        }
        writeln!(w, "  {}", r.species)?;
    }
    Ok(())
}

fn write_info<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let n = table.len();
    let label_width = widest_column_label();

    writeln!(w)?;
    writeln!(w, "Dataset Info:")?;
    writeln!(w, "RangeIndex: {n} entries, 0 to {}", n.saturating_sub(1))?;
    writeln!(w, "Data columns (total {} columns):", Column::ALL.len() + 1)?;
    for column in Column::ALL {
        let non_null = n - stats::missing_count(table, column);
        writeln!(
            w,
            "  {:<label_width$}  {non_null} non-null  f64",
            column.label()
        )?;
    }
    writeln!(w, "  {:<label_width$}  {n} non-null  str", "species")?;
    Ok(())
}

fn write_missing<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let label_width = widest_column_label();

    writeln!(w)?;
    writeln!(w, "Missing values:")?;
    for column in Column::ALL {
        writeln!(
            w,
            "  {:<label_width$}  {}",
            column.label(),
            stats::missing_count(table, column)
        )?;
    }
    writeln!(w, "  {:<label_width$}  0", "species")?;
    Ok(())
}

fn write_describe<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    let summaries: Vec<_> = Column::ALL
        .iter()
        .map(|&c| (c, stats::summarize_column(table, c)))
        .collect();

    writeln!(w)?;
    writeln!(w, "Basic Statistics:")?;
    write!(w, "{:<STAT_WIDTH$}", "")?;
    for (column, _) in &summaries {
        write!(w, "  {}", column.label())?;
    }
    writeln!(w)?;

    write!(w, "{:<STAT_WIDTH$}", "count")?;
    for (column, s) in &summaries {
        write!(w, "  {:>width$}", s.count, width = column.label().len())?;
    }
    writeln!(w)?;

    let rows: [(&str, fn(&stats::Summary) -> f64); 7] = [
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q25),
        ("50%", |s| s.median),
        ("75%", |s| s.q75),
        ("max", |s| s.max),
    ];
    for (name, pick) in rows {
        write!(w, "{name:<STAT_WIDTH$}")?;
        for (column, s) in &summaries {
            write!(w, "  {:>width$.4}", pick(s), width = column.label().len())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn write_group_means<W: Write>(w: &mut W, table: &Table) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Mean values by species:")?;
    write!(w, "{:<SPECIES_WIDTH$}", "")?;
    for column in Column::ALL {
        write!(w, "  {}", column.label())?;
    }
    writeln!(w)?;

    for (species, means) in stats::group_means(table) {
        write!(w, "{:<SPECIES_WIDTH$}", species.name())?;
        for (column, mean) in Column::ALL.iter().zip(means) {
            write!(w, "  {mean:>width$.4}", width = column.label().len())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn widest_column_label() -> usize {
    Column::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0)
}
