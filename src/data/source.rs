use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use super::model::{Record, Species, Table};

// ---------------------------------------------------------------------------
// Built-in dataset
// ---------------------------------------------------------------------------

/// The classic 150-row iris dataset, embedded at compile time.
/// Species are stored as their source class codes 0, 1, 2.
const IRIS_CSV: &str = include_str!("iris.csv");

/// One CSV row before the class code is mapped to a species name.
#[derive(Debug, Deserialize)]
struct RawRecord {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: u8,
}

/// Parse the embedded dataset into a [`Table`], in source row order.
pub fn load_builtin() -> Result<Table> {
    let mut reader = csv::Reader::from_reader(IRIS_CSV.as_bytes());
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let species = Species::from_code(raw.species)
            .with_context(|| format!("CSV row {row_no}"))?;

        records.push(Record {
            sepal_length: raw.sepal_length,
            sepal_width: raw.sepal_width,
            petal_length: raw.petal_length,
            petal_width: raw.petal_width,
            species,
        });
    }

    ensure!(!records.is_empty(), "embedded dataset is empty");
    Ok(Table::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    #[test]
    fn builtin_has_150_records() {
        let table = load_builtin().unwrap();
        assert_eq!(table.len(), 150);
    }

    #[test]
    fn builtin_has_50_records_per_species() {
        let table = load_builtin().unwrap();
        for (species, count) in table.species_counts() {
            assert_eq!(count, 50, "unexpected count for {species}");
        }
    }

    #[test]
    fn first_record_matches_source() {
        let table = load_builtin().unwrap();
        let first = table.records()[0];
        assert_eq!(first.sepal_length, 5.1);
        assert_eq!(first.sepal_width, 3.5);
        assert_eq!(first.petal_length, 1.4);
        assert_eq!(first.petal_width, 0.2);
        assert_eq!(first.species, Species::Setosa);
    }

    #[test]
    fn all_values_finite() {
        let table = load_builtin().unwrap();
        for column in Column::ALL {
            assert!(table.column(column).iter().all(|v| v.is_finite()));
        }
    }
}
