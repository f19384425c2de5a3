use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Species – the categorical label
// ---------------------------------------------------------------------------

/// One of the three iris species in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

/// Raised when the source data carries a class code outside {0, 1, 2}.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown species code {0}, expected 0, 1 or 2")]
pub struct UnknownSpeciesCode(pub u8);

impl Species {
    /// Fixed species order, matching the source class codes 0, 1, 2.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Map a source class code to its species.
    pub fn from_code(code: u8) -> Result<Self, UnknownSpeciesCode> {
        match code {
            0 => Ok(Species::Setosa),
            1 => Ok(Species::Versicolor),
            2 => Ok(Species::Virginica),
            other => Err(UnknownSpeciesCode(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Column – the four numeric measurements
// ---------------------------------------------------------------------------

/// One of the four numeric measurement columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Column {
    /// Fixed column order, matching the source dataset.
    pub const ALL: [Column; 4] = [
        Column::SepalLength,
        Column::SepalWidth,
        Column::PetalLength,
        Column::PetalWidth,
    ];

    /// Display label, as the original column headers read.
    pub fn label(&self) -> &'static str {
        match self {
            Column::SepalLength => "sepal length (cm)",
            Column::SepalWidth => "sepal width (cm)",
            Column::PetalLength => "petal length (cm)",
            Column::PetalWidth => "petal width (cm)",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single measured sample (one row). Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl Record {
    /// The measurement in the given column.
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::SepalLength => self.sepal_length,
            Column::SepalWidth => self.sepal_width,
            Column::PetalLength => self.petal_length,
            Column::PetalWidth => self.petal_width,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete dataset
// ---------------------------------------------------------------------------

/// Ordered collection of records, insertion order = source dataset order.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn from_records(records: Vec<Record>) -> Self {
        Table { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one numeric column, in row order.
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// Values of one numeric column restricted to one species, in row order.
    pub fn column_for_species(&self, column: Column, species: Species) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.species == species)
            .map(|r| r.value(column))
            .collect()
    }

    /// Number of records per species, in fixed species order.
    pub fn species_counts(&self) -> [(Species, usize); 3] {
        let mut counts = [0usize; 3];
        for r in &self.records {
            counts[r.species as usize] += 1;
        }
        [
            (Species::Setosa, counts[0]),
            (Species::Versicolor, counts[1]),
            (Species::Virginica, counts[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_code_lookup() {
        assert_eq!(Species::from_code(0), Ok(Species::Setosa));
        assert_eq!(Species::from_code(1), Ok(Species::Versicolor));
        assert_eq!(Species::from_code(2), Ok(Species::Virginica));
        assert_eq!(Species::from_code(3), Err(UnknownSpeciesCode(3)));
    }

    #[test]
    fn record_value_matches_column() {
        let r = Record {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        };
        assert_eq!(r.value(Column::SepalLength), 5.1);
        assert_eq!(r.value(Column::SepalWidth), 3.5);
        assert_eq!(r.value(Column::PetalLength), 1.4);
        assert_eq!(r.value(Column::PetalWidth), 0.2);
    }

    #[test]
    fn species_counts_in_fixed_order() {
        let mk = |species| Record {
            sepal_length: 1.0,
            sepal_width: 1.0,
            petal_length: 1.0,
            petal_width: 1.0,
            species,
        };
        let table = Table::from_records(vec![
            mk(Species::Virginica),
            mk(Species::Setosa),
            mk(Species::Virginica),
        ]);
        assert_eq!(
            table.species_counts(),
            [
                (Species::Setosa, 1),
                (Species::Versicolor, 0),
                (Species::Virginica, 2),
            ]
        );
    }
}
