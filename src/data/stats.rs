use super::model::{Column, Species, Table};

// ---------------------------------------------------------------------------
// Column-wise descriptive statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column, pandas `describe()` layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Number of non-finite (missing) values in a column.
pub fn missing_count(table: &Table, column: Column) -> usize {
    table
        .records()
        .iter()
        .filter(|r| !r.value(column).is_finite())
        .count()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1), NaN for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Quantile with linear interpolation between order statistics, the
/// pandas default. `q` is in [0, 1]; `sorted` must be ascending.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Summarise a series of values.
pub fn describe(values: &[f64]) -> Summary {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    Summary {
        count: values.len(),
        mean: mean(values),
        std: std_dev(values),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

/// Summarise one column of the table.
pub fn summarize_column(table: &Table, column: Column) -> Summary {
    describe(&table.column(column))
}

// ---------------------------------------------------------------------------
// Group-by-species means
// ---------------------------------------------------------------------------

/// Per-species mean of every numeric column, in fixed species order.
/// Inner array order follows [`Column::ALL`].
pub fn group_means(table: &Table) -> [(Species, [f64; 4]); 3] {
    Species::ALL.map(|species| {
        let means =
            Column::ALL.map(|column| mean(&table.column_for_species(column, species)));
        (species, means)
    })
}

/// Mean of one column for one species.
pub fn species_mean(table: &Table, column: Column, species: Species) -> f64 {
    mean(&table.column_for_species(column, species))
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One equal-width histogram bin over `[start, end)`; the final bin of a
/// histogram also includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Bin `values` into `bins` equal-width bins spanning [min, max].
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = if width.abs() < f64::EPSILON {
            0
        } else {
            // max lands in the last bin, not past it
            (((v - min) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::load_builtin;

    #[test]
    fn describe_small_series() {
        let s = describe(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q25, 1.75);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.q75, 3.25);
        assert_eq!(s.max, 4.0);
        assert!((s.std - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn quartiles_are_ordered_for_every_column() {
        let table = load_builtin().unwrap();
        for column in Column::ALL {
            let s = summarize_column(&table, column);
            assert!(s.min <= s.q25, "{column}");
            assert!(s.q25 <= s.median, "{column}");
            assert!(s.median <= s.q75, "{column}");
            assert!(s.q75 <= s.max, "{column}");
        }
    }

    #[test]
    fn no_missing_values_in_builtin() {
        let table = load_builtin().unwrap();
        for column in Column::ALL {
            assert_eq!(missing_count(&table, column), 0);
        }
    }

    #[test]
    fn setosa_has_smallest_mean_petal_length() {
        let table = load_builtin().unwrap();
        let setosa = species_mean(&table, Column::PetalLength, Species::Setosa);
        let versicolor = species_mean(&table, Column::PetalLength, Species::Versicolor);
        let virginica = species_mean(&table, Column::PetalLength, Species::Virginica);
        assert!(setosa < versicolor);
        assert!(setosa < virginica);
    }

    #[test]
    fn group_means_follow_species_order() {
        let table = load_builtin().unwrap();
        let means = group_means(&table);
        assert_eq!(means[0].0, Species::Setosa);
        assert_eq!(means[1].0, Species::Versicolor);
        assert_eq!(means[2].0, Species::Virginica);
        // Sepal length means of the classic dataset, to three decimals.
        assert!((means[0].1[0] - 5.006).abs() < 1e-9);
    }

    #[test]
    fn histogram_counts_sum_to_input_length() {
        let table = load_builtin().unwrap();
        let values = table.column(Column::SepalWidth);
        let bins = histogram(&values, 15);
        assert_eq!(bins.len(), 15);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn histogram_includes_max_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(bins.last().unwrap().count, 2);
    }
}
