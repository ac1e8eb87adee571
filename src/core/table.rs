use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Rows are time buckets, columns are stations.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub rows: Vec<NaiveDate>,
    pub columns: Vec<Column>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Column {
    pub name: String,

    #[serde(skip)]
    pub kind: ColumnKind,

    /// Aligned with [`Table::rows`], `None` stands for no data.
    pub cells: Vec<Option<f64>>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnKind {
    Station,

    /// Row-wise sum over the stations.
    Total,
}

impl Table {
    pub const TOTAL: &'static str = "Total";

    /// Build the table from per-station sums, stations ordered by name.
    pub fn from_sums(
        rows: Vec<NaiveDate>,
        sums: &BTreeMap<String, BTreeMap<NaiveDate, f64>>,
    ) -> Self {
        let columns = sums
            .iter()
            .map(|(name, series)| Column {
                name: name.clone(),
                kind: ColumnKind::Station,
                cells: rows.iter().map(|row| series.get(row).copied()).collect(),
            })
            .collect();
        Self { rows, columns }
    }

    #[cfg(test)]
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Append the row-wise sum of the station columns, missing cells count as zero.
    pub fn with_total(mut self) -> Self {
        let cells = (0..self.rows.len())
            .map(|index| {
                Some(
                    self.columns
                        .iter()
                        .filter(|column| column.kind == ColumnKind::Station)
                        .filter_map(|column| column.cells[index])
                        .sum::<f64>(),
                )
            })
            .collect();
        self.columns.push(Column { name: Self::TOTAL.to_owned(), kind: ColumnKind::Total, cells });
        self
    }

    /// Round every cell to 2 decimal places, ties to even.
    pub fn rounded(mut self) -> Self {
        for cell in self.columns.iter_mut().flat_map(|column| &mut column.cells) {
            *cell = cell.map(round_to_hundredths);
        }
        self
    }

    /// Treat zero cells as no data and drop the station columns left without data.
    ///
    /// Zero and no measurement become indistinguishable here, which is fine for display
    /// but loses information. The total column is kept as long as any station remains,
    /// and a table without stations has no rows either.
    pub fn sanitized(mut self) -> Self {
        for cell in self.columns.iter_mut().flat_map(|column| &mut column.cells) {
            if *cell == Some(0.0) {
                *cell = None;
            }
        }
        self.columns.retain(|column| {
            column.kind == ColumnKind::Total || column.cells.iter().any(Option::is_some)
        });
        if self.columns.iter().all(|column| column.kind == ColumnKind::Total) {
            return Self::default();
        }
        self
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn sums(items: &[(&str, u32, f64)]) -> BTreeMap<String, BTreeMap<NaiveDate, f64>> {
        let mut sums = BTreeMap::<String, BTreeMap<NaiveDate, f64>>::new();
        for (name, day, value) in items {
            sums.entry((*name).to_owned()).or_default().insert(date(*day), *value);
        }
        sums
    }

    #[test]
    fn from_sums_ok() {
        let table = Table::from_sums(
            vec![date(1), date(2)],
            &sums(&[("Roses", 2, 3.0), ("Lawn", 1, 1.5), ("Lawn", 2, 2.5)]),
        );
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["Lawn", "Roses"]);
        assert_eq!(table.column("Lawn").unwrap().cells, [Some(1.5), Some(2.5)]);
        assert_eq!(table.column("Roses").unwrap().cells, [None, Some(3.0)]);
    }

    #[test]
    fn sanitized_ok() {
        let table = Table::from_sums(
            vec![date(1), date(2)],
            &sums(&[("Lawn", 1, 0.0), ("Lawn", 2, 2.0), ("Roses", 1, 0.0), ("Roses", 2, 0.0)]),
        )
        .sanitized();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["Lawn"]);
        assert_eq!(table.column("Lawn").unwrap().cells, [None, Some(2.0)]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn sanitized_without_stations_is_empty() {
        let table = Table::from_sums(vec![date(1)], &sums(&[("Lawn", 1, 0.0)])).sanitized();
        assert_eq!(table, Table::default());
    }

    #[test]
    fn sanitized_drops_total_without_stations() {
        let table =
            Table::from_sums(vec![date(1)], &sums(&[("Lawn", 1, 0.0)])).with_total().sanitized();
        assert!(table.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn sanitized_keeps_total_with_stations() {
        let table = Table::from_sums(
            vec![date(1), date(2)],
            &sums(&[("Lawn", 1, 1.0), ("Roses", 1, -1.0), ("Roses", 2, 0.0)]),
        )
        .with_total()
        .sanitized();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["Lawn", "Roses", "Total"]);
        assert_eq!(table.column(Table::TOTAL).unwrap().cells, [None, None]);
    }

    #[test]
    fn with_total_ok() {
        let table = Table::from_sums(
            vec![date(1), date(2)],
            &sums(&[("Lawn", 1, 1.25), ("Lawn", 2, 2.0), ("Roses", 2, 3.5)]),
        )
        .with_total();
        let total = table.columns.last().unwrap();
        assert_eq!(total.name, "Total");
        assert_eq!(total.kind, ColumnKind::Total);
        assert_eq!(total.cells, [Some(1.25), Some(5.5)]);
    }

    #[test]
    fn rounded_ok() {
        let table = Table::from_sums(
            vec![date(1), date(2), date(3)],
            &sums(&[("Lawn", 1, 2.675), ("Lawn", 2, 0.125), ("Lawn", 3, 10.0 / 3.0)]),
        )
        .rounded();
        // 2.675 is stored as exactly 267.5 hundredths and goes to the even neighbour:
        assert_eq!(table.column("Lawn").unwrap().cells, [Some(2.68), Some(0.12), Some(3.33)]);
    }
}
