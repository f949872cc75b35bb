//! Модель отображаемой таблицы: сортировка строк по колонке и поиск по тексту строки.
//!
//! Rows are view-models. Sorting rearranges them, filtering only flips the
//! `visible` flag, so the two compose in any order. Rendering is left to the
//! caller, which draws rows in the order the model holds and skips hidden ones.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Текущая сортировка таблицы: колонка (если выбрана) и направление
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    /// State after a click on a column header: the same column flips
    /// direction, a new column starts ascending.
    pub fn clicked(self, column: usize) -> Self {
        if self.column == Some(column) {
            Self {
                column: Some(column),
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                column: Some(column),
                direction: SortDirection::Ascending,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableViewError {
    #[error("column {column} is out of range for row {row} with {cell_count} cells")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        cell_count: usize,
    },
}

/// One rendered table row: ordered cell texts plus a visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Stable key for keyed rendering; never used for ordering.
    pub key: String,
    pub cells: Vec<String>,
    pub visible: bool,
}

impl TableRow {
    pub fn new(key: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            key: key.into(),
            cells,
            visible: true,
        }
    }

    /// Полный текст строки: ячейки подряд, без разделителей.
    pub fn text(&self) -> String {
        self.cells.concat()
    }

    /// Trimmed text of the given cell.
    pub fn cell_text(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(|cell| cell.trim())
    }
}

/// Sorts rows in place by the trimmed text of `column`.
///
/// Keys compare in Unicode code-point order, so "10" sorts before "9".
/// The sort is stable in both directions: rows with equal keys keep their
/// current relative order. When any row has no cell at `column` the rows are
/// left untouched and `IndexOutOfRange` names the first such row.
pub fn sort_rows(
    rows: &mut [TableRow],
    column: usize,
    direction: SortDirection,
) -> Result<(), TableViewError> {
    if let Some((row, bad)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.cells.len() <= column)
    {
        return Err(TableViewError::IndexOutOfRange {
            row,
            column,
            cell_count: bad.cells.len(),
        });
    }

    rows.sort_by(|a, b| {
        let cmp = compare_cells(a, b, column);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    Ok(())
}

fn compare_cells(a: &TableRow, b: &TableRow, column: usize) -> Ordering {
    let a = a.cell_text(column).unwrap_or_default();
    let b = b.cell_text(column).unwrap_or_default();
    a.cmp(b)
}

/// Shows rows whose text contains `term` (case-insensitive), hides the rest.
///
/// Never reorders or removes rows. An empty term shows every row.
pub fn filter_rows(rows: &mut [TableRow], term: &str) {
    let needle = term.to_lowercase();
    for row in rows.iter_mut() {
        row.visible = row.text().to_lowercase().contains(&needle);
    }
}

/// Re-applies a search term and sort state to freshly loaded rows.
pub fn apply_view(rows: &mut [TableRow], sort: SortState, term: &str) -> Result<(), TableViewError> {
    filter_rows(rows, term);
    match sort.column {
        Some(column) => sort_rows(rows, column, sort.direction),
        None => Ok(()),
    }
}

/// Number of rows currently shown.
pub fn visible_count(rows: &[TableRow]) -> usize {
    rows.iter().filter(|r| r.visible).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, cells: &[&str]) -> TableRow {
        TableRow::new(key, cells.iter().map(|c| c.to_string()).collect())
    }

    fn keys(rows: &[TableRow]) -> Vec<&str> {
        rows.iter().map(|r| r.key.as_str()).collect()
    }

    fn sample() -> Vec<TableRow> {
        vec![
            row("a", &["orders", " 9 "]),
            row("b", &["Admin", "10"]),
            row("c", &["local", "3"]),
            row("d", &["config", "10"]),
        ]
    }

    #[test]
    fn test_sort_ascending_by_text() {
        let mut rows = sample();
        sort_rows(&mut rows, 0, SortDirection::Ascending).unwrap();
        // code-point order: uppercase before lowercase
        assert_eq!(keys(&rows), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_sort_numbers_lexicographically() {
        let mut rows = sample();
        sort_rows(&mut rows, 1, SortDirection::Ascending).unwrap();
        assert_eq!(keys(&rows), vec!["b", "d", "c", "a"]);
        assert_eq!(rows[0].cell_text(1), Some("10"));
        assert_eq!(rows[3].cell_text(1), Some("9"));
    }

    #[test]
    fn test_sort_descending_keeps_ties_stable() {
        let mut rows = sample();
        sort_rows(&mut rows, 1, SortDirection::Descending).unwrap();
        assert_eq!(keys(&rows), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = sample();
        sort_rows(&mut once, 0, SortDirection::Descending).unwrap();
        let mut twice = once.clone();
        sort_rows(&mut twice, 0, SortDirection::Descending).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_empty_and_single_row() {
        let mut empty: Vec<TableRow> = Vec::new();
        assert!(sort_rows(&mut empty, 5, SortDirection::Ascending).is_ok());

        let mut single = vec![row("x", &["only"])];
        sort_rows(&mut single, 0, SortDirection::Descending).unwrap();
        assert_eq!(keys(&single), vec!["x"]);
    }

    #[test]
    fn test_sort_out_of_range_leaves_rows_untouched() {
        let mut rows = vec![row("a", &["z", "1"]), row("b", &["y"])];
        let err = sort_rows(&mut rows, 1, SortDirection::Ascending).unwrap_err();
        assert_eq!(
            err,
            TableViewError::IndexOutOfRange {
                row: 1,
                column: 1,
                cell_count: 1
            }
        );
        assert_eq!(keys(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_state_clicks() {
        let state = SortState::default().clicked(2);
        assert_eq!(state.column, Some(2));
        assert!(state.direction.is_ascending());

        let state = state.clicked(2);
        assert_eq!(state.direction, SortDirection::Descending);

        let state = state.clicked(0);
        assert_eq!(state.column, Some(0));
        assert!(state.direction.is_ascending());
    }

    #[test]
    fn test_apply_view_to_new_rows() {
        let mut rows = sample();
        let sort = SortState {
            column: Some(0),
            direction: SortDirection::Descending,
        };
        apply_view(&mut rows, sort, "O").unwrap();
        assert_eq!(keys(&rows), vec!["a", "c", "d", "b"]);
        assert_eq!(visible_count(&rows), 3);
        assert!(!rows[3].visible);

        let mut unsorted = sample();
        apply_view(&mut unsorted, SortState::default(), "").unwrap();
        assert_eq!(unsorted, sample());
    }

    #[test]
    fn test_filter_case_insensitive() {
        let mut rows = sample();
        filter_rows(&mut rows, "ADM");
        let shown: Vec<bool> = rows.iter().map(|r| r.visible).collect();
        assert_eq!(shown, vec![false, true, false, false]);
        assert_eq!(visible_count(&rows), 1);
    }

    #[test]
    fn test_filter_matches_across_cells() {
        let mut rows = vec![row("a", &["local", "3"])];
        filter_rows(&mut rows, "al3");
        assert!(rows[0].visible);
    }

    #[test]
    fn test_filter_empty_term_shows_all() {
        let mut rows = sample();
        filter_rows(&mut rows, "nothing matches this");
        assert_eq!(visible_count(&rows), 0);
        filter_rows(&mut rows, "");
        assert_eq!(visible_count(&rows), rows.len());
    }

    #[test]
    fn test_filter_then_sort_keeps_visibility() {
        let mut rows = sample();
        filter_rows(&mut rows, "o");
        let hidden_before: Vec<String> = rows
            .iter()
            .filter(|r| !r.visible)
            .map(|r| r.key.clone())
            .collect();

        sort_rows(&mut rows, 0, SortDirection::Ascending).unwrap();
        let hidden_after: Vec<String> = rows
            .iter()
            .filter(|r| !r.visible)
            .map(|r| r.key.clone())
            .collect();

        assert_eq!(hidden_before.len(), hidden_after.len());
        for key in hidden_before {
            assert!(hidden_after.contains(&key));
        }
        assert_eq!(rows.len(), 4);
    }
}
