//! Таблица с сортировкой по клику на заголовок и поиском по тексту строк.
//!
//! # Использование
//!
//! ```ignore
//! let table = TableModel::new();
//! table.replace_rows(infos.iter().map(DatabaseInfo::to_table_row).collect());
//!
//! view! { <DataTable columns=DATABASE_COLUMNS.to_vec() model=table /> }
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::notifications::use_notifications;
use contracts::shared::table_view::{
    apply_view, filter_rows, sort_rows, visible_count, SortState, TableRow as RowModel,
    TableViewError,
};
use leptos::prelude::*;
use thaw::*;

/// Rows plus the sort and search currently applied to them.
#[derive(Clone, Copy)]
pub struct TableModel {
    pub rows: RwSignal<Vec<RowModel>>,
    pub sort: RwSignal<SortState>,
    pub search: RwSignal<String>,
}

impl TableModel {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            sort: RwSignal::new(SortState::default()),
            search: RwSignal::new(String::new()),
        }
    }

    /// Replaces the rows, keeping the active search and sort.
    pub fn replace_rows(&self, mut rows: Vec<RowModel>) -> Result<(), TableViewError> {
        let result = apply_view(
            &mut rows,
            self.sort.get_untracked(),
            &self.search.get_untracked(),
        );
        if result.is_err() {
            // rows stay as delivered; the sort no longer fits them
            self.sort.set(SortState::default());
        }
        self.rows.set(rows);
        result
    }

    /// Header click: sorts by `column`, flipping direction on repeated clicks.
    pub fn sort_by(&self, column: usize) -> Result<(), TableViewError> {
        let next = self.sort.get_untracked().clicked(column);
        let mut result = Ok(());
        self.rows.update(|rows| result = sort_rows(rows, column, next.direction));
        if result.is_ok() {
            self.sort.set(next);
        }
        result
    }

    pub fn search(&self, term: String) {
        self.rows.update(|rows| filter_rows(rows, &term));
        self.search.set(term);
    }

    pub fn visible_count(&self) -> usize {
        self.rows.with(|rows| visible_count(rows))
    }

    pub fn total_count(&self) -> usize {
        self.rows.with(|rows| rows.len())
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DataTable(
    /// Заголовки колонок
    columns: Vec<&'static str>,
    model: TableModel,
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let notifications = use_notifications();
    let column_count = columns.len();
    let empty_text = empty_text.unwrap_or_else(|| "No data".to_string());

    let on_search = Callback::new(move |term: String| model.search(term));

    let header_cells = columns
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let handle_click = move |_| {
                if let Err(e) = model.sort_by(index) {
                    notifications.show_error(e.to_string());
                }
            };
            view! {
                <TableHeaderCell>
                    <div class="table__sortable-header" style="cursor: pointer;" on:click=handle_click>
                        {title}
                        <span class=move || get_sort_class(model.sort.get(), index)>
                            {move || get_sort_indicator(model.sort.get(), index)}
                        </span>
                    </div>
                </TableHeaderCell>
            }
        })
        .collect_view();

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput on_change=on_search placeholder="Search in table..." />
                <span class="text-muted">
                    {move || format!("{} / {}", model.visible_count(), model.total_count())}
                </span>
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>{header_cells}</TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = model.rows.get();
                        if rows.is_empty() {
                            let text = empty_text.clone();
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        <TableCellLayout>
                                            <span class="text-muted">{text}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        rows.into_iter()
                            .map(|row| {
                                // hidden rows stay in the DOM, only their display changes
                                let style = if row.visible { "" } else { "display: none;" };
                                view! {
                                    <TableRow attr:style=style>
                                        {row.cells
                                            .into_iter()
                                            .map(|cell| view! {
                                                <TableCell>
                                                    <TableCellLayout>{cell}</TableCellLayout>
                                                </TableCell>
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
