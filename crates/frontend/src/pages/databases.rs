use crate::shared::api_utils::{fetch_database_info, fetch_database_names, ApiError};
use crate::shared::components::code_block::CodeBlock;
use crate::shared::components::data_table::{DataTable, TableModel};
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::AppConfig;
use crate::shared::confirm::confirm_action;
use crate::shared::export::{export_to_json, import_from_json};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::stats_modal::StatsButton;
use contracts::shared::database::{DatabaseInfo, DATABASE_COLUMNS};
use contracts::shared::format::format_json;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

/// Names first, then details one by one. A database whose details fail to
/// load still gets a row.
async fn load_databases(config: &AppConfig) -> Result<Vec<DatabaseInfo>, ApiError> {
    let names = fetch_database_names(config).await?;
    let mut infos = Vec::with_capacity(names.len());
    for name in names {
        match fetch_database_info(config, &name).await {
            Ok(info) => infos.push(info),
            Err(e) => {
                log::warn!("details for database '{}' unavailable: {}", name, e);
                infos.push(DatabaseInfo::unavailable(&name));
            }
        }
    }
    Ok(infos)
}

#[component]
pub fn DatabasesPage() -> impl IntoView {
    let config = StoredValue::new(use_context::<AppConfig>().unwrap_or_default());
    let notifications = use_notifications();

    let table = TableModel::new();
    let databases = RwSignal::new(Vec::<DatabaseInfo>::new());
    let is_loading = RwSignal::new(false);
    let loaded_at = RwSignal::new(None::<String>);
    let imported = RwSignal::new(None::<Value>);

    let load = move || {
        if is_loading.get_untracked() {
            return;
        }
        is_loading.set(true);
        let config = config.get_value();
        spawn_local(async move {
            match load_databases(&config).await {
                Ok(infos) => {
                    log::info!("loaded {} databases", infos.len());
                    let rows = infos.iter().map(DatabaseInfo::to_table_row).collect();
                    if let Err(e) = table.replace_rows(rows) {
                        notifications.show_error(e.to_string());
                    }
                    databases.set(infos);
                    loaded_at.set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
                }
                Err(e) => notifications.notify(e.to_notification()),
            }
            is_loading.set(false);
        });
    };

    // Initial load (once)
    Effect::new(move |_| load());

    let handle_export = move |_| {
        let filename = config.with_value(|c| c.export_filename.clone());
        let result = databases.with_untracked(|data| export_to_json(data, Some(filename.as_str())));
        if let Err(e) = result {
            notifications.show_error(format!("Export failed: {}", e));
        }
    };

    let handle_import = move |_| {
        import_from_json(
            Callback::new(move |value: Value| imported.set(Some(value))),
            notifications,
        );
    };

    let handle_clear_import = move |_| {
        confirm_action("Discard the imported data?", move || imported.set(None));
    };

    let imported_text = Signal::derive(move || {
        imported.with(|value| {
            value
                .as_ref()
                .and_then(|v| format_json(v).ok())
                .unwrap_or_default()
        })
    });

    let subtitle = Signal::derive(move || {
        loaded_at
            .get()
            .map(|time| format!("{} databases, updated at {}", databases.with(|d| d.len()), time))
    });

    view! {
        <div class="page">
            <PageHeader title="Databases" icon_name="database" subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon("refresh")}
                    {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                <StatsButton />
                <Button appearance=ButtonAppearance::Secondary on_click=handle_export>
                    {icon("download")}
                    " Export JSON"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_import>
                    {icon("upload")}
                    " Import JSON"
                </Button>
            </PageHeader>

            <div class="page-content">
                <DataTable
                    columns=DATABASE_COLUMNS.to_vec()
                    model=table
                    empty_text="No databases"
                />
            </div>

            {move || imported.with(|v| v.is_some()).then(|| view! {
                <div class="page-content imported-preview">
                    <div class="imported-preview__header">
                        <h2 class="imported-preview__title">"Imported file"</h2>
                        <Button appearance=ButtonAppearance::Subtle on_click=handle_clear_import>
                            {icon("x")}
                            " Discard"
                        </Button>
                    </div>
                    <CodeBlock code=imported_text />
                </div>
            })}
        </div>
    }
}
