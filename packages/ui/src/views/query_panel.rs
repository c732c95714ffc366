//! Query Panel: canned list queries rendered into a read-only table.

use api::{ApiRequest, ListQuery, QueryPreset};
use dioxus::prelude::*;

use super::AlertDialog;
use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::client::{use_client_config, use_user_api};
use crate::query::QueryRunner;
use crate::table::{TableRow, UserTable};

#[component]
pub fn QueryView() -> Element {
    let config = use_client_config();
    let api = use_user_api();
    let mut log = use_activity_log();
    let mut rows = use_signal(Vec::<TableRow>::new);
    let mut alert = use_signal(|| Option::<String>::None);

    let run_query = move |query: ListQuery| {
        rows.set(Vec::new());
        spawn(async move {
            let runner = match api() {
                Ok(api) => QueryRunner::new(api),
                Err(e) => {
                    log_activity(&mut log, LogLevel::Error, &e.to_string());
                    alert.set(Some(e.to_string()));
                    return;
                }
            };
            let target = ApiRequest::list(&query).target();
            let outcome = runner.render(&query).await;
            match outcome.alert {
                Some(message) => {
                    log_activity(&mut log, LogLevel::Error, &format!("{target}: {message}"));
                    alert.set(Some(message));
                }
                None => log_activity(
                    &mut log,
                    LogLevel::Success,
                    &format!("{target}: {}件", outcome.rows.len()),
                ),
            }
            rows.set(outcome.rows);
        });
    };

    let presets = config().queries;

    rsx! {
        section {
            class: "panel query-panel",
            h2 { "ユーザー検索" }

            div {
                class: "query-buttons",
                for (index, preset) in presets.into_iter().enumerate() {
                    PresetButton {
                        key: "{index}",
                        index,
                        preset,
                        on_run: run_query,
                    }
                }
            }

            UserTable {
                id: "result".to_string(),
                rows: rows(),
            }

            if let Some(message) = alert() {
                AlertDialog {
                    message,
                    on_close: move |_| alert.set(None),
                }
            }
        }
    }
}

/// One trigger, numbered `btn1`, `btn2`, ... in preset order.
#[component]
fn PresetButton(
    index: usize,
    preset: QueryPreset,
    on_run: EventHandler<ListQuery>,
) -> Element {
    let number = index + 1;
    let label = preset.label.clone();

    rsx! {
        button {
            id: "btn{number}",
            class: "query-button",
            onclick: move |_| on_run.call(preset.query()),
            "{label}"
        }
    }
}
