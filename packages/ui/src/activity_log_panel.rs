//! Floating view over the [`ActivityLog`](crate::ActivityLog) and its navbar
//! toggle.

use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let state = log();
    if !state.visible {
        return rsx! {};
    }

    let shown = state.shown();
    let errors_only = state.errors_only;
    let empty_text = if errors_only {
        "エラーはありません"
    } else {
        "ログはありません"
    };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                h3 { "通信ログ" }
                label {
                    class: "activity-log-filter",
                    input {
                        r#type: "checkbox",
                        checked: errors_only,
                        onchange: move |evt: FormEvent| log.write().errors_only = evt.checked(),
                    }
                    "エラーのみ"
                }
                button { onclick: move |_| log.write().clear(), "クリア" }
                button { onclick: move |_| log.write().visible = false, "閉じる" }
            }
            ol {
                class: "activity-log-entries",
                if shown.is_empty() {
                    li { class: "activity-log-empty", "{empty_text}" }
                }
                for (index, entry) in shown.into_iter().enumerate() {
                    LogEntryRow { key: "{index}", entry }
                }
            }
        }
    }
}

#[component]
fn LogEntryRow(entry: LogEntry) -> Element {
    let class = entry.level.css_class();

    rsx! {
        li {
            class: "activity-log-entry {class}",
            time { class: "activity-log-time", "{entry.timestamp}" }
            span { class: "activity-log-message", "{entry.message}" }
        }
    }
}

/// Navbar button; turns red once a call has failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let state = log();
    let badge = state.badge();
    let class = if state.error_count() > 0 {
        "activity-log-toggle has-errors"
    } else {
        "activity-log-toggle"
    };

    rsx! {
        button {
            class,
            title: "通信ログ",
            onclick: move |_| {
                let mut state = log.write();
                state.visible = !state.visible;
            },
            "{badge}"
        }
    }
}
