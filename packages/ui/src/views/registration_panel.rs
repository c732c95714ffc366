//! Registration Panel: form on top, live record table below.

use dioxus::prelude::*;

use super::ConfirmDialog;
use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::client::use_user_api;
use crate::form::{FormMode, UserForm};
use crate::notice::{Notice, NoticeBanner};
use crate::registration::{on_row_action, PanelUpdate, Registration, RowEffect};
use crate::table::{RowAction, TableRow, UserTable};

const DELETE_PROMPT: &str = "削除してよろしいですか？";

fn apply_update(
    update: PanelUpdate,
    form: &mut Signal<UserForm>,
    notice: &mut Signal<Option<Notice>>,
    rows: &mut Signal<Vec<TableRow>>,
    log: &mut Signal<ActivityLog>,
) {
    let level = if update.notice.is_success() {
        LogLevel::Success
    } else {
        LogLevel::Error
    };
    log_activity(log, level, &update.notice.message);
    update.apply_to(&mut form.write());
    if let Some(fresh) = update.rows {
        rows.set(fresh);
    }
    notice.set(Some(update.notice));
}

/// Create/edit form bound to the user list.
#[component]
pub fn RegistrationView() -> Element {
    let api = use_user_api();
    let mut log = use_activity_log();
    let mut form = use_signal(UserForm::default);
    let mut rows = use_signal(Vec::<TableRow>::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut pending_delete = use_signal(|| Option::<i64>::None);

    // Load the list on mount
    let _loader = use_resource(move || async move {
        let panel = match api() {
            Ok(api) => Registration::new(api),
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &e.to_string());
                notice.set(Some(Notice::failure(e.to_string())));
                return;
            }
        };
        match panel.list().await {
            Ok(fresh) => {
                log_activity(&mut log, LogLevel::Info, &format!("一覧を取得しました ({}件)", fresh.len()));
                rows.set(fresh);
            }
            Err(e) => {
                log_activity(&mut log, LogLevel::Error, &format!("一覧の取得に失敗しました: {e}"));
                notice.set(Some(Notice::failure(format!("一覧の取得に失敗しました: {e}"))));
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let panel = match api() {
                Ok(api) => Registration::new(api),
                Err(e) => {
                    notice.set(Some(Notice::failure(e.to_string())));
                    return;
                }
            };
            let current = form();
            let action = match current.mode {
                FormMode::Create => "登録".to_string(),
                FormMode::Edit(id) => format!("ID {id} を更新"),
            };
            log_activity(&mut log, LogLevel::Info, &format!("{action}を送信しています..."));
            let update = panel.submit(&current).await;
            apply_update(update, &mut form, &mut notice, &mut rows, &mut log);
        });
    };

    let handle_row_action = move |action: RowAction| {
        let effect = on_row_action(&mut form.write(), action);
        match effect {
            RowEffect::Editing(id) => {
                log_activity(&mut log, LogLevel::Info, &format!("ID {id} を編集中"));
            }
            RowEffect::ConfirmDelete(id) => pending_delete.set(Some(id)),
        }
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            let panel = match api() {
                Ok(api) => Registration::new(api),
                Err(e) => {
                    notice.set(Some(Notice::failure(e.to_string())));
                    return;
                }
            };
            log_activity(&mut log, LogLevel::Info, &format!("ID {id} を削除しています..."));
            let update = panel.delete(id).await;
            apply_update(update, &mut form, &mut notice, &mut rows, &mut log);
        });
    };

    let current = form();
    let submit_label = current.mode.submit_label();

    rsx! {
        section {
            class: "panel registration-panel",
            h2 { "ユーザー登録" }

            form {
                id: "registerForm",
                class: "user-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "name", "名前" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: current.name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "email", "メール" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }

                if let FormMode::Edit(id) = current.mode {
                    p { class: "edit-hint", "ID {id} を編集中" }
                }

                button {
                    id: "submitBtn",
                    class: "primary",
                    r#type: "submit",
                    "{submit_label}"
                }
            }

            NoticeBanner { notice: notice() }

            UserTable {
                id: "userTable".to_string(),
                rows: rows(),
                on_action: handle_row_action,
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    message: DELETE_PROMPT.to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
