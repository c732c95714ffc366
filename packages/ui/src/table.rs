//! Record table shared by both panels.

use api::UserRecord;
use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaPen, FaTrash};

/// One rendered row: the record id plus the three displayed cells.
///
/// Rows are rebuilt from scratch on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    /// `[id, name, email]` as shown
    pub cells: [String; 3],
}

impl TableRow {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            cells: [user.id.to_string(), user.name.clone(), user.email.clone()],
        }
    }

    pub fn name(&self) -> &str {
        &self.cells[1]
    }

    pub fn email(&self) -> &str {
        &self.cells[2]
    }

    /// Value of the `data-id` attribute on the row's controls.
    pub fn data_id(&self) -> String {
        self.id.to_string()
    }
}

/// Replace-all conversion from a fetched list.
pub fn table_rows(users: &[UserRecord]) -> Vec<TableRow> {
    users.iter().map(TableRow::from_record).collect()
}

/// Click on a row control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(TableRow),
    Delete(i64),
}

/// Table of records. Edit/delete controls are shown only with `on_action`.
#[component]
pub fn UserTable(
    rows: Vec<TableRow>,
    on_action: Option<EventHandler<RowAction>>,
    #[props(default = "user-table".to_string())] id: String,
) -> Element {
    let with_actions = on_action.is_some();

    rsx! {
        table {
            id: "{id}",
            class: "user-table",
            thead {
                tr {
                    th { "ID" }
                    th { "名前" }
                    th { "メール" }
                    if with_actions {
                        th { "操作" }
                    }
                }
            }
            tbody {
                for row in rows {
                    UserTableRow {
                        key: "{row.id}",
                        row: row.clone(),
                        on_action: on_action,
                    }
                }
            }
        }
    }
}

#[component]
fn UserTableRow(row: TableRow, on_action: Option<EventHandler<RowAction>>) -> Element {
    let data_id = row.data_id();
    let [id_cell, name, email] = row.cells.clone();
    let delete_id = row.id;

    rsx! {
        tr {
            td { "{id_cell}" }
            td { "{name}" }
            td { "{email}" }
            if let Some(handler) = on_action {
                td {
                    class: "row-actions",
                    button {
                        class: "edit",
                        "data-id": "{data_id}",
                        onclick: move |_| handler.call(RowAction::Edit(row.clone())),
                        Icon { icon: FaPen, width: 12, height: 12 }
                        " 編集"
                    }
                    button {
                        class: "delete",
                        "data-id": "{data_id}",
                        onclick: move |_| handler.call(RowAction::Delete(delete_id)),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        " 削除"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_one_row_per_record() {
        let users = vec![
            user(1, "太郎", "a@x.com"),
            user(2, "花子", "h@x.com"),
            user(3, "次郎", "j@x.com"),
        ];
        let rows = table_rows(&users);
        assert_eq!(rows.len(), users.len());
        for (row, user) in rows.iter().zip(&users) {
            assert_eq!(row.cells[0], user.id.to_string());
            assert_eq!(row.cells[1], user.name);
            assert_eq!(row.cells[2], user.email);
        }
    }

    #[test]
    fn test_row_tagged_with_record_id() {
        let rows = table_rows(&[user(1, "太郎", "a@x.com")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].data_id(), "1");
        assert_eq!(rows[0].cells, ["1".to_string(), "太郎".to_string(), "a@x.com".to_string()]);
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        assert!(table_rows(&[]).is_empty());
    }
}
