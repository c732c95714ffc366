//! Registration form state.
//!
//! The form is a plain value: its two fields plus the [`FormMode`] that decides
//! whether the next submit creates or updates. Handlers receive it explicitly
//! and hand it back changed; nothing else holds the mode.

use api::UserPayload;

use crate::table::TableRow;

/// Create vs edit intent for the next submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    /// Id of the record being edited.
    pub fn edit_id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "登録",
            FormMode::Edit(_) => "更新",
        }
    }
}

/// Contents of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub mode: FormMode,
}

impl UserForm {
    /// Payload with both fields trimmed.
    pub fn payload(&self) -> UserPayload {
        UserPayload::new(&self.name, &self.email)
    }

    /// Copy a row's displayed name and email into the form and switch to edit.
    pub fn begin_edit(&mut self, row: &TableRow) {
        self.name = row.name().to_string();
        self.email = row.email().to_string();
        self.mode = FormMode::Edit(row.id);
    }

    /// Clear both fields and go back to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
