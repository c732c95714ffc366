//! Registration Panel flow: list, submit, row actions.
//!
//! [`Registration`] owns no UI state. Each operation reads the [`UserForm`] as
//! it was when the user acted and returns a [`PanelUpdate`] describing what the
//! view should change, so the create/edit state machine can be driven and
//! checked without a renderer. The live form is only touched through
//! [`PanelUpdate::apply_to`], which never writes back a stale copy:
//!
//! ```text
//! Create --(edit click)--> Edit(id) --(submit or delete completes)--> Create
//! ```

use api::{ApiError, ListQuery, Transport, UserApi};

use crate::form::{FormMode, UserForm};
use crate::notice::Notice;
use crate::table::{table_rows, RowAction, TableRow};

/// Outcome of a mutation as the view should apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelUpdate {
    pub notice: Notice,
    /// Fresh table contents. `None` when the list was not (or could not be)
    /// refetched; the table then stays as it is.
    pub rows: Option<Vec<TableRow>>,
    /// The server answered, so the form goes back to an empty create form.
    pub reset_form: bool,
}

impl PanelUpdate {
    fn answered(notice: Notice, rows: Option<Vec<TableRow>>) -> Self {
        Self {
            notice,
            rows,
            reset_form: true,
        }
    }

    fn unreachable(e: &ApiError) -> Self {
        Self {
            notice: Notice::failure(format!("通信エラー: {e}")),
            rows: None,
            reset_form: false,
        }
    }

    /// Apply the form side of the update to the form as it is now.
    ///
    /// Edits made while the request was in flight survive a failed request.
    pub fn apply_to(&self, form: &mut UserForm) {
        if self.reset_form {
            form.reset();
        }
    }
}

/// What a row click asks of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEffect {
    /// The form now edits this record.
    Editing(i64),
    /// Ask the user before deleting this record.
    ConfirmDelete(i64),
}

/// Apply a row click to the form.
///
/// Edit copies the row into the form right away; delete only requests
/// confirmation and leaves the form untouched.
pub fn on_row_action(form: &mut UserForm, action: RowAction) -> RowEffect {
    match action {
        RowAction::Edit(row) => {
            form.begin_edit(&row);
            RowEffect::Editing(row.id)
        }
        RowAction::Delete(id) => RowEffect::ConfirmDelete(id),
    }
}

pub struct Registration<T> {
    api: UserApi<T>,
}

impl<T: Transport> Registration<T> {
    pub fn new(api: UserApi<T>) -> Self {
        Self { api }
    }

    /// Fetch the full record set as table rows.
    pub async fn list(&self) -> Result<Vec<TableRow>, ApiError> {
        let users = self.api.list(&ListQuery::all()).await?;
        Ok(table_rows(&users))
    }

    /// Create or update depending on the form mode.
    ///
    /// Once the server has answered, whatever the status, the update asks for
    /// the form to be cleared back to create mode and carries the refetched
    /// list. If the request never reached the server nothing is reset.
    pub async fn submit(&self, form: &UserForm) -> PanelUpdate {
        let payload = form.payload();
        let result = match form.mode {
            FormMode::Edit(id) => self.api.update(id, payload).await,
            FormMode::Create => self.api.register(payload).await,
        };

        match result {
            Ok(outcome) => {
                let notice = Notice::from_outcome(&outcome);
                PanelUpdate::answered(notice, self.refresh().await)
            }
            Err(e) => {
                tracing::warn!("submit failed: {}", e);
                PanelUpdate::unreachable(&e)
            }
        }
    }

    /// Delete a confirmed record; on an answer, reset the form and refetch.
    pub async fn delete(&self, id: i64) -> PanelUpdate {
        match self.api.delete(id).await {
            Ok(outcome) => {
                let notice = Notice::from_outcome(&outcome);
                PanelUpdate::answered(notice, self.refresh().await)
            }
            Err(e) => {
                tracing::warn!("delete {} failed: {}", id, e);
                PanelUpdate::unreachable(&e)
            }
        }
    }

    async fn refresh(&self) -> Option<Vec<TableRow>> {
        match self.list().await {
            Ok(rows) => Some(rows),
            Err(e) => {
                tracing::warn!("list refresh failed: {}", e);
                None
            }
        }
    }
}
