//! This crate contains all shared UI for the workspace: the Registration and
//! Query panels, the record table, and the activity log.
//!
//! Panel logic lives in plain structs ([`Registration`], [`QueryRunner`]) that
//! are generic over [`api::Transport`]; the components in [`views`] only wire
//! them to signals.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_api, use_client_config, use_user_api, ApiClient, ClientProvider};

pub mod form;
pub use form::{FormMode, UserForm};

pub mod table;
pub use table::{table_rows, RowAction, TableRow, UserTable};

pub mod notice;
pub use notice::{Notice, NoticeBanner, Tone};

pub mod registration;
pub use registration::{on_row_action, PanelUpdate, Registration, RowEffect};

pub mod query;
pub use query::{QueryOutcome, QueryRunner};

pub mod views;

pub const PANELS_CSS: Asset = asset!("/assets/styling/panels.css");

mod navbar;
pub use navbar::Navbar;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
