mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dialogs;
pub use dialogs::{AlertDialog, ConfirmDialog};

mod registration_panel;
pub use registration_panel::RegistrationView;

mod query_panel;
pub use query_panel::QueryView;
