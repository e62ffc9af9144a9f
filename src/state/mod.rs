//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `ui`) so components depend
//! on small focused models. `storage` is the persistence seam under
//! `session`.

pub mod session;
pub mod storage;
pub mod toast;
pub mod ui;

/// Session store used by the running application.
pub type AppSession = session::SessionStore<storage::BrowserStorage>;
