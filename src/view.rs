//! View model of the viewer page.
//!
//! Query parameters select the presentation mode and the reference to load;
//! [`ViewState`] tracks one view through `idle → loading → result` and
//! [`share_url`] builds the read-only link handed out after a successful load.

mod query;
mod share;
mod state;

pub use query::{ViewMode, ViewQuery};
pub use share::{encode_uri_component, share_url};
pub use state::{Generation, ViewState};
