//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the edit and share pages.

pub mod layout;
pub mod viewer;
