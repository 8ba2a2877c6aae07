//! Layout components shared by every page.
//!
//! `navbar` is the fixed header and side panel; `support_modal` is the dialog it
//! opens; `icons` renders glyphs and the social link row; `footer` and
//! `error_template` complete the page frame. `listeners` holds window event
//! plumbing the components share.

pub mod error_template;
pub mod footer;
pub mod icons;
pub mod listeners;
pub mod navbar;
pub mod support_modal;
