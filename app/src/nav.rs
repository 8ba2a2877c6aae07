//! Presentation-state core of the site navigation.
//!
//! Everything in here is plain Rust with no reactive types, so the header and
//! side panel components only wire browser events into these functions and
//! read back the flags they produce.

pub mod links;
pub mod lock;
pub mod menu;
pub mod scroll;
pub mod social;
pub mod support;

pub use links::{NAV_ITEMS, NavItem};
pub use lock::{BodyScroll, ScrollGuard, ScrollLock, ScrollLockError, ScrollSurface};
pub use menu::{Menu, MenuState};
pub use scroll::ScrollState;
pub use social::{
    Icon, Platform, SocialLink, deserialize_social_links, resolve_icon, sort_social_links,
};
pub use support::{DEFAULT_SUPPORT_PHONE, SettingData, SettingEntry, resolve_phone};
