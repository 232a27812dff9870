//! Reusable view pieces: the navigation header and the parts it is built from,
//! plus the error page used by the preview host.

pub mod burger;
pub mod error_template;
pub mod header;
pub mod icons;
