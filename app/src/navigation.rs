//! Rendering-independent pieces of the navigation header.
//!
//! Everything the header shows is derived from a [`HeaderConfig`] plus the
//! open/closed [`MenuState`]: origins and asset hosts come from the
//! [`Environment`] alone, auth targets from the origin and [`AuthContext`].

mod assets;
mod auth;
mod environment;
mod error;
mod input;
mod menu;
mod social;
mod tool;

pub use assets::LogoSet;
pub use auth::{AuthAction, AuthContext, AuthLinks, LOGIN_PATH, LOGOUT_PATH, QueryEncoding};
pub use environment::{Environment, ResolvedUrls};
pub use error::HeaderError;
pub use input::{DEFAULT_ENV, DEFAULT_TOOLS, HeaderConfig, HeaderInput};
pub use menu::{BarPosition, BurgerTone, MenuController, MenuEffects, MenuState};
pub use social::{EXTERNAL_REL, EXTERNAL_TARGET, IconKind, SOCIAL_LINKS, SocialLink};
pub use tool::Tool;
