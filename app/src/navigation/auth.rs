//! Login and logout targets.
//!
//! The header never decides who is signed in. The host hands over an
//! [`AuthContext`] and this module only derives where the login button and
//! logout link point.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/user/login";
pub const LOGOUT_PATH: &str = "/user/logout";

/// Everything outside the RFC 3986 unreserved set.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Whether the visitor is signed in, as decided by the host page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AuthContext {
    Authenticated {
        name: String,
        client: String,
        redirect: String,
    },
    Unauthenticated {
        client: Option<String>,
        redirect: Option<String>,
    },
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::Unauthenticated {
            client: None,
            redirect: None,
        }
    }
}

impl AuthContext {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Name shown in place of the login button.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Authenticated { name, .. } => Some(name),
            Self::Unauthenticated { .. } => None,
        }
    }

    #[must_use]
    pub fn client(&self) -> Option<&str> {
        match self {
            Self::Authenticated { client, .. } => Some(client),
            Self::Unauthenticated { client, .. } => client.as_deref(),
        }
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Authenticated { redirect, .. } => Some(redirect),
            Self::Unauthenticated { redirect, .. } => redirect.as_deref(),
        }
    }
}

/// How `client` and `redirect` are written into the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Values are concatenated as given; the host guarantees they are safe.
    #[default]
    Verbatim,
    /// Everything outside the RFC 3986 unreserved set is percent-encoded.
    Percent,
}

/// Navigation targets for the auth controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthLinks {
    pub login: String,
    /// Only present for signed-in visitors.
    pub logout: Option<String>,
}

/// Builds [`AuthLinks`] against one site origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthAction<'a> {
    origin: &'a str,
    encoding: QueryEncoding,
}

impl<'a> AuthAction<'a> {
    #[must_use]
    pub const fn new(origin: &'a str) -> Self {
        Self {
            origin,
            encoding: QueryEncoding::Verbatim,
        }
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn login_url(&self, client: Option<&str>, redirect: Option<&str>) -> String {
        self.target(LOGIN_PATH, client, redirect)
    }

    #[must_use]
    pub fn logout_url(&self, client: Option<&str>, redirect: Option<&str>) -> String {
        self.target(LOGOUT_PATH, client, redirect)
    }

    #[must_use]
    pub fn links(&self, auth: &AuthContext) -> AuthLinks {
        let (client, redirect) = (auth.client(), auth.redirect());
        AuthLinks {
            login: self.login_url(client, redirect),
            logout: auth
                .is_authenticated()
                .then(|| self.logout_url(client, redirect)),
        }
    }

    // Absent parameters are left out instead of being written as empty values.
    fn target(&self, path: &str, client: Option<&str>, redirect: Option<&str>) -> String {
        let mut url = format!("{}{path}", self.origin);
        let params = [("client", client), ("redirect", redirect)];
        let mut separator = '?';
        for (key, value) in params {
            let Some(value) = value else { continue };
            url.push(separator);
            url.push_str(key);
            url.push('=');
            match self.encoding {
                QueryEncoding::Verbatim => url.push_str(value),
                QueryEncoding::Percent => url.extend(utf8_percent_encode(value, QUERY_VALUE)),
            }
            separator = '&';
        }
        url
    }
}
