//! Host-facing parameters and their validation.

use serde::{Deserialize, Serialize};

use super::{
    AuthAction, AuthContext, AuthLinks, Environment, HeaderError, LogoSet, QueryEncoding,
    ResolvedUrls, Tool,
};

/// Parameters exactly as the host page supplies them.
///
/// Deserializes from a query string or JSON object; `isLogin` is accepted as
/// an alias of `is_login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInput {
    pub env: String,
    pub tools: String,
    #[serde(default)]
    pub authentication: bool,
    #[serde(default, alias = "isLogin")]
    pub is_login: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub encoding: QueryEncoding,
}

/// A validated header configuration. Only obtainable through
/// [`HeaderInput::validate`] or [`HeaderConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderConfig {
    env: Environment,
    tool: Tool,
    auth: AuthContext,
    encoding: QueryEncoding,
}

/// Defaults used by the preview page when a query parameter is absent.
pub const DEFAULT_ENV: &str = "production";
pub const DEFAULT_TOOLS: &str = "designsai";

impl HeaderInput {
    /// Reads the parameters from a key lookup such as a URL query map.
    ///
    /// Missing `env`/`tools` fall back to [`DEFAULT_ENV`]/[`DEFAULT_TOOLS`].
    /// Flags accept `true`/`1` and `false`/`0`; anything else counts as absent.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| match get(key).as_deref() {
            Some("true" | "1") => Some(true),
            Some("false" | "0") => Some(false),
            _ => None,
        };
        Self {
            env: get("env").unwrap_or_else(|| DEFAULT_ENV.to_owned()),
            tools: get("tools").unwrap_or_else(|| DEFAULT_TOOLS.to_owned()),
            authentication: flag("authentication").unwrap_or(false),
            is_login: flag("is_login").or_else(|| flag("isLogin")),
            name: get("name"),
            client: get("client"),
            redirect: get("redirect"),
            encoding: match get("encoding").as_deref() {
                Some("percent") => QueryEncoding::Percent,
                _ => QueryEncoding::Verbatim,
            },
        }
    }

    /// Checks the closed sets and the fields `authentication` depends on.
    ///
    /// # Errors
    ///
    /// [`HeaderError::Configuration`] for an unknown `env` or `tools`, and
    /// [`HeaderError::MissingAuthFields`] when `authentication` is set but
    /// `is_login`, `name`, `client` or `redirect` is absent or empty.
    pub fn validate(&self) -> Result<HeaderConfig, HeaderError> {
        let env = self.env.parse::<Environment>()?;
        let tool = self.tools.parse::<Tool>()?;

        let auth = if self.authentication {
            self.authenticated()?
        } else {
            AuthContext::Unauthenticated {
                client: self.client.clone(),
                redirect: self.redirect.clone(),
            }
        };

        let config = HeaderConfig::new(env, tool, auth).with_encoding(self.encoding);
        tracing::debug!(
            %env,
            %tool,
            authenticated = config.auth.is_authenticated(),
            "header configured"
        );
        Ok(config)
    }

    fn authenticated(&self) -> Result<AuthContext, HeaderError> {
        let name = present(self.name.as_deref());
        let client = present(self.client.as_deref());
        let redirect = present(self.redirect.as_deref());

        let missing: Vec<&'static str> = [
            ("is_login", self.is_login.is_none()),
            ("name", name.is_none()),
            ("client", client.is_none()),
            ("redirect", redirect.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (self.is_login, name, client, redirect) {
            (Some(true), Some(name), Some(client), Some(redirect)) => {
                Ok(AuthContext::Authenticated {
                    name: name.to_owned(),
                    client: client.to_owned(),
                    redirect: redirect.to_owned(),
                })
            }
            // Signed-in capable host whose visitor has not logged in yet.
            (Some(false), Some(_), Some(client), Some(redirect)) => {
                Ok(AuthContext::Unauthenticated {
                    client: Some(client.to_owned()),
                    redirect: Some(redirect.to_owned()),
                })
            }
            _ => {
                tracing::warn!(?missing, "header authentication fields missing");
                Err(HeaderError::MissingAuthFields { missing })
            }
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl HeaderConfig {
    #[must_use]
    pub const fn new(env: Environment, tool: Tool, auth: AuthContext) -> Self {
        Self {
            env,
            tool,
            auth,
            encoding: QueryEncoding::Verbatim,
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub const fn env(&self) -> Environment {
        self.env
    }

    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Depends on the environment alone.
    #[must_use]
    pub const fn urls(&self) -> ResolvedUrls {
        self.env.resolve()
    }

    #[must_use]
    pub fn logos(&self) -> LogoSet {
        LogoSet::new(self.urls(), self.tool)
    }

    #[must_use]
    pub fn auth_links(&self) -> AuthLinks {
        AuthAction::new(self.urls().origin)
            .with_encoding(self.encoding)
            .links(&self.auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn input(authentication: bool) -> HeaderInput {
        HeaderInput {
            env: "production".to_owned(),
            tools: "fonts".to_owned(),
            authentication,
            is_login: Some(true),
            name: Some("Ada".to_owned()),
            client: Some("abc".to_owned()),
            redirect: Some("https://designs.ai/fonts".to_owned()),
            encoding: QueryEncoding::Verbatim,
        }
    }

    #[test]
    fn authenticated_input_builds_authenticated_context() {
        let config = input(true).validate().unwrap();
        assert_eq!(config.env(), Environment::Production);
        assert_eq!(config.tool(), Tool::Fonts);
        assert_eq!(config.auth().display_name(), Some("Ada"));
        assert_eq!(
            config.auth_links().logout.as_deref(),
            Some("https://designs.ai/user/logout?client=abc&redirect=https://designs.ai/fonts")
        );
    }

    #[test]
    fn unauthenticated_input_never_has_logout() {
        let config = input(false).validate().unwrap();
        assert!(!config.auth().is_authenticated());
        assert_eq!(config.auth().display_name(), None);
        assert_eq!(config.auth_links().logout, None);
        assert_eq!(
            config.auth_links().login,
            "https://designs.ai/user/login?client=abc&redirect=https://designs.ai/fonts"
        );
    }

    #[test]
    fn not_logged_in_yet_keeps_login_target() {
        let mut raw = input(true);
        raw.is_login = Some(false);
        let config = raw.validate().unwrap();
        assert_eq!(
            config.auth(),
            &AuthContext::Unauthenticated {
                client: Some("abc".to_owned()),
                redirect: Some("https://designs.ai/fonts".to_owned()),
            }
        );
    }

    #[test]
    fn missing_auth_fields_are_all_reported() {
        let mut raw = input(true);
        raw.name = None;
        raw.redirect = Some(String::new());
        raw.is_login = None;
        assert_eq!(
            raw.validate(),
            Err(HeaderError::MissingAuthFields {
                missing: vec!["is_login", "name", "redirect"],
            })
        );
    }

    #[test]
    fn unknown_env_fails_before_auth_checks() {
        let mut raw = input(true);
        raw.env = "staging".to_owned();
        raw.client = None;
        assert_matches!(
            raw.validate(),
            Err(HeaderError::Configuration { field: "env", .. })
        );
    }

    #[test]
    fn unknown_tool_fails() {
        let mut raw = input(false);
        raw.tools = "Fonts".to_owned();
        assert_matches!(
            raw.validate(),
            Err(HeaderError::Configuration { field: "tools", .. })
        );
    }

    #[test]
    fn reads_query_lookup_with_defaults() {
        let query: std::collections::HashMap<&str, &str> = [
            ("authentication", "1"),
            ("isLogin", "true"),
            ("name", "Ada"),
            ("client", "abc"),
            ("redirect", "/fonts"),
        ]
        .into_iter()
        .collect();
        let raw = HeaderInput::from_query(|key| query.get(key).map(|v| (*v).to_owned()));
        assert_eq!(raw.env, DEFAULT_ENV);
        assert_eq!(raw.tools, DEFAULT_TOOLS);
        assert!(raw.authentication);
        assert_eq!(raw.is_login, Some(true));
        assert_eq!(raw.validate().unwrap().tool(), Tool::DesignsAi);
    }

    #[test]
    fn unparseable_login_flag_counts_as_missing() {
        let query: std::collections::HashMap<&str, &str> = [
            ("env", "development"),
            ("tools", "calendar"),
            ("authentication", "true"),
            ("is_login", "yes"),
            ("name", "Ada"),
            ("client", "abc"),
            ("redirect", "/calendar"),
        ]
        .into_iter()
        .collect();
        let raw = HeaderInput::from_query(|key| query.get(key).map(|v| (*v).to_owned()));
        assert_eq!(
            raw.validate(),
            Err(HeaderError::MissingAuthFields {
                missing: vec!["is_login"],
            })
        );
    }

    #[test]
    fn deserializes_camel_case_login_flag() {
        let raw: HeaderInput = serde_json::from_str(
            r#"{"env":"local","tools":"colors","authentication":true,"isLogin":true,"name":"Ada","client":"c","redirect":"r"}"#,
        )
        .unwrap();
        assert_eq!(raw.is_login, Some(true));
        let config = raw.validate().unwrap();
        assert_eq!(config.urls().origin, "https://designs-ai.loc");
        assert_eq!(
            config.logos().tool_logo,
            "https://api.designs-ai.loc/utilities/images/colors.png"
        );
    }

    #[test]
    fn percent_encoding_flows_into_links() {
        let mut raw = input(false);
        raw.encoding = QueryEncoding::Percent;
        let config = raw.validate().unwrap();
        assert_eq!(
            config.auth_links().login,
            "https://designs.ai/user/login?client=abc&redirect=https%3A%2F%2Fdesigns.ai%2Ffonts"
        );
    }
}
