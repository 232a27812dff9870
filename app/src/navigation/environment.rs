use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::HeaderError;

/// Deployment environment the header is rendered for.
///
/// Hosts that only deploy to development and production simply never pass
/// [`Environment::Local`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Development,
    Production,
}

/// Site origin and asset host for one [`Environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedUrls {
    pub origin: &'static str,
    pub api_base_url: &'static str,
}

impl Environment {
    pub const ALL: [Self; 3] = [Self::Local, Self::Development, Self::Production];

    /// Looks up the origin and asset host. The development environment shares
    /// the local asset host.
    #[must_use]
    pub const fn resolve(self) -> ResolvedUrls {
        match self {
            Self::Local => ResolvedUrls {
                origin: "https://designs-ai.loc",
                api_base_url: "https://api.designs-ai.loc",
            },
            Self::Development => ResolvedUrls {
                origin: "https://dev.designs.ai",
                api_base_url: "https://api.designs-ai.loc",
            },
            Self::Production => ResolvedUrls {
                origin: "https://designs.ai",
                api_base_url: "https://api.designs.ai",
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| HeaderError::configuration("env", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn resolves_fixed_table() {
        let table: Vec<_> = Environment::ALL
            .into_iter()
            .map(|env| (env, env.resolve()))
            .collect();

        assert_eq!(
            table,
            vec![
                (
                    Environment::Local,
                    ResolvedUrls {
                        origin: "https://designs-ai.loc",
                        api_base_url: "https://api.designs-ai.loc",
                    }
                ),
                (
                    Environment::Development,
                    ResolvedUrls {
                        origin: "https://dev.designs.ai",
                        api_base_url: "https://api.designs-ai.loc",
                    }
                ),
                (
                    Environment::Production,
                    ResolvedUrls {
                        origin: "https://designs.ai",
                        api_base_url: "https://api.designs.ai",
                    }
                ),
            ]
        );
    }

    #[test]
    fn parses_lowercase_tags() {
        for env in Environment::ALL {
            assert_eq!(env.as_str().parse::<Environment>(), Ok(env));
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_matches!(
            "staging".parse::<Environment>(),
            Err(HeaderError::Configuration { field: "env", ref value }) if value == "staging"
        );
        assert!("Production".parse::<Environment>().is_err());
    }

    #[test]
    fn deserializes_from_json_tag() {
        let env: Environment = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(env, Environment::Development);
        assert!(serde_json::from_str::<Environment>("\"qa\"").is_err());
    }
}
