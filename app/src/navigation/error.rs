use thiserror::Error;

/// Errors raised while turning host-supplied parameters into a header
/// configuration. Both variants are construction-time failures: a header is
/// never rendered from a partially valid input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// An `env` or `tools` value outside its closed set.
    #[error("invalid {field} value `{value}`")]
    Configuration { field: &'static str, value: String },

    /// `authentication` was requested but some of the fields it needs are absent.
    #[error("authentication requires {}", missing.join(", "))]
    MissingAuthFields { missing: Vec<&'static str> },
}

impl HeaderError {
    pub(crate) fn configuration(field: &'static str, value: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_names_field_and_value() {
        let err = HeaderError::configuration("env", "staging");
        assert_eq!(err.to_string(), "invalid env value `staging`");
    }

    #[test]
    fn missing_fields_message_lists_every_field() {
        let err = HeaderError::MissingAuthFields {
            missing: vec!["name", "redirect"],
        };
        assert_eq!(err.to_string(), "authentication requires name, redirect");
    }
}
