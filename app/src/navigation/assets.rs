//! Image locations served from the environment's asset host.

use super::{ResolvedUrls, Tool};

/// Every image the header shows, resolved for one environment and tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoSet {
    pub home_href: String,
    pub desktop_logo: String,
    pub mobile_logo: String,
    pub tool_href: String,
    pub tool_logo: String,
}

impl LogoSet {
    #[must_use]
    pub fn new(urls: ResolvedUrls, tool: Tool) -> Self {
        Self {
            home_href: urls.origin.to_owned(),
            desktop_logo: image_url(urls.api_base_url, "logo"),
            mobile_logo: image_url(urls.api_base_url, "logo-mobile"),
            tool_href: tool.link_url(urls.origin),
            tool_logo: tool.image_url(urls.api_base_url),
        }
    }
}

fn image_url(api_base_url: &str, name: &str) -> String {
    format!("{api_base_url}/utilities/images/{name}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Environment;

    #[test]
    fn local_logo_set() {
        let logos = LogoSet::new(Environment::Local.resolve(), Tool::Calendar);
        assert_eq!(
            logos,
            LogoSet {
                home_href: "https://designs-ai.loc".to_owned(),
                desktop_logo: "https://api.designs-ai.loc/utilities/images/logo.png".to_owned(),
                mobile_logo: "https://api.designs-ai.loc/utilities/images/logo-mobile.png"
                    .to_owned(),
                tool_href: "https://designs-ai.loc/calendar".to_owned(),
                tool_logo: "https://api.designs-ai.loc/utilities/images/calendar.png".to_owned(),
            }
        );
    }
}
