use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::HeaderError;

/// Product sub-brand whose secondary logo sits next to the main logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Fonts,
    Colors,
    GraphicMaker,
    Calendar,
    SpeechMaker,
    DesignsAi,
}

impl Tool {
    pub const ALL: [Self; 6] = [
        Self::Fonts,
        Self::Colors,
        Self::GraphicMaker,
        Self::Calendar,
        Self::SpeechMaker,
        Self::DesignsAi,
    ];

    /// The tag used both on the wire and in asset and link paths.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Fonts => "fonts",
            Self::Colors => "colors",
            Self::GraphicMaker => "graphicmaker",
            Self::Calendar => "calendar",
            Self::SpeechMaker => "speechmaker",
            Self::DesignsAi => "designsai",
        }
    }

    #[must_use]
    pub fn image_url(self, api_base_url: &str) -> String {
        format!("{api_base_url}/utilities/images/{}.png", self.slug())
    }

    #[must_use]
    pub fn link_url(self, origin: &str) -> String {
        format!("{origin}/{}", self.slug())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tool {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.slug() == s)
            .ok_or_else(|| HeaderError::configuration("tools", s))
    }
}
