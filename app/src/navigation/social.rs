use icondata::Icon;

/// Social network shown in the mobile panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    YouTube,
}

impl IconKind {
    #[must_use]
    pub fn glyph(self) -> Icon {
        match self {
            Self::Facebook => icondata::FaFacebookFBrands,
            Self::Instagram => icondata::FaInstagramBrands,
            Self::Twitter => icondata::FaTwitterBrands,
            Self::LinkedIn => icondata::FaLinkedinBrands,
            Self::YouTube => icondata::FaYoutubeBrands,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::YouTube => "YouTube",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub url: &'static str,
}

/// Opened in a new browsing context that cannot reach back to this page.
pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        icon: IconKind::Facebook,
        url: "https://facebook.com/DesignsdotAIOfficial",
    },
    SocialLink {
        icon: IconKind::Instagram,
        url: "https://www.instagram.com/DesignsdotAI/",
    },
    SocialLink {
        icon: IconKind::Twitter,
        url: "https://twitter.com/DesignsdotAI",
    },
    SocialLink {
        icon: IconKind::LinkedIn,
        url: "https://www.linkedin.com/company/designs-ai/",
    },
    SocialLink {
        icon: IconKind::YouTube,
        url: "https://www.youtube.com/channel/UCHlJ9ySy3e7gQRQKaa4SUHA/",
    },
];
