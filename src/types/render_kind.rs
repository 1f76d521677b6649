use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The structural category of an assistant reply.
///
/// The kind decides which block the reply is rendered into.  The wire names
/// follow the backend's snake_case spelling; camelCase spellings and the
/// backend's `text` alias for plain replies are also accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    /// Free text, rendered verbatim.
    #[serde(alias = "text")]
    Plain,

    /// An ordered list of steps.
    Steps,

    /// Business name suggestions the user can pick from.
    Names,

    /// A prompt to hand to an image generator.
    #[serde(alias = "logoPrompt")]
    LogoPrompt,

    /// A social-media post with a format label and a body.
    #[serde(alias = "socialMedia")]
    SocialMedia,

    /// Independent idea cards.
    Ideas,
}

impl RenderKind {
    /// Every render kind, in declaration order.
    pub const ALL: [RenderKind; 6] = [
        RenderKind::Plain,
        RenderKind::Steps,
        RenderKind::Names,
        RenderKind::LogoPrompt,
        RenderKind::SocialMedia,
        RenderKind::Ideas,
    ];

    /// Returns true if replies of this kind carry a structured payload.
    pub fn has_payload(self) -> bool {
        !matches!(self, RenderKind::Plain)
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderKind::Plain => write!(f, "plain"),
            RenderKind::Steps => write!(f, "steps"),
            RenderKind::Names => write!(f, "names"),
            RenderKind::LogoPrompt => write!(f, "logo_prompt"),
            RenderKind::SocialMedia => write!(f, "social_media"),
            RenderKind::Ideas => write!(f, "ideas"),
        }
    }
}

/// Error returned when parsing an unknown render kind string.
#[derive(Debug)]
pub struct RenderKindParseError {
    /// The value that could not be parsed.
    pub invalid_value: String,
}

impl fmt::Display for RenderKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown render kind: {}", self.invalid_value)
    }
}

impl std::error::Error for RenderKindParseError {}

impl FromStr for RenderKind {
    type Err = RenderKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "text" => Ok(RenderKind::Plain),
            "steps" => Ok(RenderKind::Steps),
            "names" => Ok(RenderKind::Names),
            "logo_prompt" | "logoPrompt" => Ok(RenderKind::LogoPrompt),
            "social_media" | "socialMedia" => Ok(RenderKind::SocialMedia),
            "ideas" => Ok(RenderKind::Ideas),
            _ => Err(RenderKindParseError {
                invalid_value: s.to_string(),
            }),
        }
    }
}
