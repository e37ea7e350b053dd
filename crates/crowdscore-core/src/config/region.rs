use strum::{Display, EnumString};

/// Falcon cloud region the API client talks to.
///
/// `Auto` starts at the US-1 endpoint and follows the region reported by the
/// token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[default]
    #[strum(to_string = "auto")]
    Auto,
    #[strum(to_string = "us1", serialize = "us-1")]
    Us1,
    #[strum(to_string = "us2", serialize = "us-2")]
    Us2,
    #[strum(to_string = "eu1", serialize = "eu-1")]
    Eu1,
    #[strum(to_string = "usgov1", serialize = "us-gov-1")]
    UsGov1,
}

impl Region {
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Auto | Region::Us1 => "https://api.crowdstrike.com",
            Region::Us2 => "https://api.us-2.crowdstrike.com",
            Region::Eu1 => "https://api.eu-1.crowdstrike.com",
            Region::UsGov1 => "https://api.laggar.gcw.crowdstrike.com",
        }
    }

    /// Map the value of the `X-Cs-Region` response header to a region.
    pub fn from_region_header(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "us-1" => Some(Region::Us1),
            "us-2" => Some(Region::Us2),
            "eu-1" => Some(Region::Eu1),
            "us-gov-1" => Some(Region::UsGov1),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Region::Auto)
    }
}
