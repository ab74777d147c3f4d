//! Contact information model
//!
//! How buyers reach the seller: phone/WhatsApp numbers, the preferred
//! channel, best-time-to-call tags, and the free-text listing description.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum length of the free-text description, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Preferred contact channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    Phone,
    Whatsapp,
    Both,
}

impl PreferredContact {
    /// Parse preferred contact channel from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "phone" | "call" => Some(Self::Phone),
            "whatsapp" | "wa" => Some(Self::Whatsapp),
            "both" | "any" => Some(Self::Both),
            _ => None,
        }
    }
}

impl fmt::Display for PreferredContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone => write!(f, "Phone"),
            Self::Whatsapp => write!(f, "WhatsApp"),
            Self::Both => write!(f, "Phone or WhatsApp"),
        }
    }
}

/// A best-time-to-call tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallTime {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

impl CallTime {
    /// Parse a call-time tag from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "evening" => Some(Self::Evening),
            "anytime" | "any" => Some(Self::Anytime),
            _ => None,
        }
    }
}

impl fmt::Display for CallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
            Self::Anytime => write!(f, "Anytime"),
        }
    }
}

/// Seller contact information attached to a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    /// Phone number, as entered by the seller
    #[serde(default)]
    pub phone: String,

    /// WhatsApp number, if different from the phone number
    #[serde(default)]
    pub whatsapp: String,

    /// Whether the WhatsApp number is the same as the phone number
    #[serde(default)]
    pub whatsapp_same_as_phone: bool,

    #[serde(default)]
    pub preferred_contact: PreferredContact,

    /// Best times for buyers to call
    #[serde(default)]
    pub call_times: BTreeSet<CallTime>,

    /// Free-text listing description, clamped to `MAX_DESCRIPTION_CHARS`
    #[serde(default)]
    pub description: String,
}

impl ContactInfo {
    /// Apply a partial update. Existing values win over defaults; patch values
    /// win over existing ones. The description is clamped on every write.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(whatsapp) = patch.whatsapp {
            self.whatsapp = whatsapp;
        }
        if let Some(same) = patch.whatsapp_same_as_phone {
            self.whatsapp_same_as_phone = same;
        }
        if let Some(preferred) = patch.preferred_contact {
            self.preferred_contact = preferred;
        }
        if let Some(call_times) = patch.call_times {
            self.call_times = call_times;
        }
        if let Some(description) = patch.description {
            self.description = clamp_description(description);
        }
    }

    /// The number buyers should message on WhatsApp
    pub fn effective_whatsapp(&self) -> &str {
        if self.whatsapp_same_as_phone {
            &self.phone
        } else {
            &self.whatsapp
        }
    }
}

/// Truncate a description to `MAX_DESCRIPTION_CHARS` characters
pub fn clamp_description(description: String) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        description
    } else {
        description.chars().take(MAX_DESCRIPTION_CHARS).collect()
    }
}

/// A partial update to `ContactInfo`; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactPatch {
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub whatsapp_same_as_phone: Option<bool>,
    pub preferred_contact: Option<PreferredContact>,
    pub call_times: Option<BTreeSet<CallTime>>,
    pub description: Option<String>,
}

impl ContactPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_clamped_on_apply() {
        let mut contact = ContactInfo::default();
        contact.apply(ContactPatch {
            description: Some("x".repeat(2000)),
            ..Default::default()
        });
        assert_eq!(contact.description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_short_description_untouched() {
        let mut contact = ContactInfo::default();
        contact.apply(ContactPatch {
            description: Some("Clean title, single owner.".into()),
            ..Default::default()
        });
        assert_eq!(contact.description, "Clean title, single owner.");
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        // Multi-byte characters still clamp to 1000 characters.
        let clamped = clamp_description("é".repeat(1500));
        assert_eq!(clamped.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_effective_whatsapp() {
        let mut contact = ContactInfo {
            phone: "+971501234567".into(),
            whatsapp: "+971559876543".into(),
            ..Default::default()
        };
        assert_eq!(contact.effective_whatsapp(), "+971559876543");

        contact.whatsapp_same_as_phone = true;
        assert_eq!(contact.effective_whatsapp(), "+971501234567");
    }

    #[test]
    fn test_apply_preserves_existing() {
        let mut contact = ContactInfo {
            phone: "+971501234567".into(),
            ..Default::default()
        };
        contact.apply(ContactPatch {
            preferred_contact: Some(PreferredContact::Whatsapp),
            ..Default::default()
        });
        assert_eq!(contact.phone, "+971501234567");
        assert_eq!(contact.preferred_contact, PreferredContact::Whatsapp);
    }

    #[test]
    fn test_call_time_parsing() {
        assert_eq!(CallTime::parse("Evening"), Some(CallTime::Evening));
        assert_eq!(CallTime::parse("any"), Some(CallTime::Anytime));
        assert_eq!(CallTime::parse("midnight"), None);
    }
}
