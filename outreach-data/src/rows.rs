use serde::{Deserialize, Serialize};

use crate::markdown::is_safe_url;

/// One planned outreach message from `queue-to-send.csv`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OutreachDraftRow {
    pub business_name: Option<String>,
    pub first_name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
}

impl OutreachDraftRow {
    /// A draft is ready once it has a plausible address and a non-blank subject and body.
    pub fn is_ready(&self) -> bool {
        text(&self.email).contains('@')
            && !text(&self.subject).trim().is_empty()
            && !text(&self.body).trim().is_empty()
    }

    pub fn business_name(&self) -> &str {
        text(&self.business_name)
    }

    pub fn first_name(&self) -> &str {
        text(&self.first_name)
    }

    pub fn role(&self) -> &str {
        text(&self.role)
    }

    pub fn email(&self) -> &str {
        text(&self.email)
    }

    pub fn subject(&self) -> &str {
        text(&self.subject)
    }

    pub fn body(&self) -> &str {
        text(&self.body)
    }

    pub fn status(&self) -> &str {
        text(&self.status)
    }

    /// "First, Role" style recipient line; empty when neither is known.
    pub fn recipient(&self) -> String {
        match (self.first_name().trim(), self.role().trim()) {
            ("", "") => String::new(),
            (name, "") => name.to_string(),
            ("", role) => role.to_string(),
            (name, role) => format!("{name}, {role}"),
        }
    }
}

/// One prospect business from the leads CSV.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadRow {
    pub business_name: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub google_maps_url: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl LeadRow {
    pub fn business_name(&self) -> &str {
        text(&self.business_name)
    }

    pub fn city(&self) -> &str {
        text(&self.city)
    }

    /// The maps link, if present and safe to use as an `href`.
    pub fn maps_url(&self) -> Option<&str> {
        self.google_maps_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && is_safe_url(url))
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}
