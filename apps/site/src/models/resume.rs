//! Resume document model — the externally supplied JSON record the page renders.
//!
//! Every field is optional: absence is normal, not an error. The document is
//! read-only once loaded; the binder defaults missing values at read time and
//! never writes back.

use serde::{Deserialize, Serialize};

/// Top-level resume document. Matches the shape served by `GET /api/db` and
/// the bundled `data/resume.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: Option<Personal>,
    pub skills: Option<Vec<Skill>>,
    pub education: Option<Vec<TimelineEntry>>,
    pub experience: Option<Vec<TimelineEntry>>,
    pub achievements: Option<Vec<Achievement>>,
    pub certificates: Option<Vec<Certificate>>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    /// Avatar image URI.
    pub avatar: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub label: Option<String>,
    pub value: Option<String>,
    /// Outbound link; a contact without one renders as plain text.
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: Option<String>,
    /// Proficiency as supplied. Read through `clamped_level`.
    pub level: Option<f64>,
}

impl Skill {
    /// Level clamped into [0, 100]; a missing level reads as 0.
    pub fn clamped_level(&self) -> f64 {
        self.level.unwrap_or(0.0).clamp(0.0, 100.0)
    }
}

/// One education or experience entry. The data uses `institution` for
/// education rows and `company`/`project` for experience rows; `heading`
/// picks whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub institution: Option<String>,
    pub company: Option<String>,
    pub project: Option<String>,
    pub degree: Option<String>,
    pub role: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

impl TimelineEntry {
    /// First non-empty of institution / company / project.
    pub fn heading(&self) -> &str {
        first_non_empty(&[&self.institution, &self.company, &self.project])
    }

    /// Degree or role, whichever is present.
    pub fn subtitle(&self) -> &str {
        first_non_empty(&[&self.degree, &self.role])
    }

    /// `"{start} - {end}"`, with a missing or empty end reading as "Present".
    pub fn period(&self) -> String {
        let start = self.start.as_deref().unwrap_or("");
        let end = self
            .end
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Present");
        format!("{start} - {end}")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

fn first_non_empty<'a>(fields: &[&'a Option<String>]) -> &'a str {
    fields
        .iter()
        .filter_map(|f| f.as_deref())
        .find(|s| !s.is_empty())
        .unwrap_or("")
}
