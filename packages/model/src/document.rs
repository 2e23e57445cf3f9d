//! # Document
//!
//! The résumé being edited: profile scalars plus three ordered collections.
//!
//! Read access is public. Write access is the mutation API in
//! [`crate::mutations`], so every change is classified before any view
//! looks at it.

use crate::collection::Collection;
use crate::entry::{CollectionKind, CustomSection, Education, EntryId, Experience};
use crate::errors::{DocumentError, UnknownName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar profile fields. No identity, overwritten one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
    pub summary: String,
    /// Comma-separated skills text
    pub skills: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Linkedin,
    Location,
    Summary,
    Skills,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::FullName,
        ProfileField::JobTitle,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Linkedin,
        ProfileField::Location,
        ProfileField::Summary,
        ProfileField::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::FullName => "fullName",
            ProfileField::JobTitle => "jobTitle",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Location => "location",
            ProfileField::Summary => "summary",
            ProfileField::Skills => "skills",
        }
    }

    /// Human-readable label for the bound input
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::JobTitle => "Job Title",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Linkedin => "LinkedIn",
            ProfileField::Location => "Location",
            ProfileField::Summary => "Professional Summary",
            ProfileField::Skills => "Skills (comma separated)",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownName::new("profile field", s))
    }
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::JobTitle => &self.job_title,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::Location => &self.location,
            ProfileField::Summary => &self.summary,
            ProfileField::Skills => &self.skills,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::Location => &mut self.location,
            ProfileField::Summary => &mut self.summary,
            ProfileField::Skills => &mut self.skills,
        }
    }
}

/// Editable résumé document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub(crate) profile: Profile,
    pub(crate) experience: Collection<Experience>,
    pub(crate) education: Collection<Education>,
    pub(crate) custom_sections: Collection<CustomSection>,
}

impl Document {
    /// Empty document: blank profile, empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Document a fresh editor starts from
    pub fn seeded() -> Self {
        let experience = vec![
            Experience::new(
                1,
                "Senior Software Engineer",
                "Tech Solutions Inc.",
                "Jan 2020 - Present",
                "Leading a team of 5 developers building cloud-native applications.\n\
                 • optimize API response times by 40%\n\
                 • Implementing CI/CD pipelines.",
            ),
            Experience::new(
                2,
                "Software Developer",
                "Web Corp",
                "Jun 2017 - Dec 2019",
                "Developed full-stack web applications using MERN stack.\n\
                 • Collaborated with UX designers to improve user retention.",
            ),
        ];
        let education = vec![Education::new(
            1,
            "B.Sc. Computer Science",
            "University of Technology",
            "2013 - 2017",
            "Graduated with Honors. Member of the Coding Club.",
        )];

        Self {
            profile: Profile::default(),
            experience: Collection::from_entries(experience).unwrap_or_default(),
            education: Collection::from_entries(education).unwrap_or_default(),
            custom_sections: Collection::new(),
        }
    }

    /// Build a document from parts, rejecting duplicate identities
    pub fn from_parts(
        profile: Profile,
        experience: Vec<Experience>,
        education: Vec<Education>,
        custom_sections: Vec<CustomSection>,
    ) -> Result<Self, DocumentError> {
        Ok(Self {
            profile,
            experience: Collection::from_entries(experience)?,
            education: Collection::from_entries(education)?,
            custom_sections: Collection::from_entries(custom_sections)?,
        })
    }

    /// Load a starting document from JSON
    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        let doc: Document = serde_json::from_str(source)?;
        doc.experience.validate()?;
        doc.education.validate()?;
        doc.custom_sections.validate()?;
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn experience(&self) -> &Collection<Experience> {
        &self.experience
    }

    pub fn education(&self) -> &Collection<Education> {
        &self.education
    }

    pub fn custom_sections(&self) -> &Collection<CustomSection> {
        &self.custom_sections
    }

    pub fn len(&self, collection: CollectionKind) -> usize {
        match collection {
            CollectionKind::Experience => self.experience.len(),
            CollectionKind::Education => self.education.len(),
            CollectionKind::CustomSections => self.custom_sections.len(),
        }
    }

    /// Identities of a collection in stored order
    pub fn ids(&self, collection: CollectionKind) -> Vec<EntryId> {
        match collection {
            CollectionKind::Experience => self.experience.ids(),
            CollectionKind::Education => self.education.ids(),
            CollectionKind::CustomSections => self.custom_sections.ids(),
        }
    }
}
