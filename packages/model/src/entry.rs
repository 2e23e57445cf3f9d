//! Repeatable entries and their typed fields.

use crate::errors::UnknownName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of an entry, unique within its own collection only
pub type EntryId = u32;

/// Icon token given to new custom sections
pub const DEFAULT_ICON: &str = "fa-solid fa-layer-group";

/// Title given to new custom sections
pub const NEW_SECTION_TITLE: &str = "New Section";

/// Icon tokens offered by the custom-section selector, with their labels
pub const ICON_OPTIONS: &[(&str, &str)] = &[
    (DEFAULT_ICON, "Default"),
    ("fa-solid fa-language", "Language"),
    ("fa-solid fa-certificate", "Certificate"),
    ("fa-solid fa-award", "Award"),
    ("fa-solid fa-diagram-project", "Project"),
    ("fa-solid fa-code", "Code"),
];

/// The three repeatable collections of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Experience,
    Education,
    CustomSections,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Experience,
        CollectionKind::Education,
        CollectionKind::CustomSections,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Experience => "experience",
            CollectionKind::Education => "education",
            CollectionKind::CustomSections => "customSections",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownName::new("collection", s))
    }
}

/// Common behaviour of experience, education and custom-section entries
pub trait Entry: Clone + fmt::Debug {
    type Field: Copy + fmt::Debug;

    /// Collection this entry type lives in
    const KIND: CollectionKind;

    /// New entry with variant defaults
    fn blank(id: EntryId) -> Self;

    fn id(&self) -> EntryId;

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// True when every identifying field is empty
    fn is_unidentified(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Experience

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Title,
    Company,
    Date,
    Description,
}

impl Experience {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company: company.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}

impl Entry for Experience {
    type Field = ExperienceField;
    const KIND: CollectionKind = CollectionKind::Experience;

    fn blank(id: EntryId) -> Self {
        Self::new(id, "", "", "", "")
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::Date => &self.date,
            ExperienceField::Description => &self.description,
        }
    }

    fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Title => self.title = value,
            ExperienceField::Company => self.company = value,
            ExperienceField::Date => self.date = value,
            ExperienceField::Description => self.description = value,
        }
    }

    fn is_unidentified(&self) -> bool {
        self.title.is_empty() && self.company.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Education

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    id: EntryId,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    School,
    Date,
    Description,
}

impl Education {
    pub fn new(
        id: EntryId,
        degree: impl Into<String>,
        school: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            degree: degree.into(),
            school: school.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}

impl Entry for Education {
    type Field = EducationField;
    const KIND: CollectionKind = CollectionKind::Education;

    fn blank(id: EntryId) -> Self {
        Self::new(id, "", "", "", "")
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::School => &self.school,
            EducationField::Date => &self.date,
            EducationField::Description => &self.description,
        }
    }

    fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Degree => self.degree = value,
            EducationField::School => self.school = value,
            EducationField::Date => self.date = value,
            EducationField::Description => self.description = value,
        }
    }

    fn is_unidentified(&self) -> bool {
        self.degree.is_empty() && self.school.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Custom sections

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomSectionField {
    Title,
    Items,
    Icon,
}

impl CustomSection {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        items: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            items: items.into(),
            icon: icon.into(),
        }
    }
}

impl Entry for CustomSection {
    type Field = CustomSectionField;
    const KIND: CollectionKind = CollectionKind::CustomSections;

    fn blank(id: EntryId) -> Self {
        Self::new(id, NEW_SECTION_TITLE, "", DEFAULT_ICON)
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn get(&self, field: CustomSectionField) -> &str {
        match field {
            CustomSectionField::Title => &self.title,
            CustomSectionField::Items => &self.items,
            CustomSectionField::Icon => &self.icon,
        }
    }

    fn set(&mut self, field: CustomSectionField, value: String) {
        match field {
            CustomSectionField::Title => self.title = value,
            CustomSectionField::Items => self.items = value,
            CustomSectionField::Icon => self.icon = value,
        }
    }

    fn is_unidentified(&self) -> bool {
        self.title.is_empty() && self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Field addressing across collections

/// A field of some entry; the variant names the collection it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "collection", content = "field", rename_all = "camelCase")]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
    CustomSections(CustomSectionField),
}

impl EntryField {
    pub fn collection(&self) -> CollectionKind {
        match self {
            EntryField::Experience(_) => CollectionKind::Experience,
            EntryField::Education(_) => CollectionKind::Education,
            EntryField::CustomSections(_) => CollectionKind::CustomSections,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntryField::Experience(field) => match field {
                ExperienceField::Title => "title",
                ExperienceField::Company => "company",
                ExperienceField::Date => "date",
                ExperienceField::Description => "description",
            },
            EntryField::Education(field) => match field {
                EducationField::Degree => "degree",
                EducationField::School => "school",
                EducationField::Date => "date",
                EducationField::Description => "description",
            },
            EntryField::CustomSections(field) => match field {
                CustomSectionField::Title => "title",
                CustomSectionField::Items => "items",
                CustomSectionField::Icon => "icon",
            },
        }
    }

    /// Resolve a field by its wire name within a collection
    pub fn parse(collection: CollectionKind, name: &str) -> Result<Self, UnknownName> {
        let field = match (collection, name) {
            (CollectionKind::Experience, "title") => EntryField::Experience(ExperienceField::Title),
            (CollectionKind::Experience, "company") => {
                EntryField::Experience(ExperienceField::Company)
            }
            (CollectionKind::Experience, "date") => EntryField::Experience(ExperienceField::Date),
            (CollectionKind::Experience, "description") => {
                EntryField::Experience(ExperienceField::Description)
            }
            (CollectionKind::Education, "degree") => EntryField::Education(EducationField::Degree),
            (CollectionKind::Education, "school") => EntryField::Education(EducationField::School),
            (CollectionKind::Education, "date") => EntryField::Education(EducationField::Date),
            (CollectionKind::Education, "description") => {
                EntryField::Education(EducationField::Description)
            }
            (CollectionKind::CustomSections, "title") => {
                EntryField::CustomSections(CustomSectionField::Title)
            }
            (CollectionKind::CustomSections, "items") => {
                EntryField::CustomSections(CustomSectionField::Items)
            }
            (CollectionKind::CustomSections, "icon") => {
                EntryField::CustomSections(CustomSectionField::Icon)
            }
            _ => return Err(UnknownName::new("entry field", name)),
        };
        Ok(field)
    }

    /// The custom-section icon is the one field whose edit changes a form header
    pub fn is_icon(&self) -> bool {
        matches!(self, EntryField::CustomSections(CustomSectionField::Icon))
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection(), self.name())
    }
}
