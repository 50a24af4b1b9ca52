//! The canonical résumé document: nine tagged sections plus an optional
//! photo. A Record is built fresh on every collect and every populate; it
//! never outlives a single cycle (persistence is the cache's job).

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry's fields, name → text. All values in this layer are strings;
/// the wire format carries nothing else.
pub type Fields = BTreeMap<String, String>;

/// A top-level section of the Record.
///
/// Almost every section is a sequence of entries (`Entries`) and
/// `personal_info` is a flat mapping (`Fields`), but a bare top-level field
/// path may overwrite an entire section with plain text, so the scalar form
/// is representable too. Serialized untagged — the JSON shape is the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Entries(Vec<Fields>),
    Fields(Fields),
    Text(String),
}

impl Section {
    pub fn empty_entries() -> Self {
        Section::Entries(Vec::new())
    }

    pub fn empty_fields() -> Self {
        Section::Fields(Fields::new())
    }

    pub fn as_entries(&self) -> Option<&Vec<Fields>> {
        match self {
            Section::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_entries_mut(&mut self) -> Option<&mut Vec<Fields>> {
        match self {
            Section::Entries(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            Section::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_fields_mut(&mut self) -> Option<&mut Fields> {
        match self {
            Section::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Section::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// The nine top-level Record keys. Anything else on a bound region is a
/// caller error, not a storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Languages,
    Certifications,
    Hobbys,
    References,
    Softwares,
}

impl SectionKey {
    pub const ALL: [SectionKey; 9] = [
        SectionKey::PersonalInfo,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Languages,
        SectionKey::Certifications,
        SectionKey::Hobbys,
        SectionKey::References,
        SectionKey::Softwares,
    ];

    /// Canonical storage key, matching the serialized Record.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "personal_info",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skills",
            SectionKey::Languages => "languages",
            SectionKey::Certifications => "certifications",
            SectionKey::Hobbys => "hobbys",
            SectionKey::References => "references",
            SectionKey::Softwares => "softwares",
        }
    }

    /// Parses a `data-parent` value. The preview markup spells two sections
    /// differently from the storage keys (`hobbies`, `software`); both
    /// spellings resolve to the same section.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "personal_info" => Some(SectionKey::PersonalInfo),
            "education" => Some(SectionKey::Education),
            "experience" => Some(SectionKey::Experience),
            "skills" => Some(SectionKey::Skills),
            "languages" => Some(SectionKey::Languages),
            "certifications" => Some(SectionKey::Certifications),
            "hobbys" | "hobbies" => Some(SectionKey::Hobbys),
            "references" => Some(SectionKey::References),
            "softwares" | "software" => Some(SectionKey::Softwares),
            _ => None,
        }
    }
}

/// The structured résumé document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default = "Section::empty_fields")]
    pub personal_info: Section,
    #[serde(default = "Section::empty_entries")]
    pub education: Section,
    #[serde(default = "Section::empty_entries")]
    pub experience: Section,
    #[serde(default = "Section::empty_entries")]
    pub skills: Section,
    #[serde(default = "Section::empty_entries")]
    pub languages: Section,
    #[serde(default = "Section::empty_entries")]
    pub certifications: Section,
    #[serde(default = "Section::empty_entries")]
    pub hobbys: Section,
    #[serde(default = "Section::empty_entries")]
    pub references: Section,
    #[serde(default = "Section::empty_entries")]
    pub softwares: Section,
    /// Data-URI-encoded profile photo, attached out of band from the
    /// path-addressed fields.
    #[serde(rename = "photoBase64", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            personal_info: Section::empty_fields(),
            education: Section::empty_entries(),
            experience: Section::empty_entries(),
            skills: Section::empty_entries(),
            languages: Section::empty_entries(),
            certifications: Section::empty_entries(),
            hobbys: Section::empty_entries(),
            references: Section::empty_entries(),
            softwares: Section::empty_entries(),
            photo: None,
        }
    }
}

impl Record {
    pub fn section(&self, key: SectionKey) -> &Section {
        match key {
            SectionKey::PersonalInfo => &self.personal_info,
            SectionKey::Education => &self.education,
            SectionKey::Experience => &self.experience,
            SectionKey::Skills => &self.skills,
            SectionKey::Languages => &self.languages,
            SectionKey::Certifications => &self.certifications,
            SectionKey::Hobbys => &self.hobbys,
            SectionKey::References => &self.references,
            SectionKey::Softwares => &self.softwares,
        }
    }

    pub fn section_mut(&mut self, key: SectionKey) -> &mut Section {
        match key {
            SectionKey::PersonalInfo => &mut self.personal_info,
            SectionKey::Education => &mut self.education,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Languages => &mut self.languages,
            SectionKey::Certifications => &mut self.certifications,
            SectionKey::Hobbys => &mut self.hobbys,
            SectionKey::References => &mut self.references,
            SectionKey::Softwares => &mut self.softwares,
        }
    }

    /// Reads a scalar out of `personal_info`, if present and the section
    /// still has its mapping shape.
    pub fn personal_field(&self, name: &str) -> Option<&str> {
        self.personal_info
            .as_fields()
            .and_then(|fields| fields.get(name))
            .map(String::as_str)
    }
}
