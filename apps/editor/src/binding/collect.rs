//! Record extraction: walk the editable regions in document order and build
//! a fresh Record from their tagged values.

use tracing::warn;

use crate::binding::path::{self, PathKind};
use crate::errors::EditorError;
use crate::models::record::{Fields, Record, Section, SectionKey};
use crate::models::region::EditableRegion;

/// The one two-way derived pseudo-field: split into first/last name on
/// collect, synthesized back on populate.
pub const FULL_NAME_PATH: &str = "personal_info.full_name";

/// Builds a Record from the regions. Regions without a field path are
/// skipped silently (intentional — some collectors tolerate untagged
/// fields); a bound region whose parent key is not one of the nine Record
/// keys is a caller error.
///
/// Collection only ever adds or overwrites; it never deletes keys already
/// written. Indexed writes extend the target list with empty entries up to
/// the index, so list order is ascending index order regardless of the
/// order the regions appear in.
pub fn collect<'a, I>(regions: I) -> Result<Record, EditorError>
where
    I: IntoIterator<Item = &'a EditableRegion>,
{
    let mut record = Record::default();
    let mut full_name: Option<String> = None;

    for region in regions {
        let Some(field) = region.field.as_deref() else {
            continue;
        };
        let value = region.value.trim().to_string();

        if full_name.is_none() && field == FULL_NAME_PATH {
            full_name = Some(value.clone());
        }

        let parent = region.parent.as_deref().unwrap_or_default();
        let key = SectionKey::parse(parent)
            .ok_or_else(|| EditorError::UnknownSection(parent.to_string()))?;

        write_field(record.section_mut(key), key, field, value);
    }

    if let Some(text) = full_name {
        split_full_name(&mut record, &text);
    }

    Ok(record)
}

fn write_field(section: &mut Section, key: SectionKey, field: &str, value: String) {
    match path::resolve(field) {
        PathKind::TopLevelScalar => {
            *section = Section::Text(value);
        }
        PathKind::Nested { property } => match section.as_fields_mut() {
            Some(fields) => {
                fields.insert(property.to_string(), value);
            }
            // A named property on a list section has nowhere to live in
            // the serialized Record; the write is dropped, not an error.
            None => warn!(
                field,
                section = key.as_str(),
                "dropping nested write against a non-mapping section"
            ),
        },
        PathKind::Indexed { index, property } | PathKind::IndexOnly { index, property } => {
            match section.as_entries_mut() {
                Some(entries) => {
                    while entries.len() <= index {
                        entries.push(Fields::new());
                    }
                    entries[index].insert(property.to_string(), value);
                }
                None => warn!(
                    field,
                    section = key.as_str(),
                    "dropping indexed write against a non-list section"
                ),
            }
        }
    }
}

/// First name is every whitespace-separated token but the last, re-joined
/// with single spaces; last name is the final token. The `full_name` key
/// itself stays in personal_info.
fn split_full_name(record: &mut Record, text: &str) {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (first, last) = match tokens.split_last() {
        Some((last, rest)) => (rest.join(" "), (*last).to_string()),
        None => (String::new(), String::new()),
    };

    match record.personal_info.as_fields_mut() {
        Some(fields) => {
            fields.insert("first_name".to_string(), first);
            fields.insert("last_name".to_string(), last);
        }
        None => warn!("personal_info is not a mapping; skipping full-name split"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_region_set_yields_default_record() {
        let regions: Vec<EditableRegion> = Vec::new();
        let record = collect(&regions).unwrap();
        assert_eq!(record, Record::default());
    }

    #[test]
    fn test_nested_scalar_lands_in_personal_info() {
        let regions = vec![EditableRegion::bound(
            "personal_info",
            "personal_info.email",
            "ana@example.com",
        )];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("email"), Some("ana@example.com"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let regions = vec![EditableRegion::bound(
            "personal_info",
            "personal_info.city",
            "  Lyon \n",
        )];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("city"), Some("Lyon"));
    }

    #[test]
    fn test_indexed_collection_auto_fills_gaps() {
        let regions = vec![EditableRegion::bound(
            "experience",
            "experience.2.company",
            "Acme",
        )];
        let record = collect(&regions).unwrap();
        let entries = record.experience.as_entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Fields::new());
        assert_eq!(entries[1], Fields::new());
        assert_eq!(entries[2], entry(&[("company", "Acme")]));
    }

    #[test]
    fn test_list_order_follows_index_not_region_order() {
        let regions = vec![
            EditableRegion::bound("education", "education.1.degree", "MSc"),
            EditableRegion::bound("education", "education.0.degree", "BSc"),
        ];
        let record = collect(&regions).unwrap();
        let entries = record.education.as_entries().unwrap();
        assert_eq!(entries[0], entry(&[("degree", "BSc")]));
        assert_eq!(entries[1], entry(&[("degree", "MSc")]));
    }

    #[test]
    fn test_regions_without_a_field_are_skipped_silently() {
        let regions = vec![
            EditableRegion::unbound("chrome text"),
            EditableRegion::bound("skills", "skills.0.name", "Rust"),
        ];
        let record = collect(&regions).unwrap();
        assert_eq!(
            record.skills.as_entries().unwrap()[0],
            entry(&[("name", "Rust")])
        );
    }

    #[test]
    fn test_unknown_parent_key_is_a_caller_error() {
        let regions = vec![EditableRegion::bound("projects", "projects.0.name", "x")];
        let err = collect(&regions).unwrap_err();
        assert!(matches!(err, EditorError::UnknownSection(key) if key == "projects"));
    }

    #[test]
    fn test_missing_parent_on_a_bound_region_is_a_caller_error() {
        let regions = vec![EditableRegion {
            parent: None,
            field: Some("experience.0.company".to_string()),
            value: "Acme".to_string(),
        }];
        assert!(matches!(
            collect(&regions),
            Err(EditorError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_full_name_splits_into_first_and_last() {
        let regions = vec![EditableRegion::bound(
            "personal_info",
            "personal_info.full_name",
            "Jean Paul Dupont",
        )];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("first_name"), Some("Jean Paul"));
        assert_eq!(record.personal_field("last_name"), Some("Dupont"));
        // the pseudo-field itself is retained
        assert_eq!(record.personal_field("full_name"), Some("Jean Paul Dupont"));
    }

    #[test]
    fn test_single_token_full_name_is_all_last_name() {
        let regions = vec![EditableRegion::bound(
            "personal_info",
            "personal_info.full_name",
            "Cher",
        )];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("first_name"), Some(""));
        assert_eq!(record.personal_field("last_name"), Some("Cher"));
    }

    #[test]
    fn test_empty_full_name_yields_empty_names() {
        let regions = vec![EditableRegion::bound(
            "personal_info",
            "personal_info.full_name",
            "   ",
        )];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("first_name"), Some(""));
        assert_eq!(record.personal_field("last_name"), Some(""));
    }

    #[test]
    fn test_first_full_name_region_wins() {
        let regions = vec![
            EditableRegion::bound("personal_info", "personal_info.full_name", "Ana García"),
            EditableRegion::bound("personal_info", "personal_info.full_name", "Bo Derek"),
        ];
        let record = collect(&regions).unwrap();
        assert_eq!(record.personal_field("first_name"), Some("Ana"));
        assert_eq!(record.personal_field("last_name"), Some("García"));
    }

    #[test]
    fn test_bare_path_overwrites_the_section_with_text() {
        let regions = vec![EditableRegion::bound("skills", "skills", "none yet")];
        let record = collect(&regions).unwrap();
        assert_eq!(record.skills.as_text(), Some("none yet"));
    }

    #[test]
    fn test_nested_write_against_a_list_section_is_dropped() {
        let regions = vec![
            EditableRegion::bound("experience", "experience.company", "Acme"),
            EditableRegion::bound("experience", "experience.0.position", "Engineer"),
        ];
        let record = collect(&regions).unwrap();
        let entries = record.experience.as_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], entry(&[("position", "Engineer")]));
    }

    #[test]
    fn test_direct_index_write_uses_the_digit_property() {
        // compatibility quirk: the property name falls back to the index
        let regions = vec![EditableRegion::bound("hobbys", "hobbys.1", "chess")];
        let record = collect(&regions).unwrap();
        let entries = record.hobbys.as_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], entry(&[("1", "chess")]));
    }

    #[test]
    fn test_collect_is_idempotent() {
        let regions = vec![
            EditableRegion::bound("personal_info", "personal_info.full_name", "Ana García"),
            EditableRegion::bound("experience", "experience.0.company", "Acme"),
            EditableRegion::bound("experience", "experience.0.description_", "Built things"),
            EditableRegion::bound("languages", "languages.0.level", "C1"),
        ];
        let first = collect(&regions).unwrap();
        let second = collect(&regions).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_alternate_parent_spelling_maps_to_canonical_section() {
        let regions = vec![EditableRegion::bound("software", "software.0.name", "Excel")];
        let record = collect(&regions).unwrap();
        assert_eq!(
            record.softwares.as_entries().unwrap()[0],
            entry(&[("name", "Excel")])
        );
    }
}
