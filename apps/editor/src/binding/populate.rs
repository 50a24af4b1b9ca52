//! Record projection: write a Record's values back into the editable
//! regions. The mirror image of collect, with no-op resolution failures.

use crate::binding::collect::FULL_NAME_PATH;
use crate::binding::path::{self, PathKind};
use crate::models::record::{Record, Section};
use crate::models::region::{find_field_mut, EditableRegion};

/// Writes `record` into the regions. A region whose path, index or property
/// does not exist in the Record is left unchanged — no error, no blanking.
/// Every value written has each literal `*` expanded to a newline.
///
/// `populate(collect(regions), regions)` reproduces the visible text of
/// every currently bound region, except that the `*` conversion is
/// one-directional: collect does not restore the asterisks.
pub fn populate(record: &Record, regions: &mut [EditableRegion]) {
    for region in regions.iter_mut() {
        let Some(field) = region.field.as_deref() else {
            continue;
        };
        let Some(key) = region
            .parent
            .as_deref()
            .and_then(crate::models::record::SectionKey::parse)
        else {
            continue;
        };
        if let Some(value) = read_field(record.section(key), field) {
            region.value = expand_bullets(value);
        }
    }

    // Derived pseudo-field: when both names are present the full-name
    // region gets their concatenation, overriding path-based resolution.
    let first = record.personal_field("first_name").unwrap_or_default();
    let last = record.personal_field("last_name").unwrap_or_default();
    if !first.is_empty() && !last.is_empty() {
        let joined = format!("{first} {last}");
        if let Some(region) = find_field_mut(regions, FULL_NAME_PATH) {
            region.value = joined;
        }
    }
}

fn read_field<'a>(section: &'a Section, field: &str) -> Option<&'a str> {
    match path::resolve(field) {
        PathKind::TopLevelScalar => section.as_text(),
        PathKind::Nested { property } => {
            section.as_fields()?.get(property).map(String::as_str)
        }
        PathKind::Indexed { index, property } | PathKind::IndexOnly { index, property } => section
            .as_entries()?
            .get(index)?
            .get(property)
            .map(String::as_str),
    }
}

/// Upstream generated text uses `*` as a bullet/line-break marker; the
/// preview renders it as a real newline.
pub fn expand_bullets(value: &str) -> String {
    value.replace('*', "\n")
}
