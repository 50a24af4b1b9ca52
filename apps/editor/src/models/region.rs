//! Editable regions — the in-memory stand-in for the page's
//! `[data-editable]` elements. The Record owned by the controllers is the
//! source of truth; a region set is its projection, kept in sync through
//! collect and populate.

#![allow(dead_code)]

/// One user-editable text region, tagged with its storage location.
///
/// `parent` mirrors the `data-parent` attribute (a top-level Record key) and
/// `field` the `data-field` dotted path. Untagged regions are legal: some
/// collectors tolerate fields without a path and skip them.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableRegion {
    pub parent: Option<String>,
    pub field: Option<String>,
    /// Current text content. Never null — an empty region is `""`.
    pub value: String,
}

impl EditableRegion {
    pub fn bound(parent: &str, field: &str, value: &str) -> Self {
        EditableRegion {
            parent: Some(parent.to_string()),
            field: Some(field.to_string()),
            value: value.to_string(),
        }
    }

    /// A region with no field path; collection skips these silently.
    pub fn unbound(value: &str) -> Self {
        EditableRegion {
            parent: None,
            field: None,
            value: value.to_string(),
        }
    }
}

/// First region bound to exactly `path`, in document order.
pub fn find_field<'a>(regions: &'a [EditableRegion], path: &str) -> Option<&'a EditableRegion> {
    regions.iter().find(|r| r.field.as_deref() == Some(path))
}

pub fn find_field_mut<'a>(
    regions: &'a mut [EditableRegion],
    path: &str,
) -> Option<&'a mut EditableRegion> {
    regions
        .iter_mut()
        .find(|r| r.field.as_deref() == Some(path))
}

/// Trimmed text of the region bound to `path`, or `""` when the region is
/// absent. Lookups never fail hard: a missing element degrades to empty.
pub fn field_text<'a>(regions: &'a [EditableRegion], path: &str) -> &'a str {
    find_field(regions, path).map_or("", |r| r.value.trim())
}
