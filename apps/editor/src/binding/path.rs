//! Field path classification.
//!
//! A `data-field` path takes one of three shapes:
//! - `section.property` — scalar nested field (`personal_info.email`);
//! - `section.index.property` — indexed entry field (`experience.0.company`);
//! - a bare top-level key — the entire parent section is a scalar.
//!
//! The leading `section` segment is decorative; the storage section comes
//! from the region's parent key. Classification never fails — it is the
//! write/read step that may not resolve against a given Record.

/// A classified field path. Borrowed from the path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind<'a> {
    /// No dot at all: the whole parent section is one scalar value.
    TopLevelScalar,
    /// `section.property` — property may itself contain dots; only the
    /// first segment was consumed.
    Nested { property: &'a str },
    /// `section.index.property` — property may contain further dots; only
    /// the first digit group is consumed as the index.
    Indexed { index: usize, property: &'a str },
    /// `section.index` with nothing after the index. Retained for
    /// compatibility: the property name falls back to the path's segment
    /// after the last dot, which for this shape is the digit group itself.
    IndexOnly { index: usize, property: &'a str },
}

/// Splits `path` at the first `.` and classifies the remainder. No
/// whitespace or case normalization is performed on property names.
pub fn resolve(path: &str) -> PathKind<'_> {
    let Some((_, rest)) = path.split_once('.') else {
        return PathKind::TopLevelScalar;
    };

    if is_index(rest) {
        if let Ok(index) = rest.parse::<usize>() {
            // The derived property name collapses to the digit group: the
            // segment after the path's last dot is the index itself.
            return PathKind::IndexOnly {
                index,
                property: rest,
            };
        }
    }

    if let Some((digits, property)) = rest.split_once('.') {
        if is_index(digits) && !property.is_empty() {
            if let Ok(index) = digits.parse::<usize>() {
                return PathKind::Indexed { index, property };
            }
        }
    }

    PathKind::Nested { property: rest }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_is_top_level_scalar() {
        assert_eq!(resolve("experience"), PathKind::TopLevelScalar);
        assert_eq!(resolve("personal_info"), PathKind::TopLevelScalar);
    }

    #[test]
    fn test_nested_scalar() {
        assert_eq!(
            resolve("personal_info.email"),
            PathKind::Nested { property: "email" }
        );
    }

    #[test]
    fn test_indexed_property() {
        assert_eq!(
            resolve("experience.0.company"),
            PathKind::Indexed {
                index: 0,
                property: "company"
            }
        );
        assert_eq!(
            resolve("skills.12.name"),
            PathKind::Indexed {
                index: 12,
                property: "name"
            }
        );
    }

    #[test]
    fn test_only_first_digit_group_is_the_index() {
        // the trailing property keeps its own dots
        assert_eq!(
            resolve("experience.3.details.note"),
            PathKind::Indexed {
                index: 3,
                property: "details.note"
            }
        );
    }

    #[test]
    fn test_direct_index_falls_back_to_digit_property() {
        assert_eq!(
            resolve("experience.2"),
            PathKind::IndexOnly {
                index: 2,
                property: "2"
            }
        );
    }

    #[test]
    fn test_non_leading_digits_are_a_property() {
        assert_eq!(
            resolve("education.3a.degree"),
            PathKind::Nested {
                property: "3a.degree"
            }
        );
    }

    #[test]
    fn test_trailing_dot_after_index_is_a_property() {
        // `\d+\.` with an empty tail does not match the indexed shape
        assert_eq!(resolve("experience.0."), PathKind::Nested { property: "0." });
    }

    #[test]
    fn test_no_whitespace_normalization() {
        assert_eq!(
            resolve("personal_info. email"),
            PathKind::Nested { property: " email" }
        );
    }

    #[test]
    fn test_oversized_index_is_treated_as_a_property() {
        let path = "experience.99999999999999999999999999.company";
        assert_eq!(
            resolve(path),
            PathKind::Nested {
                property: "99999999999999999999999999.company"
            }
        );
    }
}
