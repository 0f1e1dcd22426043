//! Metadata tag vocabulary.
//!
//! A tag is one piece of structured metadata attached to a type or one of its members. Tags are plain
//! `Copy` values over `&'static str` so generated code can place them in `const` tables.

use std::fmt;

/// Identify which tag definition a [`MetadataTag`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// User-defined `#[custom(label = ..., description = ...)]`. Repeatable.
    Custom,
    /// `#[obsolete(...)]` or the native `#[deprecated]`.
    Deprecated,
}

impl TagKind {
    /// Return the attribute spelling used to declare this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Custom => "custom",
            TagKind::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a custom tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomTag {
    pub label: &'static str,
    pub description: &'static str,
}

/// Payload of a deprecation tag.
///
/// ## Notes
/// - `is_hard_error == true` means any reference to the member must fail the build.
/// - `is_hard_error == false` permits references but surfaces a build-time advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeprecatedTag {
    pub message: &'static str,
    pub is_hard_error: bool,
}

/// One attached piece of metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataTag {
    Custom(CustomTag),
    Deprecated(DeprecatedTag),
}

impl MetadataTag {
    pub fn kind(&self) -> TagKind {
        match self {
            MetadataTag::Custom(_) => TagKind::Custom,
            MetadataTag::Deprecated(_) => TagKind::Deprecated,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomTag> {
        match self {
            MetadataTag::Custom(tag) => Some(tag),
            MetadataTag::Deprecated(_) => None,
        }
    }

    pub fn as_deprecated(&self) -> Option<&DeprecatedTag> {
        match self {
            MetadataTag::Deprecated(tag) => Some(tag),
            MetadataTag::Custom(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_payload() {
        let custom = MetadataTag::Custom(CustomTag {
            label: "Accessor",
            description: "x",
        });
        let deprecated = MetadataTag::Deprecated(DeprecatedTag {
            message: "gone",
            is_hard_error: false,
        });

        assert_eq!(custom.kind(), TagKind::Custom);
        assert_eq!(deprecated.kind(), TagKind::Deprecated);
        assert!(custom.as_deprecated().is_none());
        assert_eq!(deprecated.as_deprecated().map(|d| d.message), Some("gone"));
        assert_eq!(TagKind::Custom.to_string(), "custom");
    }
}
