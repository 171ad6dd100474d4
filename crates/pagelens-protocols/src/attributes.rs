//! Attribute names with special meaning in the simplified tree.

/// Attribute persisted on live elements to carry their stable identifier.
pub const ID_ATTRIBUTE: &str = "nova-act-id";

/// Marker set on elements whose center point is covered by other content.
pub const CURRENTLY_OBSCURED_ATTRIBUTE: &str = "currently-obscured";

/// Boolean marker for scroll containers. Serialized without a value.
pub const SCROLLABLE_ATTRIBUTE: &str = "scrollable";

pub const SCROLLED_FROM_TOP_ATTRIBUTE: &str = "scrolled-from-top";
pub const SCROLLED_FROM_LEFT_ATTRIBUTE: &str = "scrolled-from-left";

/// Attributes that survive stripping when they carry a non-empty value.
pub const CORE_ATTRIBUTES_TO_KEEP: &[&str] = &[
    "alt",
    "role",
    "placeholder",
    "href",
    ID_ATTRIBUTE,
    "title",
    "value",
    SCROLLABLE_ATTRIBUTE,
    SCROLLED_FROM_TOP_ATTRIBUTE,
    SCROLLED_FROM_LEFT_ATTRIBUTE,
    "data-cy",
    "data-test",
    "data-testid",
    "data-test-id",
    CURRENTLY_OBSCURED_ATTRIBUTE,
];

/// ARIA attributes are always kept unless explicitly removed.
pub fn is_aria_attribute(name: &str) -> bool {
    name.starts_with("aria")
}
