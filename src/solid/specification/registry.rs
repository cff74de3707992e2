//! Attribute registry.
//!
//! Lists the product attributes that can be named in textual criteria, and the
//! values each one accepts. The CLI help and the unknown-attribute error are
//! built from this table.

/// Schema entry for one product attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in criteria (e.g., "color")
    pub name: &'static str,

    /// The closed set of accepted values, lowercase
    pub values: &'static [&'static str],
}

impl AttributeSpec {
    const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }

    /// Whether `value` belongs to this attribute's domain (case-insensitive).
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        self.values.iter().any(|v| *v == value)
    }

    /// Accepted values as "a, b, c".
    pub fn values_list(&self) -> String {
        self.values.join(", ")
    }
}

/// Registry of all product attributes.
///
/// Adding an attribute means adding an entry here and a variant to
/// [`ProductSpec`](super::ProductSpec).
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("color", &["red", "green", "blue"]),
    AttributeSpec::new("size", &["small", "medium", "large"]),
];

/// Look up an attribute spec by name (case-insensitive).
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    let name = name.to_lowercase();
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Names of every registered attribute, in registry order.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.iter().map(|spec| spec.name)
}
