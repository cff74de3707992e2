//! Specifications and their composition.

use crate::error::{Result, SolidError};
use crate::model::{Color, Product, Size};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::registry::{attribute_names, get_spec};

/// A yes/no test against an item.
///
/// Implementations must be pure: the answer depends only on the
/// specification and the item.
pub trait Specification<T: ?Sized> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// A specification over products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSpec {
    Color(Color),
    Size(Size),
    /// Satisfied when every part is. Parts are shared, so one specification
    /// can appear in several conjunctions.
    And(Vec<Arc<ProductSpec>>),
}

impl ProductSpec {
    /// Builds a single `attribute=value` criterion.
    ///
    /// The attribute must be in the registry and the value must belong to its
    /// domain; both are checked here rather than when the spec is evaluated.
    pub fn criterion(attribute: &str, value: &str) -> Result<Self> {
        let spec = get_spec(attribute.trim())
            .ok_or_else(|| unknown_attribute(attribute.trim()))?;
        if !spec.accepts(value) {
            return Err(SolidError::invalid_value(spec.name, value.trim()));
        }

        match spec.name {
            "color" => Ok(ProductSpec::Color(value.parse()?)),
            "size" => Ok(ProductSpec::Size(value.parse()?)),
            other => Err(unknown_attribute(other)),
        }
    }

    /// Number of leaf criteria (color or size tests) in this specification.
    pub fn leaf_count(&self) -> usize {
        match self {
            ProductSpec::Color(_) | ProductSpec::Size(_) => 1,
            ProductSpec::And(parts) => parts.iter().map(|p| p.leaf_count()).sum(),
        }
    }

    /// Returns `true` for an empty conjunction.
    pub fn matches_everything(&self) -> bool {
        matches!(self, ProductSpec::And(parts) if parts.iter().all(|p| p.matches_everything()))
    }
}

fn unknown_attribute(name: &str) -> SolidError {
    SolidError::UnknownAttribute {
        name: name.to_string(),
        known: attribute_names().collect::<Vec<_>>().join(", "),
    }
}

impl Specification<Product> for ProductSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        match self {
            ProductSpec::Color(color) => item.color() == *color,
            ProductSpec::Size(size) => item.size() == *size,
            ProductSpec::And(parts) => parts.iter().all(|part| part.is_satisfied(item)),
        }
    }
}

impl fmt::Display for ProductSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSpec::Color(color) => write!(f, "color={}", color),
            ProductSpec::Size(size) => write!(f, "size={}", size),
            ProductSpec::And(parts) if parts.is_empty() => f.write_str("*"),
            ProductSpec::And(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    match part.as_ref() {
                        ProductSpec::And(inner) if inner.len() > 1 => write!(f, "({})", part)?,
                        _ => write!(f, "{}", part)?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Parses `attr=value` criteria joined by `&`, e.g. `color=blue & size=large`.
///
/// `*` parses to the empty conjunction.
impl FromStr for ProductSpec {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == "*" {
            return Ok(all_of(Vec::<ProductSpec>::new()));
        }

        let mut parts = s
            .split('&')
            .map(|raw| {
                let (attr, value) = raw.split_once('=').ok_or_else(|| {
                    SolidError::Api(format!("Expected attribute=value, got '{}'", raw.trim()))
                })?;
                ProductSpec::criterion(attr, value)
            })
            .collect::<Result<Vec<_>>>()?;

        if parts.len() == 1 {
            Ok(parts.remove(0))
        } else {
            Ok(all_of(parts))
        }
    }
}

/// Combines two specifications into one satisfied only when both are.
pub fn and(a: impl Into<Arc<ProductSpec>>, b: impl Into<Arc<ProductSpec>>) -> ProductSpec {
    ProductSpec::And(vec![a.into(), b.into()])
}

/// Combines any number of specifications.
///
/// An empty input yields a specification every product satisfies: AND over
/// nothing is true.
pub fn all_of<I, S>(specs: I) -> ProductSpec
where
    I: IntoIterator<Item = S>,
    S: Into<Arc<ProductSpec>>,
{
    ProductSpec::And(specs.into_iter().map(Into::into).collect())
}

/// Adapts a plain predicate function into a [`Specification`].
///
/// Lets callers add criteria the product enum does not cover without touching
/// [`filter`](super::filter).
#[derive(Clone, Copy)]
pub struct Matching<F>(pub F);

impl<T: ?Sized, F> Specification<T> for Matching<F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}
