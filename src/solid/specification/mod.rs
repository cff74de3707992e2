//! # Specification System
//!
//! Filtering products used to mean one function per criterion: by color, by
//! size, by color *and* size, and so on. Every new criterion meant editing the
//! filter. This module inverts that:
//!
//! - **Specifications** ([`Specification`]) answer one yes/no question about an item
//! - **Composition** ([`and`], [`all_of`]) combines them into new specifications
//! - **One engine** ([`filter`]) runs any specification over any collection
//!
//! New criteria are new specifications; the engine never changes.
//!
//! ## Product Specifications
//!
//! | Variant | Matches when |
//! |---------|--------------|
//! | `Color(c)` | the product's color is `c` |
//! | `Size(s)` | the product's size is `s` |
//! | `And(parts)` | every part matches (an empty `And` matches everything) |
//!
//! Specifications are bound to [`Product`](crate::model::Product)'s typed
//! accessors, so a specification can never name an attribute a product lacks.
//! Text input (`"color=green"`) is checked against the attribute
//! [registry](ATTRIBUTES) when the specification is built.
//!
//! ## Usage
//!
//! ```
//! use solid::model::{sample_catalog, Color, Size};
//! use solid::specification::{and, filter, ProductSpec};
//!
//! let products = sample_catalog();
//! let blue_and_large = and(ProductSpec::Color(Color::Blue), ProductSpec::Size(Size::Large));
//! let names: Vec<_> = filter(&products, &blue_and_large).map(|p| p.name()).collect();
//! assert_eq!(names, ["house"]);
//! ```

mod engine;
mod predicate;
mod registry;

pub use engine::filter;
pub use predicate::{all_of, and, Matching, ProductSpec, Specification};
pub use registry::{attribute_names, get_spec, AttributeSpec, ATTRIBUTES};
