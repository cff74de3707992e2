use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SolidError};
use crate::model::{sample_catalog, Color, Product, Size};
use crate::specification::{all_of, filter, ProductSpec};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Criteria collected from the caller before they become one specification.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub color: Option<Color>,
    pub size: Option<Size>,
    /// Extra `attr=value` criteria, each possibly joined with `&`
    pub criteria: Vec<String>,
}

impl ProductQuery {
    /// Combines every criterion into one specification.
    ///
    /// A query with a single criterion yields that criterion unwrapped; an
    /// empty query yields the empty conjunction, which matches everything.
    pub fn to_spec(&self) -> Result<ProductSpec> {
        let mut parts = Vec::new();
        if let Some(color) = self.color {
            parts.push(ProductSpec::Color(color));
        }
        if let Some(size) = self.size {
            parts.push(ProductSpec::Size(size));
        }
        for raw in &self.criteria {
            parts.push(raw.parse()?);
        }

        if parts.len() == 1 {
            Ok(parts.remove(0))
        } else {
            Ok(all_of(parts))
        }
    }
}

/// Reads a catalog: a JSON array of `{"name", "color", "size"}` objects.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path).map_err(SolidError::Io)?;
    let products: Vec<Product> =
        serde_json::from_str(&content).map_err(SolidError::Serialization)?;
    debug!(path = %path.display(), count = products.len(), "loaded catalog");
    Ok(products)
}

pub fn run(catalog: Option<&Path>, query: &ProductQuery) -> Result<CmdResult> {
    let spec = query.to_spec()?;
    let products = match catalog {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };
    debug!(spec = %spec, leaves = spec.leaf_count(), items = products.len(), "filtering products");

    let matched: Vec<Product> = filter(&products, &spec).cloned().collect();

    let mut result = CmdResult::default();
    if matched.is_empty() {
        result.add_message(CmdMessage::info(format!("No products match {}", spec)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} of {} products match {}",
            matched.len(),
            products.len(),
            spec
        )));
    }
    Ok(result.with_products(matched))
}
