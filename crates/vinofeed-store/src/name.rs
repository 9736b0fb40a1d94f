//! Display-name normalization for feed products.
//!
//! Shop names mix producer, cuvée, vintage and tier in whatever order the
//! shop editor typed them. The feed wants `"{domain} {rest} {classification} {vintage}"`,
//! so the vintage and domain are cut out of the raw name and re-attached at
//! fixed positions.

use vinofeed_core::{AttributeRole, AttributeRoles};

use crate::error::StoreError;
use crate::types::Product;

/// Vintage value the shop uses for non-vintage wines.
const NON_VINTAGE: &str = "N.V.";

/// Suffix written for non-vintage wines and for products without a vintage.
const NON_VINTAGE_SUFFIX: &str = " NV";

/// Builds the feed display name for `product`.
///
/// Steps, in order:
/// 1. delete every `-` from the raw name;
/// 2. cut the vintage out of the name when it appears in it;
/// 3. when the domain appears in the name, cut it out and put it in front;
/// 4. when the classification does NOT appear in the name, append it;
/// 5. append the vintage, `NV` for `N.V.` or for a missing vintage attribute.
///
/// Step 4 only fires when the classification is absent from the name. That
/// is how the shop's existing feed behaves and is kept as-is.
///
/// # Errors
///
/// Returns [`StoreError::Normalization`] when a role attribute is attached
/// to the product but has no options to read a value from.
pub fn normalize_name(product: &Product, roles: &AttributeRoles) -> Result<String, StoreError> {
    let year = role_value(product, roles, AttributeRole::VintageYear)?;
    let domain = role_value(product, roles, AttributeRole::Domain)?;
    let classification = role_value(product, roles, AttributeRole::Classification)?;

    let mut name = product.name.replace('-', "");

    if let Some(year) = year {
        if contains_value(&name, year) {
            name = name.replace(year, "").trim().to_owned();
        }
    }

    if let Some(domain) = domain {
        if contains_value(&name, domain) {
            let rest = name.replace(domain, "");
            name = format!("{domain} {}", rest.trim());
        }
    }

    if let Some(classification) = classification {
        if !contains_value(&name, classification) {
            name = name.replace(classification, "").trim().to_owned();
            name.push(' ');
            name.push_str(classification);
        }
    }

    match year {
        Some(NON_VINTAGE) | None => name.push_str(NON_VINTAGE_SUFFIX),
        Some(year) => {
            name.push(' ');
            name.push_str(year);
        }
    }

    Ok(name)
}

/// First option of the first attribute carrying `role`'s id.
fn role_value<'a>(
    product: &'a Product,
    roles: &AttributeRoles,
    role: AttributeRole,
) -> Result<Option<&'a str>, StoreError> {
    let Some(attribute) = product.attribute(roles.id(role)) else {
        return Ok(None);
    };

    attribute
        .options
        .first()
        .map(|option| Some(option.as_str()))
        .ok_or_else(|| StoreError::Normalization {
            raw_name: product.name.clone(),
            reason: format!("{role:?} attribute {} has no options", attribute.id),
        })
}

/// Substring test that never matches an empty value.
fn contains_value(name: &str, value: &str) -> bool {
    !value.is_empty() && name.contains(value)
}

#[cfg(test)]
#[path = "name_test.rs"]
mod tests;
