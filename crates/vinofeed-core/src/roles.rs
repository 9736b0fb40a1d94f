//! Semantic roles of catalog attributes.
//!
//! The store identifies attributes by numeric id only. The ids are tied to
//! the store's catalog schema, so they live in one table here and the name
//! normalizer asks the table by role.

/// A semantic attribute category used when building display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeRole {
    /// Producing winery or estate.
    Domain,
    /// Quality or appellation tier.
    Classification,
    Grape,
    /// Production year, or the literal `N.V.` for non-vintage wines.
    VintageYear,
}

/// Mapping from [`AttributeRole`] to the store's attribute id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRoles {
    pub domain: i64,
    pub classification: i64,
    pub grape: i64,
    pub vintage_year: i64,
}

impl AttributeRoles {
    #[must_use]
    pub fn id(&self, role: AttributeRole) -> i64 {
        match role {
            AttributeRole::Domain => self.domain,
            AttributeRole::Classification => self.classification,
            AttributeRole::Grape => self.grape,
            AttributeRole::VintageYear => self.vintage_year,
        }
    }
}

impl Default for AttributeRoles {
    fn default() -> Self {
        Self {
            domain: 1,
            classification: 2,
            grape: 3,
            vintage_year: 6,
        }
    }
}
