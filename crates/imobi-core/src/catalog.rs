//! # Catalog
//!
//! The authoritative list of listings. Only the page holds a `Catalog`, and
//! only two operations change it: `create` (prepend) and `rent` (flip
//! `is_rented`). Everything else reads.

use crate::error::CoreResult;
use crate::types::{seed_properties, Property};
use crate::validation::validate_unique_id;

/// Listings in insertion order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// The two seed listings.
    pub fn seeded() -> Self {
        Catalog {
            properties: seed_properties(),
        }
    }

    /// Builds a catalog from existing records, keeping their order.
    ///
    /// ## Errors
    /// `Validation(Duplicate)` if two records share an id.
    pub fn from_properties(properties: Vec<Property>) -> CoreResult<Self> {
        let mut catalog = Catalog::new();
        for property in properties {
            validate_unique_id(&catalog.properties, &property.id)?;
            catalog.properties.push(property);
        }
        Ok(catalog)
    }

    /// All listings in source order (newest first).
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks up a listing by id.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Adds a listing at the front.
    ///
    /// ## Errors
    /// `Validation(Duplicate)` if the id is taken; nothing changes.
    pub fn create(&mut self, property: Property) -> CoreResult<()> {
        validate_unique_id(&self.properties, &property.id)?;
        self.properties.insert(0, property);
        Ok(())
    }

    /// Marks the first listing with `id` as rented.
    ///
    /// Returns whether a listing matched. An unknown id is a no-op.
    pub fn rent(&mut self, id: &str) -> bool {
        match self.properties.iter_mut().find(|p| p.id == id) {
            Some(property) => {
                property.is_rented = true;
                true
            }
            None => false,
        }
    }

    /// Display order: available listings first, rented after, each group in
    /// source order.
    pub fn display_order(&self) -> Vec<&Property> {
        let mut ordered: Vec<&Property> = self.properties.iter().collect();
        // sort_by_key is stable, so ties keep their source order.
        ordered.sort_by_key(|p| p.is_rented);
        ordered
    }
}
