use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Label of the catch-all catalog entry
///
/// "all" is a regular catalog entry: its venue tags are the default search
/// set, and it matches every record during scoring.
pub const ALL_CATEGORY: &str = "all";

/// Errors raised by catalog validation at startup
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is missing the \"all\" entry")]
    MissingAll,

    #[error("category \"{0}\" has no venue or cuisine tags")]
    EmptyCategory(String),
}

/// Tag vocabulary for one category label
///
/// Venue tags match the OSM `amenity` key, cuisine tags the `cuisine` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySpec {
    #[serde(default)]
    pub venue_tags: Vec<String>,
    #[serde(default)]
    pub cuisine_tags: Vec<String>,
}

/// Immutable mapping from category labels to their tag vocabularies
///
/// Loaded once at startup from configuration and shared read-only across
/// requests. Unknown labels resolve to the "all" entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: HashMap<String, CategorySpec>,
    #[serde(skip)]
    empty: CategorySpec,
}

impl CategoryCatalog {
    pub fn new(categories: HashMap<String, CategorySpec>) -> Self {
        Self {
            categories,
            empty: CategorySpec::default(),
        }
    }

    /// Check catalog invariants: the "all" entry must exist with venue tags,
    /// and no entry may be completely empty
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.categories.get(ALL_CATEGORY) {
            Some(spec) if !spec.venue_tags.is_empty() => {}
            Some(_) => return Err(CatalogError::EmptyCategory(ALL_CATEGORY.to_string())),
            None => return Err(CatalogError::MissingAll),
        }

        for (label, spec) in &self.categories {
            if spec.venue_tags.is_empty() && spec.cuisine_tags.is_empty() {
                return Err(CatalogError::EmptyCategory(label.clone()));
            }
        }

        Ok(())
    }

    /// Resolve a label to its spec, falling back to "all" for absent or
    /// unrecognized labels
    pub fn resolve(&self, label: Option<&str>) -> &CategorySpec {
        label
            .and_then(|l| self.categories.get(l))
            .or_else(|| self.categories.get(ALL_CATEGORY))
            .unwrap_or(&self.empty)
    }

    /// Spec for a known label other than "all"; `None` means scoring runs
    /// distance-only and the query carries no cuisine clauses
    pub fn specific(&self, label: Option<&str>) -> Option<&CategorySpec> {
        match label {
            Some(l) if l != ALL_CATEGORY => self.categories.get(l),
            _ => None,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.categories.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

fn spec(venue_tags: &[&str], cuisine_tags: &[&str]) -> CategorySpec {
    CategorySpec {
        venue_tags: venue_tags.iter().map(|t| t.to_string()).collect(),
        cuisine_tags: cuisine_tags.iter().map(|t| t.to_string()).collect(),
    }
}

impl Default for CategoryCatalog {
    /// Built-in catalog covering the published category labels
    fn default() -> Self {
        let mut categories = HashMap::new();

        categories.insert(
            "beverage".to_string(),
            spec(
                &["cafe", "coffee", "tea", "bubble_tea", "juice_bar"],
                &["coffee_shop", "tea", "bubble_tea", "juice"],
            ),
        );
        categories.insert(
            "fast-food".to_string(),
            spec(
                &["fast_food", "burger", "sandwich", "pizza"],
                &["burger", "sandwich", "pizza", "chicken"],
            ),
        );
        categories.insert(
            "dessert".to_string(),
            spec(
                &["bakery", "dessert", "ice_cream", "cake_shop", "pastry"],
                &["cake", "ice_cream", "dessert", "pastry"],
            ),
        );
        categories.insert(
            "chinese".to_string(),
            spec(
                &["restaurant;chinese", "restaurant;taiwanese"],
                &["chinese", "taiwanese", "cantonese"],
            ),
        );
        categories.insert(
            "japanese".to_string(),
            spec(
                &["restaurant;japanese", "restaurant;sushi", "restaurant;ramen"],
                &["japanese", "sushi", "ramen", "udon"],
            ),
        );
        categories.insert(
            "western".to_string(),
            spec(
                &[
                    "restaurant;italian",
                    "restaurant;french",
                    "restaurant;american",
                    "steak_house",
                ],
                &["italian", "french", "american", "steak"],
            ),
        );
        categories.insert(
            "hotpot".to_string(),
            spec(
                &["restaurant;hotpot", "restaurant;hot_pot"],
                &["hotpot", "hot_pot"],
            ),
        );
        categories.insert(
            "snack".to_string(),
            spec(
                &["street_food", "food_court", "snack_bar"],
                &["street_food", "noodle", "dumpling"],
            ),
        );
        categories.insert(
            ALL_CATEGORY.to_string(),
            spec(
                &["restaurant", "cafe", "fast_food", "food_court", "bakery"],
                &[],
            ),
        );

        Self::new(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_validates() {
        let catalog = CategoryCatalog::default();
        assert!(catalog.validate().is_ok());
        assert!(catalog.contains(ALL_CATEGORY));
        assert!(catalog.contains("beverage"));
    }

    #[test]
    fn test_missing_all_rejected() {
        let mut categories = HashMap::new();
        categories.insert("beverage".to_string(), spec(&["cafe"], &[]));

        let catalog = CategoryCatalog::new(categories);
        assert!(matches!(catalog.validate(), Err(CatalogError::MissingAll)));
    }

    #[test]
    fn test_empty_category_rejected() {
        let mut categories = HashMap::new();
        categories.insert(ALL_CATEGORY.to_string(), spec(&["restaurant"], &[]));
        categories.insert("hollow".to_string(), spec(&[], &[]));

        let catalog = CategoryCatalog::new(categories);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyCategory(label)) if label == "hollow"
        ));
    }

    #[test]
    fn test_resolve_falls_back_to_all() {
        let catalog = CategoryCatalog::default();

        let all = catalog.resolve(Some(ALL_CATEGORY));
        assert_eq!(catalog.resolve(None).venue_tags, all.venue_tags);
        assert_eq!(
            catalog.resolve(Some("no-such-label")).venue_tags,
            all.venue_tags
        );

        let beverage = catalog.resolve(Some("beverage"));
        assert!(beverage.venue_tags.contains(&"cafe".to_string()));
    }

    #[test]
    fn test_specific_excludes_all_and_unknown() {
        let catalog = CategoryCatalog::default();

        assert!(catalog.specific(None).is_none());
        assert!(catalog.specific(Some(ALL_CATEGORY)).is_none());
        assert!(catalog.specific(Some("no-such-label")).is_none());
        assert!(catalog.specific(Some("japanese")).is_some());
    }
}
