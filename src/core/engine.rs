use crate::config::SearchConfig;
use crate::core::normalizer::normalize;
use crate::core::types::{Facets, Product, ProductFilters, SortDirection, SortField};
use crate::core::variants::{QueryVariants, VariantGenerator};
use crate::error::{Result, SearchError};
use crate::fuzzy::matcher::FuzzyMatcher;
use crate::persistence::{load_catalog_json, load_snapshot, save_snapshot};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Filters, matches and sorts an in-memory product list.
///
/// The catalog is read-only once loaded; every search expands its query once
/// and scans the whole list, which is fine for catalogs of a few thousand
/// products.
pub struct SearchEngine {
    catalog: Vec<Product>,
    generator: VariantGenerator,
    matcher: FuzzyMatcher,
    config: SearchConfig,
    catalog_path: Option<PathBuf>,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            generator: VariantGenerator::new(),
            matcher: FuzzyMatcher::default(),
            config: SearchConfig::default(),
            catalog_path: None,
        }
    }

    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog: Vec::new(),
            generator: VariantGenerator::with_config(&config),
            matcher: FuzzyMatcher::new(config.matching),
            config,
            catalog_path: None,
        })
    }

    /// Loads a catalog JSON file, or starts with an empty catalog when the
    /// file is missing or unreadable.
    pub fn from_file_or_new(path: &str) -> Self {
        let mut engine = Self::new();
        engine.load_or_keep_empty(path);
        engine
    }

    /// Opens a catalog for the terminal front end. A `.bin` path is a snapshot
    /// that carries its own config, so passing another one is an error rather
    /// than being silently dropped.
    pub fn open(catalog_path: &str, config: Option<SearchConfig>) -> Result<Self> {
        if catalog_path.ends_with(".bin") {
            if config.is_some() {
                return Err(SearchError::InvalidConfig(format!(
                    "{catalog_path} is a snapshot with its own config; drop the config file"
                )));
            }
            return load_snapshot(Path::new(catalog_path));
        }

        let mut engine = Self::with_config(config.unwrap_or_default())?;
        engine.load_or_keep_empty(catalog_path);
        Ok(engine)
    }

    /// Replaces the catalog with the contents of `path`. On failure the
    /// catalog becomes empty and the error is logged.
    pub fn load_or_keep_empty(&mut self, path: &str) {
        match load_catalog_json(Path::new(path)) {
            Ok(products) => self.set_catalog(products),
            Err(e) => {
                tracing::warn!(path, error = %e, "catalog not loaded, starting empty");
                self.catalog.clear();
            }
        }
        self.catalog_path = Some(PathBuf::from(path));
    }

    pub fn set_catalog(&mut self, products: Vec<Product>) {
        tracing::info!(products = products.len(), "catalog loaded");
        self.catalog = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn expand_query(&self, query: &str) -> QueryVariants {
        self.generator.expand(query)
    }

    pub fn search(&self, filters: &ProductFilters) -> Vec<&Product> {
        let variants = self.generator.expand(&filters.search);
        let searching = !filters.search.trim().is_empty();
        let category = filters.category.as_deref().map(normalize);

        let mut hits: Vec<&Product> = self
            .catalog
            .iter()
            .filter(|p| category.as_deref().map_or(true, |c| in_category(p, c)))
            .filter(|p| filters.producer_id.map_or(true, |id| p.producer.id == id))
            .filter(|p| filters.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| filters.max_price.map_or(true, |max| p.price <= max))
            .filter(|p| filters.organic.map_or(true, |o| p.is_organic == o))
            .filter(|p| !searching || self.matcher.matches(&p.searchable_text(), &variants))
            .collect();

        sort_products(&mut hits, filters.sort, filters.direction);

        tracing::debug!(
            query = %filters.search,
            variants = variants.len(),
            hits = hits.len(),
            "search finished"
        );
        hits
    }

    /// Unique category names in first-seen order and unique producers by id.
    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        let mut seen_categories = HashSet::new();
        let mut seen_producers = HashSet::new();

        for product in &self.catalog {
            for category in &product.categories {
                if seen_categories.insert(category.name.as_str()) {
                    facets.categories.push(category.name.clone());
                }
            }
            if seen_producers.insert(product.producer.id) {
                facets
                    .producers
                    .push((product.producer.id, product.producer.display_name().to_string()));
            }
        }
        facets
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        save_snapshot(self, path)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn in_category(product: &Product, normalized: &str) -> bool {
    product
        .categories
        .iter()
        .any(|c| normalize(&c.name) == normalized || normalize(&c.slug) == normalized)
}

fn sort_products(products: &mut [&Product], field: SortField, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = match field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Name => normalize(&a.name).cmp(&normalize(&b.name)),
            SortField::Price => a.price.total_cmp(&b.price),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Category, Producer};

    fn product(id: u64, name: &str, price: f64, category: &str, producer: u64, organic: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            unit: "kg".to_string(),
            stock: None,
            is_active: true,
            is_organic: organic,
            description: None,
            categories: vec![Category {
                id: 1,
                name: category.to_string(),
                slug: normalize(category),
            }],
            producer: Producer {
                id: producer,
                name: format!("Παραγωγός {producer}"),
                business_name: String::new(),
            },
            created_at: format!("2025-01-{:02}T00:00:00Z", id),
        }
    }

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine.set_catalog(vec![
            product(1, "Πορτοκάλια Κρήτης", 2.5, "Φρούτα", 10, true),
            product(2, "Ελαιόλαδο Καλαμάτας", 12.0, "Λάδι", 11, false),
            product(3, "Μήλα Ζαγοράς", 1.8, "Φρούτα", 12, true),
            product(4, "Ντομάτες", 2.2, "Λαχανικά", 10, false),
        ]);
        engine
    }

    fn ids(hits: &[&Product]) -> Vec<u64> {
        hits.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_returns_everything_newest_first() {
        let engine = engine();
        let hits = engine.search(&ProductFilters::default());
        assert_eq!(ids(&hits), vec![4, 3, 2, 1]);
    }

    #[test]
    fn transliterated_query_finds_greek_product() {
        let engine = engine();
        let filters = ProductFilters {
            search: "portokalia".into(),
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&filters)), vec![1]);
    }

    #[test]
    fn query_matches_category_and_producer_text() {
        let engine = engine();
        let filters = ProductFilters {
            search: "φρουτα".into(),
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&filters)), vec![3, 1]);
    }

    #[test]
    fn structural_filters_combine() {
        let engine = engine();
        let filters = ProductFilters {
            category: Some("ΦΡΟΥΤΑ".into()),
            organic: Some(true),
            max_price: Some(2.0),
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&filters)), vec![3]);

        let filters = ProductFilters {
            producer_id: Some(10),
            min_price: Some(2.2),
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&filters)), vec![4, 1]);
    }

    #[test]
    fn sorts_by_price_and_name() {
        let engine = engine();
        let by_price = ProductFilters {
            sort: SortField::Price,
            direction: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&by_price)), vec![3, 4, 1, 2]);

        let by_name = ProductFilters {
            sort: SortField::Name,
            direction: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&engine.search(&by_name)), vec![2, 3, 4, 1]);
    }

    #[test]
    fn facets_are_unique() {
        let facets = engine().facets();
        assert_eq!(facets.categories, vec!["Φρούτα", "Λάδι", "Λαχανικά"]);
        assert_eq!(facets.producers.len(), 3);
        assert_eq!(facets.producers[0], (10, "Παραγωγός 10".to_string()));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SearchConfig {
            version: 0,
            ..Default::default()
        };
        assert!(SearchEngine::with_config(config).is_err());
    }

    #[test]
    fn snapshot_path_rejects_extra_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.bin");
        engine().save_snapshot(&path).unwrap();
        let path = path.to_str().unwrap();

        let result = SearchEngine::open(path, Some(SearchConfig::default()));
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));

        let restored = SearchEngine::open(path, None).unwrap();
        assert_eq!(restored.products().len(), 4);
    }

    #[test]
    fn json_path_applies_given_config() {
        let mut config = SearchConfig::default();
        config.strip_query_punctuation = true;
        let engine = SearchEngine::open("/nonexistent/catalog.json", Some(config.clone())).unwrap();
        assert_eq!(engine.config(), &config);
        assert!(engine.products().is_empty());
    }

    #[test]
    fn missing_catalog_file_starts_empty() {
        let engine = SearchEngine::from_file_or_new("/nonexistent/catalog.json");
        assert!(engine.products().is_empty());
        assert!(engine.catalog_path().is_some());
    }
}
