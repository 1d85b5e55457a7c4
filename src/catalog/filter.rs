use crate::catalog::model::{Catalog, Category, ProjectRecord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Active filter-bar selection.
pub enum FilterSelection {
    /// Pass the whole catalog through unchanged.
    #[default]
    All,
    /// Keep only records of one category.
    Only(Category),
}

impl FilterSelection {
    /// Filter-bar button order: "all" first, then every category.
    pub const BAR: [FilterSelection; 5] = [
        FilterSelection::All,
        FilterSelection::Only(Category::Web),
        FilterSelection::Only(Category::Plugin),
        FilterSelection::Only(Category::Tool),
        FilterSelection::Only(Category::Game),
    ];

    /// Capitalized display label for the filter button.
    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Only(Category::Web) => "Web",
            FilterSelection::Only(Category::Plugin) => "Plugin",
            FilterSelection::Only(Category::Tool) => "Tool",
            FilterSelection::Only(Category::Game) => "Game",
        }
    }
}

/// Project the catalog through a filter selection.
///
/// Pure function: [`FilterSelection::All`] yields every record in catalog
/// order; a category selection yields the stable subsequence whose `category`
/// matches, preserving relative order. A selection matching nothing yields an
/// empty vec, which renders as an empty timeline.
pub fn filter(catalog: &Catalog, selection: FilterSelection) -> Vec<&ProjectRecord> {
    match selection {
        FilterSelection::All => catalog.records().iter().collect(),
        FilterSelection::Only(category) => catalog
            .records()
            .iter()
            .filter(|r| r.category == category)
            .collect(),
    }
}

/// Total record count, independent of any selection (the "All" button badge).
pub fn count(catalog: &Catalog) -> usize {
    catalog.len()
}

/// Number of records in one category.
pub fn category_count(catalog: &Catalog, category: Category) -> usize {
    catalog
        .records()
        .iter()
        .filter(|r| r.category == category)
        .count()
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/filter.rs"]
mod tests;
