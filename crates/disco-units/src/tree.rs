use disco_core::UnitFile;

/// Units sharing a top-level directory, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub units: Vec<UnitFile>,
}

/// Category name to units, ordered by first discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    categories: Vec<Category>,
}

impl CategoryTree {
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of units across all categories.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.categories.iter().map(|category| category.units.len()).sum()
    }
}

/// Group scanned files by category. Pure; performs no I/O.
pub fn build_tree(files: impl IntoIterator<Item = UnitFile>) -> CategoryTree {
    let mut categories: Vec<Category> = Vec::new();

    for unit in files {
        match categories.iter_mut().find(|category| category.name == unit.category) {
            Some(category) => category.units.push(unit),
            None => categories.push(Category {
                name: unit.category.clone(),
                units: vec![unit],
            }),
        }
    }

    CategoryTree { categories }
}
