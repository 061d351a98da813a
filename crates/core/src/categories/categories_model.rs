use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};

/// A transaction category. Referenced by transactions, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

/// Builds the default category set with freshly generated ids.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .chain(DEFAULT_INCOME_CATEGORIES.iter())
        .map(|name| Category::new(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_categories_have_unique_names_and_ids() {
        let categories = default_categories();
        assert_eq!(categories.len(), 17);

        let names: HashSet<_> = categories.iter().map(|c| c.name.as_str()).collect();
        let ids: HashSet<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(names.len(), categories.len());
        assert_eq!(ids.len(), categories.len());
    }
}
