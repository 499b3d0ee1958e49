//! Helpers over the flat affiliate category listing.

use aliexpress_api::types::Category;

/// Top-level categories, in listing order.
pub fn filter_parent_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.is_parent())
        .cloned()
        .collect()
}

/// Direct children of `parent_category_id`, in listing order.
pub fn filter_child_categories(categories: &[Category], parent_category_id: i64) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.parent_category_id == Some(parent_category_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, parent: Option<i64>) -> Category {
        Category {
            category_id: id,
            category_name: format!("cat-{}", id),
            parent_category_id: parent,
        }
    }

    fn sample() -> Vec<Category> {
        vec![
            category(1, None),
            category(10, Some(1)),
            category(11, Some(1)),
            category(2, None),
            category(20, Some(2)),
        ]
    }

    #[test]
    fn parents_only() {
        let ids: Vec<i64> = filter_parent_categories(&sample())
            .iter()
            .map(|c| c.category_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn children_of_parent() {
        let ids: Vec<i64> = filter_child_categories(&sample(), 1)
            .iter()
            .map(|c| c.category_id)
            .collect();
        assert_eq!(ids, vec![10, 11]);
        assert!(filter_child_categories(&sample(), 99).is_empty());
    }
}
