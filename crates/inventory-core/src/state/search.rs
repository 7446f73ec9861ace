//! Client-side search over the loaded list

use crate::domain::InventoryItem;

/// Case-insensitive substring match on item name or category
fn matches(item: &InventoryItem, query: &str) -> bool {
    let query = query.to_lowercase();
    item.item_name.to_lowercase().contains(&query)
        || item.category.label().to_lowercase().contains(&query)
}

/// Items matching `query`, in list order; an empty query matches everything
pub fn filter_items<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| matches(item, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample_items, Category, InventoryItem, ItemFields};

    fn chair_and_rice() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("a", ItemFields { item_name: "Chair".into(), quantity: 1, price: 10.0, category: Category::Furniture }),
            InventoryItem::new("b", ItemFields { item_name: "Rice".into(), quantity: 5, price: 2.0, category: Category::Groceries }),
        ]
    }

    #[test]
    fn test_search_by_name() {
        let items = chair_and_rice();
        let found = filter_items(&items, "chair");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_name, "Chair");
    }

    #[test]
    fn test_search_by_category_prefix() {
        let items = chair_and_rice();
        let found = filter_items(&items, "FURN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, Category::Furniture);
    }

    #[test]
    fn test_search_substring_inside_category() {
        let items = chair_and_rice();
        let found = filter_items(&items, "oc");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_name, "Rice");
    }

    #[test]
    fn test_empty_query_matches_all_in_order() {
        let items = sample_items();
        let found: Vec<_> = filter_items(&items, "").into_iter().map(|i| i.id.as_str()).collect();
        assert_eq!(found, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_items(&sample_items(), "sofa").is_empty());
    }
}
