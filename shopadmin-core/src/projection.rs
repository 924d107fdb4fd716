//! Filtered, sorted, paginated views derived from store snapshots.
//!
//! Projections are pure: recomputed from the full collection on every call,
//! never cached or indexed. Output order depends only on the filtered set
//! and the sort key, never on prior pagination.

use crate::models::{Customer, Order, Product};

pub const PRODUCTS_PER_PAGE: usize = 8;
pub const ORDERS_PER_PAGE: usize = 6;
pub const CUSTOMERS_PER_PAGE: usize = 15;

/// One page of a filtered projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number, clamped into range.
    pub page: usize,
    pub total_pages: usize,
    /// Number of entities matching the filter, across all pages.
    pub total_items: usize,
}

/// Sort key for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Title,
    Price,
    Category,
}

/// Products whose title contains `query` (case-insensitive), sorted, paged.
pub fn product_page(
    products: &[Product],
    query: &str,
    sort: ProductSort,
    page: usize,
) -> Page<Product> {
    let query = query.to_lowercase();
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&query))
        .cloned()
        .collect();
    match sort {
        ProductSort::Title => matched.sort_by(|a, b| a.title.cmp(&b.title)),
        ProductSort::Price => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        ProductSort::Category => matched.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str())),
    }
    paginate(matched, page, PRODUCTS_PER_PAGE)
}

/// Orders whose user id (decimal) contains `user_filter`, paged.
///
/// An empty filter matches everything.
pub fn order_page(orders: &[Order], user_filter: &str, page: usize) -> Page<Order> {
    let matched: Vec<Order> = orders
        .iter()
        .filter(|o| user_filter.is_empty() || o.user_id.to_string().contains(user_filter))
        .cloned()
        .collect();
    paginate(matched, page, ORDERS_PER_PAGE)
}

/// Customers whose name or email contains `query` (case-insensitive), paged.
pub fn customer_page(customers: &[Customer], query: &str, page: usize) -> Page<Customer> {
    let query = query.to_lowercase();
    let matched: Vec<Customer> = customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query) || c.email.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();
    paginate(matched, page, CUSTOMERS_PER_PAGE)
}

fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();
    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, LineItem};
    use chrono::{TimeZone, Utc};

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: Category::Electronics,
            image: None,
            description: None,
            rating: None,
        }
    }

    fn customer(id: u64, name: &str, email: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    fn order(id: u64, user_id: u64) -> Order {
        Order {
            id,
            user_id,
            date: Utc.with_ymd_and_hms(2020, 3, 2, 0, 0, 0).unwrap(),
            products: vec![LineItem {
                product_id: 1,
                quantity: 1,
            }],
        }
    }

    #[test]
    fn test_product_filter_is_case_insensitive_and_sorts_by_price() {
        let products = vec![
            product(1, "Smartphone", 300.0),
            product(2, "Headphones", 100.0),
            product(3, "Desk Lamp", 25.0),
            product(4, "Photo Frame", 10.0),
        ];
        let page = product_page(&products, "ph", ProductSort::Price, 1);
        let ids: Vec<u64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_product_sort_by_title_and_category_name() {
        let mut products = vec![product(1, "Zebra Mug", 5.0), product(2, "Anvil", 50.0)];
        products[0].category = Category::HomeAndKitchen;
        products[1].category = Category::Electronics;

        let by_title = product_page(&products, "", ProductSort::Title, 1);
        assert_eq!(by_title.items[0].id, 2);

        let by_category = product_page(&products, "", ProductSort::Category, 1);
        assert_eq!(by_category.items[0].category, Category::Electronics);
    }

    #[test]
    fn test_product_pagination_slices_full_sorted_set() {
        let products: Vec<Product> = (1..=20)
            .map(|i| product(i, &format!("Item {:02}", i), i as f64))
            .collect();
        let first = product_page(&products, "", ProductSort::Price, 1);
        assert_eq!(first.items.len(), PRODUCTS_PER_PAGE);
        assert_eq!(first.total_pages, 3);

        let last = product_page(&products, "", ProductSort::Price, 3);
        assert_eq!(last.items.len(), 4);
        assert_eq!(last.items[0].id, 17);

        // Same inputs, same order: no dependence on earlier pagination.
        let again = product_page(&products, "", ProductSort::Price, 3);
        assert_eq!(last, again);
    }

    #[test]
    fn test_page_number_is_clamped() {
        let products = vec![product(1, "Only", 1.0)];
        let page = product_page(&products, "", ProductSort::Title, 99);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);

        let empty = product_page(&[], "", ProductSort::Title, 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_order_filter_matches_user_id_substring() {
        let orders = vec![order(1, 4), order(2, 14), order(3, 7)];
        let page = order_page(&orders, "4", 1);
        let ids: Vec<u64> = page.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let all = order_page(&orders, "", 1);
        assert_eq!(all.total_items, 3);
    }

    #[test]
    fn test_customer_filter_matches_name_or_email() {
        let customers = vec![
            customer(1, "Leanne Graham", "sincere@april.biz"),
            customer(2, "Ervin Howell", "shanna@melissa.tv"),
            customer(3, "Clementine Bauch", "nathan@yesenia.net"),
        ];
        let by_name = customer_page(&customers, "LEANNE", 1);
        assert_eq!(by_name.items.len(), 1);
        assert_eq!(by_name.items[0].id, 1);

        let by_email = customer_page(&customers, "melissa", 1);
        assert_eq!(by_email.items.len(), 1);
        assert_eq!(by_email.items[0].id, 2);
    }
}
