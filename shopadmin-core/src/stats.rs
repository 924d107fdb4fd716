//! Dashboard figures computed from the three collections.

use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{Customer, Order, Product};

/// How many best sellers and recent orders the dashboard shows.
const TOP_SELLERS: usize = 5;
const RECENT_ORDERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub total_products: usize,
    pub total_customers: usize,
    /// Sum of price x quantity over all line items that resolve against the
    /// product catalog; dangling product references contribute nothing.
    pub total_revenue: f64,
    /// Units sold per product title, alphabetical.
    pub units_by_title: Vec<(String, u64)>,
    /// Top titles by units sold, descending.
    pub best_sellers: Vec<(String, u64)>,
    /// Revenue per calendar month of the order date, chronological, keyed by
    /// month abbreviation.
    pub monthly_revenue: Vec<(String, f64)>,
    /// The last orders in collection order.
    pub recent_orders: Vec<Order>,
}

impl DashboardStats {
    pub fn compute(orders: &[Order], products: &[Product], customers: &[Customer]) -> Self {
        let mut revenue = 0.0;
        let mut units: HashMap<String, u64> = HashMap::new();
        let mut monthly: HashMap<u32, f64> = HashMap::new();

        for order in orders {
            let month = order.date.month();
            for item in &order.products {
                let Some(product) = products.iter().find(|p| p.id == item.product_id) else {
                    continue;
                };
                let line = product.price * item.quantity as f64;
                revenue += line;
                *units.entry(product.title.clone()).or_default() += item.quantity as u64;
                *monthly.entry(month).or_default() += line;
            }
        }

        let mut units_by_title: Vec<(String, u64)> = units.into_iter().collect();
        units_by_title.sort_by(|a, b| a.0.cmp(&b.0));

        let mut best_sellers = units_by_title.clone();
        best_sellers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        best_sellers.truncate(TOP_SELLERS);

        let mut monthly_revenue: Vec<(u32, f64)> = monthly.into_iter().collect();
        monthly_revenue.sort_by_key(|(month, _)| *month);
        let monthly_revenue = monthly_revenue
            .into_iter()
            .map(|(month, total)| (month_abbrev(month).to_string(), total))
            .collect();

        let recent_start = orders.len().saturating_sub(RECENT_ORDERS);
        Self {
            total_orders: orders.len(),
            total_products: products.len(),
            total_customers: customers.len(),
            total_revenue: revenue,
            units_by_title,
            best_sellers,
            monthly_revenue,
            recent_orders: orders[recent_start..].to_vec(),
        }
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
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

    fn order(id: u64, month: u32, items: Vec<(u64, u32)>) -> Order {
        Order {
            id,
            user_id: 1,
            date: Utc.with_ymd_and_hms(2020, month, 2, 0, 0, 0).unwrap(),
            products: items
                .into_iter()
                .map(|(product_id, quantity)| LineItem {
                    product_id,
                    quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn test_revenue_and_units() {
        let products = vec![product(1, "Lamp", 10.0), product(2, "Mug", 4.0)];
        let orders = vec![order(1, 3, vec![(1, 2), (2, 3)]), order(2, 4, vec![(1, 1)])];

        let stats = DashboardStats::compute(&orders, &products, &[]);
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_revenue, 42.0);
        assert_eq!(
            stats.units_by_title,
            vec![("Lamp".to_string(), 3), ("Mug".to_string(), 3)]
        );
        assert_eq!(
            stats.monthly_revenue,
            vec![("Mar".to_string(), 32.0), ("Apr".to_string(), 10.0)]
        );
    }

    #[test]
    fn test_dangling_product_references_are_skipped() {
        let products = vec![product(1, "Lamp", 10.0)];
        let orders = vec![order(1, 1, vec![(1, 1), (999, 5)])];

        let stats = DashboardStats::compute(&orders, &products, &[]);
        assert_eq!(stats.total_revenue, 10.0);
        assert_eq!(stats.units_by_title.len(), 1);
    }

    #[test]
    fn test_best_sellers_top_five_descending() {
        let products: Vec<Product> = (1..=7)
            .map(|i| product(i, &format!("P{}", i), 1.0))
            .collect();
        let orders = vec![order(
            1,
            1,
            (1..=7).map(|i| (i, i as u32)).collect::<Vec<_>>(),
        )];

        let stats = DashboardStats::compute(&orders, &products, &[]);
        assert_eq!(stats.best_sellers.len(), 5);
        assert_eq!(stats.best_sellers[0], ("P7".to_string(), 7));
        assert_eq!(stats.best_sellers[4], ("P3".to_string(), 3));
    }

    #[test]
    fn test_recent_orders_are_the_last_five() {
        let orders: Vec<Order> = (1..=8).map(|i| order(i, 1, vec![])).collect();
        let stats = DashboardStats::compute(&orders, &[], &[]);
        let ids: Vec<u64> = stats.recent_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
    }
}
