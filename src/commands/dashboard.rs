use clap::Args;

use shopadmin_core::{AdminState, DashboardStats, FetchStatus};

#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn run(self, state: &mut AdminState) -> Result<(), Box<dyn std::error::Error>> {
        tokio::join!(
            state.orders.fetch_all(),
            state.products.fetch_all(),
            state.customers.fetch_all(),
        );
        if state.orders.status() == FetchStatus::Failed {
            println!("Failed to load orders.");
            return Ok(());
        }

        let stats = DashboardStats::compute(
            state.orders.orders(),
            state.products.products(),
            state.customers.customers(),
        );

        println!("Dashboard");
        println!("=========\n");
        println!("Total orders:    {}", stats.total_orders);
        println!("Total products:  {}", stats.total_products);
        println!("Total customers: {}", stats.total_customers);
        println!("Total revenue:   {:.2}", stats.total_revenue);

        if !stats.best_sellers.is_empty() {
            println!("\nBest sellers");
            for (title, units) in &stats.best_sellers {
                println!("  {:<45}  {:>5} sold", title, units);
            }
        }

        if !stats.monthly_revenue.is_empty() {
            println!("\nMonthly revenue");
            for (month, revenue) in &stats.monthly_revenue {
                println!("  {}  {:>10.2}", month, revenue);
            }
        }

        if !stats.recent_orders.is_empty() {
            println!("\nRecent orders");
            for order in &stats.recent_orders {
                let items: Vec<String> = order
                    .products
                    .iter()
                    .map(|item| format!("Product {} (x{})", item.product_id, item.quantity))
                    .collect();
                println!(
                    "  #{:<5} user {:<4} {}",
                    order.id,
                    order.user_id,
                    items.join(", ")
                );
            }
        }

        Ok(())
    }
}
