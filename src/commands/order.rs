use clap::{Args, Subcommand};
use std::io::{self, Write};

use shopadmin_core::projection::order_page;
use shopadmin_core::{AdminState, FetchStatus, Order, Product};

#[derive(Args)]
pub struct OrderCommand {
    #[command(subcommand)]
    pub command: OrderSubcommand,
}

#[derive(Subcommand)]
pub enum OrderSubcommand {
    /// List orders with their line items resolved against the catalog
    List {
        /// Filter by user ID (substring match)
        #[arg(long, short, default_value = "")]
        user: String,

        /// Page number (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Delete an order
    Delete {
        /// Order ID
        id: u64,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl OrderCommand {
    pub async fn run(self, state: &mut AdminState) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            OrderSubcommand::List { user, page } => {
                // Products are needed to resolve line items.
                tokio::join!(state.orders.fetch_all(), state.products.fetch_all());
                if state.orders.status() == FetchStatus::Failed {
                    println!("Failed to load orders.");
                    return Ok(());
                }

                let page = order_page(state.orders.orders(), &user, page);
                if page.items.is_empty() {
                    println!("No orders found.");
                    return Ok(());
                }
                for order in &page.items {
                    print_order(order, state.products.products());
                }
                println!(
                    "Page {} of {} ({} matching)",
                    page.page, page.total_pages, page.total_items
                );
            }

            OrderSubcommand::Delete { id, force } => {
                if !force {
                    print!("Delete order {}? [y/N] ", id);
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                let deleted = state.orders.delete(id).await?;
                println!("Deleted order {}", deleted);
            }
        }

        Ok(())
    }
}

fn print_order(order: &Order, products: &[Product]) {
    println!("Order {} (user {}, {})", order.id, order.user_id, order.date.format("%Y-%m-%d"));
    let mut total = 0.0;
    for item in &order.products {
        let product = products.iter().find(|p| p.id == item.product_id);
        let title = product.map(|p| p.title.as_str()).unwrap_or("Unknown Product");
        let price = product.map(|p| p.price).unwrap_or(0.0);
        total += price * item.quantity as f64;
        println!("  {:<45}  {:>9.2}  x{}", title, price, item.quantity);
    }
    println!("  Total: {:.2}\n", total);
}
