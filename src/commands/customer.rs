use clap::{Args, Subcommand};

use shopadmin_core::projection::customer_page;
use shopadmin_core::{AdminState, FetchStatus, NewCustomer};

#[derive(Args)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand)]
pub enum CustomerSubcommand {
    /// List customers
    List {
        /// Case-insensitive search on name or email
        #[arg(long, short, default_value = "")]
        search: String,

        /// Page number (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Add a customer
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,
    },

    /// Update an existing customer
    Update {
        /// Customer ID
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a customer
    Delete {
        /// Customer ID
        id: u64,
    },
}

impl CustomerCommand {
    pub async fn run(self, state: &mut AdminState) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            CustomerSubcommand::List { search, page } => {
                state.customers.fetch_all().await;
                if state.customers.status() == FetchStatus::Failed {
                    println!("Failed to load customers.");
                    return Ok(());
                }

                let page = customer_page(state.customers.customers(), &search, page);
                if page.items.is_empty() {
                    println!("No customers found.");
                    return Ok(());
                }
                println!(
                    "{:>6}  {:<25}  {:<30}  {}",
                    "ID", "Name", "Email", "Phone"
                );
                for customer in &page.items {
                    println!(
                        "{:>6}  {:<25}  {:<30}  {}",
                        customer.id, customer.name, customer.email, customer.phone
                    );
                }
                println!(
                    "\nPage {} of {} ({} matching)",
                    page.page, page.total_pages, page.total_items
                );
            }

            CustomerSubcommand::Add { name, email, phone } => {
                let created = state
                    .customers
                    .create(&NewCustomer::new(name, email, phone))
                    .await?;
                println!("Created customer {} ({})", created.id, created.name);
            }

            CustomerSubcommand::Update {
                id,
                name,
                email,
                phone,
            } => {
                state.customers.fetch_all().await;
                if state.customers.status() == FetchStatus::Failed {
                    return Err("Failed to load customers".into());
                }
                let existing = state
                    .customers
                    .customers()
                    .iter()
                    .find(|c| c.id == id)
                    .ok_or_else(|| format!("No customer with id {}", id))?;

                let mut customer = existing.clone();
                if let Some(name) = name {
                    customer.name = name;
                }
                if let Some(email) = email {
                    customer.email = email;
                }
                if let Some(phone) = phone {
                    customer.phone = phone;
                }

                let updated = state.customers.update(&customer).await?;
                println!("Updated customer {} ({})", updated.id, updated.name);
            }

            CustomerSubcommand::Delete { id } => {
                let deleted = state.customers.delete(id).await?;
                println!("Deleted customer {}", deleted);
            }
        }

        Ok(())
    }
}
