use clap::{Args, Subcommand, ValueEnum};

use shopadmin_core::projection::product_page;
use shopadmin_core::{AdminState, Category, FetchStatus, Product, ProductSort};

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum SortField {
    #[default]
    Title,
    Price,
    Category,
}

impl From<SortField> for ProductSort {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Title => ProductSort::Title,
            SortField::Price => ProductSort::Price,
            SortField::Category => ProductSort::Category,
        }
    }
}

#[derive(Args)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// List products
    List {
        /// Case-insensitive title search
        #[arg(long, short, default_value = "")]
        search: String,

        /// Sort field
        #[arg(long, value_enum, default_value = "title")]
        sort: SortField,

        /// Page number (1-based)
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Show one product, fetched directly from the catalog
    Show {
        /// Product ID
        id: u64,
    },

    /// Add a product to the catalog
    Add {
        /// Product title
        #[arg(long)]
        title: String,

        /// Price
        #[arg(long)]
        price: f64,

        /// Category (Electronics, Fashion, "Home & Kitchen", Sports)
        #[arg(long)]
        category: String,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update an existing product
    Update {
        /// Product ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<f64>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New image URL
        #[arg(long)]
        image: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: u64,
    },
}

impl ProductCommand {
    pub async fn run(self, state: &mut AdminState) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            ProductSubcommand::List { search, sort, page } => {
                state.products.fetch_all().await;
                if state.products.status() == FetchStatus::Failed {
                    println!("Failed to load products.");
                    return Ok(());
                }

                let page = product_page(state.products.products(), &search, sort.into(), page);
                if page.items.is_empty() {
                    println!("No products found.");
                    return Ok(());
                }
                for product in &page.items {
                    println!(
                        "{:>6}  {:<45}  {:>9.2}  {}",
                        product.id, product.title, product.price, product.category
                    );
                }
                println!(
                    "\nPage {} of {} ({} matching)",
                    page.page, page.total_pages, page.total_items
                );
            }

            ProductSubcommand::Show { id } => {
                let product = state.products.fetch(id).await?;
                println!("ID:          {}", product.id);
                println!("Title:       {}", product.title);
                println!("Price:       {:.2}", product.price);
                println!("Category:    {}", product.category);
                println!("Image:       {}", product.image_url());
                if let Some(description) = &product.description {
                    println!("Description: {}", description);
                }
                if let Some(rating) = &product.rating {
                    println!("Rating:      {:.1} ({} votes)", rating.rate, rating.count);
                }
            }

            ProductSubcommand::Add {
                title,
                price,
                category,
                image,
                description,
            } => {
                let mut product = Product::new(title, price, Category::from(category));
                if let Some(image) = image {
                    product = product.with_image(image);
                }
                if let Some(description) = description {
                    product = product.with_description(description);
                }
                let created = state.products.create(&product).await?;
                println!("Created product {} ({})", created.id, created.title);
            }

            ProductSubcommand::Update {
                id,
                title,
                price,
                category,
                image,
                description,
            } => {
                state.products.fetch_all().await;
                if state.products.status() == FetchStatus::Failed {
                    return Err("Failed to load products".into());
                }
                let existing = state
                    .products
                    .products()
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or_else(|| format!("No product with id {}", id))?;

                let mut product = existing.clone();
                if let Some(title) = title {
                    product.title = title;
                }
                if let Some(price) = price {
                    product.price = price;
                }
                if let Some(category) = category {
                    product.category = Category::from(category);
                }
                if let Some(image) = image {
                    product.image = Some(image);
                }
                if let Some(description) = description {
                    product.description = Some(description);
                }

                let updated = state.products.update(&product).await?;
                println!("Updated product {} ({})", updated.id, updated.title);
            }

            ProductSubcommand::Delete { id } => {
                let deleted = state.products.delete(id).await?;
                println!("Deleted product {}", deleted);
            }
        }

        Ok(())
    }
}
