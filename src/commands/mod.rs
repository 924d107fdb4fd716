mod config_cmd;
mod customer;
mod dashboard;
mod order;
mod product;

pub use config_cmd::ConfigCommand;
pub use customer::CustomerCommand;
pub use dashboard::DashboardCommand;
pub use order::OrderCommand;
pub use product::ProductCommand;
