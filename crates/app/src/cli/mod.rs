use clap::{Parser, Subcommand};

mod auth;
mod cart;
mod checkout;
mod config;
mod orders;
mod output;
mod products;
mod profile;

pub(crate) use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Auth(auth::AuthCommand),
    Products(products::ProductsCommand),
    Cart(cart::CartCommand),
    Checkout(checkout::CheckoutArgs),
    Orders(orders::OrdersCommand),
    Profile(profile::ProfileCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Auth(command) => auth::run(&self.config, command).await,
            Commands::Products(command) => products::run(&self.config, command).await,
            Commands::Cart(command) => cart::run(&self.config, command).await,
            Commands::Checkout(args) => checkout::run(&self.config, args).await,
            Commands::Orders(command) => orders::run(&self.config, command).await,
            Commands::Profile(command) => profile::run(&self.config, command).await,
        }
    }
}
