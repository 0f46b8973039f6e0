use clap::{Args, Subcommand};
use storefront_app::domain::{
    catalog::{CatalogService, models::ProductId},
    checkout::models::ShippingPolicy,
};

use crate::cli::{
    CliConfig,
    output::{print_cart_item, print_totals},
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a product to the cart
    Add(AddItemArgs),
    /// Remove a product from the cart
    Remove(ProductArgs),
    /// Set the quantity of a product; zero or less removes it
    Set(SetQuantityArgs),
    /// Show the cart and its totals
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddItemArgs {
    product_id: u64,

    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

#[derive(Debug, Args)]
struct ProductArgs {
    product_id: u64,
}

#[derive(Debug, Args)]
struct SetQuantityArgs {
    product_id: u64,

    #[arg(allow_negative_numbers = true)]
    quantity: i64,
}

pub(crate) async fn run(config: &CliConfig, command: CartCommand) -> Result<(), String> {
    let mut cart = config.cart()?;

    match command.command {
        CartSubcommand::Add(args) => {
            let product = config
                .catalog()
                .get_product(ProductId(args.product_id))
                .await
                .map_err(|error| format!("failed to load product: {error}"))?;

            let title = product.title.clone();

            cart.add(product, args.quantity)
                .map_err(|error| format!("failed to update cart: {error}"))?;

            println!("added {} x {title}", args.quantity);
        }
        CartSubcommand::Remove(args) => {
            cart.remove(ProductId(args.product_id))
                .map_err(|error| format!("failed to update cart: {error}"))?;
        }
        CartSubcommand::Set(args) => {
            cart.update_quantity(ProductId(args.product_id), args.quantity)
                .map_err(|error| format!("failed to update cart: {error}"))?;
        }
        CartSubcommand::Show => {
            if cart.is_empty() {
                println!("cart is empty");
                return Ok(());
            }

            cart.items().iter().for_each(print_cart_item);

            println!();
            println!("items: {}", cart.item_count());
            print_totals(&ShippingPolicy::default().totals(cart.total_price()));
        }
        CartSubcommand::Clear => {
            cart.clear()
                .map_err(|error| format!("failed to clear cart: {error}"))?;

            println!("cart cleared");
        }
    }

    Ok(())
}
