use clap::{Args, Subcommand};
use storefront_app::domain::orders::models::OrderId;

use crate::cli::{
    CliConfig, checkout,
    output::{print_order, print_placed_order},
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List your orders, newest first
    List,
    /// Delete one of your orders
    Delete(OrderArgs),
    /// Pay a pending order
    Pay(PayOrderArgs),
    /// Change the delivery address of an order
    Address(AddressArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    order_id: i64,
}

#[derive(Debug, Args)]
struct PayOrderArgs {
    order_id: i64,

    /// Request the payment session without confirming it
    #[arg(long)]
    no_confirm: bool,
}

#[derive(Debug, Args)]
struct AddressArgs {
    order_id: i64,

    address: String,
}

pub(crate) async fn run(config: &CliConfig, command: OrdersCommand) -> Result<(), String> {
    let storefront = config.storefront()?;
    let session = config.session(&storefront).await?;
    let orders = storefront.orders_service();

    match command.command {
        OrdersSubcommand::List => {
            let list = orders
                .list_orders(&session)
                .await
                .map_err(|error| format!("failed to list orders: {error}"))?;

            if list.is_empty() {
                println!("no orders yet");
            }

            list.iter().for_each(print_order);
        }
        OrdersSubcommand::Delete(args) => {
            orders
                .delete_order(&session, OrderId(args.order_id))
                .await
                .map_err(|error| format!("failed to delete order: {error}"))?;

            println!("order {} deleted", args.order_id);
        }
        OrdersSubcommand::Pay(args) => {
            let placed = storefront
                .checkout()
                .retry_payment(&session, OrderId(args.order_id))
                .await
                .map_err(|error| format!("failed to start payment: {error}"))?;

            print_placed_order(&placed);

            if !args.no_confirm {
                checkout::confirm(config, &storefront, &session, &placed).await?;
            }
        }
        OrdersSubcommand::Address(args) => {
            let order = orders
                .update_delivery_address(&session, OrderId(args.order_id), &args.address)
                .await
                .map_err(|error| format!("failed to update address: {error}"))?;

            print_order(&order);
        }
    }

    Ok(())
}
