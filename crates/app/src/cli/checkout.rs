use clap::Args;
use storefront_app::{
    auth::Session,
    context::Storefront,
    domain::checkout::models::PlacedOrder,
};

use crate::cli::{CliConfig, output::print_placed_order};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Place the order without confirming the payment
    #[arg(long)]
    no_confirm: bool,
}

pub(crate) async fn run(config: &CliConfig, args: CheckoutArgs) -> Result<(), String> {
    let storefront = config.storefront()?;
    let session = config.session(&storefront).await?;
    let mut cart = config.cart()?;

    let placed = storefront
        .checkout()
        .place_order(&session, &mut cart)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    print_placed_order(&placed);

    if args.no_confirm {
        println!("payment pending; run `storefront orders pay {}` to pay", placed.order_id);
        return Ok(());
    }

    confirm(config, &storefront, &session, &placed).await
}

/// Confirm the payment for a placed order with the headless sheet.
pub(crate) async fn confirm(
    config: &CliConfig,
    storefront: &Storefront,
    session: &Session,
    placed: &PlacedOrder,
) -> Result<(), String> {
    let mut sheet = config.payment_sheet()?;

    storefront
        .confirmation()
        .confirm(&mut sheet, session, placed.order_id, &placed.payment)
        .await
        .map_err(|error| {
            format!(
                "{error}; order {} is still pending and can be paid with `storefront orders pay {}`",
                placed.order_id, placed.order_id
            )
        })?;

    println!("payment succeeded, thank you for your order");

    Ok(())
}
