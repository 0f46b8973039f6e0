use rust_decimal::Decimal;
use storefront_app::domain::{
    cart::models::CartItem,
    catalog::models::Product,
    checkout::models::{CheckoutTotals, PlacedOrder},
    orders::models::Order,
    profiles::models::Profile,
};

pub(crate) fn money(amount: Decimal) -> String {
    format!("{amount:.2} EUR")
}

pub(crate) fn print_product(product: &Product) {
    println!(
        "{:>4}  {:>12}  {}  [{}]",
        product.id,
        money(product.price),
        product.title,
        product.category
    );
}

pub(crate) fn print_cart_item(item: &CartItem) {
    println!(
        "{:>4}  {} x {}  {:>12}",
        item.product.id,
        item.quantity,
        item.product.title,
        money(item.line_total())
    );
}

pub(crate) fn print_totals(totals: &CheckoutTotals) {
    println!("subtotal: {}", money(totals.subtotal));
    println!("shipping: {}", money(totals.shipping));
    println!("total: {}", money(totals.total));
}

pub(crate) fn print_placed_order(placed: &PlacedOrder) {
    println!("order_id: {}", placed.order_id);
    println!("total: {}", money(placed.total));
    println!("customer: {}", placed.payment.customer);
}

pub(crate) fn print_order(order: &Order) {
    println!("order_id: {}", order.id);
    println!("created_at: {}", order.created_at);
    println!("total: {}", money(order.total_price));
    println!("payment_status: {}", order.payment_status);
    println!(
        "delivery_address: {}",
        order
            .delivery_address
            .as_deref()
            .filter(|address| !address.is_empty())
            .unwrap_or("none")
    );

    for line in &order.items {
        println!(
            "  {:>4}  {} x {}  {}",
            line.product_id,
            line.quantity,
            line.title,
            money(line.price)
        );
    }

    println!();
}

pub(crate) fn print_profile(profile: &Profile) {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "none".to_string());

    println!("user_id: {}", profile.id);
    println!("full_name: {}", field(&profile.full_name));
    println!("delivery_address: {}", field(&profile.delivery_address));
    println!("phone: {}", field(&profile.phone));

    if let Some(updated_at) = profile.updated_at {
        println!("updated_at: {updated_at}");
    }
}
