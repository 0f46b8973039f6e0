use clap::{Args, Subcommand, ValueEnum};
use storefront_app::domain::catalog::{
    CatalogService,
    filters::{PriceOrder, search, sort_by_price},
    models::ProductId,
};

use crate::cli::{CliConfig, output::print_product};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products, optionally in one category
    List(ListProductsArgs),
    /// List category names
    Categories,
    /// Show one product
    Show(ShowProductArgs),
    /// Search product titles
    Search(SearchProductsArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortOrder {
    PriceAsc,
    PriceDesc,
}

impl From<SortOrder> for PriceOrder {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::PriceAsc => PriceOrder::Ascending,
            SortOrder::PriceDesc => PriceOrder::Descending,
        }
    }
}

#[derive(Debug, Args)]
struct ListProductsArgs {
    #[arg(long)]
    category: Option<String>,

    #[arg(long, value_enum)]
    sort: Option<SortOrder>,
}

#[derive(Debug, Args)]
struct ShowProductArgs {
    id: u64,
}

#[derive(Debug, Args)]
struct SearchProductsArgs {
    query: String,
}

pub(crate) async fn run(config: &CliConfig, command: ProductsCommand) -> Result<(), String> {
    let catalog = config.catalog();

    match command.command {
        ProductsSubcommand::List(args) => {
            let mut products = match &args.category {
                Some(category) => catalog.products_in_category(category).await,
                None => catalog.list_products().await,
            }
            .map_err(|error| format!("failed to list products: {error}"))?;

            if let Some(order) = args.sort {
                sort_by_price(&mut products, order.into());
            }

            products.iter().for_each(print_product);
        }
        ProductsSubcommand::Categories => {
            let categories = catalog
                .list_categories()
                .await
                .map_err(|error| format!("failed to list categories: {error}"))?;

            for category in categories {
                println!("{category}");
            }
        }
        ProductsSubcommand::Show(args) => {
            let product = catalog
                .get_product(ProductId(args.id))
                .await
                .map_err(|error| format!("failed to load product: {error}"))?;

            print_product(&product);
            println!("rating: {} ({} reviews)", product.rating.rate, product.rating.count);

            if !product.description.is_empty() {
                println!();
                println!("{}", product.description);
            }
        }
        ProductsSubcommand::Search(args) => {
            let products = catalog
                .list_products()
                .await
                .map_err(|error| format!("failed to list products: {error}"))?;

            let matches = search(&products, &args.query);

            if matches.is_empty() {
                println!("no products match {:?}", args.query);
            }

            matches.into_iter().for_each(print_product);
        }
    }

    Ok(())
}
