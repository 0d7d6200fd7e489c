//! List the demo catalog.

use anyhow::Result;
use atelier_commerce::catalog::demo_catalog;

use crate::context::Context;

/// Run the products command.
pub async fn run(ctx: &Context) -> Result<()> {
    let products = demo_catalog(ctx.config.store.currency);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");

    let widths = [9, 32, 22, 10, 10];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], &widths);
    for product in &products {
        let price = product.price.display();
        let rating = format!("{:.1} ({})", product.rating, product.reviews);
        let mut name = product.name.clone();
        if product.can_try_on {
            name.push_str(" *");
        }
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.category,
                &price,
                &rating,
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.info("* supports virtual try-on");
    ctx.output.info("Buy with: atelier checkout --product <ID>");

    Ok(())
}
