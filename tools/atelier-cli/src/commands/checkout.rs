//! Walk the multi-step checkout flow for a single product.

use anyhow::{anyhow, Result};
use atelier_commerce::prelude::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use super::CheckoutArgs;
use crate::commands::track;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let store = &ctx.config.store;
    let catalog = demo_catalog(store.currency);

    let product = match args.product {
        Some(ref id) => catalog
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown product id: {} (see `atelier products`)", id))?,
        None => pick_product(&catalog)?,
    };

    ctx.output.header(&format!("Checkout: {}", product.name));
    ctx.output.kv("Price", &product.price.display());

    // The session lives exactly as long as this command; aborting the
    // prompts drops it with nothing persisted.
    let mut session = CheckoutSession::open(product.reference(), product.price);
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    run_address_step(ctx, &mut session, store)?;

    // Payment step, with the option to step back and edit the address.
    loop {
        ctx.output
            .step(2, 3, CheckoutStep::Payment.display_name());
        if !prompt_payment(&mut session.payment)? {
            session.back()?;
            run_address_step(ctx, &mut session, store)?;
            continue;
        }
        match session.submit_payment() {
            Ok(()) => break,
            Err(err) => print_field_errors(ctx, err)?,
        }
    }

    prompt_coupon(ctx, &mut session, store)?;

    ctx.output
        .step(3, 3, CheckoutStep::Confirmation.display_name());
    print_summary(ctx, &session, store);

    let place = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Place order?")
        .default(true)
        .interact()?;
    if !place {
        ctx.output.info("Checkout closed; nothing was ordered");
        return Ok(());
    }

    let mut order = session.place_order(rng.as_mut())?;
    ctx.output
        .success(&format!("Order placed: {}", order.order_id));
    ctx.output.kv("Expected delivery", &order.delivery_display());

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }
    if args.no_track {
        ctx.output
            .info(&format!("Track later with: atelier track {}", order.order_id));
        return Ok(());
    }

    let interval = store.tracking_interval_secs;
    track::follow(ctx, &mut order, interval).await
}

/// Prompt the address form until it validates.
fn run_address_step(
    ctx: &Context,
    session: &mut CheckoutSession,
    store: &StoreConfig,
) -> Result<()> {
    loop {
        ctx.output
            .step(1, 3, CheckoutStep::Address.display_name());
        prompt_address(&mut session.address)?;
        match session.submit_address(store) {
            Ok(()) => return Ok(()),
            Err(err) => print_field_errors(ctx, err)?,
        }
    }
}

fn pick_product(catalog: &[Product]) -> Result<Product> {
    let labels: Vec<String> = catalog
        .iter()
        .map(|p| format!("{} - {} ({})", p.name, p.price.display(), p.category))
        .collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a product")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(catalog[index].clone())
}

/// Prompt every address field, pre-filled with what was entered before so
/// stepping back never loses input.
fn prompt_address(form: &mut AddressForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    form.full_name = text(&theme, "Full name", &form.full_name)?;
    form.email = text(&theme, "Email", &form.email)?;
    form.phone = text(&theme, "Phone number", &form.phone)?;
    form.street = text(&theme, "Street address", &form.street)?;
    form.city = text(&theme, "City", &form.city)?;
    form.state = text(&theme, "State", &form.state)?;
    form.postal_code = text(&theme, "ZIP/Postal code", &form.postal_code)?;
    form.country = text(&theme, "Country", &form.country)?;
    Ok(())
}

/// Prompt the payment method and any card fields. Returns `false` when the
/// user picked "back to address" instead of a method.
fn prompt_payment(form: &mut PaymentForm) -> Result<bool> {
    let theme = ColorfulTheme::default();

    let mut labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.display_name()).collect();
    labels.push("← Back to address");

    let default = PaymentMethod::ALL
        .iter()
        .position(|m| *m == form.method)
        .unwrap_or(0);
    let index = Select::with_theme(&theme)
        .with_prompt("Payment method")
        .items(&labels)
        .default(default)
        .interact()?;

    if index >= PaymentMethod::ALL.len() {
        return Ok(false);
    }
    form.method = PaymentMethod::ALL[index];

    if form.method.requires_card() {
        form.card.card_name = text(&theme, "Name on card", &form.card.card_name)?;
        form.card.card_number = text(&theme, "Card number", &form.card.card_number)?;
        form.card.expiry_date = text(&theme, "Expiry (MM/YY)", &form.card.expiry_date)?;
        form.card.cvv = text(&theme, "CVV", &form.card.cvv)?;
    }

    Ok(true)
}

fn prompt_coupon(ctx: &Context, session: &mut CheckoutSession, store: &StoreConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    let wants_coupon = Confirm::with_theme(&theme)
        .with_prompt("Apply a coupon code?")
        .default(false)
        .interact()?;
    if !wants_coupon {
        return Ok(());
    }

    let code: String = Input::with_theme(&theme)
        .with_prompt("Coupon code")
        .allow_empty(true)
        .interact_text()?;
    if code.trim().is_empty() {
        return Ok(());
    }

    let percent = session.apply_coupon(code, store);
    if percent > 0 {
        ctx.output
            .success(&format!("Coupon applied: {}% off", percent));
    } else {
        ctx.output.warn("Coupon not recognized; no discount applied");
    }
    Ok(())
}

/// Surface validation failures inline; anything else bubbles up.
fn print_field_errors(ctx: &Context, err: CheckoutError) -> Result<()> {
    match err {
        CheckoutError::Validation(errors) => {
            for e in errors.iter() {
                ctx.output.field_error(e.field, &e.message);
            }
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn print_summary(ctx: &Context, session: &CheckoutSession, store: &StoreConfig) {
    let pricing = session.pricing(store);

    ctx.output.header("Order Summary");
    ctx.output.kv("Item", &session.product.name);
    for line in session.address.multi_line().lines() {
        ctx.output.list_item(line);
    }
    ctx.output.kv("Payment", &session.payment.summary());
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if pricing.has_discount() {
        ctx.output.kv(
            &format!("Discount ({}%)", pricing.discount_percent),
            &format!("-{}", pricing.discount_amount.display()),
        );
    }
    let delivery = if pricing.delivery_charge.is_zero() {
        "FREE".to_string()
    } else {
        pricing.delivery_charge.display()
    };
    ctx.output.kv("Delivery", &delivery);
    if !pricing.tax.is_zero() {
        ctx.output.kv("Tax", &pricing.tax.display());
    }
    ctx.output.kv("Total", &pricing.total.display());
}

fn text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !initial.is_empty() {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}
