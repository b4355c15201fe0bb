//! Terminal rendering for command results.
//!
//! Every function here returns a `String` so the handlers decide where output
//! goes. Colors come from [`super::styles`]; `console` drops them when stdout
//! is not a terminal.

use super::styles;
use chrono::{DateTime, Utc};
use farm2homeapp::api::{CartSummary, CmdMessage, CmdResult, FieldErrors, MessageLevel};
use farm2homeapp::model::{Deal, FarmerRecord, Product};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 22;
const PRICE_WIDTH: usize = 12;

/// Renders every section present in `result`, messages first.
pub fn result(result: &CmdResult, now: DateTime<Utc>) -> String {
    let mut out = messages(&result.messages);
    if !result.products.is_empty() {
        out.push_str(&products(&result.products));
    }
    if !result.deals.is_empty() {
        out.push_str(&deals(&result.deals));
    }
    if !result.categories.is_empty() {
        out.push_str(&categories(&result.categories));
    }
    if let Some(summary) = &result.cart_summary {
        out.push_str(&cart(summary));
    }
    if !result.farmers.is_empty() {
        out.push_str(&farmers(&result.farmers, now));
    }
    out
}

pub fn messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => styles::MUTED.apply_to(&message.content),
            MessageLevel::Success => styles::SUCCESS.apply_to(&message.content),
            MessageLevel::Warning => styles::WARNING.apply_to(&message.content),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

pub fn products(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "{} {} {} {}\n",
            styles::INDEX.apply_to(format!("{:>3}.", product.id)),
            styles::TITLE.apply_to(pad_to_width(&product.name, NAME_WIDTH)),
            styles::PRICE.apply_to(pad_to_width(&product.price, PRICE_WIDTH)),
            styles::MUTED.apply_to(&product.category),
        ));
    }
    out
}

pub fn deals(deals: &[Deal]) -> String {
    let mut out = String::new();
    for deal in deals {
        out.push_str(&format!(
            "{} {} {}\n",
            styles::TITLE.apply_to(pad_to_width(&deal.name, NAME_WIDTH)),
            styles::OFFER.apply_to(pad_to_width(&deal.offer, PRICE_WIDTH)),
            styles::PRICE.apply_to(&deal.price),
        ));
    }
    out
}

pub fn categories(categories: &[String]) -> String {
    categories.iter().map(|c| format!("{}\n", c)).collect()
}

pub fn cart(summary: &CartSummary) -> String {
    match summary {
        CartSummary::Empty => format!("{}\n", styles::MUTED.apply_to(summary)),
        CartSummary::Items { total_items, lines } => {
            let mut out = format!(
                "{}\n",
                styles::TITLE.apply_to(format!("Cart ({} items):", total_items))
            );
            for line in lines {
                out.push_str(&format!(
                    "  {} {} {}\n",
                    pad_to_width(&line.name, NAME_WIDTH),
                    styles::INDEX.apply_to(format!("x{:<3}", line.quantity)),
                    styles::PRICE.apply_to(&line.price),
                ));
            }
            out
        }
    }
}

pub fn farmers(records: &[FarmerRecord], now: DateTime<Utc>) -> String {
    records.iter().map(|r| farmer(r, now)).collect()
}

pub fn farmer(record: &FarmerRecord, now: DateTime<Utc>) -> String {
    format!(
        "{} {}  {}\n    {}  {}\n    Crops: {}\n",
        styles::INDEX.apply_to(format!("[{}]", record.id)),
        styles::TITLE.apply_to(&record.name),
        styles::MUTED.apply_to(format_time_ago(record.created_at, now)),
        record.mobile,
        record.location,
        record.crops,
    )
}

/// One line per invalid field, in form order.
pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::from("Please fix the following fields:");
    for (field, err) in errors.iter() {
        out.push_str(&format!("\n  {}: {}", field, styles::ERROR.apply_to(err)));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
