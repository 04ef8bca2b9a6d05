//! Command-line driver
//!
//! Each subcommand maps onto one store operation. Output goes to stdout;
//! logs go to stderr.

use crate::core::{Config, Marketplace, Result};
use crate::listings::{Page, SearchFilters, SortOption};
use crate::notify::Notification;
use crate::storage::StorageKind;
use crate::transactions::{StatusPolicy, TransactionSummary};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shared::{Category, Listing, ListingDraft, StockLevel, Transaction, TransactionStatus};

#[derive(Debug, Parser)]
#[command(name = "marketplace")]
#[command(about = "Buy and sell from the terminal")]
#[command(
    after_help = "Environment:\n  MARKET_DATA_DIR   Data directory\n  MARKET_STORAGE    json | redb | memory\n  STATUS_POLICY     strict | permissive\n  LOG_LEVEL         Log verbosity"
)]
pub struct Cli {
    /// Override MARKET_STORAGE
    #[arg(long, global = true)]
    pub storage: Option<StorageKind>,
    /// Override MARKET_DATA_DIR
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
    /// Override STATUS_POLICY
    #[arg(long, global = true)]
    pub policy: Option<StatusPolicy>,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(storage) = self.storage {
            config.storage = storage;
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(policy) = self.policy {
            config.status_policy = policy;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search and browse the catalog
    Listings {
        #[arg(short, long, default_value = "")]
        query: String,
        /// Repeat to allow several categories
        #[arg(short, long = "category")]
        categories: Vec<Category>,
        #[arg(long)]
        min_price: Option<Decimal>,
        #[arg(long)]
        max_price: Option<Decimal>,
        /// featured | price-low | price-high | newest | rating
        #[arg(short, long, default_value = "featured")]
        sort: SortOption,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one listing
    Show { id: String },
    /// List something for sale
    Sell {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        category: String,
        #[arg(long)]
        condition: Option<String>,
        #[arg(long)]
        description: String,
        #[arg(long)]
        quantity: Option<u32>,
        /// flat | pickup
        #[arg(long)]
        shipping: Option<String>,
    },
    /// Buy a listing
    Buy {
        product_id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List orders, newest first
    Orders {
        #[arg(short, long)]
        status: Option<TransactionStatus>,
    },
    /// Move an order to its next status
    Advance { id: String },
    /// Cancel a pending order
    Cancel { id: String },
    /// Undo the last status change of an order
    Undo { id: String },
    /// Set an order status directly
    SetStatus {
        id: String,
        status: TransactionStatus,
    },
    /// Order counts and total spend
    Summary,
}

/// Run one subcommand against an opened marketplace
pub async fn execute(market: &Marketplace, command: Command) -> Result<()> {
    match command {
        Command::Listings {
            query,
            categories,
            min_price,
            max_price,
            sort,
            page,
        } => {
            let filters = SearchFilters {
                categories,
                min_price,
                max_price,
            };
            print_page(&market.browse(&query, &filters, sort, page));
        }
        Command::Show { id } => match market.listings().get_listing(&id) {
            Some(listing) => print_listing_detail(&listing),
            None => return Err(crate::listings::ListingError::NotFound(id).into()),
        },
        Command::Sell {
            title,
            price,
            category,
            condition,
            description,
            quantity,
            shipping,
        } => {
            let draft = ListingDraft {
                title,
                price,
                category,
                condition,
                description,
                quantity,
                shipping_option: shipping,
            };
            let listing = market.publish_listing(draft).await?;
            println!("Listed {} ({})", listing.title, listing.id);
        }
        Command::Buy {
            product_id,
            quantity,
        } => {
            let transaction = market.buy(&product_id, quantity)?;
            print_transaction(&transaction);
        }
        Command::Orders { status } => {
            let orders = market.orders(status);
            if orders.is_empty() {
                println!("No orders.");
            }
            for transaction in &orders {
                print_transaction(transaction);
            }
        }
        Command::Advance { id } => {
            let status = market.advance_order(&id)?;
            println!("{id}: {}", status.display_name());
        }
        Command::Cancel { id } => {
            let prior = market.cancel_order(&id)?;
            println!("{id}: {} -> Cancelled", prior.display_name());
        }
        Command::Undo { id } => {
            let restored = market.undo_order(&id)?;
            println!("{id}: {}", restored.display_name());
        }
        Command::SetStatus { id, status } => {
            let prior = market.set_order_status(&id, status)?;
            println!("{id}: {} -> {}", prior.display_name(), status.display_name());
        }
        Command::Summary => print_summary(&market.summary()),
    }
    Ok(())
}

/// Toast-style line for a notification
pub fn render_notification(notification: &Notification) -> String {
    let mut line = format!("[{}] {}", notification.title(), notification.description());
    if notification.offers_undo() {
        line.push_str(" (undo available)");
    }
    line
}

fn stock_label(listing: &Listing) -> String {
    match listing.stock_level() {
        StockLevel::Unlimited if listing.is_service() => "service".to_string(),
        StockLevel::Unlimited => "in stock".to_string(),
        StockLevel::OutOfStock => "out of stock".to_string(),
        StockLevel::Low(n) => format!("only {n} left"),
        StockLevel::InStock(n) => format!("{n} in stock"),
    }
}

fn print_page(page: &Page<Listing>) {
    if page.items.is_empty() {
        println!("No products found matching your criteria.");
        return;
    }
    for listing in &page.items {
        println!(
            "{:>14}  {:<32} {:>10}  {:<13} {:.1}★  {}",
            listing.id,
            listing.title,
            listing.price,
            listing.category.display_name(),
            listing.rating,
            stock_label(listing)
        );
    }
    println!(
        "page {}/{} ({} items){}",
        page.page,
        page.total_pages.max(1),
        page.total_items,
        if page.has_next { ", more with --page" } else { "" }
    );
}

fn print_listing_detail(listing: &Listing) {
    println!("{} [{}]", listing.title, listing.id);
    println!("  price:     {}", listing.price);
    println!("  category:  {}", listing.category.display_name());
    if let Some(condition) = listing.condition {
        println!("  condition: {condition}");
    }
    if let Some(shipping) = listing.shipping_option {
        println!("  shipping:  {shipping}");
    }
    println!("  stock:     {}", stock_label(listing));
    if let Some(max) = listing.max_purchase_quantity() {
        println!("  max buy:   {max}");
    }
    println!("  seller:    {} ({:.1}★)", listing.seller, listing.rating);
    println!("  listed:    {}  views {}  likes {}", listing.date, listing.views, listing.likes);
    println!();
    println!("  {}", listing.description);
}

fn print_transaction(transaction: &Transaction) {
    println!(
        "{:>15}  {:<10} {:<32} x{:<3} {:>10}  {}{}",
        transaction.id,
        transaction.status.display_name(),
        transaction.product_title,
        transaction.quantity,
        transaction.total,
        transaction.date,
        if transaction.can_undo() { "  (undo)" } else { "" }
    );
}

fn print_summary(summary: &TransactionSummary) {
    println!("orders:  {}", summary.total_orders);
    for status in TransactionStatus::ALL {
        println!("  {:<11} {}", status.display_name(), summary.count(status));
    }
    println!("spent:   {}", summary.amount_spent);
}
