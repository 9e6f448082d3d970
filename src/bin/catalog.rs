//! Command-line browser for the built-in catalog.
//!
//! Lists categories, shows products and their models, checks how an
//! identifier resolves, and validates the catalog tables without starting
//! the server.
//!
//! # Usage
//!
//! ```bash
//! # List categories
//! cargo run --bin catalog -- categories
//!
//! # Show one category with every model
//! cargo run --bin catalog -- show electrolyzer-test-stations
//!
//! # Show how a ?product= value resolves
//! cargo run --bin catalog -- resolve fume-hoods
//!
//! # Check catalog integrity (exit code 1 on failure)
//! cargo run --bin catalog -- validate
//!
//! # Pick a category and a model interactively
//! cargo run --bin catalog -- browse
//! ```

use scientific_square::application::services::{
    CatalogService, CategoryBrowser, DEFAULT_CATEGORY,
};
use scientific_square::domain::repositories::CatalogRepository;
use scientific_square::domain::variant_selector::VariantSelector;
use scientific_square::infrastructure::catalog::StaticCatalog;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::sync::Arc;

/// Catalog browser for ScientificSquare.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,

    /// Show a category with its products and models
    Show {
        /// Category slug (unknown slugs show the default category)
        slug: String,
    },

    /// Show how a category identifier resolves
    Resolve {
        /// Value of the `product` query parameter
        slug: Option<String>,
    },

    /// Check the catalog tables for integrity problems
    Validate,

    /// Pick a category and a model interactively
    Browse,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let service = CatalogService::new(Arc::new(StaticCatalog::builtin()));

    match cli.command {
        Commands::Categories => list_categories(&service),
        Commands::Show { slug } => show_category(&service, &slug),
        Commands::Resolve { slug } => resolve(&service, slug.as_deref()),
        Commands::Validate => validate(&service)?,
        Commands::Browse => browse(&service)?,
    }

    Ok(())
}

/// Prints every category in catalog order.
///
/// # Output Format
///
/// ```text
/// Categories
///
///   Slug                                Title                               Products
///   ─────────────────────────────────────────────────────────────────────────────────
///   lab-water-purification-system       Lab Water Purification System       3
/// ```
fn list_categories(service: &CatalogService<StaticCatalog>) {
    println!("{}", "Categories".bright_blue().bold());
    println!();

    println!(
        "  {:<35} {:<35} {}",
        "Slug".bright_white().bold(),
        "Title".bright_white().bold(),
        "Products".bright_white().bold()
    );
    println!("  {}", "─".repeat(81).bright_black());

    for summary in service.categories() {
        let slug = if summary.slug == DEFAULT_CATEGORY {
            format!("{} *", summary.slug)
        } else {
            summary.slug.clone()
        };
        println!(
            "  {:<35} {:<35} {}",
            slug.cyan(),
            summary.title,
            summary.product_count.to_string().bright_black()
        );
    }

    println!();
    println!("  {} default category", "*".cyan());
    println!();
}

fn show_category(service: &CatalogService<StaticCatalog>, slug: &str) {
    let browser = service.browse(Some(slug));
    print_header(&browser, slug);

    for (item, selector) in browser.selectors().iter().enumerate() {
        print_product(item, selector);
    }
}

fn print_header(browser: &CategoryBrowser<'_, StaticCatalog>, requested: &str) {
    println!("{}", browser.title().bright_blue().bold());
    if browser.is_fallback() {
        println!(
            "{}",
            format!("  '{requested}' is not a category, showing the default").yellow()
        );
    }
    println!();
}

fn print_product(item: usize, selector: &VariantSelector<'_>) {
    let product = selector.product();
    println!(
        "  {} {}",
        format!("[{item}]").bright_black(),
        product.name.bright_white().bold()
    );
    println!("      {}", product.tagline.italic());
    println!("      Partner: {}", product.partner_name.cyan());

    let options = selector.options();
    if !options.is_empty() {
        let labels: Vec<String> = options
            .iter()
            .map(|o| {
                if o.active {
                    o.label.green().bold().to_string()
                } else {
                    o.label.to_string()
                }
            })
            .collect();
        println!("      Models:  {}", labels.join(", "));
    }

    for spec in &product.specs {
        println!("      {} {}", "•".yellow(), spec);
    }
    println!();
}

fn resolve(service: &CatalogService<StaticCatalog>, requested: Option<&str>) {
    let resolution = service.resolve(requested);

    println!("{}", "Resolution".bright_blue().bold());
    println!();
    println!("  Requested: {}", requested.unwrap_or("(none)").cyan());
    println!("  Category:  {}", resolution.slug.bright_white().bold());
    println!("  Title:     {}", service.category_title(resolution.slug));
    if resolution.fallback {
        println!("  {}", "Fell back to the default category".yellow());
    }
    println!();
}

/// Runs the integrity checks; a failure becomes the process error.
fn validate(service: &CatalogService<StaticCatalog>) -> Result<()> {
    println!("{}", "Validating catalog".bright_blue().bold());
    println!();

    let catalog = service.repository();
    match catalog.validate(DEFAULT_CATEGORY) {
        Ok(()) => {
            println!(
                "  {} {} categories, {} products",
                "✓".green().bold(),
                catalog.categories().len().to_string().bright_white(),
                catalog.product_count().to_string().bright_white()
            );
            println!();
            Ok(())
        }
        Err(e) => {
            println!("  {} {}", "✗".red().bold(), e.to_string().red());
            println!();
            Err(e).context("Catalog validation failed")
        }
    }
}

/// Interactive category and model selection.
fn browse(service: &CatalogService<StaticCatalog>) -> Result<()> {
    let categories = service.categories();
    let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();

    let picked = Select::new()
        .with_prompt("Category")
        .items(&titles)
        .default(0)
        .interact()?;
    let slug = &categories[picked].slug;

    let mut browser = service.browse(Some(slug));
    print_header(&browser, slug);

    let names: Vec<String> = browser.products().map(|p| p.name.clone()).collect();
    let item = Select::new()
        .with_prompt("Product")
        .items(&names)
        .default(0)
        .interact()?;

    let models: Vec<(String, String)> = browser.selectors()[item]
        .options()
        .into_iter()
        .map(|o| (o.id.to_string(), o.label.to_string()))
        .collect();

    if !models.is_empty() {
        let labels: Vec<&str> = models.iter().map(|(_, label)| label.as_str()).collect();
        let picked = Select::new()
            .with_prompt("Model")
            .items(&labels)
            .default(0)
            .interact()?;
        browser
            .select_variant(item, &models[picked].0)
            .context("Failed to select model")?;
    }

    let selector = &browser.selectors()[item];
    print_product(item, selector);

    let display = selector.display();
    println!("  Image:       {}", display.image_ref.bright_black());
    println!("  Know more:   {}", display.external_link_ref.unwrap_or("-").bright_black());
    println!();
    println!("  {}", display.description);
    println!();

    Ok(())
}
