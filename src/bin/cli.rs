//! Storefront CLI
//!
//! Command-line admin for the storefront backend:
//! - Browse the catalog and the admin product list
//! - Inspect, update and delete products
//! - Upload product images
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::config::{generate_default_config, Config, LoggingConfig};
use storefront::pages::{
    AllProductsPage, CatalogContent, EditOutcome, EditState, HomePage, ProductEditPage,
    ProductListView,
};
use storefront::view::{Message, MessageVariant, Notice, NoticeLevel, ProductCard};
use storefront::{DraftField, HttpStoreApi, ImageUpload, StoreApi};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Storefront catalog admin")]
#[command(long_about = "Storefront admin tool.\nBrowse the catalog, edit products, upload images and remove listings.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every product (admin view)
    Products,

    /// Show the catalog home page
    Home {
        /// Search keyword
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// List categories
    Categories,

    /// Show a product's editable fields
    Show {
        /// Product id
        id: String,
    },

    /// Update a product
    Update {
        /// Product id
        id: String,
        /// Field edits in field=value format (name, description, price,
        /// category, quantity, brand, stock)
        #[arg(short, long = "set")]
        set: Vec<String>,
        /// Image file to upload before saving
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!("Storefront CLI v{}", env!("CARGO_PKG_VERSION"));

    let api = HttpStoreApi::new(config.api.client_config())?;

    match cli.command {
        Commands::Products => {
            let mut page = AllProductsPage::new();
            page.load(&api).await;

            if cli.format == OutputFormat::Json {
                if let Some(products) = page.state().data() {
                    println!("{}", serde_json::to_string_pretty(products)?);
                }
            }

            match page.view() {
                ProductListView::Loading => {}
                ProductListView::Error(text) => bail!("{}", text),
                ProductListView::Loaded { heading, cards } => {
                    if cli.format == OutputFormat::Table {
                        println!("{}", heading);
                        println!();
                        print_cards(&cards);
                    }
                }
            }
        }

        Commands::Home { keyword } => {
            let mut page = HomePage::new(keyword);
            page.load(&api).await;

            if cli.format == OutputFormat::Json {
                if let Some(result) = page.state().data() {
                    println!("{}", serde_json::to_string_pretty(result)?);
                    return Ok(());
                }
            }

            if page.show_header() {
                println!("{}", storefront::pages::catalog::WELCOME_TITLE);
                println!();
            }
            match page.keyword() {
                Some(keyword) => println!("Results for \"{}\"", keyword),
                None => println!("{}", storefront::pages::catalog::SECTION_TITLE),
            }
            println!("{}", "-".repeat(60));

            match page.content() {
                CatalogContent::Loading => {}
                CatalogContent::Error(message) => {
                    print_message(&message);
                    std::process::exit(1);
                }
                CatalogContent::Empty(message) => print_message(&message),
                CatalogContent::Grid(cards) => print_cards(&cards),
            }
        }

        Commands::Categories => {
            let categories = api.categories().await?;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else if categories.is_empty() {
                println!("No categories defined yet.");
            } else {
                println!("{:<26} {}", "ID", "Name");
                println!("{}", "-".repeat(50));
                for category in categories {
                    println!("{:<26} {}", category.id, category.name);
                }
            }
        }

        Commands::Show { id } => {
            let page = load_edit_page(&api, &id).await?;

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&page.draft())?);
            } else {
                print_draft(&page);
            }
        }

        Commands::Update { id, set, image } => {
            let mut page = load_edit_page(&api, &id).await?;

            if let Some(path) = image {
                let upload = read_image(&path)?;
                page.upload_image(&api, upload).await?;
                if print_notices(&mut page) {
                    std::process::exit(1);
                }
            }

            for edit in &set {
                let (field, value) = edit
                    .split_once('=')
                    .with_context(|| format!("Invalid edit {:?}, expected field=value", edit))?;
                let field: DraftField = field.parse()?;
                page.edit(field, value)?;
            }

            let outcome = page.submit(&api).await?;
            print_notices(&mut page);

            match outcome {
                EditOutcome::Navigate(route) => tracing::debug!(%route, "Update complete"),
                EditOutcome::Stay => std::process::exit(1),
            }
        }

        Commands::Delete { id, yes } => {
            let mut page = load_edit_page(&api, &id).await?;

            let outcome = page
                .delete(&api, |question| yes || confirm(question))
                .await?;

            // A declined prompt stays put without emitting anything
            if outcome == EditOutcome::Stay && page.notices().is_empty() {
                println!("Cancelled.");
            }
            if print_notices(&mut page) {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("storefront={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn load_edit_page(api: &HttpStoreApi, id: &str) -> anyhow::Result<ProductEditPage> {
    let mut page = ProductEditPage::new(id);
    page.load(api).await;

    if let EditState::Failed { message } = page.state() {
        bail!("{}", message);
    }
    Ok(page)
}

fn read_image(path: &Path) -> anyhow::Result<ImageUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read image {:?}", path))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let content_type = ImageUpload::content_type_for(&file_name);

    Ok(ImageUpload::new(file_name, content_type, bytes))
}

fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Print and drain page notices; returns true if any was an error
fn print_notices(page: &mut ProductEditPage) -> bool {
    let notices = page.take_notices();
    for notice in &notices {
        print_notice(notice);
    }
    notices.iter().any(Notice::is_error)
}

fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => println!("✓ {}", notice.text),
        NoticeLevel::Info => println!("ℹ {}", notice.text),
        NoticeLevel::Error => eprintln!("✕ {}", notice.text),
    }
}

fn print_message(message: &Message) {
    match message.variant {
        MessageVariant::Danger => eprintln!("{}", message.text),
        MessageVariant::Info | MessageVariant::Success => println!("{}", message.text),
    }
}

fn print_cards(cards: &[ProductCard]) {
    println!("{:<26} {:<30} {:>12}  {}", "ID", "Name", "Price", "Created");
    println!("{}", "-".repeat(90));

    for card in cards {
        println!(
            "{:<26} {:<30} {:>12}  {}",
            card.id,
            truncate(&card.name, 30),
            card.price_label,
            card.created_label
        );
        println!("    {}", truncate(&card.excerpt, 80));
        println!("    edit: {}", card.edit_route);
    }
}

fn print_draft(page: &ProductEditPage) {
    let Some(draft) = page.draft() else {
        return;
    };

    println!("Update / Delete Product ({})", page.product_id());
    println!("{}", "-".repeat(60));

    for field in DraftField::all() {
        let value = draft.get(*field);
        let value = match field {
            DraftField::Category => page
                .categories()
                .iter()
                .find(|c| c.id == value)
                .map(|c| format!("{} ({})", c.name, c.id))
                .unwrap_or(value),
            _ => value,
        };
        println!("{:<16} {}", field.label(), value);
    }

    if !page.categories().is_empty() {
        println!();
        println!("Categories:");
        for category in page.categories() {
            println!("  {:<26} {}", category.id, category.name);
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
