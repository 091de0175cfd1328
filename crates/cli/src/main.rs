//! Mangust CLI - store management console.
//!
//! # Usage
//!
//! ```bash
//! # Log in (stores the session snapshot for later commands)
//! mangust login -e admin@example.com -p <password>
//!
//! # Paginated listings
//! mangust products list --page 2 --limit 20
//! mangust products list --category <id>
//! mangust categories list
//! mangust orders list
//! mangust orders find --status shipped --user <id>
//! mangust users list
//! mangust wishlist list
//!
//! # Profile
//! mangust profile show
//! ```
//!
//! # Environment Variables
//!
//! - `MANGUST_API_URL` - Backend base URL
//! - `MANGUST_SESSION_FILE` - Where the session snapshot is stored

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mangust")]
#[command(author, version, about = "Mangust store management console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 1-based page for list commands.
    #[arg(long, global = true, default_value_t = 1)]
    page: u32,

    /// Page size for list commands.
    #[arg(long, global = true, default_value_t = 10)]
    limit: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session snapshot
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out (delete the stored session snapshot)
    Logout,
    /// Browse products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Browse categories
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Browse orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Browse accounts (admin)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Browse the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Inspect the authenticated profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Restrict to one category id
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product
    Show { id: String },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List categories
    List,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders
    List,
    /// Search orders with filters (admin)
    Find {
        /// Match one order id
        #[arg(long)]
        order: Option<String>,

        /// Match a buyer's user id
        #[arg(long)]
        user: Option<String>,

        /// Match a status (pending, processing, shipped, delivered, cancelled)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one order
    Show { id: String },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all accounts (admin)
    List,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List the authenticated user's wishlist
    List,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the authenticated profile
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let page = mangust_core::PageRequest::new(cli.page, cli.limit);

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Products { action } => match action {
            ProductsAction::List { category } => {
                commands::catalog::list_products(category.as_deref(), page).await?;
            }
            ProductsAction::Show { id } => commands::catalog::show_product(&id).await?,
        },
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::catalog::list_categories(page).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(page).await?,
            OrdersAction::Find {
                order,
                user,
                status,
            } => commands::orders::find(order, user, status, page).await?,
            OrdersAction::Show { id } => commands::orders::show(&id).await?,
        },
        Commands::Users { action } => match action {
            UsersAction::List => commands::account::list_users().await?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::account::list_wishlist(page).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::account::show_profile().await?,
        },
    }
    Ok(())
}
