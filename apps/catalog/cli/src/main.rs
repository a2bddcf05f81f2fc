//! Catalog CLI
//!
//! Operator entry point for the product catalog: applies migrations, manages
//! products and users, and issues or inspects access tokens. Every command
//! prints JSON on stdout.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_products::{CreateProduct, Product, ProductService, SeaOrmProductRepository};
use domain_users::{Authenticator, CreateUser, SeaOrmUserRepository, User, UserResponse, UserService};
use eyre::Result;
use migration::Migrator;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Manage catalog products, users and access tokens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Product management
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// User management
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Exchange credentials for an access token
    Token {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Show the user an access token was issued to
    Whoami {
        #[arg(long)]
        token: String,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
    },

    /// Show one product
    Get { id: Uuid },

    /// Replace the name and price of a product
    Update {
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
    },

    /// Delete a product
    Delete { id: Uuid },

    /// List products by creation time
    List {
        /// 1-based page; 0 lists everything
        #[arg(long, default_value_t = 0)]
        page: u64,

        /// Page size; 0 lists everything
        #[arg(long, default_value_t = 0)]
        limit: u64,

        /// `desc` for newest first, anything else is ascending
        #[arg(long, default_value = "")]
        sort: String,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Register a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to database...");
    let db = config.connect().await?;

    match cli.command {
        Commands::Migrate => {
            database::run_migrations::<Migrator>(&db, "catalog").await?;
        }

        Commands::Product { command } => {
            let products = ProductService::new(SeaOrmProductRepository::new(db));
            run_product(&products, command).await?;
        }

        Commands::User {
            command:
                UserCommand::Create {
                    name,
                    email,
                    password,
                },
        } => {
            let users = UserService::new(SeaOrmUserRepository::new(db));
            let user = users
                .create(User::new(CreateUser {
                    name,
                    email,
                    password,
                })?)
                .await?;
            print_json(&UserResponse::from(user))?;
        }

        Commands::Token { email, password } => {
            let users = UserService::new(SeaOrmUserRepository::new(db));
            let auth = Authenticator::new(users, &config.jwt()?);

            match auth.authenticate(&email, &password).await {
                Ok(token) => print_json(&token)?,
                Err(e) if e.is_invalid_credentials() => {
                    info!(error = %e, "Login rejected");
                    eyre::bail!("Invalid email or password");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Whoami { token } => {
            let users = UserService::new(SeaOrmUserRepository::new(db));
            let auth = Authenticator::new(users, &config.jwt()?);

            let user = auth.resolve(&token).await?;
            print_json(&UserResponse::from(user))?;
        }
    }

    Ok(())
}

async fn run_product(
    products: &ProductService<SeaOrmProductRepository>,
    command: ProductCommand,
) -> Result<()> {
    match command {
        ProductCommand::Create { name, price } => {
            let product = products
                .create(Product::new(CreateProduct { name, price })?)
                .await?;
            print_json(&product)
        }

        ProductCommand::Get { id } => print_json(&products.find_by_id(id).await?),

        ProductCommand::Update { id, name, price } => {
            let product = products
                .update(Product::with_id(id, CreateProduct { name, price })?)
                .await?;
            print_json(&product)
        }

        ProductCommand::Delete { id } => {
            products.delete(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }

        ProductCommand::List { page, limit, sort } => {
            print_json(&products.list(page, limit, &sort).await?)
        }
    }
}
