// Command-line front end for the Blui backend.
// Usage: blui --api-url https://host/api/ groups --month 2 --year 2024

use anyhow::Context;
use blui_client_core::{
    filter_by_type, logging, ApiClient, Cancellation, CategoryId, ClientConfig, MonthYear,
    NewTransaction, SummaryRange, TransactionId, TransactionType, TypeFilter,
};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "blui", about = "Blui personal finance tracker client")]
struct Cli {
    /// Backend base URL (defaults to BLUI_API_URL or http://localhost:3000/api/)
    #[arg(long, env = "BLUI_API_URL")]
    api_url: Option<String>,

    /// Bearer token from a previous login
    #[arg(long, env = "BLUI_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and print the token to export as BLUI_TOKEN
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the token
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: String,
    },
    Profile,
    Categories,
    AddCategory {
        #[arg(long)]
        name: String,
        #[arg(long)]
        icon: String,
        #[arg(long)]
        color: String,
    },
    DeleteCategory {
        id: String,
    },
    /// Transactions grouped by date (falls back across endpoints)
    Groups {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        /// all, income or expense
        #[arg(long = "type", default_value = "all")]
        kind: String,
    },
    AddTransaction {
        /// income or expense
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category_id: String,
        #[arg(long)]
        amount: Decimal,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long)]
        note: Option<String>,
    },
    DeleteTransaction {
        id: String,
    },
    /// Balance summary for a month (defaults to the current month)
    Summary {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    History {
        #[arg(long)]
        start_month: Option<u32>,
        #[arg(long)]
        start_year: Option<i32>,
        #[arg(long)]
        end_month: Option<u32>,
        #[arg(long)]
        end_year: Option<i32>,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init(logging::DEFAULT_FILTER);

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if cli.token.is_some() {
        config.token = cli.token;
    }
    let client = ApiClient::new(&config)?;

    match cli.command {
        Command::Login { email, password } => {
            let user = client.login(&email, &password).await?;
            info!(user_id = %user.id, "logged in");
            println!("{}", client.session().token().unwrap_or_default());
        }
        Command::Register {
            full_name,
            email,
            password,
            date_of_birth,
        } => {
            let user = client
                .register(&full_name, &email, &password, &date_of_birth)
                .await?;
            info!(user_id = %user.id, "registered");
            println!("{}", client.session().token().unwrap_or_default());
        }
        Command::Profile => print_json(&client.profile().await?)?,
        Command::Categories => print_json(&client.categories().await?)?,
        Command::AddCategory { name, icon, color } => {
            print_json(&client.create_category(&name, &icon, &color).await?)?
        }
        Command::DeleteCategory { id } => {
            let id = CategoryId::parse(&id)?;
            client.delete_category(&id).await?;
        }
        Command::Groups { month, year, kind } => {
            let filter = TypeFilter::parse(&kind)
                .with_context(|| format!("unknown type filter {:?}", kind))?;
            let (handle, cancel) = Cancellation::new();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    handle.cancel();
                }
            });
            let groups = client.grouped_retriever().fetch(month, year, &cancel).await?;
            print_json(&filter_by_type(groups, filter))?;
        }
        Command::AddTransaction {
            kind,
            name,
            category_id,
            amount,
            date,
            note,
        } => {
            let new = NewTransaction {
                kind: TransactionType::parse(&kind),
                name,
                category_id: CategoryId::parse(&category_id)?,
                amount,
                date: blui_client_core::dates::parse_date(&date)
                    .with_context(|| format!("bad date {:?}", date))?,
                note,
            };
            print_json(&client.create_transaction(new).await?)?;
        }
        Command::DeleteTransaction { id } => {
            let id = TransactionId::parse(&id)?;
            client.delete_transaction(&id).await?;
        }
        Command::Summary { month, year } => {
            let current = MonthYear::current();
            let period = MonthYear::new(
                month.unwrap_or(current.month()),
                year.unwrap_or(current.year()),
            )
            .context("month must be between 1 and 12")?;
            print_json(&client.summary(period.month(), period.year()).await?)?;
        }
        Command::History {
            start_month,
            start_year,
            end_month,
            end_year,
        } => {
            let range = SummaryRange {
                start_month,
                start_year,
                end_month,
                end_year,
            };
            print_json(&client.summary_history(&range).await?)?;
        }
    }
    Ok(())
}
