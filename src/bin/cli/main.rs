use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use sqlx::SqlitePool;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod command_parser;

use local_library::{
    config::Config,
    db::{connect_to_db, create_tables, database_location},
    pages::authors::show_all_authors,
    server,
    traits::Insertable,
    types::{author::Author, timestamp::OptionalTimestamp},
};

fn parse_date(matches: &ArgMatches, id: &str) -> Result<OptionalTimestamp> {
    let date = match matches.get_one::<String>(id) {
        Some(s) => Some(
            s.parse::<NaiveDate>()
                .with_context(|| format!("Invalid date for --{id}: {s}"))?,
        ),
        None => None,
    };
    Ok(date.into())
}

async fn add_author(matches: &ArgMatches, conn: &SqlitePool) -> Result<()> {
    let first_name = matches.get_one::<String>("first-name").cloned().unwrap_or_default();
    let family_name = matches.get_one::<String>("family-name").cloned().unwrap_or_default();
    let author = Author::new(
        first_name,
        family_name,
        parse_date(matches, "born")?,
        parse_date(matches, "died")?,
    );
    author.insert(conn).await?;
    info!("Added author {} ({}).", author, author.id);
    println!("{}", author.url());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::read_config()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let matches = command_parser::arg_parser().get_matches();

    if let Some(("config", _)) = matches.subcommand() {
        print!("{}", config.as_string()?);
        return Ok(());
    }

    let conn = connect_to_db(database_location(&config)).await?;
    create_tables(&conn).await?;

    match matches.subcommand() {
        Some(("serve", _)) => server::start(conn, &config.address()).await?,
        Some(("add", matches)) => add_author(matches, &conn).await?,
        Some(("list", _)) => println!("{}", show_all_authors(&conn).await.body()),
        Some((name, _)) => unimplemented!("{}", name),
        None => unreachable!("subcommand required"),
    }

    Ok(())
}
