// src/main.rs
use clap::Parser;
use futures::TryStreamExt;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use notion_query::config::{Command, CommandLineInput};
use notion_query::{
    paginate_items, AppError, ClientConfig, Cursor, DatabaseClient, DatabaseId,
    DatabaseQueryRequest, DatabaseService, FilterObject, NotionErrorCode, NotionHttpClient,
    SortObject,
};
use serde::Serialize;

/// Sets up logging configuration. Logs go to stderr so stdout stays pipeable JSON.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_query_request(
    filter: Option<String>,
    sorts: &[String],
    page_size: u32,
    start_cursor: Option<String>,
) -> Result<DatabaseQueryRequest, AppError> {
    let mut builder = DatabaseQueryRequest::builder().page_size(page_size);

    if let Some(filter) = filter {
        let filter: FilterObject = serde_json::from_str(&filter)?;
        builder = builder.filter(filter);
    }
    for sort in sorts {
        builder = builder.sort(sort.parse::<SortObject>()?);
    }
    if let Some(cursor) = start_cursor {
        builder = builder.start_cursor(Cursor::new(cursor));
    }

    Ok(builder.build())
}

/// Dispatches one CLI command against the database service.
async fn run(cli: CommandLineInput) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?.with_cli(&cli);
    let transport = NotionHttpClient::new(&config)?;
    let client = DatabaseClient::new(transport).with_absent_filter(config.absent_filter);

    match cli.command {
        Command::Get { database } => {
            let id = DatabaseId::parse(&database)?;
            let db = client.get(&id).await?;
            log::info!("Retrieved '{}' ({} properties)", db.title_text(), db.properties.len());
            print_json(&db)
        }
        Command::List {
            page_size,
            start_cursor,
            all,
        } => {
            let start_cursor = start_cursor.map(Cursor::new);
            if all {
                let databases: Vec<_> = paginate_items(client.list_pages(start_cursor, page_size))
                    .try_collect()
                    .await?;
                print_json(&databases)
            } else {
                let page = client.list(start_cursor.as_ref(), page_size).await?;
                print_json(&page)
            }
        }
        Command::Query {
            database,
            filter,
            sorts,
            page_size,
            start_cursor,
            all,
            max_pages,
        } => {
            let id = DatabaseId::parse(&database)?;
            let request = parse_query_request(filter, &sorts, page_size, start_cursor)?;

            if all || max_pages.is_some() {
                let result = client.query_all(&id, &request, max_pages).await?;
                log::info!(
                    "Fetched {} rows in {} pages",
                    result.items.len(),
                    result.pages_fetched
                );
                if let Some(cursor) = &result.resume_cursor {
                    eprintln!("More rows available; resume with --start-cursor {}", cursor);
                }
                print_json(&result.items)
            } else {
                let page = client.query(&id, &request).await?;
                print_json(&page)
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        if let Some(hint) = e
            .downcast_ref::<AppError>()
            .and_then(AppError::service_code)
            .and_then(NotionErrorCode::hint)
        {
            log::warn!("Hint: {}", hint);
        }
        return Err(e.into());
    }

    Ok(())
}
