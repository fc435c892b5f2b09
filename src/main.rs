use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use recordchart::charts::ChartKind;
use recordchart::config::AppConfig;
use recordchart::database::{self, MigrateDirection};
use recordchart::services::{ChartService, ImportService};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// YAML settings file; missing file means defaults
    #[clap(short, long, global = true, default_value = "config.yaml")]
    config: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[cfg(feature = "server")]
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
        #[clap(long)]
        dataset: Option<PathBuf>,
        #[clap(long)]
        static_dir: Option<PathBuf>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Import a headerless name,age CSV file into the record table
    Import {
        file: PathBuf,
        #[clap(short, long)]
        database: Option<String>,
    },
    /// Render one chart view from the dataset without starting the server
    Render {
        #[clap(value_enum)]
        kind: ChartKind,
        #[clap(long)]
        dataset: Option<PathBuf>,
        #[clap(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long)]
        database: Option<String>,
    },
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;

    match args.command {
        #[cfg(feature = "server")]
        Commands::Serve {
            port,
            database,
            cors_origin,
            dataset,
            static_dir,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database = database;
            }
            if cors_origin.is_some() {
                config.cors_origin = cors_origin;
            }
            if let Some(dataset) = dataset {
                config.dataset_path = dataset;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            info!("Starting server on port {}", config.port);
            recordchart::server::start_server(config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                let db_path = database.unwrap_or(config.database);
                info!("Initializing database: {}", db_path);
                database::migrate_database(&db_path, MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                let db_path = database.unwrap_or(config.database);
                info!("Running database migration on {}: {:?}", db_path, direction);
                database::migrate_database(&db_path, direction).await?;
            }
        },
        Commands::Import { file, database } => {
            let db_path = database.unwrap_or(config.database);
            let db = database::establish_connection(&database::get_database_url(Some(&db_path)))
                .await?;
            database::setup_database(&db).await?;

            let service = ImportService::new(db, config.upload_path);
            let summary = service.import_file(&file).await?;
            info!(
                "Imported {} records from {}",
                summary.rows_imported,
                file.display()
            );
        }
        Commands::Render {
            kind,
            dataset,
            static_dir,
        } => {
            let service = ChartService::new(
                dataset.unwrap_or(config.dataset_path),
                static_dir.unwrap_or(config.static_dir),
            );
            let output = tokio::task::spawn_blocking(move || service.render(kind)).await??;
            info!(
                "Wrote {} ({} values plotted)",
                output.path.display(),
                output.plotted
            );
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "sqlx=warn,sea_orm_migration=warn,{}",
            log_level
        )))
        .without_time()
        .init();
}
