//! trigtab - fetch and plot trigger tables from a remote database.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use trigtab_db::{connect, fetch_table, list_tables, DbConfig};
use trigtab_plot::{save_scatter, FigureSpec, TextRendering};

mod output;

/// Fetch, filter and plot tabular event-trigger data
#[derive(Parser, Debug)]
#[command(name = "trigtab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct ConnectionArgs {
    /// Database user name
    #[arg(long, env = "TRIGTAB_DATABASE_USER", hide_env_values = true)]
    user: String,

    /// Database password
    #[arg(long, env = "TRIGTAB_DATABASE_PASSWD", hide_env_values = true)]
    passwd: String,

    /// Server host
    #[arg(long, default_value = trigtab_db::DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(long, default_value_t = trigtab_db::DEFAULT_PORT)]
    port: u16,

    /// Database name
    #[arg(long, default_value = trigtab_db::DEFAULT_DATABASE)]
    database: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tables available on the server
    Tables,

    /// Fetch triggers and print them
    Fetch {
        /// Table to query
        table: String,

        /// Columns to select, comma separated (default: all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Filter predicate such as "snr > 5"; repeatable
        #[arg(short = 'f', long = "filter")]
        filters: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        output: OutputFormat,
    },

    /// Fetch triggers and render a scatter figure
    Plot {
        /// Table to query
        table: String,

        /// Column for the x axis
        #[arg(long)]
        x: String,

        /// Column for the y axis
        #[arg(long)]
        y: String,

        /// Filter predicate such as "snr > 5"; repeatable
        #[arg(short = 'f', long = "filter")]
        filters: Vec<String>,

        /// Output file; the extension picks the format (.svg, .png, ...)
        #[arg(long, default_value = "figure.svg")]
        out: PathBuf,

        /// Figure title
        #[arg(long)]
        title: Option<String>,

        /// Typeset labels for TeX
        #[arg(long)]
        tex: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned terminal table
    Table,
    /// JSON records
    Json,
    /// Comma separated values
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = DbConfig::new(&cli.connection.user, &cli.connection.passwd)?
        .with_host(&cli.connection.host)
        .with_port(cli.connection.port)
        .with_database(&cli.connection.database);
    let pool = connect(&config)
        .await
        .with_context(|| format!("cannot reach {}", config.display_url()))?;

    match cli.command {
        Command::Tables => {
            for name in list_tables(&pool).await? {
                println!("{name}");
            }
        }
        Command::Fetch {
            table,
            columns,
            filters,
            output,
        } => {
            let columns = if columns.is_empty() {
                None
            } else {
                Some(columns.as_slice())
            };
            let fetched = fetch_table(&pool, &table, columns, &filters).await?;
            match output {
                OutputFormat::Table => println!("{}", output::format_table(&fetched)),
                OutputFormat::Json => println!("{}", output::to_json(&fetched)?),
                OutputFormat::Csv => output::write_csv(&fetched, std::io::stdout())?,
            }
        }
        Command::Plot {
            table,
            x,
            y,
            filters,
            out,
            title,
            tex,
        } => {
            let fetched = fetch_table(&pool, &table, None, &filters).await?;
            let spec = FigureSpec {
                title: title.unwrap_or_default(),
                text_rendering: if tex {
                    TextRendering::Tex
                } else {
                    TextRendering::Plain
                },
                ..FigureSpec::default()
            };
            save_scatter(&out, &fetched, &x, &y, &spec)
                .with_context(|| format!("cannot save figure to {}", out.display()))?;
            println!("saved {}", out.display());
        }
    }

    Ok(())
}
