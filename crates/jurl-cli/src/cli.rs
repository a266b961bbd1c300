//! jurl - inspect and rewrite JDBC connection URLs
//!
//! ```bash
//! jurl parse --driver oracle.jdbc.OracleDriver 'jdbc:oracle:thin:@//localhost:1521/XEPDB1'
//! jurl replace 'jdbc:postgresql://localhost:49153/app' --from localhost:49153 --to postgres:5432
//! jurl dialect 'jdbc:oracle:thin:@db:1521:ORCL'
//! jurl check connections.toml
//! ```

mod commands;
mod logging;

use clap::{ArgAction, Parser, Subcommand};
use jurl_core::HostAndPort;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jurl", version, about = "Inspect and rewrite JDBC connection URLs")]
struct Cli {
    /// Increase log verbosity (-v, -vv). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the host and port a JDBC URL points at
    Parse {
        /// Driver class name; guessed from the URL prefix when omitted
        #[arg(short, long, env = "JURL_DRIVER")]
        driver: Option<String>,

        url: String,

        /// Print JSON instead of host:port
        #[arg(long)]
        json: bool,
    },

    /// Replace one host:port with another inside a JDBC URL
    Replace {
        url: String,

        /// Host and port currently in the URL ([v6]:port for IPv6)
        #[arg(long)]
        from: HostAndPort,

        /// Host and port to substitute
        #[arg(long)]
        to: HostAndPort,
    },

    /// Print which URL dialect a JDBC URL is read as
    Dialect {
        url: String,

        /// Driver class name; without it the dialect is sniffed from the URL
        #[arg(short, long)]
        driver: Option<String>,
    },

    /// Validate a TOML connections file and list its connections
    Check { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&logging::LoggingConfig::from_verbosity(cli.verbose))?;

    let output = match cli.command {
        Command::Parse { driver, url, json } => commands::parse(driver.as_deref(), &url, json)?,
        Command::Replace { url, from, to } => commands::replace(&url, &from, &to),
        Command::Dialect { url, driver } => commands::dialect(&url, driver.as_deref()),
        Command::Check { path } => commands::check(&path)?,
    };

    println!("{}", output);
    Ok(())
}
