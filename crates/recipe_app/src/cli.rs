use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use recipe_client::ClientHandle;
use recipe_core::RecipeId;
use recipe_logging::recipe_info;

use crate::commands::{self, FormArgs};
use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::runner::EffectRunner;
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(name = "recipes")]
#[command(about = "List, view, create, edit and delete recipes in a remote recipe store", long_about = None)]
pub struct Cli {
    /// Configuration file (RON)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Store base URL; overrides the configuration file
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all recipes
    List,
    /// Show one recipe
    Show { id: String },
    /// Create a recipe
    New {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Edit a recipe; fields not given keep their stored value
    Edit {
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete a recipe
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the effective configuration
    Config,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    recipe_logging::initialize(config.log_destination, level, &config.log_file);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Config = cli.command {
        writeln!(out, "{}", config.to_ron()?)?;
        return Ok(());
    }

    let client = ClientHandle::new(config.client_settings())
        .context("failed to start the recipe client")?;
    let mut session = Session::new(EffectRunner::new(client), config.answer_timeout());
    recipe_info!("Running {:?}", cli.command);

    match cli.command {
        Command::List => commands::list(&mut session, &mut out),
        Command::Show { id } => commands::show(&mut session, RecipeId::new(id), &mut out),
        Command::New { form } => commands::create(&mut session, &form, &mut out),
        Command::Edit { id, form } => {
            commands::edit(&mut session, RecipeId::new(id), &form, &mut out)
        }
        Command::Delete { id, yes } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            commands::delete(&mut session, RecipeId::new(id), yes, &mut input, &mut out)
        }
        Command::Config => Ok(()),
    }
}
