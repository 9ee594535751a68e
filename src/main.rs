//! crudforge CLI tool

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crudforge_cli_lib::commands::{
    ControllerCommand, EntityCommand, MigrationCommand, ModelCommand, RoutesCommand, ViewsCommand,
    ViewsRoutersCommand,
};
use crudforge_cli_lib::TerminalPrompt;

#[derive(Parser)]
#[command(name = "crudforge")]
#[command(version)]
#[command(about = "Interactive CRUD scaffolding for Express + Mongoose projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new model interactively
    Model,
    /// Create CRUD operations for a model (alias of `model`)
    Crud,
    /// Create a plain entity class plus its model, controller and routes
    Entity,
    /// Create a controller for an existing model
    Controller,
    /// Create API routes for an existing controller
    Routes,
    /// Create an HTML admin view for an existing model
    Views,
    /// Create routes serving an existing admin view
    ViewsRouters,
    /// Create a database migration (not yet implemented)
    Migration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("failed to get current directory")?;
    let mut prompt = TerminalPrompt::new();

    match cli.command {
        Commands::Model | Commands::Crud => {
            ModelCommand::new(root).execute(&mut prompt)?;
        }
        Commands::Entity => {
            EntityCommand::new(root).execute(&mut prompt)?;
        }
        Commands::Controller => {
            ControllerCommand::new(root).execute(&mut prompt)?;
        }
        Commands::Routes => {
            RoutesCommand::new(root).execute(&mut prompt)?;
        }
        Commands::Views => {
            ViewsCommand::new(root).execute(&mut prompt)?;
        }
        Commands::ViewsRouters => {
            ViewsRoutersCommand::new(root).execute(&mut prompt)?;
        }
        Commands::Migration => {
            MigrationCommand::execute()?;
        }
    }

    Ok(())
}
