pub mod categories;
pub mod init;
pub mod login;
pub mod register;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Prepare the database storage and schema")]
    Init,
    #[command(about = "Register a new user account")]
    Register(register::RegisterArgs),
    #[command(about = "Sign in and manage your tasks")]
    Login(login::LoginArgs),
    #[command(about = "List task categories")]
    Categories,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Register(args) => register::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Categories => categories::cmd(),
        }
    }
}
