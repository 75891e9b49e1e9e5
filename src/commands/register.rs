use crate::db::users::{RegisterOutcome, Users};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// User name
    #[arg(short, long)]
    name: Option<String>,
    /// Email address
    #[arg(short, long)]
    email: Option<String>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let users = Users::new()?;

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserName.to_string())
            .interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUserEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUserPassword.to_string())
        .interact()?;

    match users.register(&name, &email, &password)? {
        RegisterOutcome::Created => msg_success!(Message::UserRegistered(name)),
        RegisterOutcome::NameTaken => msg_error!(Message::NameTaken(name)),
        RegisterOutcome::EmailTaken => msg_error!(Message::EmailTaken(email)),
        RegisterOutcome::MissingField => msg_error!(Message::FieldsRequired),
    }

    Ok(())
}
