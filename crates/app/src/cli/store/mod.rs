use clap::{Args, Subcommand};
use farmstand_app::auth::{AuthServiceError, ValidationFailure};

mod create;
mod reset_password;
mod set_password;

#[derive(Debug, Args)]
pub(crate) struct StoreCommand {
    #[command(subcommand)]
    command: StoreSubcommand,
}

#[derive(Debug, Subcommand)]
enum StoreSubcommand {
    Create(create::CreateStoreArgs),
    SetPassword(set_password::SetPasswordArgs),
    ResetPassword(reset_password::ResetPasswordArgs),
}

pub(crate) async fn run(command: StoreCommand) -> Result<(), String> {
    match command.command {
        StoreSubcommand::Create(args) => create::run(args).await,
        StoreSubcommand::SetPassword(args) => set_password::run(args).await,
        StoreSubcommand::ResetPassword(args) => reset_password::run(args).await,
    }
}

fn describe_auth_error(error: &AuthServiceError) -> String {
    match error {
        AuthServiceError::ValidationFailed(ValidationFailure::PasswordTooShort { min_len }) => {
            format!("password must be at least {min_len} characters")
        }
        AuthServiceError::ValidationFailed(ValidationFailure::MissingPassword) => {
            "password cannot be empty".to_string()
        }
        AuthServiceError::StoreNotFound => "store not found".to_string(),
        other => format!("failed to update credential: {other}"),
    }
}
