use std::env;

use clap::Args;
use farmstand_app::{
    auth::{AuthService, DEFAULT_MIN_PASSWORD_LEN, LoginGuard, LoginPolicy},
    database,
    domain::stores::records::StoreUuid,
};
use zeroize::Zeroizing;

use super::describe_auth_error;

/// Environment variable holding the new admin password. Never read from argv.
const PASSWORD_VAR: &str = "ADMIN_PASSWORD";

#[derive(Debug, Args)]
pub(crate) struct SetPasswordArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Store whose admin password is replaced
    #[arg(long, env = "STORE_UUID", default_value_t = StoreUuid::nil())]
    store_uuid: StoreUuid,

    /// Minimum length of the new admin password
    #[arg(long, env = "MIN_PASSWORD_LENGTH", default_value_t = DEFAULT_MIN_PASSWORD_LEN)]
    min_password_length: usize,
}

impl SetPasswordArgs {
    fn login_policy(&self) -> LoginPolicy {
        LoginPolicy {
            min_password_len: self.min_password_length,
            ..LoginPolicy::default()
        }
    }
}

fn new_password(value: Option<String>) -> Result<Zeroizing<String>, String> {
    match value {
        Some(password) if !password.is_empty() => Ok(Zeroizing::new(password)),
        _ => Err(format!("{PASSWORD_VAR} must be set to the new admin password")),
    }
}

pub(crate) async fn run(args: SetPasswordArgs) -> Result<(), String> {
    let password = new_password(env::var(PASSWORD_VAR).ok())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let store_uuid = args.store_uuid;

    LoginGuard::postgres(pool, args.login_policy())
        .change_password(store_uuid, &password)
        .await
        .map_err(|error| describe_auth_error(&error))?;

    println!("admin password updated for store {store_uuid}");

    Ok(())
}
