use clap::Args;
use farmstand_app::{
    database,
    domain::stores::{PgStoresService, StoresService, StoresServiceError, records::StoreUuid},
};

#[derive(Debug, Args)]
pub(crate) struct ResetPasswordArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Store whose admin credential is cleared
    #[arg(long, env = "STORE_UUID", default_value_t = StoreUuid::nil())]
    store_uuid: StoreUuid,
}

pub(crate) async fn run(args: ResetPasswordArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let store_uuid = args.store_uuid;

    PgStoresService::new(pool)
        .reset_credential(store_uuid)
        .await
        .map_err(|error| match error {
            StoresServiceError::NotFound => "store not found".to_string(),
            other => format!("failed to reset credential: {other}"),
        })?;

    println!("admin credential cleared for store {store_uuid}");
    println!("the next admin login sets a new password");

    Ok(())
}
