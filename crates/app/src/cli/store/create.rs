use clap::Args;
use farmstand_app::{
    database,
    domain::stores::{PgStoresService, StoresService, data::NewStore, records::StoreUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateStoreArgs {
    /// Store display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional store UUID; generated when omitted
    #[arg(long)]
    store_uuid: Option<StoreUuid>,
}

pub(crate) async fn run(args: CreateStoreArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgStoresService::new(pool);
    let store_uuid = args.store_uuid.unwrap_or_else(StoreUuid::new);

    let store = service
        .create_store(NewStore {
            uuid: store_uuid,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create store: {error}"))?;

    println!("store_uuid: {}", store.uuid);
    println!("store_name: {}", store.name);
    println!("the first admin login sets the password");

    Ok(())
}
