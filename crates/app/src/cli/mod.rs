use clap::{Parser, Subcommand};

mod db;
mod store;

#[derive(Debug, Parser)]
#[command(name = "farmstand-app", about = "Farm Stand admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Store(store::StoreCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Store(command) => store::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
