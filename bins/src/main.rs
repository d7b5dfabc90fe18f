use eyre::Context;
use log::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let dotenv = env::load_dotenv();
    pretty_env_logger::init();
    dotenv.log();
    let env = env::Env::load().context("Failed to load configuration")?;

    info!("creating database handle");
    let db = storage::session::Db::new(env.mongo_url(), env.db_name())
        .await
        .context("Failed to create database handle")?;
    let storage = storage::Storage::new(db);
    info!("creating ledger");
    let ledger = ledger::Ledger::new(storage);

    info!("Starting web server...");
    web::serve(ledger, env.host()).await?;

    Ok(())
}
