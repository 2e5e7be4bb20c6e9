//! Load the constituency dataset into the `uk_data` table.
//!
//! Usage: `cargo run --bin import_ukdata -- path/to/ukdata.csv`
//!
//! Requires `DATABASE_URL` (reads .env). Existing constituencies are updated
//! in place, so the import can be re-run.

use anyhow::Context;
use blogdash::services::ukdata_import;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogdash=info".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: import_ukdata <csv-path>")?;
    let data = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = blogdash::db::create_pool(&db_url, 5).await?;
    blogdash::db::run_migrations(&pool).await?;

    let result = ukdata_import::import(&pool, &data)
        .await
        .with_context(|| format!("{path} is not a readable CSV file"))?;

    println!("=== UK dataset import ===");
    println!("Rows read: {}", result.total);
    println!("Imported:  {}", result.imported);
    for error in &result.errors {
        let name = error.constituency.as_deref().unwrap_or("-");
        if error.line > 0 {
            println!("[rejected] line {} ({name}): {}", error.line, error.message);
        } else {
            println!("[rejected] {name}: {}", error.message);
        }
    }

    Ok(())
}
