//! Utility to inspect the `people` table and print its columns.

use people_enrichment_api::config::Config;
use people_enrichment_api::db::Database;

/// Connects with the service configuration and lists the columns of `people`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let db = Database::new(&config).await?;

    let columns: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT column_name, data_type, is_nullable
         FROM information_schema.columns
         WHERE table_name = 'people'
         ORDER BY ordinal_position",
    )
    .fetch_all(&db.pool)
    .await?;

    if columns.is_empty() {
        println!("Table 'people' not found. Apply sql/people.sql first.");
        return Ok(());
    }

    println!("people");
    for (column, data_type, nullable) in columns {
        println!("  - {}: {} (nullable: {})", column, data_type, nullable);
    }

    Ok(())
}
