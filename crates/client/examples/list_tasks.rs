// List one page of a user's tasks against a running backend.
//
// Usage: DOCEXTRACT_BASE_URL=http://localhost:8080 cargo run --example list_tasks -- <userId>

use std::sync::Arc;

use docextract_client::ApiClient;
use docextract_session::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let user_id: i64 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1".to_string())
        .parse()?;

    let store = Arc::new(FileStore::open_default()?);
    let client = ApiClient::from_env(store)?;

    let response = client.tasks(user_id, None, None).await?;
    let Some(page) = response.data else {
        println!("{}", response.message);
        return Ok(());
    };

    println!(
        "page {}/{} ({} tasks total)",
        page.number + 1,
        page.total_pages,
        page.total_elements
    );
    for task in page.content {
        println!(
            "#{} {} [{}] {}%",
            task.task_id,
            task.task_name.unwrap_or_default(),
            task.status.unwrap_or_default(),
            task.progress.unwrap_or(0)
        );
    }

    Ok(())
}
