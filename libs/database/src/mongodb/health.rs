use ::mongodb::{Client, bson::doc};
use tracing::warn;

/// Check MongoDB reachability with a `ping` against `admin`.
///
/// Never fails: any driver error is logged and reported as `false`.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, check_health, connect_from_config};
///
/// let client = connect_from_config(&MongoConfig::new("mongodb://localhost:27017")).await?;
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    match client.database("admin").run_command(doc! { "ping": 1 }).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "MongoDB health check failed");
            false
        }
    }
}
