use feast_client::{FeastClient, Row, DEFAULT_PROJECT};
use std::time::SystemTime;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Connect to a local Feast Serving instance
    let client = FeastClient::connect("localhost", 6566).await?;

    let info = client.get_feast_serving_info().await?;
    println!("Feast Serving version: {}", info.version);

    let rows = vec![
        Row::new().set("driver_id", 123).set_entity_timestamp(SystemTime::now()),
        Row::new().set("driver_id", 456).set_entity_timestamp(SystemTime::now()),
    ];

    let features = client
        .get_online_features(
            ["driver:rating", "driver:trips_today"],
            &rows,
            DEFAULT_PROJECT,
        )
        .await?;

    for row in &features {
        for (name, value) in row.fields() {
            println!("{} = {:?} ({:?})", name, value.val, row.status(name));
        }
    }

    Ok(())
}
