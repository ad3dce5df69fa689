#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orderbot::run().await
}
