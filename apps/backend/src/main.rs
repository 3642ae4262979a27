#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lms_backend::run().await
}
