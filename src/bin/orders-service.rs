use retail_health::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    retail_health::run(Service::Orders).await
}
