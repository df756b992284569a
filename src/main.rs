#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    judgment_drafter_server::run().await
}
