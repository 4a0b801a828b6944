#[actix_web::main]
async fn main() -> std::io::Result<()> {
    senalba_relatorios_server::run().await
}
