#[tokio::main]
async fn main() {
    fest_backend::run().await;
}
