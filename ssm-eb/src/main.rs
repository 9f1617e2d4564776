#[tokio::main(flavor = "current_thread")]
async fn main() {
    ssm_eb::app::start().await;
}
