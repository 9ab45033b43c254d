use std::sync::Arc;

use axum::serve;
use memeline::routes::{init_tracing, make_app};
use memeline::utils::state::AppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let state = Arc::new(AppState::init());
    let addr = state.config.bind_addr.clone();
    let app = make_app(state);

    let listener = TcpListener::bind(&addr).await;
    info!("Listening on http://{addr}");

    match listener {
        Ok(res) => serve(res, app).await.unwrap(),
        Err(err) => panic!("{}", err),
    }
}
