use std::env;
use std::path::Path;
use std::sync::Arc;

use recip_ez::routes::router;
use recip_ez::{ApiError, Database, DATA_DIR, DEFAULT_PORT};

#[tokio::main]
async fn main() {
    env_logger::init();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DATA_DIR.to_string());

    let db = match Database::open(Path::new(&data_dir)) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            let error: ApiError = e.into();
            log::error!("failed to open database: {}", error.message());
            std::process::exit(1);
        }
    };

    log::info!("Recip-EZ server running on port {port}");
    warp::serve(router(db)).run(([0, 0, 0, 0], port)).await;
}
