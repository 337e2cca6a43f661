pub mod routes;

use actix_web::{middleware, web, App, HttpServer};

use crate::analysis::ResumePipeline;

pub use routes::configure;

pub async fn run_server(pipeline: ResumePipeline, host: &str, port: u16) -> std::io::Result<()> {
    let pipeline = web::Data::new(pipeline);
    tracing::info!("Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(pipeline.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
