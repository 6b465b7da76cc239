//! Searchable, sortable, paginated table of user records whose view state
//! lives in the URL query string.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod pipeline;
#[cfg(feature = "data")]
pub mod query;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::FileRecordRepository;
    use crate::routes::api::api_v1_records;
    use crate::routes::main::{search_records, select_page, show_index, sort_records};

    /// Registers the table page, its actions and the JSON API.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(web::scope("/api").service(api_v1_records))
            .service(show_index)
            .service(search_records)
            .service(sort_records)
            .service(select_page);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(
        server_config: ServerConfig,
        repo: FileRecordRepository,
    ) -> std::io::Result<()> {
        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving {} records on {}:{}",
            repo.len(),
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
