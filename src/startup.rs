use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{chatbot_route, default_route},
    services::{GroqClient, SearchClient},
};

pub fn run(
    listener: TcpListener,
    http_client: reqwest::Client,
    search_client: SearchClient,
    groq_client: GroqClient,
) -> Result<Server, std::io::Error> {
    let http_client = web::Data::new(http_client);
    let search_client = web::Data::new(search_client);
    let groq_client = web::Data::new(groq_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(default_route::default)
            .service(web::scope("/api").service(chatbot_route::chatbot))
            .app_data(http_client.clone())
            .app_data(search_client.clone())
            .app_data(groq_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
