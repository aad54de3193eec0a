use actix_web::HttpServer;
use std::env;

use crate::app::config::Config;
use crate::app::factory::CreateApp;

mod app;
mod analysis;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  if env::var_os("RUST_LOG").is_none() {
    env::set_var("RUST_LOG", "actix_web=info,info");
  }
  env_logger::init();

  let config : Config = Config::load();
  let bind_address = (config.server_host.clone(), config.server_port);
  log::info!("Starting financial analysis server on {}:{}", bind_address.0, bind_address.1);

  let server_builder = HttpServer::new(move || {
    let factory: CreateApp = CreateApp::new(config.clone());
    factory.build_app().wrap(actix_web::middleware::Logger::default())
  });

  let server = server_builder.bind(bind_address)?;

  server.run().await?;

  Ok(())
}
