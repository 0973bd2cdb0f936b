use clap::{App, ArgMatches};
use hyper::{
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use hyper_staticfile::Static;
use postboard::db;
use postboard::gql::{self, Context, Schema};
use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::{convert::Infallible, sync::Arc};

pub const NAME: &str = "serve";

const GRAPHQL_PATH: &str = "/graphql";
const GRAPHIQL_PATH: &str = "/graphiql";

pub fn app() -> App<'static> {
    App::new(NAME).about("Start web API server")
}

pub async fn execute(_matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    let schema = Arc::new(gql::schema());
    let ctx = Arc::new(Context {
        pool: db::create_pool(config)?,
    });
    let staticfiles = Static::new(Path::new(&config.get::<String>("http_server_static_path")?));

    let new_service = make_service_fn(move |_| {
        let schema = schema.clone();
        let ctx = ctx.clone();
        let staticfiles = staticfiles.clone();
        async move {
            Ok::<_, hyper::Error>(service_fn(move |req| {
                route(req, schema.clone(), ctx.clone(), staticfiles.clone())
            }))
        }
    });

    let server_addr: SocketAddr = config.get::<String>("http_server_address")?.parse()?;
    let server = Server::bind(&server_addr).serve(new_service);
    log::info!("Listening on http://{}", server_addr);

    if let Err(e) = server.await {
        log::error!("server error: {}", e)
    }

    Ok(())
}

async fn route(
    req: Request<Body>,
    schema: Arc<Schema>,
    ctx: Arc<Context>,
    staticfiles: Static,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = String::from(req.uri().path());
    log::debug!("{} {}", method, path);
    let response = match path.as_str() {
        GRAPHIQL_PATH if method == Method::GET => {
            juniper_hyper::graphiql(GRAPHQL_PATH, None).await
        }
        GRAPHQL_PATH if method == Method::GET || method == Method::POST => {
            juniper_hyper::graphql(schema, ctx, req).await
        }
        _ => serve_static(staticfiles, req).await,
    };
    Ok(response)
}

async fn serve_static(staticfiles: Static, req: Request<Body>) -> Response<Body> {
    match staticfiles.serve(req).await {
        Ok(response) => response,
        Err(err) => {
            log::debug!("static file error: {:?}", err);
            let mut response = Response::new(Body::from(format!("{:?}", err)));
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}
