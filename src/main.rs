#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::content::{GLOBAL_CATALOG, GLOBAL_CONTACT};
    use portfolio_site::i18n::GLOBAL_TRANSLATIONS;
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;

    // also picks up `log` records from the library
    tracing_subscriber::fmt::init();

    // Load and validate content up front so problems show in the startup log
    tracing::info!(
        projects = GLOBAL_CATALOG.len(),
        translations = GLOBAL_TRANSLATIONS.len(),
        has_email = GLOBAL_CONTACT.email.is_some(),
        "content loaded"
    );

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
