use axum::{Router, middleware, routing::get};

use crate::App;
use crate::core::gate;
use crate::pages;

pub fn init(state: App) -> Router {
	let public_router = Router::new()
		.route("/", get(pages::handler::home))
		.route("/login", get(pages::handler::login))
		.route_layer(middleware::from_fn_with_state(state.clone(), gate::gate_public));

	let private_router = Router::new()
		.route("/dashboard", get(pages::handler::dashboard))
		.route_layer(middleware::from_fn_with_state(state.clone(), gate::gate_authenticated));

	let admin_router = Router::new()
		.route("/admin", get(pages::handler::admin_home))
		.route_layer(middleware::from_fn_with_state(state.clone(), gate::gate_admin));

	let api_router = Router::new()
		.route("/api/status", get(pages::handler::api_status))
		.route_layer(middleware::from_fn_with_state(state.clone(), gate::gate_api));

	let profiler = state.config.profiler;
	let router = Router::new()
		.merge(public_router)
		.merge(private_router)
		.merge(admin_router)
		.merge(api_router)
		.with_state(state);

	if profiler {
		router.layer(tower_http::trace::TraceLayer::new_for_http())
	} else {
		router
	}
}

// vim: ts=4
