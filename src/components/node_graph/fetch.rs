use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::GraphError;
use super::types::GraphDocument;

/// Endpoint serving the graph document.
pub const DATA_URI: &str = "/data";

fn network_err(value: JsValue) -> GraphError {
	GraphError::Network(format!("{value:?}"))
}

/// Fetches and deserializes the graph document. Any failure (network,
/// non-200 status, malformed body) aborts the load; the caller decides how
/// to surface it and no partial graph is rendered.
pub async fn load_document(uri: &str) -> Result<GraphDocument, GraphError> {
	let window =
		web_sys::window().ok_or_else(|| GraphError::Network("no window".to_string()))?;
	let response = JsFuture::from(window.fetch_with_str(uri))
		.await
		.map_err(network_err)?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| GraphError::Network("fetch returned a non-response".to_string()))?;

	if response.status() != 200 {
		warn!("graph fetch from {uri} returned status {}", response.status());
		return Err(GraphError::Status(response.status()));
	}

	let text_promise: js_sys::Promise = response.text().map_err(network_err)?;
	let text = JsFuture::from(text_promise)
		.await
		.map_err(network_err)?
		.as_string()
		.ok_or_else(|| GraphError::Network("response body was not text".to_string()))?;

	serde_json::from_str(&text).map_err(|e| GraphError::Parse(e.to_string()))
}
