//! sales-treemap: Treemap visualization of video game sales.
//!
//! This crate provides a WASM-based chart that loads a hierarchical sales
//! document, lays it out as a treemap, and renders it as SVG with a category
//! legend and a hover tooltip.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlScriptElement, Response, Window};

pub mod components;
pub mod error;

pub use components::treemap::{
	SalesNode, Theme, TooltipState, TreemapChart, TreemapConfig, TreemapTooltip,
};
pub use error::{Error, Result};

/// Location of the video game sales dataset.
pub const DEFAULT_DATA_URL: &str =
	"https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sales-treemap: logging initialized");
}

/// Text of the `<script>` element with the given id, if present.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load sales data embedded in a script element with id="treemap-data".
/// Expected format: JSON with { name, children: [...] }
pub fn load_inline_data() -> Option<SalesNode> {
	let json_text = script_text("treemap-data")?;

	match serde_json::from_str::<SalesNode>(&json_text) {
		Ok(data) => {
			info!(
				"sales-treemap: loaded {} records inline",
				data.leaf_count()
			);
			Some(data)
		}
		Err(e) => {
			warn!("sales-treemap: failed to parse inline data: {}", e);
			None
		}
	}
}

/// Load chart overrides from a script element with id="treemap-config".
/// Missing fields keep their defaults; an unreadable element is ignored.
pub fn load_config() -> TreemapConfig {
	let Some(json_text) = script_text("treemap-config") else {
		return TreemapConfig::default();
	};
	serde_json::from_str(&json_text).unwrap_or_else(|e| {
		warn!("sales-treemap: ignoring invalid config: {}", e);
		TreemapConfig::default()
	})
}

/// Fetch and parse the sales document at `url`.
pub async fn fetch_sales_data(url: &str) -> Result<SalesNode> {
	let window: Window = web_sys::window().ok_or(Error::NoWindow)?;
	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| Error::fetch(url, e))?;
	let response: Response = response.dyn_into().map_err(|e| Error::fetch(url, e))?;
	if !response.ok() {
		return Err(Error::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|e| Error::fetch(url, e))?;
	let text = JsFuture::from(body)
		.await
		.map_err(|e| Error::fetch(url, e))?
		.as_string()
		.unwrap_or_default();
	let data: SalesNode = serde_json::from_str(&text)?;
	info!(
		"sales-treemap: fetched {} records from {}",
		data.leaf_count(),
		url
	);
	Ok(data)
}

/// Inline data when the page embeds it, otherwise a single fetch of `url`.
pub async fn load_sales_data(url: &str) -> Result<SalesNode> {
	match load_inline_data() {
		Some(data) => Ok(data),
		None => fetch_sales_data(url).await,
	}
}

/// Main application component.
/// Loads the sales data once on mount and renders the treemap.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let theme = config
		.theme
		.as_deref()
		.and_then(Theme::by_name)
		.unwrap_or_default();

	let data = RwSignal::new(None::<SalesNode>);
	let load_error = RwSignal::new(None::<String>);
	let tooltip = RwSignal::new(TooltipState::default());

	Effect::new(move |_| {
		spawn_local(async move {
			match load_sales_data(DEFAULT_DATA_URL).await {
				Ok(sales) => {
					if data.try_set(Some(sales)).is_some() {
						debug!("sales-treemap: chart unmounted before data arrived");
					}
				}
				Err(e) => {
					warn!("sales-treemap: {}", e);
					let _ = load_error.try_set(Some(e.to_string()));
				}
			}
		});
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Video Game Sales" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="App">
			<h1 id="title">"Video Game Sales"</h1>
			<p id="description">"Top 100 Most Sold Video Games Grouped by Platform"</p>
			<div id="tree-map">
				<TreemapChart data=data tooltip=tooltip config=config theme=theme.clone() />
				{move || {
					load_error
						.get()
						.map(|message| view! { <p class="treemap-error">{message}</p> })
				}}
			</div>
			<TreemapTooltip tooltip=tooltip theme=theme />
		</div>
	}
}
