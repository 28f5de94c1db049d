//! Leptos components wrapping the treemap scene.
//!
//! [`TreemapChart`] rebuilds the scene whenever its `data` signal changes and
//! maps it onto SVG: one `g > rect.tile + text.tile-text` group per leaf and a
//! `g#legend` group under the canvas. Hover handlers on the tiles write into a
//! shared [`TooltipState`] signal that [`TreemapTooltip`] renders.

use leptos::prelude::*;
use log::warn;
use web_sys::MouseEvent;

use super::config::{TooltipConfig, TreemapConfig};
use super::render::{Scene, Tile};
use super::state::TooltipState;
use super::theme::Theme;
use super::types::SalesNode;

/// Renders the treemap and its legend as an SVG element.
///
/// Nothing is drawn until `data` holds a document. Layout errors (for example
/// a leaf without a value) are logged and shown in place of the chart.
#[component]
pub fn TreemapChart(
	#[prop(into)] data: Signal<Option<SalesNode>>,
	tooltip: RwSignal<TooltipState>,
	#[prop(default = TreemapConfig::default())] config: TreemapConfig,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	move || {
		let root = data.get()?;
		let view = match Scene::build(&root, &config, &theme) {
			Ok(scene) => chart(&scene, tooltip, &config.tooltip, &theme),
			Err(e) => {
				warn!("sales-treemap: cannot draw {}: {}", root.name, e);
				view! { <p class="treemap-error">{e.to_string()}</p> }.into_any()
			}
		};
		Some(view)
	}
}

fn chart(
	scene: &Scene,
	tooltip: RwSignal<TooltipState>,
	tooltip_config: &TooltipConfig,
	theme: &Theme,
) -> AnyView {
	let tile_text = theme.tile_text.to_css();
	let tiles = scene
		.tiles
		.iter()
		.map(|tile| tile_group(tile.clone(), tooltip, tooltip_config.clone(), tile_text.clone()))
		.collect_view();

	let legend = &scene.legend;
	let (swatch, label_x, label_y) = (
		legend.swatch_size.to_string(),
		legend.label_x.to_string(),
		legend.label_y.to_string(),
	);
	let legend_text = theme.legend_text.to_css();
	let legend_items = legend
		.items
		.iter()
		.map(|item| {
			let fill = scene
				.legend_color(&item.category)
				.unwrap_or(theme.fallback)
				.to_css();
			view! {
				<g transform=format!("translate({},{})", item.x, item.y)>
					<rect
						class="legend-item"
						x="0"
						y="0"
						width=swatch.clone()
						height=swatch.clone()
						fill=fill
					/>
					<text x=label_x.clone() y=label_y.clone() fill=legend_text.clone()>
						{item.category.clone()}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<svg width=scene.width.to_string() height=scene.height.to_string()>
			<g class="tiles">{tiles}</g>
			<g id="legend" transform=scene.legend_transform()>{legend_items}</g>
		</svg>
	}
	.into_any()
}

fn tile_group(
	tile: Tile,
	tooltip: RwSignal<TooltipState>,
	config: TooltipConfig,
	text_color: String,
) -> impl IntoView {
	let hovered = tile.clone();
	let on_mouseover = move |ev: MouseEvent| {
		tooltip.update(|t| t.show(&hovered, ev.page_x() as f64, ev.page_y() as f64, &config));
	};
	let on_mouseout = move |_: MouseEvent| tooltip.update(TooltipState::hide);

	let lines = tile
		.lines
		.iter()
		.map(|line| {
			view! { <tspan x=line.x.to_string() y=line.y.to_string()>{line.text.clone()}</tspan> }
		})
		.collect_view();

	view! {
		<g transform=tile.transform()>
			<rect
				class="tile"
				width=tile.width.to_string()
				height=tile.height.to_string()
				data-name=tile.name.clone()
				data-category=tile.category.clone()
				data-value=tile.value.clone()
				fill=tile.fill.to_css()
				on:mouseover=on_mouseover
				on:mouseout=on_mouseout
			/>
			<text class="tile-text" fill=text_color>{lines}</text>
		</g>
	}
}

/// The floating `#tooltip` element driven by tile hover events.
#[component]
pub fn TreemapTooltip(
	tooltip: RwSignal<TooltipState>,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let (background, color) = (
		theme.tooltip_background.to_css(),
		theme.tooltip_text.to_css(),
	);
	view! {
		<div
			id="tooltip"
			class="tooltip"
			data-value=move || tooltip.with(|t| t.value.clone())
			style=move || tooltip.with(|t| t.style(&background, &color))
			inner_html=move || tooltip.with(TooltipState::html)
		/>
	}
}
