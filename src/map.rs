//! Interactive map output: a single HTML page driven by Leaflet.
//!
//! - Base map centred on `(20, 0)` at zoom 2 with OpenStreetMap tiles
//! - One filled circle marker per [`MarkerSpec`], drawn in list order
//! - Click-activated popup showing the marker label
//!
//! All values written into the page script go through `serde_json`, so labels
//! and attributions are emitted as valid, escaped JS literals.

use crate::models::{Coordinate, MarkerSpec};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Base tile layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// Standard OpenStreetMap street tiles.
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            max_zoom: 19,
        }
    }
}

/// Stroke and fill for circle markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: String,
    pub fill: bool,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "blue".into(),
            fill: true,
            fill_color: "blue".into(),
            fill_opacity: 0.7,
            weight: 2.0,
        }
    }
}

/// Fixed base configuration for the rendered map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub marker_style: MarkerStyle,
    /// Popup width limit in pixels.
    pub popup_max_width: u32,
    pub title: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinate::new(20.0, 0.0),
            zoom: 2,
            tiles: TileLayer::openstreetmap(),
            marker_style: MarkerStyle::default(),
            popup_max_width: 200,
            title: "Scientific production by country".into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CircleOptions<'a> {
    radius: f64,
    #[serde(flatten)]
    style: &'a MarkerStyle,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

/// JSON-encode a value for inline use inside a `<script>` element.
fn js<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let s = serde_json::to_string(value)?;
    Ok(s.replace("</", "<\\/"))
}

/// Render the complete HTML document.
pub fn render_html(markers: &[MarkerSpec], config: &MapConfig) -> Result<String> {
    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\" />")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no\" />"
    )?;
    writeln!(html, "<title>{}</title>", escape_text(&config.title))?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\" />")?;
    writeln!(html, "<script src=\"{LEAFLET_JS}\"></script>")?;
    writeln!(
        html,
        "<style>html, body {{width: 100%; height: 100%; margin: 0; padding: 0;}} #map {{position: absolute; top: 0; bottom: 0; right: 0; left: 0;}}</style>"
    )?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<div id=\"map\"></div>")?;
    writeln!(html, "<script>")?;
    writeln!(
        html,
        "var map = L.map(\"map\", {{center: {}, zoom: {}}});",
        js(&config.center)?,
        config.zoom
    )?;
    writeln!(
        html,
        "L.tileLayer({}, {}).addTo(map);",
        js(&config.tiles.url_template)?,
        js(&TileOptions {
            attribution: &config.tiles.attribution,
            max_zoom: config.tiles.max_zoom,
        })?
    )?;
    for m in markers {
        let opts = CircleOptions {
            radius: m.radius,
            style: &config.marker_style,
        };
        writeln!(
            html,
            "L.circleMarker({}, {}).bindPopup(L.popup({{maxWidth: {}}}).setContent({})).addTo(map);",
            js(&m.location)?,
            js(&opts)?,
            config.popup_max_width,
            js(&m.label)?
        )?;
    }
    writeln!(html, "</script>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

/// Render and write the map to `path`.
pub fn save_html<P: AsRef<Path>>(markers: &[MarkerSpec], config: &MapConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let html = render_html(markers, config)?;
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
