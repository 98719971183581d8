use census_scatter::api::{ChartConfig, ScatterChart};
use census_scatter::data::load_csv_path;
use census_scatter::platform_gtk::GtkScatterAdapter;
use census_scatter::render::CairoRenderer;
use census_scatter::{ChartResult, telemetry};
use gtk4 as gtk;
use gtk4::prelude::*;

const DEFAULT_DATA_PATH: &str = "tests/fixtures/census_sample.csv";

fn main() {
    let _ = telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.census_scatter.demos.gtk_scatter_lab")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize scatter lab: {err}");
            return;
        }
    };

    let viewport = chart.config().viewport;
    let adapter = GtkScatterAdapter::new(chart);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("census scatter lab")
        .default_width(i32::try_from(viewport.width).unwrap_or(950))
        .default_height(i32::try_from(viewport.height).unwrap_or(500))
        .child(adapter.widget())
        .build();
    window.present();
}

fn build_chart() -> ChartResult<ScatterChart<CairoRenderer>> {
    let path =
        std::env::var("CENSUS_SCATTER_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_owned());
    let dataset = load_csv_path(path)?;
    let config = ChartConfig::default();
    let renderer = CairoRenderer::new(
        i32::try_from(config.viewport.width).unwrap_or(950),
        i32::try_from(config.viewport.height).unwrap_or(500),
    )?;
    ScatterChart::new(renderer, dataset, config)
}
