//! GTK4 embedding for a `ScatterChart`.
//!
//! The adapter owns a `DrawingArea` and routes host input to the chart:
//! primary clicks hit-test axis labels, pointer motion drives the hover
//! tooltip, and a tick callback keeps redrawing while transitions run.

use std::cell::RefCell;
use std::rc::Rc;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::ScatterChart;
use crate::render::CairoRenderer;

pub type SharedChart = Rc<RefCell<ScatterChart<CairoRenderer>>>;

pub struct GtkScatterAdapter {
    drawing_area: gtk::DrawingArea,
    chart: SharedChart,
}

impl GtkScatterAdapter {
    #[must_use]
    pub fn new(chart: ScatterChart<CairoRenderer>) -> Self {
        let viewport = chart.config().viewport;
        let chart: SharedChart = Rc::new(RefCell::new(chart));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        install_draw_func(&drawing_area, Rc::clone(&chart));
        install_click_controller(&drawing_area, Rc::clone(&chart));
        install_motion_controller(&drawing_area, Rc::clone(&chart));
        install_tick_callback(&drawing_area, Rc::clone(&chart));

        Self {
            drawing_area,
            chart,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }
}

fn now_ms() -> f64 {
    glib::monotonic_time() as f64 / 1_000.0
}

fn install_draw_func(area: &gtk::DrawingArea, chart: SharedChart) {
    area.set_draw_func(move |_, context, _, _| {
        let now = now_ms();
        if let Err(err) = chart.borrow_mut().render_on_cairo_context(context, now) {
            warn!(error = %err, "chart draw failed");
        }
    });
}

fn install_click_controller(area: &gtk::DrawingArea, chart: SharedChart) {
    let click = gtk::GestureClick::new();
    let weak_area = area.downgrade();
    click.connect_pressed(move |_, _, x, y| {
        let outcome = chart.borrow_mut().click_at(x, y, now_ms());
        match outcome {
            Ok(Some(outcome)) if outcome.is_applied() => {
                if let Some(area) = weak_area.upgrade() {
                    area.queue_draw();
                }
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "label click failed"),
        }
    });
    area.add_controller(click);
}

fn install_motion_controller(area: &gtk::DrawingArea, chart: SharedChart) {
    let motion = gtk::EventControllerMotion::new();

    let weak_area = area.downgrade();
    let motion_chart = Rc::clone(&chart);
    motion.connect_motion(move |_, x, y| {
        let mut chart = motion_chart.borrow_mut();
        chart.pointer_move(x, y, now_ms());
        if !chart.pending_invalidation().is_none() {
            if let Some(area) = weak_area.upgrade() {
                area.queue_draw();
            }
        }
    });

    let weak_area = area.downgrade();
    motion.connect_leave(move |_| {
        chart.borrow_mut().pointer_leave();
        if let Some(area) = weak_area.upgrade() {
            area.queue_draw();
        }
    });

    area.add_controller(motion);
}

fn install_tick_callback(area: &gtk::DrawingArea, chart: SharedChart) {
    area.add_tick_callback(move |area, _| {
        if chart.borrow().needs_render(now_ms()) {
            area.queue_draw();
        }
        glib::ControlFlow::Continue
    });
}
