use census_scatter::ScatterChart;
use census_scatter::api::{
    ChartConfig, ChartState, build_render_frame, on_label_click, pointer_move,
};
use census_scatter::core::{Dataset, Field, Record};
use census_scatter::render::{NullRenderer, TextHAlign, TextPrimitive};

fn record(abbr: &str, poverty: f64, age: f64, healthcare: f64) -> Record {
    Record {
        name: format!("State {abbr}"),
        abbr: abbr.to_owned(),
        poverty,
        age,
        income: 50_000.0,
        healthcare,
        obesity: 25.0,
        smokes: 18.0,
    }
}

fn dataset() -> Dataset {
    Dataset::new(vec![
        record("AA", 10.0, 30.0, 5.0),
        record("BB", 30.0, 40.0, 15.0),
    ])
    .expect("valid dataset")
}

fn state() -> ChartState {
    ChartState::initialize(dataset(), ChartConfig::default()).expect("state init")
}

fn find_text<'a>(texts: &'a [TextPrimitive], content: &str) -> &'a TextPrimitive {
    texts
        .iter()
        .find(|text| text.text == content)
        .unwrap_or_else(|| panic!("missing text `{content}`"))
}

#[test]
fn frame_draws_one_circle_and_abbreviation_per_record() {
    let frame = build_render_frame(&state(), 0.0).expect("frame");

    assert_eq!(frame.circles.len(), 2);
    assert!(frame.rects.is_empty());
    for circle in &frame.circles {
        assert_eq!(circle.radius, 10.0);
    }

    let aa = find_text(&frame.texts, "AA");
    assert_eq!(aa.x, frame.circles[0].cx);
    assert_eq!(aa.y, frame.circles[0].cy);
    assert_eq!(aa.h_align, TextHAlign::Center);
}

#[test]
fn frame_places_points_inside_the_plot_area() {
    let state = state();
    let plot = state.plot_area();
    let frame = build_render_frame(&state, 0.0).expect("frame");

    for circle in &frame.circles {
        assert!(circle.cx >= plot.left && circle.cx <= plot.left + plot.width);
        assert!(circle.cy >= plot.top && circle.cy <= plot.top + plot.height);
    }
}

#[test]
fn active_labels_are_bold_and_inactive_labels_are_muted() {
    let config = ChartConfig::default();
    let frame = build_render_frame(&state(), 0.0).expect("frame");

    let poverty = find_text(&frame.texts, Field::Poverty.label_text());
    assert!(poverty.bold);
    assert_eq!(poverty.color, config.active_label_color);
    assert_eq!(poverty.rotation_deg, 0.0);

    let age = find_text(&frame.texts, Field::Age.label_text());
    assert!(!age.bold);
    assert_eq!(age.color, config.inactive_label_color);

    let healthcare = find_text(&frame.texts, Field::Healthcare.label_text());
    assert!(healthcare.bold);
    assert_eq!(healthcare.rotation_deg, -90.0);
}

#[test]
fn label_styles_follow_a_click() {
    let mut state = state();
    on_label_click(&mut state, Field::Age, 0.0).expect("click");
    let frame = build_render_frame(&state, 0.0).expect("frame");

    assert!(find_text(&frame.texts, Field::Age.label_text()).bold);
    assert!(!find_text(&frame.texts, Field::Poverty.label_text()).bold);
    assert!(!find_text(&frame.texts, Field::Income.label_text()).bold);
}

#[test]
fn y_axis_tick_labels_cover_the_domain() {
    let frame = build_render_frame(&state(), 0.0).expect("frame");
    let y_ticks: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();

    // domain [4, 15] with ten requested ticks steps by one
    assert_eq!(y_ticks.first(), Some(&"4"));
    assert_eq!(y_ticks.last(), Some(&"15"));
    assert_eq!(y_ticks.len(), 12);
}

#[test]
fn hovered_point_adds_a_tooltip_box_above_it() {
    let mut state = state();
    let plot = state.plot_area();
    let (x, y) = state.displayed_positions(0.0)[0];
    let (vx, vy) = (plot.to_viewport_x(x), plot.to_viewport_y(y));
    pointer_move(&mut state, vx, vy, 0.0);

    let frame = build_render_frame(&state, 0.0).expect("frame");
    assert_eq!(frame.rects.len(), 1);
    let tooltip = frame.rects[0];
    assert!(tooltip.y + tooltip.height <= vy - 10.0);
    assert!(tooltip.x < vx && tooltip.x + tooltip.width > vx);

    find_text(&frame.texts, "% in Poverty: 10");
    find_text(&frame.texts, "% Lacks Healthcare: 5");
}

#[test]
fn frame_builder_is_pure_for_a_given_timestamp() {
    let mut state = state();
    on_label_click(&mut state, Field::Age, 0.0).expect("click");

    let first = build_render_frame(&state, 2_500.0).expect("frame");
    let second = build_render_frame(&state, 2_500.0).expect("frame");
    assert_eq!(first, second);

    let later = build_render_frame(&state, 7_500.0).expect("frame");
    assert_ne!(first.circles, later.circles);
}

#[test]
fn scatter_chart_renders_through_the_null_renderer() {
    let mut chart = ScatterChart::new(NullRenderer::default(), dataset(), ChartConfig::default())
        .expect("chart");
    assert!(chart.needs_render(0.0));

    chart.render(0.0).expect("render");
    assert!(!chart.needs_render(0.0));

    chart.click_label(Field::Obesity, 10.0).expect("click");
    assert!(chart.needs_render(10.0));
    chart.render(10.0).expect("render");
    assert!(chart.needs_render(20.0), "points are still gliding");
    chart.render(20_000.0).expect("render");
    assert!(!chart.needs_render(20_000.0));

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 3);
    let frame = renderer.last_frame.expect("last frame");
    assert_eq!(frame.circles.len(), 2);
}
