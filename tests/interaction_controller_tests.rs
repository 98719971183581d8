use approx::assert_relative_eq;
use census_scatter::api::{
    AnimatedAttribute, ChartConfig, ChartState, ClickOutcome, InvalidationTopic, label_at,
    on_label_click, pointer_leave, pointer_move,
};
use census_scatter::core::{Axis, Dataset, Field, Record};

fn record(
    abbr: &str,
    poverty: f64,
    age: f64,
    income: f64,
    healthcare: f64,
    obesity: f64,
    smokes: f64,
) -> Record {
    Record {
        name: format!("State {abbr}"),
        abbr: abbr.to_owned(),
        poverty,
        age,
        income,
        healthcare,
        obesity,
        smokes,
    }
}

fn two_state_dataset() -> Dataset {
    Dataset::new(vec![
        record("AA", 10.0, 30.0, 40_000.0, 5.0, 20.0, 15.0),
        record("BB", 30.0, 40.0, 60_000.0, 15.0, 30.0, 35.0),
    ])
    .expect("valid dataset")
}

fn initial_state() -> ChartState {
    ChartState::initialize(two_state_dataset(), ChartConfig::default()).expect("state init")
}

#[test]
fn initial_state_activates_poverty_and_healthcare() {
    let state = initial_state();
    assert_eq!(state.active_x(), Field::Poverty);
    assert_eq!(state.active_y(), Field::Healthcare);
    assert_eq!(state.tooltip().fields(), (Field::Poverty, Field::Healthcare));
    assert_eq!(state.tooltip().generation(), 0);
    assert!(!state.has_running_transitions(0.0));

    let (x_start, x_end) = state.domain(Axis::X);
    assert_relative_eq!(x_start, 8.0, epsilon = 1e-9);
    assert_relative_eq!(x_end, 36.0, epsilon = 1e-9);
    assert_eq!(state.domain(Axis::Y), (4.0, 15.0));
}

#[test]
fn clicking_the_active_label_is_a_no_op() {
    let mut state = initial_state();
    let domain_before = state.domain(Axis::X);
    let positions_before = state.displayed_positions(0.0);

    let outcome = on_label_click(&mut state, Field::Poverty, 0.0).expect("click");

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(outcome.invalidation().is_none());
    assert_eq!(state.domain(Axis::X), domain_before);
    assert_eq!(state.displayed_positions(0.0), positions_before);
    assert_eq!(state.tooltip().generation(), 0);
    assert!(!state.has_running_transitions(0.0));
}

#[test]
fn clicking_age_switches_only_the_x_axis() {
    let mut state = initial_state();
    let y_domain_before = state.domain(Axis::Y);
    let y_targets_before = state.target_positions(Axis::Y);

    let outcome = on_label_click(&mut state, Field::Age, 1_000.0).expect("click");
    let ClickOutcome::Applied(switch) = outcome else {
        panic!("age click must apply");
    };

    assert_eq!(switch.axis, Axis::X);
    assert_eq!(switch.previous, Field::Poverty);
    assert_eq!(switch.current, Field::Age);
    assert_relative_eq!(switch.domain.0, 24.0, epsilon = 1e-9);
    assert_relative_eq!(switch.domain.1, 48.0, epsilon = 1e-9);

    assert_eq!(state.active_x(), Field::Age);
    assert_eq!(state.active_y(), Field::Healthcare);
    assert_eq!(state.domain(Axis::Y), y_domain_before);
    assert_eq!(state.target_positions(Axis::Y), y_targets_before);

    let labels = state.labels(Axis::X).labels();
    let active: Vec<Field> = labels
        .iter()
        .filter(|label| label.active)
        .map(|label| label.field)
        .collect();
    assert_eq!(active, vec![Field::Age]);
}

#[test]
fn field_switch_reports_axis_points_labels_and_tooltip_invalidation() {
    let mut state = initial_state();
    let outcome = on_label_click(&mut state, Field::Obesity, 0.0).expect("click");
    let topics = outcome.invalidation();

    assert!(topics.contains(InvalidationTopic::YAxis));
    assert!(topics.contains(InvalidationTopic::Points));
    assert!(topics.contains(InvalidationTopic::Labels));
    assert!(topics.contains(InvalidationTopic::Tooltip));
    assert!(!topics.contains(InvalidationTopic::XAxis));
}

#[test]
fn points_glide_from_old_to_new_positions() {
    let mut state = initial_state();
    let old_x = state.target_positions(Axis::X);

    on_label_click(&mut state, Field::Age, 1_000.0).expect("click");
    let new_x = state.target_positions(Axis::X);

    // plot width is 810 with the default layout
    assert_relative_eq!(new_x[0], 202.5, epsilon = 1e-6);
    assert_relative_eq!(new_x[1], 540.0, epsilon = 1e-6);

    let at_start: Vec<f64> = state
        .displayed_positions(1_000.0)
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    assert_relative_eq!(at_start[0], old_x[0], epsilon = 1e-9);
    assert_relative_eq!(at_start[1], old_x[1], epsilon = 1e-9);

    let halfway: Vec<f64> = state
        .displayed_positions(6_000.0)
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    assert_relative_eq!(halfway[0], (old_x[0] + new_x[0]) / 2.0, epsilon = 1e-6);

    let settled: Vec<f64> = state
        .displayed_positions(11_000.0)
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    assert_eq!(settled, new_x);
    assert!(!state.has_running_transitions(11_000.0));
}

#[test]
fn axis_domain_animates_over_the_short_axis_duration() {
    let mut state = initial_state();
    let ClickOutcome::Applied(switch) =
        on_label_click(&mut state, Field::Smokes, 0.0).expect("click")
    else {
        panic!("smokes click must apply");
    };

    assert_eq!(state.domain(Axis::Y), (14.0, 35.0));
    let (start, end) = state.displayed_domain(Axis::Y, 50.0);
    assert_relative_eq!(start, 9.0, epsilon = 1e-9);
    assert_relative_eq!(end, 25.0, epsilon = 1e-9);
    assert_eq!(state.displayed_domain(Axis::Y, 100.0), (14.0, 35.0));

    assert!(!state.transitions().is_running(AnimatedAttribute::YAxisDomain, 100.0));
    assert!(!state.transitions().is_live(switch.axis_transition, 100.0));
    assert!(state.transitions().is_running(AnimatedAttribute::PointsY, 100.0));
    assert!(state.transitions().is_live(switch.point_transition, 100.0));
}

#[test]
fn switching_back_restores_original_domain_and_positions() {
    let mut state = initial_state();
    let original_domain = state.domain(Axis::X);
    let original_targets = state.target_positions(Axis::X);

    on_label_click(&mut state, Field::Age, 0.0).expect("age");
    on_label_click(&mut state, Field::Poverty, 20_000.0).expect("poverty");

    assert_eq!(state.active_x(), Field::Poverty);
    assert_eq!(state.domain(Axis::X), original_domain);
    assert_eq!(state.target_positions(Axis::X), original_targets);
    assert_eq!(state.displayed_positions(40_000.0).len(), 2);
}

#[test]
fn each_applied_switch_rebinds_the_tooltip() {
    let mut state = initial_state();
    on_label_click(&mut state, Field::Income, 0.0).expect("income");
    on_label_click(&mut state, Field::Income, 1.0).expect("income again");
    on_label_click(&mut state, Field::Smokes, 2.0).expect("smokes");

    assert_eq!(state.tooltip().generation(), 2);
    assert_eq!(state.tooltip().fields(), (Field::Income, Field::Smokes));
}

#[test]
fn rapid_clicks_supersede_the_running_point_transition() {
    let mut state = initial_state();
    let ClickOutcome::Applied(first) = on_label_click(&mut state, Field::Age, 0.0).expect("age")
    else {
        panic!("age click must apply");
    };
    let displayed_before = state.displayed_positions(5_000.0);

    let ClickOutcome::Applied(second) =
        on_label_click(&mut state, Field::Income, 5_000.0).expect("income")
    else {
        panic!("income click must apply");
    };

    assert!(!state.transitions().is_live(first.point_transition, 5_000.0));
    assert!(state.transitions().is_live(second.point_transition, 5_000.0));

    let displayed_after = state.displayed_positions(5_000.0);
    for (before, after) in displayed_before.iter().zip(&displayed_after) {
        assert_relative_eq!(before.0, after.0, epsilon = 1e-9);
        assert_relative_eq!(before.1, after.1, epsilon = 1e-9);
    }

    let settled: Vec<f64> = state
        .displayed_positions(15_000.0)
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    assert_eq!(settled, state.target_positions(Axis::X));
}

#[test]
fn all_zero_field_centers_points_on_the_axis() {
    let dataset = Dataset::new(vec![
        record("AA", 10.0, 30.0, 0.0, 5.0, 20.0, 15.0),
        record("BB", 30.0, 40.0, 0.0, 15.0, 30.0, 35.0),
    ])
    .expect("valid dataset");
    let mut state = ChartState::initialize(dataset, ChartConfig::default()).expect("init");

    let outcome = on_label_click(&mut state, Field::Income, 0.0).expect("income click");

    assert!(outcome.is_applied());
    assert_eq!(state.active_x(), Field::Income);
    assert_eq!(state.domain(Axis::X), (0.0, 0.0));
    assert_eq!(state.target_positions(Axis::X), vec![405.0, 405.0]);
    assert_eq!(state.tooltip().generation(), 1);
    assert!(state.has_running_transitions(0.0));
}

#[test]
fn label_hit_testing_resolves_both_axes() {
    let state = initial_state();

    // X labels stack below the plot starting at y = 455.
    assert_eq!(label_at(&state, 505.0, 450.0), Some(Field::Poverty));
    assert_eq!(label_at(&state, 505.0, 470.0), Some(Field::Age));
    assert_eq!(label_at(&state, 505.0, 490.0), Some(Field::Income));

    // Y labels are rotated columns left of the plot.
    assert_eq!(label_at(&state, 62.0, 220.0), Some(Field::Healthcare));
    assert_eq!(label_at(&state, 45.0, 220.0), Some(Field::Obesity));

    assert_eq!(label_at(&state, 500.0, 200.0), None);
}

#[test]
fn hovering_a_point_selects_it_and_leaving_clears_it() {
    let mut state = initial_state();
    let plot = state.plot_area();
    let (x, y) = state.displayed_positions(0.0)[0];
    let (vx, vy) = (plot.to_viewport_x(x), plot.to_viewport_y(y));

    assert_eq!(pointer_move(&mut state, vx + 3.0, vy - 3.0, 0.0), Some(0));
    assert_eq!(state.hovered_record().map(|r| r.abbr.as_str()), Some("AA"));

    let content = state.tooltip_content().expect("tooltip for hovered record");
    assert_eq!(content.lines.as_slice(), ["% in Poverty: 10", "% Lacks Healthcare: 5"]);

    assert_eq!(pointer_move(&mut state, vx + 30.0, vy, 0.0), None);
    assert!(state.tooltip_content().is_none());

    pointer_move(&mut state, vx, vy, 0.0);
    pointer_leave(&mut state);
    assert_eq!(state.hover().hovered(), None);
    assert_eq!(state.hover().pointer(), None);
}

#[test]
fn tooltip_follows_the_new_field_pair_after_a_switch() {
    let mut state = initial_state();
    on_label_click(&mut state, Field::Age, 0.0).expect("age");

    let plot = state.plot_area();
    let (x, y) = state.displayed_positions(0.0)[1];
    pointer_move(
        &mut state,
        plot.to_viewport_x(x),
        plot.to_viewport_y(y),
        0.0,
    );

    let content = state.tooltip_content().expect("tooltip");
    assert_eq!(content.lines.as_slice(), ["Median Age: 40", "% Lacks Healthcare: 15"]);
}
