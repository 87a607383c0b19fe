use approx::assert_relative_eq;
use scatter_rs::core::{DataPoint, DomainFloors, LinearScale, PlotArea, StateScales};

const FLOORS: DomainFloors = DomainFloors {
    poverty: 8.0,
    healthcare: 4.0,
};

fn default_plot() -> PlotArea {
    PlotArea {
        width: 710.0,
        height: 620.0,
    }
}

#[test]
fn x_domain_spans_fixed_floor_to_observed_maximum() {
    let points = vec![
        DataPoint::new("A", 10.0, 6.0),
        DataPoint::new("B", 15.0, 7.0),
        DataPoint::new("C", 20.0, 9.0),
    ];
    let scales = StateScales::from_points(&points, default_plot(), FLOORS).expect("scales");

    assert_eq!(scales.x.domain(), (8.0, 20.0));
    assert_eq!(scales.y.domain(), (4.0, 9.0));
}

#[test]
fn lower_bound_ignores_data_below_floor() {
    let points = vec![DataPoint::new("A", 2.0, 1.0), DataPoint::new("B", 12.0, 6.0)];
    let scales = StateScales::from_points(&points, default_plot(), FLOORS).expect("scales");

    assert_eq!(scales.x.domain().0, 8.0);
    assert_eq!(scales.y.domain().0, 4.0);
    assert!(scales.x.map(2.0) < 0.0);
}

#[test]
fn x_scale_maps_domain_ends_to_plot_edges() {
    let scale = LinearScale::new((8.0, 20.0), (0.0, 710.0)).expect("valid scale");
    assert_eq!(scale.map(8.0), 0.0);
    assert_eq!(scale.map(20.0), 710.0);
    assert_relative_eq!(scale.map(14.0), 355.0, epsilon = 1e-9);
}

#[test]
fn y_scale_is_inverted() {
    let scale = LinearScale::new((4.0, 10.0), (620.0, 0.0)).expect("valid scale");
    assert_eq!(scale.map(4.0), 620.0);
    assert_eq!(scale.map(10.0), 0.0);
    assert_relative_eq!(scale.invert(310.0), 7.0, epsilon = 1e-9);
}

#[test]
fn non_finite_values_map_to_nan() {
    let scale = LinearScale::new((8.0, 20.0), (0.0, 710.0)).expect("valid scale");
    assert!(scale.map(f64::NAN).is_nan());
    assert!(scale.map(f64::INFINITY).is_nan());
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((8.0, f64::NAN), (0.0, 710.0)).is_err());
    assert!(LinearScale::new((8.0, 20.0), (0.0, f64::INFINITY)).is_err());
}

#[test]
fn tick_format_covers_the_healthcare_domain() {
    let scale = LinearScale::new((4.0, 24.9), (620.0, 0.0)).expect("valid scale");
    let labels: Vec<String> = scale
        .tick_format(10)
        .into_iter()
        .map(|(_, label)| label)
        .collect();
    assert_eq!(
        labels,
        vec!["4", "6", "8", "10", "12", "14", "16", "18", "20", "22", "24"]
    );
}
