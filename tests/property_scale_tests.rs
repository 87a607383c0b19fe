use proptest::prelude::*;
use scatter_rs::core::LinearScale;

proptest! {
    #[test]
    fn mapping_is_monotonic_over_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (620.0, 0.0)).expect("valid scale");

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_px = scale.map(domain_start + low * domain_span);
        let high_px = scale.map(domain_start + high * domain_span);

        // Inverted range: larger values sit higher, i.e. at smaller y.
        prop_assert!(high_px <= low_px + 1e-9);
        prop_assert!((-1e-6..=620.0 + 1e-6).contains(&low_px));
    }

    #[test]
    fn ticks_stay_inside_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        count in 1usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 710.0)).expect("valid scale");
        let ticks = scale.ticks(count);

        prop_assert!(!ticks.is_empty());
        let tolerance = domain_span * 1e-9;
        for tick in &ticks {
            prop_assert!(*tick >= domain_start - tolerance);
            prop_assert!(*tick <= domain_end + tolerance);
        }
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
