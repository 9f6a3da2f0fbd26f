use approx::assert_relative_eq;
use scene_chart::core::BandScale;

#[test]
fn bands_are_evenly_stepped_and_uniform() {
    let scale = BandScale::new(vec![1927, 1928, 1929, 1930], 0.0, 720.0, 0.1)
        .expect("valid scale");

    let positions: Vec<f64> = scale
        .keys()
        .iter()
        .map(|year| scale.position(*year).expect("known key"))
        .collect();

    for pair in positions.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], scale.step(), epsilon = 1e-9);
    }

    assert!(scale.bandwidth() > 0.0);
    assert!(scale.bandwidth() < scale.step());
    assert_relative_eq!(scale.bandwidth(), scale.step() * 0.9, epsilon = 1e-9);
}

#[test]
fn bands_stay_inside_the_pixel_range() {
    let keys: Vec<i32> = (1923..=2020).collect();
    let scale = BandScale::new(keys.clone(), 0.0, 720.0, 0.1).expect("valid scale");

    let first = scale.position(1923).expect("first band");
    let last = scale.position(2020).expect("last band");
    assert!(first >= 0.0);
    assert!(last + scale.bandwidth() <= 720.0 + 1e-9);
}

#[test]
fn zero_padding_fills_the_range() {
    let scale = BandScale::new(vec![2000, 2001], 0.0, 100.0, 0.0).expect("valid scale");

    assert_relative_eq!(scale.bandwidth(), 50.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position(2000).expect("first"), 0.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position(2001).expect("second"), 50.0, epsilon = 1e-9);
}

#[test]
fn unknown_key_has_no_position() {
    let scale = BandScale::new(vec![1999, 2000], 0.0, 100.0, 0.1).expect("valid scale");
    assert!(scale.position(1998).is_none());
}

#[test]
fn invalid_construction_is_rejected() {
    assert!(BandScale::new(vec![], 0.0, 100.0, 0.1).is_err());
    assert!(BandScale::new(vec![2000], 100.0, 0.0, 0.1).is_err());
    assert!(BandScale::new(vec![2000], 0.0, 100.0, 1.0).is_err());
    assert!(BandScale::new(vec![2000], 0.0, f64::NAN, 0.1).is_err());
}
