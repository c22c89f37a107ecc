use super::*;

fn hues(colors: &[Hsl]) -> Vec<f64> {
    colors.iter().map(|c| c.h).collect()
}

#[test]
fn complementary_wraps_around_the_wheel() {
    let c = Hsl::new(350.0, 50.0, 50.0).complementary();
    assert_eq!(c, Hsl::new(170.0, 50.0, 50.0));
    assert_eq!(Hsl::new(10.0, 20.0, 30.0).complementary().h, 190.0);
}

#[test]
fn triadic_starts_with_base() {
    let t = Hsl::new(300.0, 40.0, 70.0).triadic();
    assert_eq!(hues(&t), vec![300.0, 60.0, 180.0]);
    assert!(t.iter().all(|c| c.s == 40.0 && c.l == 70.0));
}

#[test]
fn analogous_is_lower_base_higher() {
    let a = Hsl::new(10.0, 50.0, 50.0).analogous(30.0);
    assert_eq!(hues(&a), vec![340.0, 10.0, 40.0]);
    let a = Hsl::new(350.0, 50.0, 50.0).analogous(DEFAULT_ANALOGOUS_SPREAD);
    assert_eq!(hues(&a), vec![320.0, 350.0, 20.0]);
}

#[test]
fn new_wraps_out_of_range_hues() {
    assert_eq!(Hsl::new(-30.0, 0.0, 0.0).h, 330.0);
    assert_eq!(Hsl::new(720.0, 0.0, 0.0).h, 0.0);
    assert_eq!(Hsl::new(-1e-20, 0.0, 0.0).h, 0.0);
}

#[test]
fn display_rounds_each_component() {
    assert_eq!(Hsl::new(12.4, 50.5, 99.49).to_string(), "hsl(12, 51%, 99%)");
    assert_eq!(Hsl::new(170.0, 50.0, 50.0).to_string(), "hsl(170, 50%, 50%)");
}

#[test]
fn harmony_apply_orders() {
    let base = Hsl::new(200.0, 60.0, 40.0);
    assert_eq!(
        hues(&Harmony::Complementary.apply(base)),
        vec![200.0, 20.0]
    );
    assert_eq!(
        hues(&Harmony::Triadic.apply(base)),
        vec![200.0, 320.0, 80.0]
    );
    assert_eq!(
        hues(&Harmony::default().apply(base)),
        vec![170.0, 200.0, 230.0]
    );
}

#[test]
fn harmony_json_is_tagged_by_kind() {
    let h: Harmony = serde_json::from_str(r#"{"kind":"analogous"}"#).unwrap();
    assert_eq!(h, Harmony::Analogous { spread: 30.0 });
    let h: Harmony = serde_json::from_str(r#"{"kind":"analogous","spread":15}"#).unwrap();
    assert_eq!(h, Harmony::Analogous { spread: 15.0 });
    let h: Harmony = serde_json::from_str(r#"{"kind":"triadic"}"#).unwrap();
    assert_eq!(h, Harmony::Triadic);
    assert!(serde_json::from_str::<Harmony>(r#"{"kind":"square"}"#).is_err());
}
