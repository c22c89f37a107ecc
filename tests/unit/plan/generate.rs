use super::*;
use crate::plan::model::{ElementsDef, PaletteDef, PickDef};
use crate::{color::harmony::Harmony, layout::placer::PlacementOpts};

fn plan() -> DecorPlan {
    DecorPlan {
        seed: Seed(2024),
        elements: ElementsDef {
            count: 10,
            opts: PlacementOpts {
                exclusion: Some(crate::layout::placer::ExclusionZone::card_center()),
                ..PlacementOpts::default()
            },
        },
        palette: Some(PaletteDef {
            base: Hsl::new(350.0, 50.0, 50.0),
            harmony: Harmony::Complementary,
        }),
        picks: vec![
            PickDef {
                name: "greeting".to_string(),
                items: vec!["Hi".into(), "Hello".into(), "Hey".into(), "Yo".into()],
                count: 2,
                seed: None,
            },
            PickDef {
                name: "icons".to_string(),
                items: vec!["heart".into(), "star".into(), "cake".into()],
                count: 5,
                seed: Some(Seed(42)),
            },
        ],
    }
}

#[test]
fn generate_is_deterministic() {
    let p = plan();
    assert_eq!(p.generate().unwrap(), p.generate().unwrap());
}

#[test]
fn layout_sections_follow_the_plan() {
    let p = plan();
    let layout = p.generate().unwrap();
    assert_eq!(layout.seed, Seed(2024));
    assert_eq!(
        layout.positions,
        placements(p.seed, p.elements.count, &p.elements.opts)
    );

    let css: Vec<&str> = layout.palette.iter().map(|e| e.css.as_str()).collect();
    assert_eq!(css, vec!["hsl(350, 50%, 50%)", "hsl(170, 50%, 50%)"]);
    assert!(layout.palette.iter().all(|e| e.hex.len() == 7));

    assert_eq!(layout.picks["greeting"], pick(&p.picks[0].items, 2, p.seed));
    assert_eq!(layout.picks["icons"], pick(&p.picks[1].items, 5, Seed(42)));
    assert_eq!(layout.picks["icons"].len(), 3);
}

#[test]
fn empty_plan_generates_empty_layout() {
    let layout = DecorPlan::new(5u32).generate().unwrap();
    assert!(layout.positions.is_empty());
    assert!(layout.palette.is_empty());
    assert!(layout.picks.is_empty());
    let json = serde_json::to_string(&layout).unwrap();
    assert_eq!(json, r#"{"seed":5,"positions":[]}"#);
}

#[test]
fn seed_run_wraps() {
    assert_eq!(
        seed_run(Seed(u32::MAX - 1), 3),
        vec![Seed(u32::MAX - 1), Seed(u32::MAX), Seed(0)]
    );
    assert!(seed_run(Seed(1), 0).is_empty());
}

#[test]
fn batch_matches_sequential_generation() {
    let p = plan();
    let seeds = seed_run(Seed(100), 16);
    let batch = generate_batch(&p, &seeds, Some(3)).unwrap();
    assert_eq!(batch.len(), seeds.len());
    for (layout, &seed) in batch.iter().zip(&seeds) {
        assert_eq!(layout, &p.with_seed(seed).generate().unwrap());
    }
}

#[test]
fn batch_rejects_zero_threads() {
    let err = generate_batch(&plan(), &[Seed(1)], Some(0)).unwrap_err();
    assert!(matches!(err, SeedcardError::Validation(_)));
}

#[test]
fn palette_entry_from_hsl_carries_display_strings() {
    let entry = PaletteEntry::from(Hsl::new(0.0, 100.0, 50.0));
    assert_eq!(entry.css, "hsl(0, 100%, 50%)");
    assert_eq!(entry.hex, "#ff0000");
    assert_eq!(entry.hsl, Hsl::new(0.0, 100.0, 50.0));
}
