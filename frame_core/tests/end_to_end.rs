//! Full search over a small all-plastic catalog loaded from CSV text.
//!
//! Every section has `Lp` beyond any span used here, so capacities are the
//! tabulated plastic moments and the trial weights can be checked by hand.

use frame_core::catalog::SectionCatalog;
use frame_core::frame::{
    evaluate_beam_count, BayLayout, FrameInfeasibility, FrameInput, FrameOutcome, MemberRole,
};
use frame_core::{frame_optimizer, DesignSettings};

const FIXTURE_CSV: &str = "\
EDI_Std_Nomenclature,W,d,tw,plastic,Lp,Lr
B-LIGHT,40,16,0.5,7000,40,60
B-MID,60,18,0.5,9500,40,60
B-HEAVY,200,24,0.5,14000,40,60
G-1,150,30,0.5,21000,40,60
G-2,250,36,0.6,30000,40,60
BROKEN,–,12,0.3,5000,40,60
";

fn fixture() -> SectionCatalog {
    SectionCatalog::from_csv_reader(FIXTURE_CSV.as_bytes(), "fixture").unwrap()
}

#[test]
fn test_fixture_parses() {
    let catalog = fixture();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.skipped_rows, 1);
    assert!(catalog.lookup("BROKEN").is_err());
    assert_eq!(catalog.lookup("g-2").unwrap().depth_in, 36.0);
}

#[test]
fn test_search_finds_two_beams() {
    let catalog = fixture();
    let input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
    let outcome = frame_optimizer(&catalog, &input, &DesignSettings::default()).unwrap();

    let design = outcome.design().expect("fixture frames a 20x30 bay");
    assert_eq!(design.beam_count(), 2);
    assert_eq!(design.total_weight_lb(), 13000.0);

    let config = &design.configuration;
    assert_eq!(config.interior_beam.id(), "B-MID");
    assert_eq!(config.side_beam.id(), "B-LIGHT");
    assert_eq!(config.girder.id(), "G-1");

    // n = 1 at 13600, n = 2 at 13000, n = 3 ties and stops the search
    let weights: Vec<f64> = design
        .trials
        .iter()
        .map(|t| t.result.clone().unwrap())
        .collect();
    assert_eq!(weights, vec![13600.0, 13000.0, 13000.0]);
}

#[test]
fn test_equal_weight_does_not_improve() {
    let catalog = fixture();
    let input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
    let settings = DesignSettings::default();

    let three = evaluate_beam_count(&catalog, &input, &settings, 3).unwrap();
    assert_eq!(three.interior_beam.id(), "B-LIGHT");
    assert_eq!(three.total_weight_lb, 13000.0);
}

#[test]
fn test_orientation_does_not_matter() {
    let catalog = fixture();
    let settings = DesignSettings::default();
    let wide_input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
    let tall_input = FrameInput::new(30.0, 20.0, 50.0, 40.0);
    let wide = frame_optimizer(&catalog, &wide_input, &settings).unwrap();
    let tall = frame_optimizer(&catalog, &tall_input, &settings).unwrap();
    assert_eq!(wide, tall);
}

#[test]
fn test_girder_depth_limit_makes_bay_infeasible() {
    let catalog = fixture();
    let input = FrameInput::new(20.0, 30.0, 50.0, 40.0).with_depth_limits(0.0, 24.0);
    let outcome = frame_optimizer(&catalog, &input, &DesignSettings::default()).unwrap();

    match outcome {
        FrameOutcome::Infeasible { reason, trials } => {
            assert_eq!(reason, FrameInfeasibility::BeamCountExceeded { ceiling: 20 });
            assert_eq!(trials.len(), 20);
            assert!(trials
                .iter()
                .all(|t| t.result.clone().unwrap_err().member == MemberRole::Girder));
        }
        other => panic!("expected infeasible, got {:?}", other),
    }
}

#[test]
fn test_layout_of_optimum() {
    let catalog = fixture();
    let input = FrameInput::new(20.0, 30.0, 50.0, 40.0);
    let outcome = frame_optimizer(&catalog, &input, &DesignSettings::default()).unwrap();
    let layout = BayLayout::from_design(&input, outcome.design().unwrap());

    assert_eq!(layout.members.len(), 6);
    assert_eq!(layout.interior_ticks_ft, vec![10.0, 20.0]);
    let girder = layout.members_with_role(MemberRole::Girder).next().unwrap();
    assert_eq!(girder.section_id, "G-1");
    assert_eq!(girder.length_ft(), 30.0);
}
