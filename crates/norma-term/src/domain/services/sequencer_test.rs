use super::*;
use crate::domain::models::Guide;
use crate::domain::models::Step;

fn fixture_steps() -> Vec<Step> {
    return Guide::walkthrough().steps;
}

#[test]
fn it_renders_every_position() {
    let steps = fixture_steps();
    let total = steps.len();

    for (position, step) in steps.iter().enumerate() {
        let view = render(step, position, total);
        assert_eq!(view.badge, format!("Paso {position}"));
        assert_eq!(view.title, step.title);
        assert_eq!(view.description, step.description);
        assert_eq!(view.tables, step.tables);
    }
}

#[test]
fn it_clamps_repeated_advances() {
    let mut sequencer = Sequencer::new(fixture_steps()).unwrap();

    for _ in 0..10 {
        sequencer.advance();
    }

    assert_eq!(sequencer.position(), 3);
    assert!(!sequencer.advance());
    assert_eq!(sequencer.position(), 3);
}

#[test]
fn it_clamps_repeated_retreats() {
    let mut sequencer = Sequencer::new(fixture_steps()).unwrap();
    while sequencer.advance() {}

    for _ in 0..10 {
        sequencer.retreat();
    }

    assert_eq!(sequencer.position(), 0);
    assert!(!sequencer.retreat());
    assert_eq!(sequencer.position(), 0);
}

#[test]
fn it_disables_controls_at_the_bounds() {
    let mut sequencer = Sequencer::new(fixture_steps()).unwrap();

    let view = sequencer.view();
    assert!(!view.controls.retreat_enabled);
    assert!(view.controls.advance_enabled);

    sequencer.advance();
    let view = sequencer.view();
    assert!(view.controls.retreat_enabled);
    assert!(view.controls.advance_enabled);

    while sequencer.advance() {}
    let view = sequencer.view();
    assert!(view.controls.retreat_enabled);
    assert!(!view.controls.advance_enabled);
}

#[test]
fn it_rejects_an_empty_sequence() {
    assert!(Sequencer::new(vec![]).is_err());
}

#[test]
fn it_accepts_a_single_step() {
    let mut sequencer = Sequencer::new(vec![fixture_steps().remove(0)]).unwrap();

    assert!(!sequencer.advance());
    assert!(!sequencer.retreat());

    let view = sequencer.view();
    assert!(!view.controls.retreat_enabled);
    assert!(!view.controls.advance_enabled);
}
