//! End-to-end tests driving a built-in pathway through the player, the
//! way a host render loop would.

use pretty_assertions::assert_eq;
use referral_graph::{PathwayPlayer, PlaybackEvent, PlaybackState};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[test]
fn cardiac_pathway_walks_every_step_then_loops() {
    let cardiac = referral_graph::get_pattern("cardiac-referred-pain").unwrap();
    let mut player = PathwayPlayer::new(&cardiac.pathway);
    player.play().unwrap();

    let mut entered = Vec::new();
    let mut looped = false;
    let mut frames = 0;
    while !looped {
        for event in player.advance(FRAME_MS) {
            match event {
                PlaybackEvent::StepEntered(i) => entered.push(i),
                PlaybackEvent::Looped => looped = true,
                PlaybackEvent::Completed => panic!("loopable pathway completed"),
            }
        }
        frames += 1;
        assert!(frames < 10_000);
    }

    assert_eq!(entered, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_step(), 0);
    // 12s at 60fps, give or take the frame that crosses the boundary
    assert!((720..=721).contains(&frames));
}

#[test]
fn non_loopable_copy_parks_on_last_step() {
    let mut pathway = referral_graph::get_pattern("diaphragm-referred-pain").unwrap().pathway.clone();
    pathway.loopable = false;

    let mut player = PathwayPlayer::new(&pathway);
    player.play().unwrap();
    let events = player.advance(pathway.total_duration as f64);
    assert_eq!(events.last(), Some(&PlaybackEvent::Completed));
    assert_eq!(player.state(), PlaybackState::Completed);
    assert_eq!(player.current_step(), pathway.len() - 1);
    assert_eq!(player.current().map(|s| s.step_number), Some(5));
    assert!(!player.control().is_playing);
}

#[test]
fn player_resumes_from_builder_control_block() {
    let state = referral_graph::create_pain_referral_visualization("appendix-referred-pain").unwrap();
    let pathway = &state.active_pattern.pathway;

    let mut player = PathwayPlayer::from_control(pathway, state.pathway_animation);
    assert_eq!(player.state(), PlaybackState::Idle);
    assert_eq!(player.control(), state.pathway_animation);

    player.play().unwrap();
    player.advance(2500.0);
    player.pause().unwrap();
    let control = player.control();
    assert_eq!(control.current_step, 1);

    let resumed = PathwayPlayer::from_control(pathway, control);
    assert_eq!(resumed.state(), PlaybackState::Paused);
    assert_eq!(resumed.current().map(|s| s.structure_id.as_str()), Some("nervous-splanchnic-nerves"));
}
