use super::*;
use crate::story::layout::PageLayout;

fn uniform(p: f64) -> RegionProgress {
    RegionProgress {
        page: p,
        stage: p,
        memories: p,
        cards: vec![p; 4],
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn backdrop_walks_through_its_three_stops() {
    let story = Story::new().unwrap();
    let start = story.sample(&uniform(0.0), MotionPolicy::Full, false);
    assert_eq!(
        start.backdrop.background_image,
        "radial-gradient(1200px 800px at 50% 10%, rgba(120,170,255,0.18), rgba(0,0,0,0.9))"
    );
    let mid = story.sample(&uniform(0.55), MotionPolicy::Full, false);
    assert!(
        mid.backdrop
            .background_image
            .contains("rgba(255,120,185,0.16)")
    );
    let end = story.sample(&uniform(1.0), MotionPolicy::Full, false);
    assert!(end.backdrop.background_image.ends_with("rgba(0,0,0,0.88))"));
    assert!(close(end.backdrop.vignette_opacity, 0.64));
}

#[test]
fn hero_fades_out_early() {
    let story = Story::new().unwrap();
    let f = story.sample(&uniform(0.04), MotionPolicy::Full, false);
    assert!(close(f.hero.title_opacity, 0.5));
    assert_eq!(f.hero.title_opacity, f.hero.hint_opacity);
    let f = story.sample(&uniform(0.2), MotionPolicy::Full, false);
    assert_eq!(f.hero.title_opacity, 0.0);
}

#[test]
fn orbs_converge_as_the_page_scrolls() {
    let story = Story::new().unwrap();
    let f = story.sample(&uniform(0.0), MotionPolicy::Full, false);
    assert_eq!(f.orbs.left_x, "-22vw");
    assert_eq!(f.orbs.right_x, "22vw");
    assert_eq!(f.orbs.bridge_opacity, 0.0);
    let f = story.sample(&uniform(1.0), MotionPolicy::Full, false);
    assert_eq!(f.orbs.left_x, "-2.8vw");
    assert_eq!(f.orbs.right_x, "2.8vw");
    assert!(close(f.orbs.glow, 0.85));
    assert!(close(f.orbs.scale, 1.08));
}

#[test]
fn finale_card_fades_in_over_the_trigger_band() {
    let story = Story::new().unwrap();
    let before = story.sample(&uniform(FINALE_REVEAL_START), MotionPolicy::Full, false);
    assert_eq!(before.finale.opacity, 0.0);
    assert_eq!(before.finale.y, 16.0);
    let mid = story.sample(&uniform(0.85), MotionPolicy::Full, false);
    assert!(close(mid.finale.opacity, 0.5));
    let done = story.sample(&uniform(FINALE_REVEAL_END), MotionPolicy::Full, false);
    assert_eq!(done.finale.opacity, 1.0);
    assert_eq!(done.finale.y, 0.0);
}

#[test]
fn stage_panels_reveal_their_lines() {
    let story = Story::new().unwrap();
    let f = story.sample(&uniform(0.0), MotionPolicy::Full, false);
    assert_eq!(f.stage.panels.len(), 3);
    assert_eq!(f.stage.panels[0].label, "At the top");
    assert!(
        f.stage
            .panels
            .iter()
            .flat_map(|p| &p.lines)
            .all(|l| l.opacity == 0.0)
    );
    assert!(close(f.stage.connector_scale_y, 0.05));
    assert!(close(f.stage.panels[2].scale, 0.985));

    let f = story.sample(&uniform(1.0), MotionPolicy::Full, false);
    assert!(
        f.stage
            .panels
            .iter()
            .flat_map(|p| &p.lines)
            .all(|l| l.opacity == 1.0)
    );
    assert_eq!(f.stage.panels[0].scale, 1.0);
    assert_eq!(f.stage.panels[2].scale, 1.0);
    assert_eq!(f.stage.grid.y, -6.0);
    assert!(close(f.stage.connector_opacity, 0.55));
}

#[test]
fn cards_settle_from_their_own_drift() {
    let story = Story::new().unwrap();
    assert_eq!(story.card_count(), 4);
    let f = story.sample(&uniform(0.0), MotionPolicy::Full, false);
    let c = &f.memories.cards[0];
    assert_eq!(c.opacity, 0.0);
    assert_eq!(c.offset, Vec2::new(-30.0, 18.0));
    assert_eq!(c.rotate_deg, -10.0);
    assert_eq!(c.filter, "blur(8px)");
    assert_eq!(f.memories.cards[3].offset.x, 30.0);

    let f = story.sample(&uniform(1.0), MotionPolicy::Full, false);
    let c = &f.memories.cards[1];
    assert_eq!(c.opacity, 1.0);
    assert_eq!(c.offset, Vec2::ZERO);
    assert_eq!(c.rotate_deg, 2.0);
    assert_eq!(c.filter, "blur(0px)");
}

#[test]
fn missing_card_progress_reads_as_zero() {
    let story = Story::new().unwrap();
    let mut p = uniform(1.0);
    p.cards.truncate(1);
    let f = story.sample(&p, MotionPolicy::Full, false);
    assert_eq!(f.memories.cards[0].opacity, 1.0);
    assert_eq!(f.memories.cards[3].opacity, 0.0);
}

#[test]
fn reduced_motion_keeps_opacity_and_drops_movement() {
    let story = Story::new().unwrap();
    let f = story.sample(&uniform(0.1), MotionPolicy::Reduced, false);
    let c = &f.memories.cards[0];
    assert!(c.opacity > 0.0);
    assert_eq!(c.offset, Vec2::ZERO);
    assert_eq!(c.rotate_deg, 0.0);
    assert_eq!(c.filter, "none");
    assert_eq!(f.stage.whisper.filter, "none");
    assert_eq!(f.stage.grid.y, 0.0);
    assert_eq!(f.orbs.left_x, "0vw");
    assert_eq!(f.orbs.scale, 1.0);
    assert!(!f.hero.show_particles);
    assert!(!f.finale.show_particles);
}

#[test]
fn frames_from_a_real_layout_serialize() {
    let story = Story::new().unwrap();
    let layout = PageLayout::default();
    let f = story.sample(&layout.progress_at(2000.0), MotionPolicy::Full, true);
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["soft_mode"], true);
    assert!(v["pill"]["text"].as_str().unwrap().ends_with('%'));
    assert_eq!(v["memories"]["cards"].as_array().unwrap().len(), 4);
}
