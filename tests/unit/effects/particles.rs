use super::*;

#[test]
fn confetti_pieces_stay_in_their_ranges() {
    let mut rng = SplitMix64::new(3);
    let b = Burst::confetti(&mut rng);
    assert_eq!(b.kind, BurstKind::Confetti);
    assert_eq!(b.pieces.len(), CONFETTI_PIECES);
    assert_eq!(b.lifetime_ms, 3200);
    for p in &b.pieces {
        assert!((0.0..100.0).contains(&p.left.value));
        assert_eq!(p.top.value, -8.0);
        assert!((0.0..360.0).contains(&p.rotate_deg));
        assert!((0.7..0.95).contains(&p.opacity));
        assert!((1.6..3.0).contains(&p.duration_secs));
        assert!((0.0..0.12).contains(&p.delay_secs));
    }
}

#[test]
fn sparkles_cluster_around_the_centre() {
    let mut rng = SplitMix64::new(11);
    let b = Burst::sparkle(&mut rng);
    assert_eq!(b.pieces.len(), SPARKLE_PIECES);
    assert_eq!(b.lifetime_ms, 1600);
    for p in &b.pieces {
        assert!((35.0..65.0).contains(&p.left.value));
        assert!((40.0..60.0).contains(&p.top.value));
        assert!((0.0..0.2).contains(&p.delay_secs));
    }
}

#[test]
fn same_seed_spawns_the_same_burst() {
    let a = Burst::confetti(&mut SplitMix64::new(42));
    let b = Burst::confetti(&mut SplitMix64::new(42));
    assert_eq!(a, b);
    let c = Burst::confetti(&mut SplitMix64::new(43));
    assert_ne!(a, c);
}

#[test]
fn field_size_scales_with_intensity() {
    let mut rng = SplitMix64::new(1);
    assert_eq!(ParticleField::new(1.0, &mut rng).len(), 26);
    assert_eq!(ParticleField::new(1.2, &mut rng).len(), 31);
    assert!(ParticleField::new(0.0, &mut rng).is_empty());
    assert!(ParticleField::new(-2.0, &mut rng).is_empty());
    assert!(ParticleField::new(f64::NAN, &mut rng).is_empty());
}

#[test]
fn field_dots_stay_in_their_ranges() {
    let f = ParticleField::new(1.0, &mut SplitMix64::new(9));
    for d in &f.dots {
        assert!((0.6..2.2).contains(&d.size.value));
        assert!((6.0..16.0).contains(&d.drift_secs));
        assert!((0.08..0.2).contains(&d.opacity));
    }
}
