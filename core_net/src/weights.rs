//! Random starting weights for freshly connected synapses.

use rand::Rng;

/// A random weight in the closed interval [-0.2, +0.2], quantised to
/// tenth steps. This is the default used when connecting neurons without an
/// explicit weight.
pub fn random_weight<R: Rng>(rng: &mut R) -> f32 {
    random_weight_in(rng, 0, 2)
}

/// A random weight with magnitude `b + a/10` where `b` is drawn from
/// `0..=max_before_dot` and `a` from `0..=max_after_dot`, negated with
/// probability one half.
pub fn random_weight_in<R: Rng>(rng: &mut R, max_before_dot: u32, max_after_dot: u32) -> f32 {
    let before = rng.gen_range(0..=max_before_dot);
    let after = rng.gen_range(0..=max_after_dot);
    let magnitude = before as f32 + after as f32 / 10.0;
    if rng.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}
