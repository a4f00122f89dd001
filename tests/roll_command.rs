//! `/roll` bounds and distribution checks.
use pocketbot::commands::roll::roll;
use pocketbot::reply::Reply;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Counts every draw so tests can assert the RNG was left alone.
struct CountingRng {
    inner: StdRng,
    draws: usize,
}

impl CountingRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }
    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }
}

fn rolled_value(reply: &Reply) -> i64 {
    let start = reply.content.find("**").expect("bold result") + 2;
    let end = start + reply.content[start..].find("**").expect("closing bold");
    reply.content[start..end].parse().expect("numeric result")
}

#[test]
fn out_of_range_sides_never_draw() {
    for sides in [i64::MIN, -5, 0, 1, 100_001, 1_000_000, i64::MAX] {
        let mut rng = CountingRng::new(7);
        let reply = roll(Some(sides), &mut rng);
        assert_eq!(reply, Reply::public("Choose between 2 and 100000 sides."));
        assert_eq!(rng.draws, 0, "sides={sides} should not touch the rng");
    }
}

#[test]
fn results_stay_within_die() {
    let mut rng = CountingRng::new(42);
    for sides in [2, 3, 6, 20, 99_999, 100_000] {
        for _ in 0..200 {
            let reply = roll(Some(sides), &mut rng);
            assert!(!reply.ephemeral);
            assert!(reply.content.ends_with(&format!("(1–{sides})")));
            let value = rolled_value(&reply);
            assert!((1..=sides).contains(&value), "{value} outside 1..={sides}");
        }
    }
    assert!(rng.draws > 0);
}

#[test]
fn two_sided_die_hits_both_faces() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = [false; 2];
    for _ in 0..100 {
        seen[(rolled_value(&roll(Some(2), &mut rng)) - 1) as usize] = true;
    }
    assert_eq!(seen, [true, true]);
}

#[test]
fn missing_sides_defaults_to_six() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        assert_eq!(roll(None, &mut a), roll(Some(6), &mut b));
    }
    let reply = roll(None, &mut StdRng::seed_from_u64(1));
    assert!(reply.content.starts_with("🎲 You rolled **"));
    assert!(reply.content.ends_with("(1–6)"));
}
