use rand::Rng;

use crate::services::sanitize::LINE_BREAK;

/// Canned onboarding reply for greeting-only messages.
pub const ONBOARDING: &str = "Hey! I'm AIM-Mitr, your study buddy. \
Ask me any doubt from your subjects, like a formula you forgot, a concept that feels fuzzy, \
or a numerical you're stuck on, and I'll break it down for you.";

/// In-character reply when the upstream call fails for any reason.
pub const APOLOGY: &str = "Oops, my brain froze for a second! \
Something went wrong on my side while answering that. Please ask me again in a little while.";

/// In-character reply when the server has no upstream credential.
pub const MISCONFIGURED: &str = "I'm not fully set up yet! My answer engine isn't \
configured on this server. Please ask your teacher or admin to check the settings.";

/// Motivational closing lines, one appended to every successful answer.
pub const CLOSERS: &[&str] = &[
    "Keep practising, you're closer than you think!",
    "Every doubt you clear today is one less surprise in the exam.",
    "Small steps every day, that's how toppers are made.",
    "You've got this. One concept at a time!",
    "Revise it once tonight and it's yours forever.",
];

/// Pick one closer using the caller's random source. Tests pass a seeded
/// rng; the handler passes `rand::rng()`.
pub fn pick_closer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CLOSERS[rng.random_range(0..CLOSERS.len())]
}

/// Append a closing line after two display line breaks.
pub fn with_closer(text: &str, closer: &str) -> String {
    format!("{text}{LINE_BREAK}{LINE_BREAK}{closer}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_rng_picks_deterministically_from_the_pool() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);
        let a = pick_closer(&mut first);
        let b = pick_closer(&mut second);
        assert_eq!(a, b);
        assert!(CLOSERS.contains(&a));
    }

    #[test]
    fn every_pick_is_a_pool_member() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(CLOSERS.contains(&pick_closer(&mut rng)));
        }
    }

    #[test]
    fn closer_is_separated_by_two_breaks() {
        let shaped = with_closer("Answer is 4", "Keep going!");
        assert_eq!(shaped, "Answer is 4<br><br>Keep going!");
    }
}
