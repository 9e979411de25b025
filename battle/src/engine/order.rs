//! Turn order

use duel_protocol::Player;
use rand::Rng;

/// One actor's part of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub actor: Player,
    pub target: Player,
    pub move_id: String,
}

/// Decide who acts first: strictly faster side, coin flip on a tie.
///
/// The flip is redone every round, never cached.
pub fn first_actor<R: Rng + ?Sized>(p1_speed: u32, p2_speed: u32, rng: &mut R) -> Player {
    match p1_speed.cmp(&p2_speed) {
        std::cmp::Ordering::Greater => Player::P1,
        std::cmp::Ordering::Less => Player::P2,
        std::cmp::Ordering::Equal => {
            if rng.gen_bool(0.5) {
                Player::P1
            } else {
                Player::P2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_faster_side_acts_first() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(first_actor(15, 10, &mut rng), Player::P1);
            assert_eq!(first_actor(10, 15, &mut rng), Player::P2);
            assert_eq!(first_actor(11, 10, &mut rng), Player::P1);
        }
    }

    #[test]
    fn test_speed_tie_is_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(42);
        let trials = 2000;
        let p1_first = (0..trials)
            .filter(|_| first_actor(12, 12, &mut rng) == Player::P1)
            .count();

        // ~4.5 standard deviations either side of 1000
        assert!((900..=1100).contains(&p1_first), "p1 went first {p1_first} times");
    }
}
