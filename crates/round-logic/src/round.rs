//! Session execution engine

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Variant};
use crate::strategy::ChoiceSource;
use crate::verdict::Verdict;
use crate::winner;

/// Result of a single round
///
/// The verdict is from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub computer: Choice,
    pub player: Choice,
    pub verdict: Verdict,
}

/// Result of a complete session, tallies from the player's perspective
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub rounds: Vec<RoundRecord>,
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub round_count: u32,
}

/// How long a session runs and over which symbol set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub rounds: u32,
    pub variant: Variant,
}

impl SessionConfig {
    /// Ten rounds over the five-symbol game
    pub const fn standard() -> Self {
        Self { rounds: 10, variant: Variant::Long }
    }

    /// Ten rounds over classic rock-paper-scissors
    pub const fn short() -> Self {
        Self { rounds: 10, variant: Variant::Short }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Run a complete session between two choice sources
///
/// The computer draws before the player each round, so sessions replay
/// exactly for a given seed even when both sources are random.
///
/// # Arguments
/// * `computer` - source for the opposing side
/// * `player` - source for the reference side
/// * `config` - round count and game variant
/// * `rng` - session generator, shared by both sources
pub fn run_session(
    computer: &ChoiceSource,
    player: &ChoiceSource,
    config: &SessionConfig,
    rng: &mut SmallRng,
) -> SessionResult {
    let mut rounds: Vec<RoundRecord> = Vec::with_capacity(config.rounds as usize);
    let mut wins = 0u32;
    let mut ties = 0u32;
    let mut losses = 0u32;

    for round in 0..config.rounds {
        let computer_said = computer.choose(config.variant, rng);
        let player_said = player.choose(config.variant, rng);

        let verdict = winner(computer_said, player_said);
        match verdict {
            Verdict::Win => wins += 1,
            Verdict::Tie => ties += 1,
            Verdict::Loss => losses += 1,
        }

        rounds.push(RoundRecord {
            round,
            computer: computer_said,
            player: player_said,
            verdict,
        });
    }

    SessionResult {
        rounds,
        wins,
        ties,
        losses,
        round_count: config.rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict_of;
    use rand::SeedableRng;

    fn make_rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_standard_config() {
        let config = SessionConfig::standard();
        assert_eq!(config.rounds, 10);
        assert_eq!(config.variant, Variant::Long);
        assert_eq!(SessionConfig::default(), config);

        let short = SessionConfig::short();
        assert_eq!(short.rounds, 10);
        assert_eq!(short.variant, Variant::Short);
    }

    #[test]
    fn test_round_count_and_indices() {
        let mut rng = make_rng();
        let config = SessionConfig { rounds: 7, variant: Variant::Long };

        let result = run_session(
            &ChoiceSource::Random,
            &ChoiceSource::Fixed(Choice::Scissors),
            &config,
            &mut rng,
        );

        assert_eq!(result.round_count, 7);
        assert_eq!(result.rounds.len(), 7);
        for (i, record) in result.rounds.iter().enumerate() {
            assert_eq!(record.round, i as u32);
        }
    }

    #[test]
    fn test_zero_rounds() {
        let mut rng = make_rng();
        let config = SessionConfig { rounds: 0, variant: Variant::Long };

        let result = run_session(
            &ChoiceSource::Random,
            &ChoiceSource::Fixed(Choice::Scissors),
            &config,
            &mut rng,
        );

        assert!(result.rounds.is_empty());
        assert_eq!(result.round_count, 0);
        assert_eq!((result.wins, result.ties, result.losses), (0, 0, 0));
    }

    #[test]
    fn test_session_determinism() {
        let config = SessionConfig::standard();
        let computer = ChoiceSource::Random;
        let player = ChoiceSource::Fixed(Choice::Scissors);

        let result1 = run_session(&computer, &player, &config, &mut SmallRng::seed_from_u64(7));
        let result2 = run_session(&computer, &player, &config, &mut SmallRng::seed_from_u64(7));

        assert_eq!(result1, result2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = SessionConfig { rounds: 50, variant: Variant::Long };
        let computer = ChoiceSource::Random;
        let player = ChoiceSource::Fixed(Choice::Scissors);

        let result1 = run_session(&computer, &player, &config, &mut SmallRng::seed_from_u64(1));
        let result2 = run_session(&computer, &player, &config, &mut SmallRng::seed_from_u64(2));

        // Not guaranteed but extremely likely over 50 rounds
        let said1: Vec<Choice> = result1.rounds.iter().map(|r| r.computer).collect();
        let said2: Vec<Choice> = result2.rounds.iter().map(|r| r.computer).collect();
        assert_ne!(said1, said2, "Different seeds should give different sessions");
    }

    #[test]
    fn test_tallies_match_records() {
        let mut rng = make_rng();
        let config = SessionConfig { rounds: 200, variant: Variant::Long };

        let result = run_session(&ChoiceSource::Random, &ChoiceSource::Random, &config, &mut rng);

        let wins = result.rounds.iter().filter(|r| r.verdict == Verdict::Win).count() as u32;
        let ties = result.rounds.iter().filter(|r| r.verdict == Verdict::Tie).count() as u32;
        let losses = result.rounds.iter().filter(|r| r.verdict == Verdict::Loss).count() as u32;

        assert_eq!(result.wins, wins);
        assert_eq!(result.ties, ties);
        assert_eq!(result.losses, losses);
        assert_eq!(wins + ties + losses, result.round_count);
    }

    #[test]
    fn test_verdicts_follow_rule() {
        let mut rng = make_rng();
        let config = SessionConfig { rounds: 100, variant: Variant::Long };

        let result = run_session(&ChoiceSource::Random, &ChoiceSource::Random, &config, &mut rng);

        // Every record's verdict is the rule applied with the player as
        // the reference side
        for record in &result.rounds {
            assert_eq!(record.verdict, verdict_of(record.player, record.computer));
        }
    }

    #[test]
    fn test_short_session_stays_short() {
        let mut rng = make_rng();
        let config = SessionConfig { rounds: 200, variant: Variant::Short };

        let result = run_session(&ChoiceSource::Random, &ChoiceSource::Random, &config, &mut rng);

        for record in &result.rounds {
            assert!(u8::from(record.computer) < 3);
            assert!(u8::from(record.player) < 3);
        }
    }

    #[test]
    fn test_spock_smashes_scissors() {
        let mut rng = make_rng();
        let config = SessionConfig::standard();

        let result = run_session(
            &ChoiceSource::Fixed(Choice::Spock),
            &ChoiceSource::Fixed(Choice::Scissors),
            &config,
            &mut rng,
        );

        // The player holds scissors against spock and loses every round
        for record in &result.rounds {
            assert_eq!(record.computer, Choice::Spock);
            assert_eq!(record.player, Choice::Scissors);
            assert_eq!(record.verdict, Verdict::Loss);
        }
        assert_eq!(result.losses, 10);
        assert_eq!((result.wins, result.ties), (0, 0));
    }

    #[test]
    fn test_paper_falls_to_scissors() {
        let mut rng = make_rng();
        let config = SessionConfig::standard();

        let result = run_session(
            &ChoiceSource::Fixed(Choice::Paper),
            &ChoiceSource::Fixed(Choice::Scissors),
            &config,
            &mut rng,
        );

        assert_eq!(result.wins, 10);
        assert_eq!((result.ties, result.losses), (0, 0));
    }
}
