use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::errors::RpsError;

/// A player's move. Only these three variants can ever be stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Index order used when the house picks a move from entropy
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Rock blunts Scissors, Paper covers Rock, Scissors cut Paper
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }
}

/// Accepts exactly "Rock", "Paper" or "Scissors"; anything else is `InvalidMove`.
impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Rock" => Ok(Choice::Rock),
            "Paper" => Ok(Choice::Paper),
            "Scissors" => Ok(Choice::Scissors),
            _ => Err(RpsError::InvalidMove),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        f.write_str(name)
    }
}

/// Escrow holding the reward lamports of one player.
///
/// The escrowed amount is the account's own lamport balance above its rent
/// reserve; there is no separate counter to drift out of sync.
#[account]
pub struct VaultAccount {
    /// Player this vault belongs to
    pub owner: Pubkey,
    /// Canonical bump of [VAULT_SEED, owner]
    pub bump: u8,
}

impl VaultAccount {
    /// 8 bytes discriminator + 32 bytes pubkey + 1 byte bump
    pub const LEN: usize = 8 + 32 + 1;

    /// Lamports that can be paid out without touching the rent reserve
    pub fn spendable(lamports: u64, rent_floor: u64) -> u64 {
        lamports.saturating_sub(rent_floor)
    }

    pub fn is_owned_by(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }
}

/// The current move of one player
#[account]
pub struct GameAccount {
    pub owner: Pubkey,
    pub answer: Choice,
    /// Canonical bump of [GAME_SEED, owner]
    pub bump: u8,
}

impl GameAccount {
    /// 8 bytes discriminator + 32 bytes pubkey + 1 byte move + 1 byte bump
    pub const LEN: usize = 8 + 32 + 1 + 1;

    pub fn is_owned_by(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Stores `raw` as the new move and returns the one it replaced.
    /// An unparseable move leaves the account untouched.
    pub fn submit(&mut self, raw: &str) -> std::result::Result<Choice, RpsError> {
        let answer: Choice = raw.parse()?;
        Ok(std::mem::replace(&mut self.answer, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn serialized_len<T: AnchorSerialize>(value: &T) -> usize {
        let mut buf = Vec::new();
        value.serialize(&mut buf).unwrap();
        buf.len()
    }

    #[test]
    fn test_parse_valid_moves() {
        assert_eq!("Rock".parse::<Choice>().unwrap(), Choice::Rock);
        assert_eq!("Paper".parse::<Choice>().unwrap(), Choice::Paper);
        assert_eq!("Scissors".parse::<Choice>().unwrap(), Choice::Scissors);
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        for raw in ["", "rock", "PAPER", "Scissor", " Rock", "Rock ", "Lizard", "Spock"] {
            assert!(
                matches!(raw.parse::<Choice>(), Err(RpsError::InvalidMove)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for choice in Choice::ALL {
            assert_eq!(choice.to_string().parse::<Choice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_beats_is_a_cycle() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(Choice::Scissors.beats(Choice::Paper));

        for a in Choice::ALL {
            assert!(!a.beats(a), "{a} must not beat itself");
            for b in Choice::ALL {
                if a != b {
                    assert_ne!(a.beats(b), b.beats(a), "exactly one of {a}/{b} wins");
                }
            }
        }
    }

    #[test]
    fn test_vault_size() {
        let vault = VaultAccount {
            owner: key(1),
            bump: 255,
        };
        assert_eq!(8 + serialized_len(&vault), VaultAccount::LEN);
    }

    #[test]
    fn test_game_size() {
        let game = GameAccount {
            owner: key(2),
            answer: Choice::Scissors,
            bump: 254,
        };
        assert_eq!(8 + serialized_len(&game), GameAccount::LEN);
    }

    #[test]
    fn test_submit_scissors_reads_back_scissors() {
        let mut game = GameAccount {
            owner: key(1),
            answer: Choice::Paper,
            bump: 254,
        };

        let previous = game.submit("Scissors").unwrap();

        assert_eq!(previous, Choice::Paper);
        assert_eq!(game.answer, Choice::Scissors);
        assert_ne!(game.answer, Choice::Rock);
        assert_ne!(game.answer, Choice::Paper);
    }

    #[test]
    fn test_submit_invalid_move_leaves_game_unchanged() {
        let mut game = GameAccount {
            owner: key(1),
            answer: Choice::Rock,
            bump: 254,
        };

        for raw in ["scissors", "", "Lizard"] {
            assert!(matches!(game.submit(raw), Err(RpsError::InvalidMove)));
            assert_eq!(game.answer, Choice::Rock);
            assert_eq!(game.owner, key(1));
        }
    }

    #[test]
    fn test_only_the_stored_owner_is_authorized() {
        let vault = VaultAccount {
            owner: key(1),
            bump: 255,
        };
        let game = GameAccount {
            owner: key(1),
            answer: Choice::Rock,
            bump: 254,
        };

        assert!(vault.is_owned_by(&key(1)));
        assert!(game.is_owned_by(&key(1)));
        assert!(!vault.is_owned_by(&key(2)));
        assert!(!game.is_owned_by(&key(2)));
        assert!(!game.is_owned_by(&Pubkey::default()));
    }

    #[test]
    fn test_spendable_keeps_rent_reserve() {
        let rent_floor = 1_176_240;
        assert_eq!(VaultAccount::spendable(rent_floor, rent_floor), 0);
        assert_eq!(VaultAccount::spendable(rent_floor + 3_000_000_000, rent_floor), 3_000_000_000);
        assert_eq!(VaultAccount::spendable(0, rent_floor), 0);
    }
}
