//! Password generation and entropy-based strength estimate.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>/?~";
const AMBIGUOUS: &str = "Il1O0o";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Character pools for each enabled class, with ambiguous glyphs removed
    /// when requested.
    fn pools(&self) -> Vec<Vec<char>> {
        [
            (self.lowercase, LOWER),
            (self.uppercase, UPPER),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| {
            chars
                .chars()
                .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .collect()
        })
        .collect()
    }

    pub fn validate(&self) -> DeskResult<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(DeskError::invalid(format!(
                "Length must be between {MIN_LENGTH} and {MAX_LENGTH}"
            )));
        }
        if !(self.lowercase || self.uppercase || self.digits || self.symbols) {
            return Err(DeskError::invalid("Select at least one character set"));
        }
        Ok(())
    }
}

/// Generate a password containing at least one character from every
/// selected class.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> DeskResult<String> {
    options.validate()?;
    let pools = options.pools();
    let alphabet: Vec<char> = pools.iter().flatten().copied().collect();

    let mut chars: Vec<char> = pools
        .iter()
        .map(|pool| pool[rng.random_range(0..pool.len())])
        .collect();
    while chars.len() < options.length {
        chars.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }

    fn from_bits(bits: f64) -> Self {
        if bits < 40.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Fair
        } else if bits < 80.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthEstimate {
    pub entropy_bits: f64,
    pub strength: Strength,
}

/// Entropy is `length * log2(pool)`, where the pool is the union of the
/// character classes that appear in the password.
pub fn estimate_strength(password: &str) -> StrengthEstimate {
    let mut pool = 0usize;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += LOWER.len();
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += UPPER.len();
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += DIGITS.len();
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        pool += SYMBOLS.len();
    }

    let length = password.chars().count();
    let entropy_bits = if pool == 0 {
        0.0
    } else {
        length as f64 * (pool as f64).log2()
    };
    StrengthEstimate {
        entropy_bits,
        strength: Strength::from_bits(entropy_bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn honours_length_and_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = PasswordOptions {
            length: 24,
            symbols: true,
            ..PasswordOptions::default()
        };
        for _ in 0..50 {
            let pw = generate_password(&options, &mut rng).unwrap();
            assert_eq!(pw.chars().count(), 24);
            assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pw.chars().any(|c| c.is_ascii_digit()));
            assert!(pw.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn minimum_length_still_covers_every_class() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = PasswordOptions {
            length: 4,
            symbols: true,
            ..PasswordOptions::default()
        };
        for _ in 0..50 {
            let pw = generate_password(&options, &mut rng).unwrap();
            assert!(pw.chars().any(|c| SYMBOLS.contains(c)));
            assert!(pw.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn excludes_ambiguous_characters() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = PasswordOptions {
            length: 128,
            exclude_ambiguous: true,
            ..PasswordOptions::default()
        };
        let pw = generate_password(&options, &mut rng).unwrap();
        assert!(!pw.chars().any(|c| AMBIGUOUS.contains(c)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let options = PasswordOptions::default();
        let a = generate_password(&options, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_password(&options, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_options() {
        let mut rng = StdRng::seed_from_u64(0);
        let too_short = PasswordOptions {
            length: 3,
            ..PasswordOptions::default()
        };
        assert!(generate_password(&too_short, &mut rng).is_err());
        let too_long = PasswordOptions {
            length: 129,
            ..PasswordOptions::default()
        };
        assert!(generate_password(&too_long, &mut rng).is_err());
        let no_classes = PasswordOptions {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        assert!(generate_password(&no_classes, &mut rng).is_err());
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(estimate_strength("").strength, Strength::Weak);
        // 8 lowercase: 8 * log2(26) ~ 37.6
        assert_eq!(estimate_strength("abcdefgh").strength, Strength::Weak);
        // 10 mixed alnum: 10 * log2(62) ~ 59.5
        assert_eq!(estimate_strength("abcDEF1234").strength, Strength::Fair);
        // 12 mixed alnum: ~71.5
        assert_eq!(estimate_strength("abcDEF123456").strength, Strength::Strong);
        assert_eq!(
            estimate_strength("abcDEF123456!@#$%^").strength,
            Strength::VeryStrong
        );
    }
}
