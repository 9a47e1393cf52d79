use serde::{Deserialize, Serialize};

/// Absolute tolerance used by matrix equality.
pub const EQUALITY_EPSILON: f64 = 1e-7;

/// Determinants with a smaller magnitude are treated as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-7;

/// Numeric tolerances for comparisons and inversion.
///
/// Both values default to `1e-7`. Deserialization goes through
/// [`Tolerances::new`], so a negative or NaN value is an error there too.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "RawTolerances")]
pub struct Tolerances {
    equality: f64,
    singularity: f64,
}

impl Tolerances {
    /// Returns `None` if either tolerance is negative or NaN.
    pub fn new(equality: f64, singularity: f64) -> Option<Self> {
        let valid = |t: f64| t >= 0.0;
        if valid(equality) && valid(singularity) {
            Some(Self {
                equality,
                singularity,
            })
        } else {
            None
        }
    }

    /// Maximum absolute difference between two entries that still compare equal.
    pub fn equality(&self) -> f64 {
        self.equality
    }

    /// `inverse` fails when `|det|` is strictly below this value.
    pub fn singularity(&self) -> f64 {
        self.singularity
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            equality: EQUALITY_EPSILON,
            singularity: SINGULARITY_THRESHOLD,
        }
    }
}

// Unvalidated wire form; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawTolerances {
    equality: f64,
    singularity: f64,
}

impl Default for RawTolerances {
    fn default() -> Self {
        Self {
            equality: EQUALITY_EPSILON,
            singularity: SINGULARITY_THRESHOLD,
        }
    }
}

impl TryFrom<RawTolerances> for Tolerances {
    type Error = String;

    fn try_from(raw: RawTolerances) -> Result<Self, Self::Error> {
        Tolerances::new(raw.equality, raw.singularity).ok_or_else(|| {
            format!(
                "invalid tolerances (equality {}, singularity {}): must be non-negative",
                raw.equality, raw.singularity
            )
        })
    }
}
