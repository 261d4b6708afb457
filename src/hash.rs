//! Bucket selection.

/// Maps a key onto a bucket slot in `[0, capacity)`.
///
/// `capacity` is always at least one; the table never calls this with an
/// empty bucket array.
pub trait BucketHash {
    fn bucket(&self, key: i32, capacity: usize) -> usize;
}

/// Knuth's multiplicative hashing: `floor(capacity * frac(key * A))` with
/// `A = (sqrt(5) - 1) / 2`, the fractional part of the golden ratio.
///
/// `frac(x)` is `x - floor(x)`, so negative keys also land in range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multiplicative {
    a: f64,
}

impl Multiplicative {
    pub fn new() -> Self {
        Self {
            a: (5.0_f64.sqrt() - 1.0) / 2.0,
        }
    }

    /// The multiplier `A`, computed once at construction.
    pub fn multiplier(&self) -> f64 {
        self.a
    }
}

impl Default for Multiplicative {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketHash for Multiplicative {
    #[inline]
    fn bucket(&self, key: i32, capacity: usize) -> usize {
        let product = f64::from(key) * self.a;
        let frac = product - product.floor();
        let slot = (capacity as f64 * frac).floor() as usize;
        // frac can round up to exactly 1.0 for large negative products
        slot.min(capacity - 1)
    }
}
