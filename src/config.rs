//! Construction-time resize tunables for `HashTable`.

/// Capacity floor and load-factor thresholds of a hash table.
///
/// Growth happens before an insert once `len / capacity >= grow_at`;
/// shrinking happens after a remove once `len / capacity <= shrink_at`
/// and the capacity is above `initial_capacity`. The thresholds are kept
/// far apart so interleaved inserts and removes near one of them do not
/// resize on every call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub grow_at: f64,
    pub shrink_at: f64,
}

impl TableConfig {
    pub const DEFAULT: TableConfig = TableConfig {
        initial_capacity: 8,
        grow_at: 1.0,
        shrink_at: 0.25,
    };

    /// Panics if the config could resize into an inconsistent state.
    ///
    /// `grow_at` is at most 1.0, so a table never holds more entries than
    /// buckets and a doubled table always has room for them. `2 * shrink_at`
    /// must stay below `grow_at`: halving a table sitting at `shrink_at`
    /// doubles its load, and that must not cross the growth threshold.
    pub(crate) fn validate(&self) {
        assert!(self.initial_capacity > 0, "initial_capacity must be positive");
        assert!(
            self.grow_at > 0.0 && self.grow_at <= 1.0,
            "grow_at must be in (0, 1]"
        );
        assert!(self.shrink_at > 0.0, "shrink_at must be positive");
        assert!(
            2.0 * self.shrink_at < self.grow_at,
            "shrink_at must be less than half of grow_at"
        );
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
