//! Service (rotation) definitions.

use std::fmt;

/// Inclusive lower and upper bound on a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range with `min == max`.
    pub const fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

/// A clinical service residents rotate through.
///
/// Staffing is tracked for two tiers. Only the senior tier is scheduled;
/// intern staffing is carried for callers that plan interns separately.
///
/// # Example
///
/// ```
/// use rotaforge_core::{CountRange, Service};
///
/// let wards = Service::new("wards")
///     .core()
///     .with_senior_staffing(CountRange::exactly(2))
///     .with_senior_quota(CountRange::new(2, 3));
///
/// assert_eq!(wards.to_string(), "wards");
/// assert_eq!(wards.min_seniors_per_block(), 2);
/// assert_eq!(wards.max_blocks_per_senior(), 3);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct Service {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub allows_vacations: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_core: bool,
    /// Interns required per block.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intern_staffing: CountRange,
    /// Seniors required per block.
    #[cfg_attr(feature = "serde", serde(default))]
    pub senior_staffing: CountRange,
    /// Blocks an intern should spend on this service over the intern year.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intern_quota: CountRange,
    /// Blocks a senior should spend on this service over the senior years.
    #[cfg_attr(feature = "serde", serde(default))]
    pub senior_quota: CountRange,
    /// Earliest 1-indexed block a second-year resident may senior this service.
    #[cfg_attr(feature = "serde", serde(default))]
    pub earliest_pgy2_block: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_difficult: bool,
}

impl Service {
    /// Creates a service with zero staffing and zero quotas.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            allows_vacations: false,
            is_core: false,
            intern_staffing: CountRange::default(),
            senior_staffing: CountRange::default(),
            intern_quota: CountRange::default(),
            senior_quota: CountRange::default(),
            earliest_pgy2_block: 0,
            is_difficult: false,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn allowing_vacations(mut self) -> Self {
        self.allows_vacations = true;
        self
    }

    /// Marks the service as core.
    pub fn core(mut self) -> Self {
        self.is_core = true;
        self
    }

    /// Marks the service as difficult.
    pub fn difficult(mut self) -> Self {
        self.is_difficult = true;
        self
    }

    pub fn with_intern_staffing(mut self, range: CountRange) -> Self {
        self.intern_staffing = range;
        self
    }

    pub fn with_senior_staffing(mut self, range: CountRange) -> Self {
        self.senior_staffing = range;
        self
    }

    pub fn with_intern_quota(mut self, range: CountRange) -> Self {
        self.intern_quota = range;
        self
    }

    pub fn with_senior_quota(mut self, range: CountRange) -> Self {
        self.senior_quota = range;
        self
    }

    pub fn with_earliest_pgy2_block(mut self, block: u32) -> Self {
        self.earliest_pgy2_block = block;
        self
    }

    #[inline]
    pub fn min_seniors_per_block(&self) -> u32 {
        self.senior_staffing.min
    }

    #[inline]
    pub fn max_seniors_per_block(&self) -> u32 {
        self.senior_staffing.max
    }

    #[inline]
    pub fn min_blocks_per_senior(&self) -> u32 {
        self.senior_quota.min
    }

    #[inline]
    pub fn max_blocks_per_senior(&self) -> u32 {
        self.senior_quota.max
    }

    /// Checks that every range on the service is well formed.
    pub fn validate(&self) -> Result<(), String> {
        let ranges = [
            ("intern staffing", self.intern_staffing),
            ("senior staffing", self.senior_staffing),
            ("intern quota", self.intern_quota),
            ("senior quota", self.senior_quota),
        ];
        for (label, range) in ranges {
            if !range.is_well_formed() {
                return Err(format!(
                    "service '{}' has {} min {} above max {}",
                    self.name, label, range.min, range.max
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service").field("name", &self.name).finish()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
