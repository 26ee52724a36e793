//! Value model for the labeled slider.
//!
//! Holds the range, default, optional limit, snapping interval and skip list,
//! and keeps the raw and emitted values inside their bounds.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::SliderError;

/// Soft ceiling below the absolute maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Limit {
    /// Sliding is bounded only by the maximum.
    #[default]
    NoLimit,
    /// Sliding stops at this value unless bypass is allowed.
    Value(i32),
}

impl Limit {
    /// The limit value, if one is set.
    pub fn value(self) -> Option<i32> {
        match self {
            Limit::NoLimit => None,
            Limit::Value(v) => Some(v),
        }
    }
}

impl From<Option<i32>> for Limit {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Limit::NoLimit, Limit::Value)
    }
}

/// Range, limit and snapping state of a slider.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueModel {
    min_value: i32,
    max_value: i32,
    default_value: i32,
    limit: Limit,
    allow_limit_bypass: bool,
    sliding_interval: i32,
    values_to_skip: BTreeSet<i32>,
    /// Unsnapped value under the thumb.
    raw_value: i32,
    /// Last value reported upstream.
    current_value: i32,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self {
            min_value: 0,
            max_value: 100,
            default_value: 50,
            limit: Limit::NoLimit,
            allow_limit_bypass: false,
            sliding_interval: 1,
            values_to_skip: BTreeSet::new(),
            raw_value: 50,
            current_value: 50,
        }
    }
}

impl ValueModel {
    /// Create a model over `[min_value, max_value]` starting at `min_value`.
    pub fn new(min_value: i32, max_value: i32) -> Result<Self, SliderError> {
        check_range(min_value, max_value)?;
        Ok(Self {
            min_value,
            max_value,
            default_value: min_value,
            raw_value: min_value,
            current_value: min_value,
            ..Default::default()
        })
    }

    /// Set the starting value.
    pub fn with_default(mut self, value: i32) -> Self {
        self.set_default(value);
        self
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.set_limit(limit);
        self
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn default_value(&self) -> i32 {
        self.default_value
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn allow_limit_bypass(&self) -> bool {
        self.allow_limit_bypass
    }

    pub fn sliding_interval(&self) -> i32 {
        self.sliding_interval
    }

    pub fn values_to_skip(&self) -> &BTreeSet<i32> {
        &self.values_to_skip
    }

    /// Unsnapped value currently under the thumb.
    pub fn raw_value(&self) -> i32 {
        self.raw_value
    }

    /// Last value emitted to the value-changed callback.
    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    /// Set the lower bound. Returns whether anything changed.
    pub fn set_min(&mut self, value: i32) -> Result<bool, SliderError> {
        check_range(value, self.max_value)?;
        if value == self.min_value {
            return Ok(false);
        }
        self.min_value = value;
        self.reclamp();
        Ok(true)
    }

    /// Set the upper bound. Returns whether anything changed.
    pub fn set_max(&mut self, value: i32) -> Result<bool, SliderError> {
        check_range(self.min_value, value)?;
        if value == self.max_value {
            return Ok(false);
        }
        self.max_value = value;
        self.reclamp();
        Ok(true)
    }

    /// Set both bounds at once, so a range can move past the old one.
    pub fn set_range(&mut self, min_value: i32, max_value: i32) -> Result<bool, SliderError> {
        check_range(min_value, max_value)?;
        if min_value == self.min_value && max_value == self.max_value {
            return Ok(false);
        }
        self.min_value = min_value;
        self.max_value = max_value;
        self.reclamp();
        Ok(true)
    }

    /// Set the starting value; it is clamped into range and becomes the raw value.
    pub fn set_default(&mut self, value: i32) {
        let value = self.clamp_to_range(value);
        self.default_value = value;
        self.raw_value = self.clamp_to_limit(value);
    }

    /// Set or clear the limit. A set limit is clamped into range and pulls the
    /// raw value down if it sits above it.
    pub fn set_limit(&mut self, limit: Limit) {
        self.limit = match limit {
            Limit::NoLimit => Limit::NoLimit,
            Limit::Value(v) => Limit::Value(self.clamp_to_range(v)),
        };
        if let Limit::Value(limit) = self.limit {
            if self.raw_value > limit {
                self.raw_value = limit;
            }
            if self.current_value > limit {
                self.current_value = limit;
            }
        }
    }

    /// Allow or forbid sliding past the limit. Forbidding it pulls the raw
    /// and current values back under the limit. Returns whether anything
    /// changed.
    pub fn set_allow_limit_bypass(&mut self, allow: bool) -> bool {
        if allow == self.allow_limit_bypass {
            return false;
        }
        self.allow_limit_bypass = allow;
        if !allow {
            self.reclamp();
        }
        true
    }

    /// Set the snapping granularity.
    pub fn set_sliding_interval(&mut self, interval: i32) -> Result<(), SliderError> {
        if interval <= 0 {
            return Err(SliderError::InvalidSlidingInterval(interval));
        }
        self.sliding_interval = interval;
        Ok(())
    }

    pub fn set_values_to_skip(&mut self, values: impl IntoIterator<Item = i32>) {
        self.values_to_skip = values.into_iter().collect();
    }

    pub fn is_skipped(&self, value: i32) -> bool {
        self.values_to_skip.contains(&value)
    }

    /// Floor `raw` to a multiple of the sliding interval.
    pub fn snap(&self, raw: i32) -> i32 {
        let interval = i64::from(self.sliding_interval);
        let snapped = i64::from(raw).div_euclid(interval) * interval;
        // Flooring can only step below i32::MIN, never above i32::MAX.
        i32::try_from(snapped).unwrap_or(i32::MIN)
    }

    /// Snapped raw value, kept inside the range.
    pub fn display_value(&self) -> i32 {
        self.clamp_to_range(self.snap(self.raw_value))
    }

    /// Apply the limit as a ceiling unless bypass is allowed or no limit is set.
    pub fn clamp_to_limit(&self, value: i32) -> i32 {
        match self.active_limit() {
            Some(limit) => value.min(limit),
            None => value,
        }
    }

    /// The limit when it is enforced, i.e. set and not bypassable.
    pub fn active_limit(&self) -> Option<i32> {
        if self.allow_limit_bypass {
            None
        } else {
            self.limit.value()
        }
    }

    /// Whether the raw value sits exactly on an enforced limit.
    pub fn is_at_limit(&self) -> bool {
        self.active_limit() == Some(self.raw_value)
    }

    pub fn clamp_to_range(&self, value: i32) -> i32 {
        value.clamp(self.min_value, self.max_value)
    }

    /// Store a new raw value from input, clamped into range.
    pub(crate) fn set_raw_value(&mut self, value: i32) {
        self.raw_value = self.clamp_to_range(value);
    }

    pub(crate) fn set_current_value(&mut self, value: i32) {
        self.current_value = value;
    }

    fn reclamp(&mut self) {
        self.default_value = self.clamp_to_range(self.default_value);
        if let Limit::Value(limit) = self.limit {
            self.limit = Limit::Value(self.clamp_to_range(limit));
        }
        self.raw_value = self.clamp_to_limit(self.clamp_to_range(self.raw_value));
        self.current_value = self.clamp_to_limit(self.clamp_to_range(self.current_value));
    }
}

fn check_range(min_value: i32, max_value: i32) -> Result<(), SliderError> {
    if min_value >= max_value {
        return Err(SliderError::InvalidRange {
            min: min_value,
            max: max_value,
        });
    }
    Ok(())
}
