//! Active-date carrier threaded through the line loop.
//!
//! Listings announce dates either as a bracketed line (`[March 5]`) or as a
//! month / day / year triple spread over three consecutive lines. The
//! carrier is a plain value: each step consumes it and hands back the next
//! one, so there is no shared parse state outside the loop.

use crate::extract::dates::{is_day_token, is_month_token, is_year_token};

/// Where the carrier is in assembling a multi-line date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierState {
    /// Nothing pending and no active date
    AwaitingMonth,
    /// A month line has been seen
    HaveMonth,
    /// Month and day lines have been seen
    HaveMonthDay,
    /// Nothing pending, an active date is held for the next event line
    Idle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateCarrier {
    pending_month: Option<String>,
    pending_day: Option<String>,
    active: String,
}

impl DateCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CarrierState {
        match (&self.pending_month, &self.pending_day) {
            (Some(_), Some(_)) => CarrierState::HaveMonthDay,
            (Some(_), None) => CarrierState::HaveMonth,
            _ if !self.active.is_empty() => CarrierState::Idle,
            _ => CarrierState::AwaitingMonth,
        }
    }

    /// The date that the next undated event line would receive.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Feed one trimmed line. Returns the next carrier and whether the line
    /// was a date token (and therefore cannot be an event line).
    pub fn observe(mut self, line: &str) -> (Self, bool) {
        if is_month_token(line) {
            self.pending_month = Some(line.trim_end_matches('.').to_string());
            self.pending_day = None;
            return (self, true);
        }
        if self.pending_month.is_some() && is_day_token(line) {
            self.pending_day = Some(line.to_string());
            return (self, true);
        }
        if is_year_token(line) {
            if let (Some(month), Some(day)) = (&self.pending_month, &self.pending_day) {
                self.active = format!("{} {} {}", month, day, line);
                self.pending_month = None;
                self.pending_day = None;
                return (self, true);
            }
        }
        (self, false)
    }

    /// A bracketed date line overrides whatever was carried forward.
    pub fn with_active(mut self, date: impl Into<String>) -> Self {
        self.active = date.into();
        self.pending_month = None;
        self.pending_day = None;
        self
    }

    /// Hand the active date to an event line and reset it.
    pub fn take_active(mut self) -> (Self, Option<String>) {
        let active = std::mem::take(&mut self.active);
        let taken = if active.is_empty() { None } else { Some(active) };
        (self, taken)
    }
}
