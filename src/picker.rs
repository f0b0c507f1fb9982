//! The picker component core: an optional Gregorian value kept in sync with
//! three independently editable Persian year/month/day fields.
//!
//! Every mutating operation returns the notifications it produced, in the
//! order a host must observe them: year, month, day, then value. Transient
//! invalid input from a single-field edit is clamped or reverted locally and
//! never surfaces as an error.

use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::types::{days_in_month, month_day_upper_bound};
use crate::{DateError, GregorianDate, JalaliDate, PickerOptions, YearRange};

/// Contract violations surfaced to the host. User-input problems are never
/// reported this way; they are recovered by clamping or reverting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// An absent value was assigned to a non-nullable picker.
    #[error("cannot assign an empty value to a non-nullable picker")]
    NullNotAllowed,

    /// A host-supplied value has no Persian representation.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A state-change notification. Part events carry the raw field value; the
/// value events carry the bound Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    YearChanged(Option<i32>),
    MonthChanged(Option<i32>),
    DayChanged(Option<i32>),
    ValueChanged(Option<GregorianDate>),
    /// Fires together with [`PickerEvent::ValueChanged`], mirroring the
    /// generic change callback hosts commonly bind.
    Changed(Option<GregorianDate>),
}

/// A headless Persian date picker bound to an optional Gregorian value.
///
/// The three part fields are re-derived from the value on every change; a
/// single-field edit is clamped into the year window and the month's day
/// count, then composed back into a value, reverting on failure.
#[derive(Debug, Clone)]
pub struct PersianDatePicker {
    options: PickerOptions,
    range: YearRange,
    value: Option<GregorianDate>,
    year: Option<i32>,
    month: Option<i32>,
    day: Option<i32>,
    day_count: u8,
}

impl PersianDatePicker {
    /// Creates a picker from resolved options and an initial value.
    /// The year window is normalized and widened to cover the value's year.
    ///
    /// # Errors
    /// `PickerError::NullNotAllowed` when the picker is non-nullable and no
    /// value is given; `PickerError::Date` when the value has no Persian
    /// representation.
    pub fn new(
        options: PickerOptions,
        value: Option<GregorianDate>,
    ) -> Result<Self, PickerError> {
        if value.is_none() && !options.nullable {
            return Err(PickerError::NullNotAllowed);
        }
        let decomposed = match value {
            Some(date) => Some(JalaliDate::from_gregorian(date)?),
            None => None,
        };

        let mut range = YearRange::new(options.start_year, options.end_year);
        if let Some(jalali) = decomposed {
            range = range.extended(i32::from(jalali.year()));
        }

        let mut picker = Self {
            options,
            range,
            value,
            year: decomposed.map(|j| i32::from(j.year())),
            month: decomposed.map(|j| i32::from(j.month())),
            day: decomposed.map(|j| i32::from(j.day())),
            day_count: 0,
        };
        picker.update_day_count();
        Ok(picker)
    }

    // accessors

    /// The bound Gregorian value
    pub const fn value(&self) -> Option<GregorianDate> {
        self.value
    }

    /// The bound value decomposed into a Persian date
    pub fn jalali_value(&self) -> Option<JalaliDate> {
        self.value
            .and_then(|date| JalaliDate::from_gregorian(date).ok())
    }

    /// The selected Persian year field
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// The selected month field
    pub const fn month(&self) -> Option<i32> {
        self.month
    }

    /// The selected day field
    pub const fn day(&self) -> Option<i32> {
        self.day
    }

    /// The selectable year window
    pub const fn year_range(&self) -> YearRange {
        self.range
    }

    /// Days in the currently selected month; 0 while no month is selected
    pub const fn day_count(&self) -> u8 {
        self.day_count
    }

    /// The configuration this instance was built with
    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub const fn is_read_only(&self) -> bool {
        self.options.read_only
    }

    pub const fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    /// Whether the picker currently accepts user edits
    pub const fn is_interactive(&self) -> bool {
        !(self.options.read_only || self.options.disabled)
    }

    /// Selectable years for a drop-down, ascending
    pub fn year_choices(&self) -> impl Iterator<Item = i32> {
        self.range.years()
    }

    /// The twelve months for a drop-down
    pub fn month_choices(&self) -> impl Iterator<Item = u8> {
        1..=MAX_MONTH
    }

    /// Selectable days for the current year/month; empty while no month is
    /// selected
    pub fn day_choices(&self) -> impl Iterator<Item = u8> {
        MIN_DAY..=self.day_count
    }

    /// The selected parts joined with the configured separator, zero-padded
    /// (`1403-01-17`). Absent while any part is unset.
    pub fn display_value(&self) -> Option<String> {
        let (year, month, day) = (self.year?, self.month?, self.day?);
        let sep = &self.options.separator;
        Some(format!("{year:04}{sep}{month:02}{sep}{day:02}"))
    }

    /// Parses one raw text-field input: blank or non-numeric input maps to an
    /// absent part.
    pub fn parse_part(raw: &str) -> Option<i32> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }

    // host-driven operations

    /// Assigns the bound value.
    ///
    /// # Errors
    /// `PickerError::NullNotAllowed` for an absent value on a non-nullable
    /// picker; `PickerError::Date` for a value with no Persian
    /// representation. The state is untouched on error.
    pub fn set_value(
        &mut self,
        new_value: Option<GregorianDate>,
    ) -> Result<Vec<PickerEvent>, PickerError> {
        if new_value.is_none() && !self.options.nullable {
            return Err(PickerError::NullNotAllowed);
        }
        if let Some(date) = new_value {
            JalaliDate::from_gregorian(date)?;
        }

        let mut events = Vec::new();
        self.assign_value(new_value, &mut events);
        Ok(events)
    }

    /// Host-pushed selected year: widens the year window to include it, then
    /// re-derives all parts from the bound value.
    pub fn select_year(&mut self, year: Option<i32>) -> Vec<PickerEvent> {
        self.year = year;
        if let Some(candidate) = year {
            self.range = self.range.extended(candidate);
        }
        let mut events = Vec::new();
        self.sync_from_value(&mut events);
        events
    }

    /// Reconfigures the selectable year window. The window is normalized and
    /// widened to cover the bound value's year and the selected year field.
    pub fn set_year_range(&mut self, start: i32, end: i32) -> Vec<PickerEvent> {
        self.range = YearRange::new(start, end);
        self.extend_range_for_value();
        if let Some(year) = self.year {
            self.range = self.range.extended(year);
        }
        let mut events = Vec::new();
        self.sync_from_value(&mut events);
        events
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.options.read_only = read_only;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    // user actions

    /// Sets the value to the current system date. No-op while read-only or
    /// disabled.
    pub fn set_today(&mut self) -> Vec<PickerEvent> {
        if !self.is_interactive() {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.assign_value(Some(GregorianDate::today()), &mut events);
        events
    }

    /// Clears the value. No-op while read-only or disabled.
    ///
    /// # Errors
    /// `PickerError::NullNotAllowed` on a non-nullable picker; the value is
    /// left unchanged.
    pub fn clear(&mut self) -> Result<Vec<PickerEvent>, PickerError> {
        if !self.is_interactive() {
            return Ok(Vec::new());
        }
        if !self.options.nullable {
            return Err(PickerError::NullNotAllowed);
        }
        let mut events = Vec::new();
        self.assign_value(None, &mut events);
        Ok(events)
    }

    /// A user edit of the year field. The raw value is notified as entered,
    /// then clamped into the year window before composition.
    pub fn edit_year(&mut self, raw: Option<i32>) -> Vec<PickerEvent> {
        if !self.is_interactive() {
            return Vec::new();
        }
        self.year = raw;
        let mut events = vec![PickerEvent::YearChanged(raw)];
        self.apply_part_edit(&mut events);
        events
    }

    /// A user edit of the month field; clamped into 1..=12.
    pub fn edit_month(&mut self, raw: Option<i32>) -> Vec<PickerEvent> {
        if !self.is_interactive() {
            return Vec::new();
        }
        self.month = raw;
        let mut events = vec![PickerEvent::MonthChanged(raw)];
        self.apply_part_edit(&mut events);
        events
    }

    /// A user edit of the day field; clamped into the current day count.
    pub fn edit_day(&mut self, raw: Option<i32>) -> Vec<PickerEvent> {
        if !self.is_interactive() {
            return Vec::new();
        }
        self.day = raw;
        let mut events = vec![PickerEvent::DayChanged(raw)];
        self.apply_part_edit(&mut events);
        events
    }

    // internals

    /// The edit cycle shared by all three fields: clamp, recompute the day
    /// list, then compose or fall back.
    fn apply_part_edit(&mut self, events: &mut Vec<PickerEvent>) {
        self.clamp_parts();
        self.update_day_count();

        let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) else {
            if self.options.nullable {
                // The value is dropped without a notification while the user
                // is mid-edit; the next complete triple recomposes it.
                self.value = None;
            } else {
                self.revert_parts();
            }
            return;
        };

        match compose_parts(year, month, day) {
            Ok(composed) => self.assign_value(Some(composed), events),
            Err(err) => {
                self.revert_parts();
                log::warn!("invalid Persian date entered ({year}-{month}-{day}): {err}");
            }
        }
    }

    /// Clamps each present part into its bounds. The day clamp runs against
    /// the day list of the previously selected month; `update_day_count`
    /// re-clamps once the new month's length is known.
    fn clamp_parts(&mut self) {
        if let Some(year) = self.year {
            self.year = Some(self.range.clamp(year));
        }
        if let Some(month) = self.month {
            self.month = Some(month.clamp(1, i32::from(MAX_MONTH)));
        }
        if let Some(day) = self.day {
            if self.day_count > 0 {
                self.day = Some(day.clamp(i32::from(MIN_DAY), i32::from(self.day_count)));
            } else {
                self.day = None;
            }
        }
    }

    /// Recomputes the day count for the selected year/month and pulls the day
    /// field down to it. Without a month there are no selectable days.
    fn update_day_count(&mut self) {
        let Some(month) = self.month else {
            self.day = None;
            self.day_count = 0;
            return;
        };
        let Ok(month) = u8::try_from(month) else {
            self.day = None;
            self.day_count = 0;
            return;
        };

        let max_day = match self.year {
            Some(year) => days_in_month(year, month),
            None => month_day_upper_bound(month),
        };
        if let Some(day) = self.day {
            if day > i32::from(max_day) {
                self.day = Some(i32::from(max_day));
            }
        }
        self.day_count = max_day;
    }

    /// Assigns the value, re-derives the parts, and emits notifications in
    /// the fixed order: parts first, then value.
    fn assign_value(&mut self, new_value: Option<GregorianDate>, events: &mut Vec<PickerEvent>) {
        let changed = self.value != new_value;
        self.value = new_value;
        self.extend_range_for_value();
        self.sync_from_value(events);
        if changed {
            events.push(PickerEvent::ValueChanged(new_value));
            events.push(PickerEvent::Changed(new_value));
        }
    }

    fn extend_range_for_value(&mut self) {
        if let Some(jalali) = self.jalali_value() {
            self.range = self.range.extended(i32::from(jalali.year()));
        }
    }

    /// Re-derives the three parts from the value, emitting a part event for
    /// each field that actually changed.
    fn sync_from_value(&mut self, events: &mut Vec<PickerEvent>) {
        let (prev_year, prev_month, prev_day) = (self.year, self.month, self.day);

        match self.jalali_value() {
            Some(jalali) => {
                self.year = Some(i32::from(jalali.year()));
                self.month = Some(i32::from(jalali.month()));
                self.day = Some(i32::from(jalali.day()));
            }
            None => {
                self.year = None;
                self.month = None;
                self.day = None;
            }
        }
        self.update_day_count();

        if self.year != prev_year {
            events.push(PickerEvent::YearChanged(self.year));
        }
        if self.month != prev_month {
            events.push(PickerEvent::MonthChanged(self.month));
        }
        if self.day != prev_day {
            events.push(PickerEvent::DayChanged(self.day));
        }
    }

    /// Restores the parts to the decomposition of the last valid value,
    /// discarding the in-flight edit.
    fn revert_parts(&mut self) {
        match self.jalali_value() {
            Some(jalali) => {
                self.year = Some(i32::from(jalali.year()));
                self.month = Some(i32::from(jalali.month()));
                self.day = Some(i32::from(jalali.day()));
            }
            None => {
                self.year = None;
                self.month = None;
                self.day = None;
            }
        }
        self.update_day_count();
    }
}

/// Strict composition of raw part fields into a Gregorian value. Parts that
/// cannot even narrow into calendar widths are out of range by definition.
fn compose_parts(year: i32, month: i32, day: i32) -> Result<GregorianDate, DateError> {
    let (Ok(year), Ok(month), Ok(day)) = (
        u16::try_from(year),
        u8::try_from(month),
        u8::try_from(day),
    ) else {
        return Err(DateError::OutOfRange(format!("{year}-{month}-{day}")));
    };
    JalaliDate::new(year, month, day)?.to_gregorian()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(y: u16, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    fn jalali_as_gregorian(y: u16, m: u8, d: u8) -> GregorianDate {
        JalaliDate::new(y, m, d).unwrap().to_gregorian().unwrap()
    }

    fn nullable_picker(value: Option<GregorianDate>) -> PersianDatePicker {
        PersianDatePicker::new(PickerOptions::default(), value).unwrap()
    }

    // Persian 1403-01-01
    const NOWRUZ_1403: (u16, u8, u8) = (2024, 3, 20);

    #[test]
    fn test_new_non_nullable_requires_value() {
        let options = PickerOptions {
            nullable: false,
            ..PickerOptions::default()
        };
        let result = PersianDatePicker::new(options, None);
        assert_eq!(result.unwrap_err(), PickerError::NullNotAllowed);
    }

    #[test]
    fn test_new_decomposes_initial_value() {
        let (y, m, d) = NOWRUZ_1403;
        let picker = nullable_picker(Some(gregorian(y, m, d)));
        assert_eq!(picker.year(), Some(1403));
        assert_eq!(picker.month(), Some(1));
        assert_eq!(picker.day(), Some(1));
        assert_eq!(picker.day_count(), 31);
    }

    #[test]
    fn test_new_without_value_has_no_parts() {
        let picker = nullable_picker(None);
        assert_eq!(picker.year(), None);
        assert_eq!(picker.month(), None);
        assert_eq!(picker.day(), None);
        assert_eq!(picker.day_count(), 0);
        assert_eq!(picker.day_choices().count(), 0);
    }

    #[test]
    fn test_new_rejects_value_outside_window() {
        let result = PersianDatePicker::new(PickerOptions::default(), Some(gregorian(600, 1, 1)));
        assert!(matches!(result, Err(PickerError::Date(_))));
    }

    #[test]
    fn test_new_extends_range_to_value_year() {
        let options = PickerOptions {
            start_year: 1300,
            end_year: 1400,
            ..PickerOptions::default()
        };
        let (y, m, d) = NOWRUZ_1403;
        let picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();
        assert_eq!(picker.year_range(), YearRange::new(1300, 1403));
    }

    #[test]
    fn test_set_value_event_order() {
        let mut picker = nullable_picker(None);
        let (y, m, d) = NOWRUZ_1403;
        let value = gregorian(y, m, d);

        let events = picker.set_value(Some(value)).unwrap();
        assert_eq!(
            events,
            vec![
                PickerEvent::YearChanged(Some(1403)),
                PickerEvent::MonthChanged(Some(1)),
                PickerEvent::DayChanged(Some(1)),
                PickerEvent::ValueChanged(Some(value)),
                PickerEvent::Changed(Some(value)),
            ]
        );
    }

    #[test]
    fn test_set_value_same_value_is_quiet() {
        let (y, m, d) = NOWRUZ_1403;
        let value = gregorian(y, m, d);
        let mut picker = nullable_picker(Some(value));

        let events = picker.set_value(Some(value)).unwrap();
        assert_eq!(events, vec![]);
    }

    #[test]
    fn test_set_value_partial_diff_emits_changed_parts_only() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        // Persian 1403-01-02: only the day differs.
        let next = jalali_as_gregorian(1403, 1, 2);
        let events = picker.set_value(Some(next)).unwrap();
        assert_eq!(
            events,
            vec![
                PickerEvent::DayChanged(Some(2)),
                PickerEvent::ValueChanged(Some(next)),
                PickerEvent::Changed(Some(next)),
            ]
        );
    }

    #[test]
    fn test_set_value_null_on_non_nullable_fails() {
        let (y, m, d) = NOWRUZ_1403;
        let options = PickerOptions {
            nullable: false,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();

        assert_eq!(picker.set_value(None).unwrap_err(), PickerError::NullNotAllowed);
        assert_eq!(picker.value(), Some(gregorian(y, m, d)));
        assert_eq!(picker.year(), Some(1403));
    }

    #[test]
    fn test_set_value_out_of_window_fails() {
        let mut picker = nullable_picker(None);
        let result = picker.set_value(Some(gregorian(622, 3, 20)));
        assert!(matches!(result, Err(PickerError::Date(_))));
        assert_eq!(picker.value(), None);
    }

    #[test]
    fn test_clear() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.clear().unwrap();
        assert_eq!(picker.value(), None);
        assert_eq!(picker.year(), None);
        assert_eq!(
            events,
            vec![
                PickerEvent::YearChanged(None),
                PickerEvent::MonthChanged(None),
                PickerEvent::DayChanged(None),
                PickerEvent::ValueChanged(None),
                PickerEvent::Changed(None),
            ]
        );
    }

    #[test]
    fn test_clear_non_nullable_fails() {
        let (y, m, d) = NOWRUZ_1403;
        let options = PickerOptions {
            nullable: false,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();

        assert_eq!(picker.clear().unwrap_err(), PickerError::NullNotAllowed);
        assert_eq!(picker.value(), Some(gregorian(y, m, d)));
    }

    #[test]
    fn test_clear_read_only_is_noop() {
        let (y, m, d) = NOWRUZ_1403;
        let options = PickerOptions {
            read_only: true,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();

        assert_eq!(picker.clear().unwrap(), vec![]);
        assert_eq!(picker.value(), Some(gregorian(y, m, d)));
    }

    #[test]
    fn test_set_today() {
        let mut picker = nullable_picker(None);
        let events = picker.set_today();
        assert_eq!(picker.value(), Some(GregorianDate::today()));
        assert!(events.contains(&PickerEvent::ValueChanged(Some(GregorianDate::today()))));
    }

    #[test]
    fn test_set_today_disabled_is_noop() {
        let options = PickerOptions {
            disabled: true,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, None).unwrap();
        assert_eq!(picker.set_today(), vec![]);
        assert_eq!(picker.value(), None);
    }

    #[test]
    fn test_edit_month_clamps_above_twelve() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.edit_month(Some(13));

        // 13 clamps to Esfand; the leap 1403 day list grows to 30; the day
        // stays 1 and the composed value is Persian 1403-12-01.
        let composed = jalali_as_gregorian(1403, 12, 1);
        assert_eq!(picker.month(), Some(12));
        assert_eq!(picker.day_count(), 30);
        assert_eq!(picker.value(), Some(composed));
        assert_eq!(
            events,
            vec![
                PickerEvent::MonthChanged(Some(13)),
                PickerEvent::ValueChanged(Some(composed)),
                PickerEvent::Changed(Some(composed)),
            ]
        );
    }

    #[test]
    fn test_edit_day_clamps_to_day_count() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.edit_day(Some(35));

        let composed = jalali_as_gregorian(1403, 1, 31);
        assert_eq!(picker.day(), Some(31));
        assert_eq!(picker.value(), Some(composed));
        assert_eq!(
            events,
            vec![
                PickerEvent::DayChanged(Some(35)),
                PickerEvent::ValueChanged(Some(composed)),
                PickerEvent::Changed(Some(composed)),
            ]
        );
    }

    #[test]
    fn test_edit_month_shrinks_day_without_extra_event() {
        // Persian 1403-06-31, the last day of the 31-day half.
        let mut picker = nullable_picker(Some(jalali_as_gregorian(1403, 6, 31)));

        let events = picker.edit_month(Some(7));

        // Mehr has 30 days; the day is pulled down with the month edit and
        // the change is observable through the composed value.
        let composed = jalali_as_gregorian(1403, 7, 30);
        assert_eq!(picker.day(), Some(30));
        assert_eq!(picker.value(), Some(composed));
        assert_eq!(
            events,
            vec![
                PickerEvent::MonthChanged(Some(7)),
                PickerEvent::ValueChanged(Some(composed)),
                PickerEvent::Changed(Some(composed)),
            ]
        );
    }

    #[test]
    fn test_edit_year_clamps_into_window() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.edit_year(Some(1600));

        let composed = jalali_as_gregorian(1500, 1, 1);
        assert_eq!(picker.year(), Some(1500));
        assert_eq!(picker.value(), Some(composed));
        assert_eq!(events[0], PickerEvent::YearChanged(Some(1600)));
        assert!(events.contains(&PickerEvent::ValueChanged(Some(composed))));
    }

    #[test]
    fn test_edit_day_absent_drops_value_when_nullable() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.edit_day(None);

        // The value is dropped quietly mid-edit; year and month stay put.
        assert_eq!(picker.value(), None);
        assert_eq!(picker.year(), Some(1403));
        assert_eq!(picker.month(), Some(1));
        assert_eq!(picker.day(), None);
        assert_eq!(events, vec![PickerEvent::DayChanged(None)]);
    }

    #[test]
    fn test_edit_day_absent_reverts_when_non_nullable() {
        let (y, m, d) = NOWRUZ_1403;
        let options = PickerOptions {
            nullable: false,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();

        let events = picker.edit_day(None);

        assert_eq!(picker.value(), Some(gregorian(y, m, d)));
        assert_eq!(picker.day(), Some(1));
        assert_eq!(events, vec![PickerEvent::DayChanged(None)]);
    }

    #[test]
    fn test_edit_reverts_on_compose_failure() {
        // Persian 9378 only reaches Dey 10 before the Gregorian ceiling, so
        // jumping to Esfand has no composable counterpart.
        let options = PickerOptions {
            start_year: 9378,
            end_year: 9378,
            ..PickerOptions::default()
        };
        let value = jalali_as_gregorian(9378, 1, 1);
        let mut picker = PersianDatePicker::new(options, Some(value)).unwrap();

        let events = picker.edit_month(Some(12));

        assert_eq!(picker.value(), Some(value));
        assert_eq!(picker.month(), Some(1));
        assert_eq!(picker.day_count(), 31);
        assert_eq!(events, vec![PickerEvent::MonthChanged(Some(12))]);
    }

    #[test]
    fn test_edit_read_only_is_noop() {
        let (y, m, d) = NOWRUZ_1403;
        let options = PickerOptions {
            read_only: true,
            ..PickerOptions::default()
        };
        let mut picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();

        assert_eq!(picker.edit_month(Some(5)), vec![]);
        assert_eq!(picker.month(), Some(1));
    }

    #[test]
    fn test_select_year_widens_range() {
        let mut picker = nullable_picker(None);
        assert_eq!(picker.year_range(), YearRange::new(1300, 1500));

        let events = picker.select_year(Some(1250));

        assert_eq!(picker.year_range(), YearRange::new(1250, 1500));
        // With no bound value the parts re-derive to absent.
        assert_eq!(picker.year(), None);
        assert_eq!(events, vec![PickerEvent::YearChanged(None)]);
    }

    #[test]
    fn test_select_year_with_value_rederives_parts() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        let events = picker.select_year(Some(1200));

        assert_eq!(picker.year_range(), YearRange::new(1200, 1500));
        assert_eq!(picker.year(), Some(1403));
        assert_eq!(events, vec![PickerEvent::YearChanged(Some(1403))]);
    }

    #[test]
    fn test_set_year_range_normalizes_and_extends() {
        let (y, m, d) = NOWRUZ_1403;
        let mut picker = nullable_picker(Some(gregorian(y, m, d)));

        picker.set_year_range(1410, 1405);

        // Bounds swap, then widen to cover the value's year.
        assert_eq!(picker.year_range(), YearRange::new(1403, 1410));
        assert_eq!(picker.year(), Some(1403));
    }

    #[test]
    fn test_set_read_only_toggles_interactivity() {
        let mut picker = nullable_picker(None);
        assert!(picker.is_interactive());
        picker.set_read_only(true);
        assert!(!picker.is_interactive());
        picker.set_read_only(false);
        picker.set_disabled(true);
        assert!(!picker.is_interactive());
    }

    #[test]
    fn test_parse_part() {
        assert_eq!(PersianDatePicker::parse_part("1403"), Some(1403));
        assert_eq!(PersianDatePicker::parse_part(" 12 "), Some(12));
        assert_eq!(PersianDatePicker::parse_part(""), None);
        assert_eq!(PersianDatePicker::parse_part("   "), None);
        assert_eq!(PersianDatePicker::parse_part("abc"), None);
        assert_eq!(PersianDatePicker::parse_part("-5"), Some(-5));
    }

    #[test]
    fn test_display_value() {
        let (y, m, d) = NOWRUZ_1403;
        let picker = nullable_picker(Some(gregorian(y, m, d)));
        assert_eq!(picker.display_value().as_deref(), Some("1403-01-01"));

        let options = PickerOptions {
            separator: "/".to_owned(),
            ..PickerOptions::default()
        };
        let picker = PersianDatePicker::new(options, Some(gregorian(y, m, d))).unwrap();
        assert_eq!(picker.display_value().as_deref(), Some("1403/01/01"));

        assert_eq!(nullable_picker(None).display_value(), None);
    }

    #[test]
    fn test_choice_lists() {
        let (y, m, d) = NOWRUZ_1403;
        let picker = nullable_picker(Some(gregorian(y, m, d)));

        assert_eq!(picker.month_choices().collect::<Vec<_>>().len(), 12);
        assert_eq!(picker.day_choices().collect::<Vec<_>>(), (1..=31).collect::<Vec<_>>());
        let years: Vec<i32> = picker.year_choices().collect();
        assert_eq!(years.first(), Some(&1300));
        assert_eq!(years.last(), Some(&1500));
    }

    #[test]
    fn test_incremental_typing_recovers() {
        // Typing "31" one digit at a time in the day field: "3" composes,
        // "31" clamps against Esfand of a non-leap year.
        let mut picker = nullable_picker(Some(jalali_as_gregorian(1404, 12, 1)));

        picker.edit_day(Some(3));
        assert_eq!(picker.value(), Some(jalali_as_gregorian(1404, 12, 3)));

        picker.edit_day(Some(31));
        assert_eq!(picker.day(), Some(29));
        assert_eq!(picker.value(), Some(jalali_as_gregorian(1404, 12, 29)));
    }
}
