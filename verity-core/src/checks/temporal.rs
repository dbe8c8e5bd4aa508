//! Date and date-time checks

use crate::constraint::Constraint;
use crate::traits::CalendarDay;
use crate::validator::Property;
use crate::value::ToValue;
use chrono::Local;

impl<'a, 'v, T: ToValue + CalendarDay> Property<'a, 'v, T> {
    /// The value's calendar day must be the current local day. The
    /// clock is read when the check runs, not cached across the
    /// validation pass; time-of-day components are ignored, so both
    /// 00:00:00.000 and 23:59:59.999 of the current day pass.
    pub fn is_today(self) -> Self {
        self.check(
            |v| v.calendar_day() == Local::now().date_naive(),
            |_| Constraint::Today,
        )
    }
}
