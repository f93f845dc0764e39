use crate::calendar::jalaali::{
    GregorianDate, JalaaliDate, days_in_month, month_name, saturday_based_weekday, to_gregorian,
    to_jalaali,
};

/// One displayed Jalaali month plus the interaction state around it.
///
/// The only persisted view state is the displayed year/month and the keyboard
/// cursor; the day grid, weekday offset and day predicates are derived on
/// every render. Navigation never touches the committed selection.
pub struct MonthView {
    year: i32,
    month: u8,
    cursor: u8,
    today: JalaaliDate,
    selected: Option<JalaaliDate>,
    min: Option<JalaaliDate>,
}

impl MonthView {
    /// Seeds the view from the selection when one exists, otherwise from
    /// today. `min_date` marks the earliest selectable date; earlier days
    /// render disabled and refuse selection.
    pub fn new(
        today: GregorianDate,
        selected: Option<GregorianDate>,
        min_date: Option<GregorianDate>,
    ) -> Self {
        let today = to_jalaali(today);
        let selected = selected.map(to_jalaali);
        let seed = selected.unwrap_or(today);

        let mut view = Self {
            year: seed.year,
            month: seed.month,
            cursor: 1,
            today,
            selected,
            min: min_date.map(to_jalaali),
        };
        view.cursor = view.initial_cursor();
        view
    }

    pub fn displayed(&self) -> (i32, u8) {
        (self.year, self.month)
    }

    pub fn cursor_day(&self) -> u8 {
        self.cursor
    }

    pub fn days_in_displayed_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Weekday column of day 1 of the displayed month, Saturday = 0.
    pub fn first_weekday_offset(&self) -> u8 {
        let first = to_gregorian(JalaaliDate::new(self.year, self.month, 1));
        saturday_based_weekday(first)
    }

    /// Leading empty cells followed by the day numbers, for a fixed
    /// 7-column layout. No trailing padding.
    pub fn grid(&self) -> Vec<Option<u8>> {
        let offset = self.first_weekday_offset();
        let days = self.days_in_displayed_month();
        let mut cells = Vec::with_capacity(offset as usize + days as usize);
        cells.extend(std::iter::repeat_n(None, offset as usize));
        cells.extend((1..=days).map(Some));
        cells
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        self.clamp_cursor();
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        self.clamp_cursor();
    }

    /// Converts the day to Gregorian and returns it, or `None` when the day
    /// falls before the minimum date. Rejection is silent; the displayed
    /// month is left untouched either way.
    pub fn select(&self, day: u8) -> Option<GregorianDate> {
        let picked = to_gregorian(JalaaliDate::new(self.year, self.month, day));
        if let Some(min) = self.min {
            if picked < to_gregorian(min) {
                return None;
            }
        }
        Some(picked)
    }

    pub fn set_selected(&mut self, selected: Option<GregorianDate>) {
        self.selected = selected.map(to_jalaali);
    }

    pub fn is_selected(&self, day: u8) -> bool {
        self.selected == Some(JalaaliDate::new(self.year, self.month, day))
    }

    pub fn is_today(&self, day: u8) -> bool {
        self.today == JalaaliDate::new(self.year, self.month, day)
    }

    pub fn is_disabled(&self, day: u8) -> bool {
        match self.min {
            Some(min) => JalaaliDate::new(self.year, self.month, day) < min,
            None => false,
        }
    }

    /// Moves the keyboard cursor by `delta` days, navigating into the
    /// adjacent month when it runs off either end.
    pub fn move_cursor(&mut self, delta: i16) {
        let target = self.cursor as i16 + delta;
        if target < 1 {
            self.prev_month();
            self.cursor = self.days_in_displayed_month();
        } else if target > self.days_in_displayed_month() as i16 {
            self.next_month();
            self.cursor = 1;
        } else {
            self.cursor = target as u8;
        }
    }

    fn initial_cursor(&self) -> u8 {
        for day in 1..=self.days_in_displayed_month() {
            if self.is_selected(day) {
                return day;
            }
        }
        if self.today.year == self.year && self.today.month == self.month {
            return self.today.day;
        }
        1
    }

    fn clamp_cursor(&mut self) {
        let days = self.days_in_displayed_month();
        if self.cursor > days {
            self.cursor = days;
        }
    }

    #[cfg(test)]
    pub(crate) fn jump_to(&mut self, year: i32, month: u8) {
        self.year = year;
        self.month = month;
        self.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day)
    }

    #[test]
    fn seeds_from_today_without_selection() {
        // 2025-03-21 is 1404/01/01.
        let view = MonthView::new(g(2025, 3, 21), None, None);
        assert_eq!(view.displayed(), (1404, 1));
        assert_eq!(view.cursor_day(), 1);
    }

    #[test]
    fn seeds_from_selection_when_present() {
        // 1404/07/10 is 2025-10-02.
        let view = MonthView::new(g(2025, 3, 21), Some(g(2025, 10, 2)), None);
        assert_eq!(view.displayed(), (1404, 7));
        assert_eq!(view.cursor_day(), 10);
        assert!(view.is_selected(10));
        assert!(!view.is_selected(11));
    }

    #[test]
    fn navigation_wraps_at_year_boundaries() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        view.jump_to(1403, 1);
        view.prev_month();
        assert_eq!(view.displayed(), (1402, 12));

        view.jump_to(1403, 12);
        view.next_month();
        assert_eq!(view.displayed(), (1404, 1));
    }

    #[test]
    fn navigation_is_unbounded_and_keeps_selection() {
        let mut view = MonthView::new(g(2025, 3, 21), Some(g(2025, 3, 25)), None);
        for _ in 0..30 {
            view.prev_month();
        }
        assert_eq!(view.displayed(), (1401, 7));
        // Selection is untouched by navigation.
        view.jump_to(1404, 1);
        assert!(view.is_selected(5));
    }

    #[test]
    fn grid_has_offset_then_days() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        view.jump_to(1404, 1);
        // 1404/01/01 = 2025-03-21, a Friday (offset 6).
        assert_eq!(view.first_weekday_offset(), 6);
        let grid = view.grid();
        assert_eq!(grid.len(), 6 + 31);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(1));
        assert_eq!(grid.last(), Some(&Some(31)));
    }

    #[test]
    fn grid_respects_esfand_length() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        view.jump_to(1403, 12);
        assert_eq!(view.days_in_displayed_month(), 30);
        view.jump_to(1404, 12);
        assert_eq!(view.days_in_displayed_month(), 29);
    }

    #[test]
    fn min_date_disables_earlier_days_only() {
        // Min 2025-03-22 = 1404/01/02.
        let view = MonthView::new(g(2025, 3, 21), None, Some(g(2025, 3, 22)));
        assert!(view.is_disabled(1));
        assert!(!view.is_disabled(2));
        assert!(!view.is_disabled(3));

        assert_eq!(view.select(1), None);
        assert_eq!(view.select(2), Some(g(2025, 3, 22)));
    }

    #[test]
    fn min_date_disables_whole_earlier_months() {
        let mut view = MonthView::new(g(2025, 3, 21), None, Some(g(2025, 3, 22)));
        view.jump_to(1403, 12);
        assert!(view.is_disabled(30));
        view.jump_to(1404, 2);
        assert!(!view.is_disabled(1));
    }

    #[test]
    fn select_converts_to_gregorian() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        view.jump_to(1404, 7);
        assert_eq!(view.select(10), Some(g(2025, 10, 2)));
    }

    #[test]
    fn today_is_highlighted_in_its_month_only() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        assert!(view.is_today(1));
        view.next_month();
        assert!(!view.is_today(1));
    }

    #[test]
    fn cursor_crosses_month_boundaries() {
        let mut view = MonthView::new(g(2025, 3, 21), None, None);
        view.move_cursor(-1);
        assert_eq!(view.displayed(), (1403, 12));
        assert_eq!(view.cursor_day(), 30);
        view.move_cursor(7);
        assert_eq!(view.displayed(), (1404, 1));
        assert_eq!(view.cursor_day(), 1);
    }
}
