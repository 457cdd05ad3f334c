//! Property and example tests for the pay date rules and the schedule.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use payroll_calendar::payday::rules::end_of_month;
use payroll_calendar::{Schedule, base_salary_pay_day, bonus_pay_day};
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn month_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2200, 1u32..=12).prop_map(|(y, m)| ymd(y, m, 1))
}

fn any_day_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2200, 1u32..=12, 1u32..=31).prop_filter_map("valid calendar day", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

#[test]
fn documented_examples() {
    assert_eq!(base_salary_pay_day(ymd(2024, 2, 1)), ymd(2024, 2, 29));
    assert_eq!(base_salary_pay_day(ymd(2024, 8, 1)), ymd(2024, 8, 30));
    assert_eq!(bonus_pay_day(ymd(2024, 1, 1)), ymd(2024, 2, 15));
    assert_eq!(bonus_pay_day(ymd(2024, 5, 1)), ymd(2024, 6, 19));
}

#[test]
fn full_year_2024() {
    let expected = [
        (ymd(2024, 1, 1), ymd(2024, 1, 31), ymd(2024, 2, 15)),
        (ymd(2024, 2, 1), ymd(2024, 2, 29), ymd(2024, 3, 15)),
        (ymd(2024, 3, 1), ymd(2024, 3, 29), ymd(2024, 4, 15)),
        (ymd(2024, 4, 1), ymd(2024, 4, 30), ymd(2024, 5, 15)),
        (ymd(2024, 5, 1), ymd(2024, 5, 31), ymd(2024, 6, 19)),
        (ymd(2024, 6, 1), ymd(2024, 6, 28), ymd(2024, 7, 15)),
        (ymd(2024, 7, 1), ymd(2024, 7, 31), ymd(2024, 8, 15)),
        (ymd(2024, 8, 1), ymd(2024, 8, 30), ymd(2024, 9, 18)),
        (ymd(2024, 9, 1), ymd(2024, 9, 30), ymd(2024, 10, 15)),
        (ymd(2024, 10, 1), ymd(2024, 10, 31), ymd(2024, 11, 15)),
        (ymd(2024, 11, 1), ymd(2024, 11, 29), ymd(2024, 12, 18)),
        (ymd(2024, 12, 1), ymd(2024, 12, 31), ymd(2025, 1, 15)),
    ];

    let schedule = Schedule::generate(ymd(2024, 1, 1));
    for (entry, (month, staff, bonus)) in schedule.entries().iter().zip(expected) {
        assert_eq!(entry.date, month);
        assert_eq!(entry.staff_pay_day, Some(staff), "staff pay day for {month}");
        assert_eq!(entry.bonus_pay_day, Some(bonus), "bonus pay day for {month}");
    }
}

proptest! {
    #[test]
    fn base_salary_is_last_weekday_of_month(month in any_day_strategy()) {
        let pay_day = base_salary_pay_day(month);
        let month_end = end_of_month(month);

        prop_assert!(!is_weekend(pay_day));
        prop_assert_eq!((pay_day.year(), pay_day.month()), (month.year(), month.month()));
        prop_assert!(pay_day <= month_end);

        // Everything after the pay day up to month end is weekend.
        let mut day = pay_day.succ_opt().unwrap();
        while day <= month_end {
            prop_assert!(is_weekend(day));
            day = day.succ_opt().unwrap();
        }
        prop_assert!((month_end - pay_day).num_days() <= 2);
    }

    #[test]
    fn bonus_is_candidate_or_wednesday(month in any_day_strategy()) {
        let candidate = month
            .checked_add_months(Months::new(1))
            .and_then(|d| d.checked_add_days(Days::new(14)))
            .unwrap();
        let pay_day = bonus_pay_day(month);

        prop_assert!(!is_weekend(pay_day));
        if is_weekend(candidate) {
            prop_assert_eq!(pay_day.weekday(), Weekday::Wed);
            prop_assert_eq!((pay_day.year(), pay_day.month()), (candidate.year(), candidate.month()));
            prop_assert!((14..=20).contains(&pay_day.day()));
        } else {
            prop_assert_eq!(pay_day, candidate);
        }
    }

    #[test]
    fn bonus_for_first_of_month_lands_mid_next_month(month in month_strategy()) {
        let next = month.checked_add_months(Months::new(1)).unwrap();
        let pay_day = bonus_pay_day(month);

        prop_assert_eq!((pay_day.year(), pay_day.month()), (next.year(), next.month()));
        prop_assert!((15..=20).contains(&pay_day.day()));
    }

    #[test]
    fn schedule_advances_one_month_per_entry(month in any_day_strategy()) {
        let schedule = Schedule::generate(month);
        prop_assert_eq!(schedule.len(), 12);

        for (i, entry) in schedule.entries().iter().enumerate() {
            let expected = month.checked_add_months(Months::new(i as u32)).unwrap();
            prop_assert_eq!(entry.date, expected);
            prop_assert_eq!(entry.staff_pay_day, Some(base_salary_pay_day(expected)));
            prop_assert_eq!(entry.bonus_pay_day, Some(bonus_pay_day(expected)));
        }
    }

    #[test]
    fn schedule_is_idempotent(month in any_day_strategy()) {
        prop_assert_eq!(Schedule::generate(month), Schedule::generate(month));
    }
}
