pub struct CycleCase {
    pub name: &'static str,
    pub start: Option<&'static str>,
    pub end: Option<&'static str>,
    pub model: &'static str,
    pub one_level: Option<&'static str>,
    pub number: Option<i64>,
    pub level: Option<&'static str>,
    pub weekday: Option<&'static str>,
    pub expected: &'static [&'static str],
}

impl CycleCase {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "start": self.start,
            "end": self.end,
            "model": self.model,
            "one_level": self.one_level,
            "number": self.number,
            "level": self.level,
            "weekday": self.weekday,
        })
    }
}

const BLANK: CycleCase = CycleCase {
    name: "",
    start: None,
    end: None,
    model: "",
    one_level: None,
    number: None,
    level: None,
    weekday: None,
    expected: &[],
};

#[expect(clippy::too_many_lines)]
pub fn cycle_cases() -> Vec<CycleCase> {
    vec![
        CycleCase {
            name: "each_day_basic",
            start: Some("2025-01-01"),
            end: Some("2025-01-05"),
            model: "Each",
            one_level: Some("day"),
            expected: &[
                "2025-01-01",
                "2025-01-02",
                "2025-01-03",
                "2025-01-04",
                "2025-01-05",
            ],
            ..BLANK
        },
        CycleCase {
            name: "each_day_inverted_bounds",
            start: Some("2025-06-10"),
            end: Some("2025-06-01"),
            model: "Each",
            one_level: Some("day"),
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "each_month_clamped",
            start: Some("2025-01-31"),
            end: Some("2025-04-30"),
            model: "Each",
            one_level: Some("month"),
            expected: &["2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30"],
            ..BLANK
        },
        CycleCase {
            name: "each_month_clamped_leap_year",
            start: Some("2024-01-31"),
            end: Some("2024-04-30"),
            model: "Each",
            one_level: Some("month"),
            expected: &["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30"],
            ..BLANK
        },
        CycleCase {
            name: "each_year_basic",
            start: Some("2023-07-01"),
            end: Some("2025-07-01"),
            model: "Each",
            one_level: Some("year"),
            expected: &["2023-07-01", "2024-07-01", "2025-07-01"],
            ..BLANK
        },
        CycleCase {
            name: "each_unrecognized_unit",
            start: Some("2025-01-01"),
            end: Some("2025-12-31"),
            model: "Each",
            one_level: Some("fortnight"),
            expected: &["2025-01-01"],
            ..BLANK
        },
        CycleCase {
            name: "every_two_weeks",
            start: Some("2025-01-06"),
            end: Some("2025-02-03"),
            model: "Every",
            number: Some(2),
            level: Some("weeks"),
            expected: &["2025-01-06", "2025-01-20", "2025-02-03"],
            ..BLANK
        },
        CycleCase {
            name: "every_ten_days",
            start: Some("2025-02-20"),
            end: Some("2025-03-31"),
            model: "Every",
            number: Some(10),
            level: Some("days"),
            expected: &["2025-02-20", "2025-03-02", "2025-03-12", "2025-03-22"],
            ..BLANK
        },
        CycleCase {
            name: "every_singular_unit_truncates",
            start: Some("2025-01-06"),
            end: Some("2025-02-03"),
            model: "Every",
            number: Some(2),
            level: Some("week"),
            expected: &["2025-01-06"],
            ..BLANK
        },
        CycleCase {
            name: "day_of_week_wednesday",
            start: Some("2025-01-06"),
            end: Some("2025-01-27"),
            model: "DayOfWeek",
            weekday: Some("Wednesday"),
            expected: &["2025-01-08", "2025-01-15", "2025-01-22"],
            ..BLANK
        },
        CycleCase {
            name: "day_of_week_sunday_from_sunday",
            start: Some("2025-01-05"),
            end: Some("2025-01-19"),
            model: "DayOfWeek",
            weekday: Some("Sunday"),
            expected: &["2025-01-05", "2025-01-12", "2025-01-19"],
            ..BLANK
        },
        CycleCase {
            name: "day_of_week_unrecognized",
            start: Some("2025-01-07"),
            end: Some("2025-01-21"),
            model: "DayOfWeek",
            weekday: Some("dinsdag"),
            expected: &["2025-01-07", "2025-01-14", "2025-01-21"],
            ..BLANK
        },
        CycleCase {
            name: "first_last_of_unimplemented",
            start: Some("2025-01-01"),
            end: Some("2025-12-31"),
            model: "FirstLastOf",
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "months_of_year_unimplemented",
            start: Some("2025-01-01"),
            end: Some("2025-12-31"),
            model: "MonthsOfYear",
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "day_of_month_unimplemented",
            start: Some("2025-01-01"),
            end: Some("2025-12-31"),
            model: "DayOfMonth",
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "unknown_model",
            start: Some("2025-01-01"),
            end: Some("2025-12-31"),
            model: "Quarterly",
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "missing_end",
            start: Some("2025-01-01"),
            model: "Each",
            one_level: Some("day"),
            expected: &[],
            ..BLANK
        },
        CycleCase {
            name: "display_format_bounds",
            start: Some("30-12-2024"),
            end: Some("2025-01-02T08:00:00Z"),
            model: "Each",
            one_level: Some("day"),
            expected: &["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"],
            ..BLANK
        },
    ]
}

pub fn assert_case(case: &CycleCase, actual: &[String]) {
    let expected: Vec<String> = case.expected.iter().map(ToString::to_string).collect();
    assert_eq!(actual, expected.as_slice(), "case {}", case.name);
}
