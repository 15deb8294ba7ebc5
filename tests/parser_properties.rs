use caffeine_dose_lib::parser::{nearest_future, parse, ClockTime, Instruction, MINUTES_PER_DAY};
use caffeine_dose_lib::timefmt::{format_clock, TimeFormat};
use proptest::prelude::*;

fn clock() -> impl Strategy<Value = ClockTime> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| ClockTime::new(hour, minute).unwrap())
}

proptest! {
    #[test]
    fn two_numbers_are_hours_then_minutes(hours in 0u64..100_000, minutes in 0u64..100_000, now in clock()) {
        prop_assert_eq!(
            parse(&format!("{hours} {minutes}"), now),
            Instruction::minutes(hours * 60 + minutes)
        );
    }

    #[test]
    fn hour_suffix_is_sixty_minutes_each(hours in 1u64..10_000, now in clock()) {
        prop_assert_eq!(parse(&format!("{hours}h"), now), Instruction::minutes(hours * 60));
    }

    #[test]
    fn plain_numbers_stay_minutes(minutes in 0u64..1_000_000, now in clock()) {
        prop_assert_eq!(parse(&minutes.to_string(), now), Instruction::minutes(minutes));
    }

    #[test]
    fn nearest_future_is_never_in_the_past(hour in 0u32..24, minute in 0u32..60, now in clock()) {
        let ahead = nearest_future(hour, minute, now);
        prop_assert!((1..=MINUTES_PER_DAY).contains(&ahead));
        // lands on the requested minute, in one half of the day or the other
        let reached = now.plus_minutes(ahead);
        prop_assert_eq!(reached.minute(), minute);
        prop_assert!(reached.hour() % 12 == hour % 12);
    }

    #[test]
    fn twelve_hour_rendering_parses_back(target in clock(), now in clock()) {
        let rendered = format_clock(target.to_naive(), TimeFormat::TwelveHour, false);
        let compact: String = rendered.split_whitespace().collect();
        prop_assert_eq!(parse(&compact, now), Instruction::until(target));
    }

    #[test]
    fn afternoon_24h_rendering_parses_back(hour in 13u32..24, minute in 0u32..60, now in clock()) {
        let target = ClockTime::new(hour, minute).unwrap();
        let rendered = format_clock(target.to_naive(), TimeFormat::TwentyFourHour, false);
        prop_assert_eq!(parse(&rendered, now), Instruction::until(target));
    }

    #[test]
    fn parse_is_total(raw in "\\PC{0,12}", now in clock()) {
        // any input yields some instruction without panicking
        let _ = parse(&raw, now);
    }
}

#[test]
fn meridiem_examples() {
    let now = ClockTime::new(9, 41).unwrap();
    assert_eq!(parse("8am", now), Instruction::until_hm(8, 0));
    assert_eq!(parse("8pm", now), Instruction::until_hm(20, 0));
    assert_eq!(parse("12am", now), Instruction::until_hm(0, 0));
    assert_eq!(parse("12pm", now), Instruction::until_hm(12, 0));
}

#[test]
fn zero_hours_with_suffix_is_rejected() {
    assert_eq!(parse("0h", ClockTime::new(9, 41).unwrap()), Instruction::Invalid);
}

#[test]
fn out_of_range_hours_are_rejected_on_hour_paths() {
    let now = ClockTime::new(9, 41).unwrap();
    assert_eq!(parse("25:", now), Instruction::Invalid);
    assert_eq!(parse("25:00", now), Instruction::Invalid);
    assert_eq!(parse("25pm", now), Instruction::Invalid);
    assert_eq!(parse("25o", now), Instruction::Invalid);
}
