use chrono::NaiveDate;
use rtimediary::core::search::parse_condition;
use rtimediary::errors::AppError;
use rtimediary::models::condition::{Clause, DateMatch, Logic, TextMatch};

fn no_attributes(_: &str) -> Option<i64> {
    None
}

fn known_attributes(name: &str) -> Option<i64> {
    match name.to_lowercase().as_str() {
        "work" => Some(1),
        "sport" => Some(2),
        _ => None,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_plain_contains() {
    let c = parse_condition("name contains gym", no_attributes).unwrap();

    assert_eq!(c.clause, Clause::Name(TextMatch::Contains("gym".into())));
    assert_eq!(c.logic, None);
    assert!(!c.negate);
}

#[test]
fn test_value_keeps_inner_spaces() {
    let c = parse_condition("or notes equals rest day", no_attributes).unwrap();

    assert_eq!(c.clause, Clause::Notes(TextMatch::Equals("rest day".into())));
    assert_eq!(c.logic, Some(Logic::Or));
}

#[test]
fn test_logic_and_negation() {
    let c = parse_condition(
        "AND NOT date between 2024-01-01 2024-01-31",
        no_attributes,
    )
    .unwrap();

    assert_eq!(c.logic, Some(Logic::And));
    assert!(c.negate);
    assert_eq!(
        c.clause,
        Clause::Date(DateMatch::Between {
            from: Some(ymd(2024, 1, 1)),
            to: Some(ymd(2024, 1, 31)),
        })
    );
}

#[test]
fn test_between_with_comma_and_missing_bound() {
    let both = parse_condition("date between 2024-01-01,2024-02-01", no_attributes).unwrap();
    assert_eq!(
        both.clause,
        Clause::Date(DateMatch::Between {
            from: Some(ymd(2024, 1, 1)),
            to: Some(ymd(2024, 2, 1)),
        })
    );

    let one = parse_condition("date between 2024-01-01", no_attributes).unwrap();
    assert_eq!(
        one.clause,
        Clause::Date(DateMatch::Between {
            from: Some(ymd(2024, 1, 1)),
            to: None,
        })
    );
}

#[test]
fn test_single_dates() {
    let c = parse_condition("date before 2025-03-01", no_attributes).unwrap();
    assert_eq!(c.clause, Clause::Date(DateMatch::Before(ymd(2025, 3, 1))));

    let c = parse_condition("date after 2025-03-01", no_attributes).unwrap();
    assert_eq!(c.clause, Clause::Date(DateMatch::After(ymd(2025, 3, 1))));

    let c = parse_condition("date equals 2025-03-01", no_attributes).unwrap();
    assert_eq!(c.clause, Clause::Date(DateMatch::Equals(ymd(2025, 3, 1))));
}

#[test]
fn test_attribute_names_are_resolved_and_unknown_dropped() {
    let c = parse_condition("attribute in work, Sport,chess", known_attributes).unwrap();
    assert_eq!(c.clause, Clause::AttributeIn(vec![1, 2]));

    let c = parse_condition("tag in chess", known_attributes).unwrap();
    assert_eq!(c.clause, Clause::AttributeIn(vec![]));
}

#[test]
fn test_invalid_conditions_are_errors() {
    for text in [
        "",
        "name",
        "name contains",
        "date before tomorrow",
        "color equals red",
        "name startswith a",
    ] {
        let res = parse_condition(text, no_attributes);
        assert!(
            matches!(res, Err(AppError::InvalidCondition(_))),
            "expected an error for {:?}",
            text
        );
    }
}
