use chrono::NaiveDate;
use rtimediary::core::search::{QueryParam, compile, compile_raw};
use rtimediary::models::condition::{
    Clause, DateMatch, Logic, RawCondition, SearchCondition, TextMatch,
};
use serde_json::json;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn raw(v: serde_json::Value) -> RawCondition {
    serde_json::from_value(v).expect("raw condition")
}

fn name_contains(v: &str) -> SearchCondition {
    SearchCondition::new(Clause::Name(TextMatch::Contains(v.into())))
}

#[test]
fn test_empty_input_matches_everything() {
    let q = compile(&[]);

    assert!(q.matches_all());
    assert!(q.params.is_empty());
    assert!(!q.to_sql().contains("WHERE"));
    assert!(q.to_sql().contains("LEFT JOIN entry_attributes"));
    assert!(q.to_sql().contains("SELECT DISTINCT"));
}

#[test]
fn test_single_contains_clause() {
    let q = compile_raw(&[raw(json!({
        "field": "name", "operator": "contains", "value": "gym"
    }))]);

    assert_eq!(q.predicate.as_deref(), Some("(d.name LIKE ?)"));
    assert_eq!(q.params, vec![QueryParam::Text("%gym%".into())]);
    assert!(!q.predicate.unwrap().contains("AND"));
}

#[test]
fn test_equals_on_notes() {
    let q = compile(&[SearchCondition::new(Clause::Notes(TextMatch::Equals(
        "rest day".into(),
    )))]);

    assert_eq!(q.predicate.as_deref(), Some("(d.notes = ?)"));
    assert_eq!(q.params, vec![QueryParam::Text("rest day".into())]);
}

#[test]
fn test_between_with_missing_bound_is_skipped() {
    let q = compile_raw(&[raw(json!({
        "field": "date", "operator": "between", "value": {"from": "2024-01-01"}
    }))]);

    assert!(q.matches_all());
    assert!(q.params.is_empty());
}

#[test]
fn test_between_with_both_bounds() {
    let q = compile(&[SearchCondition::new(Clause::Date(DateMatch::Between {
        from: Some(ymd(2024, 1, 1)),
        to: Some(ymd(2024, 1, 31)),
    }))]);

    assert_eq!(q.predicate.as_deref(), Some("(d.date BETWEEN ? AND ?)"));
    assert_eq!(
        q.params,
        vec![
            QueryParam::Text("2024-01-01".into()),
            QueryParam::Text("2024-01-31".into())
        ]
    );
}

#[test]
fn test_date_comparisons_are_strict() {
    let q = compile(&[
        SearchCondition::new(Clause::Date(DateMatch::After(ymd(2024, 1, 1)))),
        SearchCondition::new(Clause::Date(DateMatch::Before(ymd(2024, 2, 1)))),
    ]);

    assert_eq!(
        q.predicate.as_deref(),
        Some("((d.date > ?) AND (d.date < ?))")
    );
}

#[test]
fn test_negate_wraps_clause() {
    let q = compile_raw(&[raw(json!({
        "field": "name", "operator": "equals", "value": "X", "negate": true
    }))]);

    assert_eq!(q.predicate.as_deref(), Some("NOT (d.name = ?)"));
    assert_eq!(q.params, vec![QueryParam::Text("X".into())]);
}

#[test]
fn test_chain_folds_left_to_right() {
    let a = name_contains("a");
    let b = name_contains("b").or();
    let c = name_contains("c").and();

    let q = compile(&[a, b, c]);

    assert_eq!(
        q.predicate.as_deref(),
        Some("(((d.name LIKE ?) OR (d.name LIKE ?)) AND (d.name LIKE ?))")
    );
    assert_eq!(q.params.len(), 3);
}

#[test]
fn test_and_then_or_is_not_regrouped() {
    let q = compile(&[name_contains("a"), name_contains("b"), name_contains("c").or()]);

    // (A AND B) OR C, never A AND (B OR C)
    assert_eq!(
        q.predicate.as_deref(),
        Some("(((d.name LIKE ?) AND (d.name LIKE ?)) OR (d.name LIKE ?))")
    );
}

#[test]
fn test_logic_of_first_emitted_clause_is_ignored() {
    let q = compile(&[name_contains("a").or()]);
    assert_eq!(q.predicate.as_deref(), Some("(d.name LIKE ?)"));
}

#[test]
fn test_skipped_clause_leaves_no_dangling_connective() {
    let skipped = SearchCondition {
        clause: Clause::Date(DateMatch::Between {
            from: None,
            to: Some(ymd(2024, 1, 1)),
        }),
        logic: Some(Logic::Or),
        negate: true,
    };

    let q = compile(&[skipped.clone(), name_contains("a"), skipped, name_contains("b").or()]);

    assert_eq!(
        q.predicate.as_deref(),
        Some("((d.name LIKE ?) OR (d.name LIKE ?))")
    );
    assert!(!q.predicate.unwrap().contains("()"));
    assert_eq!(q.params.len(), 2);
}

#[test]
fn test_attribute_in_uses_association_subquery() {
    let q = compile(&[SearchCondition::new(Clause::AttributeIn(vec![3, 7]))]);

    assert_eq!(
        q.predicate.as_deref(),
        Some(
            "(d.id IN (SELECT entry_id FROM entry_attributes WHERE attribute_id IN (?,?)))"
        )
    );
    assert_eq!(q.params, vec![QueryParam::Integer(3), QueryParam::Integer(7)]);
}

#[test]
fn test_empty_attribute_list_is_skipped() {
    let q = compile(&[SearchCondition::new(Clause::AttributeIn(vec![]))]);
    assert!(q.matches_all());
}

#[test]
fn test_raw_attribute_values_accept_ids_and_objects() {
    let q = compile_raw(&[raw(json!({
        "field": "attribute",
        "operator": "in",
        "value": [1, {"id": 2, "name": "work"}, {"Id": 3}, "bogus"]
    }))]);

    assert_eq!(
        q.params,
        vec![
            QueryParam::Integer(1),
            QueryParam::Integer(2),
            QueryParam::Integer(3)
        ]
    );
}

#[test]
fn test_malformed_raw_shapes_never_fail() {
    let q = compile_raw(&[
        raw(json!({"field": "attribute", "operator": "in", "value": "work"})),
        raw(json!({"field": "date", "operator": "equals", "value": "yesterday"})),
        raw(json!({"field": "date", "operator": "between", "value": "2024-01-01"})),
        raw(json!({"field": "name", "operator": "contains", "value": {"x": 1}})),
        raw(json!({"field": "color", "operator": "equals", "value": "#fff"})),
        raw(json!({"field": "name", "operator": "startswith", "value": "a"})),
        raw(json!({"field": "notes", "operator": "contains"})),
    ]);

    assert!(q.matches_all());
    assert!(q.params.is_empty());
}

#[test]
fn test_raw_logic_is_case_insensitive() {
    let q = compile_raw(&[
        raw(json!({"field": "name", "operator": "contains", "value": "a"})),
        raw(json!({"field": "notes", "operator": "contains", "value": "b", "logic": "or"})),
    ]);

    assert_eq!(
        q.predicate.as_deref(),
        Some("((d.name LIKE ?) OR (d.notes LIKE ?))")
    );
}

#[test]
fn test_compile_is_deterministic() {
    let conds = vec![
        name_contains("gym"),
        SearchCondition::new(Clause::AttributeIn(vec![1])).or().negated(),
    ];
    assert_eq!(compile(&conds), compile(&conds));
}
