use chrono::NaiveDate;
use rtimediary::config::Config;
use rtimediary::core::add::{AddLogic, EntryInput};
use rtimediary::core::edit::EditLogic;
use rtimediary::core::search::{SearchLogic, compile};
use rtimediary::db::attributes::{
    attributes_for_entry, delete_attribute, find_attribute_by_name, insert_attribute,
    list_attributes, set_attributes_for_entry, update_attribute,
};
use rtimediary::db::pool::DbPool;
use rtimediary::db::queries::{
    delete_entry, execute_query, get_entry, insert_entry, list_entries, list_entries_for_day,
    update_entry,
};
use rtimediary::errors::AppError;
use rtimediary::models::condition::{Clause, SearchCondition, TextMatch};
use rtimediary::models::entry::NewEntry;

mod common;
use common::open_test_pool;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_entry(date: NaiveDate, start: &str, end: &str, name: &str) -> NewEntry {
    NewEntry {
        date,
        start_time: start.into(),
        end_time: end.into(),
        name: name.into(),
        notes: String::new(),
        color: "#4CAF50".into(),
    }
}

fn log_count(pool: &DbPool, operation: &str) -> i64 {
    pool.conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = ?1",
            [operation],
            |r| r.get(0),
        )
        .unwrap()
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = open_test_pool("storage_migrations");
    let before = log_count(&pool, "migration_applied");

    rtimediary::db::initialize::init_db(&pool.conn).unwrap();

    assert_eq!(before, 3);
    assert_eq!(log_count(&pool, "migration_applied"), before);
}

#[test]
fn test_entry_crud() {
    let pool = open_test_pool("storage_entry_crud");
    let day = ymd(2025, 9, 1);

    let id = insert_entry(&pool.conn, &new_entry(day, "09:00:00", "10:00:00", "Gym")).unwrap();
    let e = get_entry(&pool.conn, id).unwrap().expect("entry");
    assert_eq!(e.name, "Gym");
    assert_eq!(e.date, day);
    assert_eq!(e.duration_minutes(), 60);

    let mut changed = NewEntry::from(&e);
    changed.notes = "leg day".into();
    update_entry(&pool.conn, id, &changed).unwrap();
    assert_eq!(get_entry(&pool.conn, id).unwrap().unwrap().notes, "leg day");

    delete_entry(&pool.conn, id).unwrap();
    assert!(get_entry(&pool.conn, id).unwrap().is_none());

    assert!(matches!(
        delete_entry(&pool.conn, id),
        Err(AppError::EntryNotFound(x)) if x == id
    ));
    assert!(matches!(
        update_entry(&pool.conn, 999, &changed),
        Err(AppError::EntryNotFound(999))
    ));
}

#[test]
fn test_listing_order() {
    let pool = open_test_pool("storage_listing_order");

    insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 1), "14:00:00", "15:00:00", "b")).unwrap();
    insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 2), "08:00:00", "09:00:00", "c")).unwrap();
    insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 1), "07:00:00", "08:00:00", "a")).unwrap();

    let all: Vec<String> = list_entries(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(all, vec!["c", "a", "b"]);

    let day: Vec<String> = list_entries_for_day(&pool.conn, &ymd(2025, 9, 1))
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(day, vec!["a", "b"]);
}

#[test]
fn test_attribute_names_are_unique() {
    let pool = open_test_pool("storage_attribute_unique");

    let work = insert_attribute(&pool.conn, "work", "#3366FF").unwrap();
    let sport = insert_attribute(&pool.conn, "sport", "#FF6600").unwrap();

    assert!(matches!(
        insert_attribute(&pool.conn, "work", "#000000"),
        Err(AppError::DuplicateAttribute(n)) if n == "work"
    ));
    assert!(matches!(
        update_attribute(&pool.conn, sport, "work", "#FF6600"),
        Err(AppError::DuplicateAttribute(_))
    ));

    let found = find_attribute_by_name(&pool.conn, "WORK").unwrap().unwrap();
    assert_eq!(found.id, work);

    let names: Vec<String> = list_attributes(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["sport", "work"]);
}

#[test]
fn test_set_attributes_replaces_and_dedups() {
    let mut pool = open_test_pool("storage_set_attributes");
    let id = insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 1), "09:00", "10:00", "x")).unwrap();
    let a = insert_attribute(&pool.conn, "a", "#111111").unwrap();
    let b = insert_attribute(&pool.conn, "b", "#222222").unwrap();

    set_attributes_for_entry(&mut pool.conn, id, &[a, b, a]).unwrap();
    assert_eq!(attributes_for_entry(&pool.conn, id).unwrap().len(), 2);

    set_attributes_for_entry(&mut pool.conn, id, &[b]).unwrap();
    let attrs = attributes_for_entry(&pool.conn, id).unwrap();
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].id, b);

    set_attributes_for_entry(&mut pool.conn, id, &[]).unwrap();
    assert!(attributes_for_entry(&pool.conn, id).unwrap().is_empty());
}

#[test]
fn test_deletes_cascade_to_links() {
    let mut pool = open_test_pool("storage_cascade");
    let e1 = insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 1), "09:00", "10:00", "x")).unwrap();
    let e2 = insert_entry(&pool.conn, &new_entry(ymd(2025, 9, 1), "11:00", "12:00", "y")).unwrap();
    let a = insert_attribute(&pool.conn, "a", "#111111").unwrap();
    let b = insert_attribute(&pool.conn, "b", "#222222").unwrap();

    set_attributes_for_entry(&mut pool.conn, e1, &[a, b]).unwrap();
    set_attributes_for_entry(&mut pool.conn, e2, &[a]).unwrap();

    delete_attribute(&pool.conn, a).unwrap();
    assert_eq!(attributes_for_entry(&pool.conn, e1).unwrap().len(), 1);
    assert!(attributes_for_entry(&pool.conn, e2).unwrap().is_empty());

    delete_entry(&pool.conn, e1).unwrap();
    let links: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM entry_attributes", [], |r| r.get(0))
        .unwrap();
    assert_eq!(links, 0);
}

#[test]
fn test_execute_query_returns_each_entry_once() {
    let mut pool = open_test_pool("storage_execute_distinct");
    let day = ymd(2025, 9, 1);
    let gym = insert_entry(&pool.conn, &new_entry(day, "09:00", "10:00", "Gym")).unwrap();
    let desk = insert_entry(&pool.conn, &new_entry(day, "10:00", "12:00", "Desk")).unwrap();
    insert_entry(&pool.conn, &new_entry(day, "13:00", "14:00", "Lunch")).unwrap();

    let a = insert_attribute(&pool.conn, "a", "#111111").unwrap();
    let b = insert_attribute(&pool.conn, "b", "#222222").unwrap();
    set_attributes_for_entry(&mut pool.conn, gym, &[a, b]).unwrap();
    set_attributes_for_entry(&mut pool.conn, desk, &[b]).unwrap();

    // no conditions: every entry, untagged ones included, no duplicates
    let all = execute_query(&pool.conn, &compile(&[])).unwrap();
    assert_eq!(all.len(), 3);

    let tagged = execute_query(
        &pool.conn,
        &compile(&[SearchCondition::new(Clause::AttributeIn(vec![a, b]))]),
    )
    .unwrap();
    let ids: Vec<i64> = tagged.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![gym, desk]);
    assert_eq!(tagged[0].attributes.len(), 2);

    let not_tagged = execute_query(
        &pool.conn,
        &compile(&[SearchCondition::new(Clause::AttributeIn(vec![b])).negated()]),
    )
    .unwrap();
    assert_eq!(not_tagged.len(), 1);
    assert_eq!(not_tagged[0].name, "Lunch");

    let either = execute_query(
        &pool.conn,
        &compile(&[
            SearchCondition::new(Clause::Name(TextMatch::Equals("Lunch".into()))),
            SearchCondition::new(Clause::Name(TextMatch::Contains("es".into()))).or(),
        ]),
    )
    .unwrap();
    assert_eq!(either.len(), 2);
}

#[test]
fn test_period_conditions() {
    let pool = open_test_pool("storage_period_conditions");
    insert_entry(&pool.conn, &new_entry(ymd(2024, 12, 31), "09:00", "10:00", "old")).unwrap();
    insert_entry(&pool.conn, &new_entry(ymd(2025, 2, 28), "09:00", "10:00", "feb")).unwrap();
    insert_entry(&pool.conn, &new_entry(ymd(2025, 3, 1), "09:00", "10:00", "mar")).unwrap();

    let run = |pool: &DbPool, p: &str| -> Vec<String> {
        let conds = SearchLogic::period_conditions(Some(p)).unwrap();
        SearchLogic::run(pool, &conds)
            .unwrap()
            .1
            .into_iter()
            .map(|e| e.name)
            .collect()
    };

    assert_eq!(run(&pool, "2025-02"), vec!["feb"]);
    assert_eq!(run(&pool, "2025"), vec!["mar", "feb"]);
    assert_eq!(run(&pool, "2024-12:2025-02"), vec!["feb", "old"]);
    assert_eq!(run(&pool, "2025-03-01"), vec!["mar"]);
    assert_eq!(run(&pool, "all").len(), 3);

    assert!(SearchLogic::period_conditions(Some("2025-13")).is_err());
}

#[test]
fn test_add_and_edit_logic() {
    let mut pool = open_test_pool("storage_add_edit_logic");
    let cfg = Config {
        default_entry_name: "untitled".into(),
        ..Config::default()
    };
    insert_attribute(&pool.conn, "work", "#3366FF").unwrap();

    let id = AddLogic::apply(
        &mut pool,
        &cfg,
        EntryInput {
            date: Some(ymd(2025, 9, 1)),
            start: Some("09:00:00".into()),
            attributes: Some(vec!["Work".into()]),
            ..EntryInput::default()
        },
    )
    .unwrap();

    let e = get_entry(&pool.conn, id).unwrap().unwrap();
    assert_eq!(e.name, "untitled");
    assert_eq!(e.end_time, "00:00:00");
    assert_eq!(e.color, cfg.default_entry_color);
    assert_eq!(e.attribute_names(), vec!["work"]);

    let unknown = AddLogic::apply(
        &mut pool,
        &cfg,
        EntryInput {
            attributes: Some(vec!["chess".into()]),
            ..EntryInput::default()
        },
    );
    assert!(matches!(unknown, Err(AppError::AttributeNotFound(_))));
    assert_eq!(list_entries(&pool.conn).unwrap().len(), 1);

    let changed = EditLogic::apply(
        &mut pool,
        id,
        EntryInput {
            end: Some("10:15:00".into()),
            ..EntryInput::default()
        },
        true,
    )
    .unwrap();
    assert_eq!(changed, vec!["end", "attributes"]);

    let e = get_entry(&pool.conn, id).unwrap().unwrap();
    assert_eq!(e.duration_minutes(), 75);
    assert!(e.attributes.is_empty());
    assert_eq!(log_count(&pool, "add"), 1);
    assert_eq!(log_count(&pool, "edit"), 1);
}
