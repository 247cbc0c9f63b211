//! Application Integration Tests
//! Run with: cargo test --test application_test

use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use social_networking::domain::entities::{Action, Operand};
use social_networking::infrastructure::clock::ManualClock;
use social_networking::{Application, SocialError};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 12, 14, 30, 0).unwrap()
}

fn setup() -> (Application, Arc<ManualClock>) {
    ensure_init();
    let clock = Arc::new(ManualClock::new(now()));
    (Application::new(clock.clone()), clock)
}

/// Alice posts at T-5min, Bob at T-2min and T-1min
fn seeded() -> (Application, Arc<ManualClock>) {
    let (mut app, clock) = setup();

    clock.set(now() - Duration::minutes(5));
    app.parse_command("Alice -> I love the weather today!").unwrap();

    clock.set(now() - Duration::minutes(2));
    app.parse_command("Bob -> Damn! We lost!").unwrap();

    clock.set(now() - Duration::minutes(1));
    app.parse_command("Bob -> Good game though.").unwrap();

    clock.set(now());
    (app, clock)
}

#[test]
fn test_posting() {
    let (mut app, _) = setup();

    assert_eq!(app.parse_command("Alice -> I love the weather today!"), Ok(None));
    assert_eq!(
        app.social_network().get_user_timeline("Alice").unwrap(),
        vec!["I love the weather today! (just now)"]
    );
}

#[test]
fn test_posting_empty_user() {
    let (mut app, _) = setup();

    let err = app.parse_command("-> I love the weather today!").unwrap_err();
    assert_eq!(err, SocialError::EmptyOperand { action: Action::Post, side: Operand::Username });
    assert_eq!(err.to_string(), "Invalid posting command: username is empty");
}

#[test]
fn test_posting_empty_message() {
    let (mut app, _) = setup();

    let err = app.parse_command("Alice ->").unwrap_err();
    assert_eq!(err.to_string(), "Invalid posting command: message is empty");
    assert!(!app.social_network().has_user("Alice"));
}

#[test]
fn test_reading() {
    let (mut app, _) = seeded();

    assert_eq!(
        app.parse_command("Alice").unwrap(),
        Some(vec!["I love the weather today! (5 minutes ago)".to_string()])
    );
    assert_eq!(
        app.parse_command("Bob").unwrap(),
        Some(vec![
            "Good game though. (1 minute ago)".to_string(),
            "Damn! We lost! (2 minutes ago)".to_string(),
        ])
    );
}

#[test]
fn test_reading_nonexistent_user() {
    let (mut app, _) = setup();

    let err = app.parse_command("Charlie").unwrap_err();
    assert_eq!(err, SocialError::InvalidUser("Charlie".into()));
    assert_eq!(err.to_string(), "Invalid user: Charlie");
}

#[test]
fn test_invalid_command() {
    let (mut app, _) = setup();

    let err = app.parse_command("Alice reacts").unwrap_err();
    assert_eq!(err.to_string(), "Invalid command: Alice reacts");
}

#[test]
fn test_following_and_wall() {
    let (mut app, clock) = seeded();

    clock.set(now() - Duration::seconds(2));
    app.parse_command("Charlie -> I'm in New York today! Anyone want to have a coffee?").unwrap();
    clock.set(now());

    assert_eq!(app.parse_command("Charlie follows Alice"), Ok(None));
    assert_eq!(
        app.parse_command("Charlie wall").unwrap().unwrap(),
        vec![
            "Charlie - I'm in New York today! Anyone want to have a coffee? (2 seconds ago)",
            "Alice - I love the weather today! (5 minutes ago)",
        ]
    );

    assert_eq!(app.parse_command("Charlie follows Bob"), Ok(None));
    assert_eq!(
        app.parse_command("Charlie wall").unwrap().unwrap(),
        vec![
            "Charlie - I'm in New York today! Anyone want to have a coffee? (2 seconds ago)",
            "Bob - Good game though. (1 minute ago)",
            "Bob - Damn! We lost! (2 minutes ago)",
            "Alice - I love the weather today! (5 minutes ago)",
        ]
    );
    assert_eq!(
        app.social_network().get_following("Charlie").unwrap(),
        vec!["Alice", "Bob"]
    );
}

#[test]
fn test_following_empty_operands() {
    let (mut app, _) = seeded();

    assert_eq!(
        app.parse_command("Alice follows").unwrap_err().to_string(),
        "Invalid following command: user to follow is empty"
    );
    assert_eq!(
        app.parse_command("follows Bob").unwrap_err().to_string(),
        "Invalid following command: username is empty"
    );
}

#[test]
fn test_mutual_and_self_follow() {
    let (mut app, _) = seeded();

    app.parse_command("Alice follows Bob").unwrap();
    app.parse_command("Bob follows Alice").unwrap();
    app.parse_command("Alice follows Alice").unwrap();

    // One level only: Alice's own posts twice, Bob's once
    let wall = app.parse_command("Alice wall").unwrap().unwrap();
    assert_eq!(wall.len(), 4);
    assert_eq!(wall[0], "Bob - Good game though. (1 minute ago)");
    assert_eq!(wall[3], "Alice - I love the weather today! (5 minutes ago)");
}

#[test]
fn test_timeline_ages_with_clock() {
    let (mut app, clock) = seeded();

    clock.advance(Duration::minutes(85));
    assert_eq!(
        app.parse_command("Alice").unwrap().unwrap(),
        vec!["I love the weather today! (1 hour ago)"]
    );

    clock.advance(Duration::days(40));
    assert_eq!(
        app.parse_command("Alice").unwrap().unwrap(),
        vec!["I love the weather today! (1 month ago)"]
    );
}
