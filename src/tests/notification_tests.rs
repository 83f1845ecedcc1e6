use crate::constants::NOTIFICATION_TIMEOUT_MS;
use crate::messages::{Command, Message};
use crate::models::NotificationKind;
use crate::state::AppState;
use crate::update::update;

fn show(state: &mut AppState, message: &str) -> Vec<Command> {
    update(
        state,
        Message::ShowNotification {
            message: message.to_string(),
            kind: NotificationKind::Success,
        },
    )
}

#[test]
fn show_schedules_dismiss_with_fixed_lifetime() {
    let mut state = AppState::new();

    let commands = show(&mut state, "saved");

    assert_eq!(state.notification.as_ref().unwrap().message, "saved");
    assert!(commands.iter().any(|c| matches!(
        c,
        Command::DismissNotificationAfter {
            seq,
            delay_ms: NOTIFICATION_TIMEOUT_MS,
        } if *seq == state.notification_seq
    )));
}

#[test]
fn dismiss_clears_the_notification_it_was_scheduled_for() {
    let mut state = AppState::new();
    show(&mut state, "saved");
    let seq = state.notification_seq;

    update(&mut state, Message::NotificationExpired(seq));

    assert!(state.notification.is_none());
}

#[test]
fn newer_notification_replaces_and_outlives_older_timer() {
    let mut state = AppState::new();

    show(&mut state, "first");
    let first_seq = state.notification_seq;
    show(&mut state, "second");

    // Only the latest message is visible; no queueing.
    assert_eq!(state.notification.as_ref().unwrap().message, "second");

    // The first notification's timer fires and must not clip the newer one.
    update(&mut state, Message::NotificationExpired(first_seq));
    assert_eq!(state.notification.as_ref().unwrap().message, "second");

    // The second timer clears it.
    let second_seq = state.notification_seq;
    update(&mut state, Message::NotificationExpired(second_seq));
    assert!(state.notification.is_none());
}

#[test]
fn stale_dismiss_after_clear_is_a_no_op() {
    let mut state = AppState::new();
    show(&mut state, "only");
    let seq = state.notification_seq;

    update(&mut state, Message::NotificationExpired(seq));
    // Timer firing twice (or late) must not disturb anything.
    update(&mut state, Message::NotificationExpired(seq));

    assert!(state.notification.is_none());
}
