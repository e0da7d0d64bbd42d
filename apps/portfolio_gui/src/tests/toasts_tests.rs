use super::*;

#[test]
fn toasts_expire_after_their_lifetime() {
    let mut toasts = Toasts::default();
    toasts.push(Notification::advisory(), 1.0);
    toasts.push(Notification::success(), 3.0);

    toasts.expire(1.0 + TOAST_LIFETIME_SECS);
    assert_eq!(toasts.titles(), ["Message Sent!"]);

    toasts.expire(10.0);
    assert!(toasts.is_empty());
}

#[test]
fn oldest_toasts_are_dropped_past_the_visible_limit() {
    let mut toasts = Toasts::default();
    toasts.push(Notification::advisory(), 0.0);
    for i in 0..3 {
        toasts.push(Notification::success(), 0.1 * f64::from(i));
    }
    assert_eq!(
        toasts.titles(),
        ["Message Sent!", "Message Sent!", "Message Sent!"]
    );
}
