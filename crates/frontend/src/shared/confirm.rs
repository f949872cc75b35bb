/// Asks the user to confirm with the browser's native dialog and runs
/// `callback` only on OK.
pub fn confirm_action(message: &str, callback: impl FnOnce()) {
    let confirmed = web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false);

    if confirmed {
        callback();
    } else {
        log::debug!("confirmation declined: {}", message);
    }
}
