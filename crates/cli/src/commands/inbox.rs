//! Messaging commands.

use std::io::Write;

use chrono::Utc;

use marketplace_admin::filters::short_time;
use marketplace_admin::views::{Inbox, send_message};
use marketplace_admin::{AppError, MarketplaceStore};
use marketplace_core::ThreadId;

/// Print the thread list and, if a thread is given, its conversation.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown thread, or an error if
/// writing fails.
pub fn show(
    store: &mut MarketplaceStore,
    thread: Option<&str>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = thread {
        select(store, id)?;
    }
    render(store, out)
}

/// Open `thread` and send `text` to it as the operator.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown thread, `AppError::BadRequest`
/// for blank text, or an error if writing fails.
pub fn send(
    store: &mut MarketplaceStore,
    thread: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    select(store, thread)?;
    let sent = send_message(store, text, Utc::now())
        .ok_or_else(|| AppError::BadRequest("message text is empty".to_owned()))?;

    tracing::info!(thread_id = %sent, "Message sent");
    render(store, out)
}

fn select(store: &mut MarketplaceStore, id: &str) -> Result<(), AppError> {
    let thread_id = ThreadId::new(id);
    if store.snapshot().thread(&thread_id).is_none() {
        return Err(AppError::NotFound(format!("thread {id}")));
    }
    store.set_selected_thread(Some(thread_id));
    Ok(())
}

fn render(store: &MarketplaceStore, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let inbox = Inbox::build(store.snapshot());

    for row in &inbox.threads {
        let marker = if row.selected { ">" } else { " " };
        let badge = row
            .unread_badge
            .map_or_else(String::new, |n| format!(" [{n}]"));
        writeln!(
            out,
            "{marker} {:<10} {}{badge}  {}  {}",
            row.thread.id,
            row.thread.participant,
            row.thread.last_message,
            short_time(row.thread.timestamp),
        )?;
    }

    if let Some(participant) = inbox.participant {
        writeln!(out)?;
        writeln!(out, "Conversation with {participant}")?;
        for message in inbox.conversation {
            let side = if message.is_from_operator() { "  >>" } else { "<<  " };
            writeln!(
                out,
                "{side} {} ({}): {}",
                message.sender,
                short_time(message.timestamp),
                message.content,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_and_renders() {
        let mut store = MarketplaceStore::seeded();
        let mut out = Vec::new();
        send(&mut store, "thread-2", "Glad it arrived", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Conversation with Jane Smith"));
        assert!(text.contains("Glad it arrived"));
        assert_eq!(
            store.snapshot().messages_for(&ThreadId::new("thread-2")).len(),
            4
        );
    }

    #[test]
    fn test_unknown_thread() {
        let mut store = MarketplaceStore::seeded();
        let mut out = Vec::new();
        assert!(show(&mut store, Some("thread-9"), &mut out).is_err());
        assert!(store.snapshot().ui.selected_thread.is_none());
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut store = MarketplaceStore::seeded();
        let mut out = Vec::new();
        let err = send(&mut store, "thread-1", " ", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: message text is empty");
    }
}
