//! Two-pane messaging inbox.

use chrono::{DateTime, Utc};

use marketplace_core::{MessageId, ThreadId};

use crate::models::{Message, Thread};
use crate::state::StoreState;
use crate::store::MarketplaceStore;

/// A row of the thread list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow<'a> {
    pub thread: &'a Thread,
    pub selected: bool,
    /// Unread badge; `None` when there is nothing unread.
    pub unread_badge: Option<u32>,
}

/// Thread list plus the open conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox<'a> {
    pub threads: Vec<ThreadRow<'a>>,
    /// Participant of the selected thread, if it is a known thread.
    pub participant: Option<&'a str>,
    /// Messages of the selected thread; empty when nothing is selected.
    pub conversation: &'a [Message],
}

impl<'a> Inbox<'a> {
    #[must_use]
    pub fn build(state: &'a StoreState) -> Self {
        let selected = state.ui.selected_thread.as_ref();

        let threads = state
            .threads
            .iter()
            .map(|thread| ThreadRow {
                thread,
                selected: selected == Some(&thread.id),
                unread_badge: (thread.unread > 0).then_some(thread.unread),
            })
            .collect();

        Self {
            threads,
            participant: selected
                .and_then(|id| state.thread(id))
                .map(|t| t.participant.as_str()),
            conversation: selected
                .map(|id| state.messages_for(id))
                .unwrap_or_default(),
        }
    }
}

/// Send `input` to the selected thread as the operator.
///
/// Returns the thread written to, or `None` if the input is blank or no
/// thread is selected; the store is not touched in that case. The text is
/// stored as typed. The message ID is the millisecond timestamp of `now`,
/// bumped until no message of the thread uses it.
pub fn send_message(
    store: &mut MarketplaceStore,
    input: &str,
    now: DateTime<Utc>,
) -> Option<ThreadId> {
    if input.trim().is_empty() {
        return None;
    }
    let thread_id = store.snapshot().ui.selected_thread.clone()?;

    let message = Message {
        id: fresh_message_id(store.snapshot(), &thread_id, now),
        sender: Message::OPERATOR.to_owned(),
        content: input.to_owned(),
        timestamp: now.naive_utc(),
        is_read: true,
    };
    store.add_message(thread_id.clone(), message);
    Some(thread_id)
}

fn fresh_message_id(state: &StoreState, thread_id: &ThreadId, now: DateTime<Utc>) -> MessageId {
    let taken = state.messages_for(thread_id);
    let mut candidate = now.timestamp_millis();
    loop {
        let id = MessageId::new(candidate.to_string());
        if taken.iter().all(|m| m.id != id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_inbox_without_selection() {
        let store = MarketplaceStore::seeded();
        let inbox = Inbox::build(store.snapshot());

        assert_eq!(inbox.threads.len(), 2);
        assert!(inbox.threads.iter().all(|row| !row.selected));
        assert_eq!(inbox.threads[0].unread_badge, Some(1));
        assert_eq!(inbox.threads[1].unread_badge, None);
        assert!(inbox.participant.is_none());
        assert!(inbox.conversation.is_empty());
    }

    #[test]
    fn test_inbox_with_selection() {
        let mut store = MarketplaceStore::seeded();
        store.set_selected_thread(Some(ThreadId::new("thread-2")));
        let inbox = Inbox::build(store.snapshot());

        assert!(inbox.threads[1].selected);
        assert_eq!(inbox.participant, Some("Jane Smith"));
        assert_eq!(inbox.conversation.len(), 3);
    }

    #[test]
    fn test_send_requires_selection_and_text() {
        let mut store = MarketplaceStore::seeded();
        assert!(send_message(&mut store, "hello", Utc::now()).is_none());

        store.set_selected_thread(Some(ThreadId::new("thread-1")));
        assert!(send_message(&mut store, "   ", Utc::now()).is_none());
        assert_eq!(store.snapshot().messages_for(&ThreadId::new("thread-1")).len(), 3);
    }

    #[test]
    fn test_send_appends_operator_message() {
        let mut store = MarketplaceStore::seeded();
        let thread = ThreadId::new("thread-1");
        store.set_selected_thread(Some(thread.clone()));

        let sent = send_message(&mut store, "Ships tomorrow", Utc::now()).unwrap();
        assert_eq!(sent, thread);

        let messages = store.snapshot().messages_for(&thread);
        assert_eq!(messages.len(), 4);
        let last = messages.last().unwrap();
        assert!(last.is_from_operator());
        assert!(last.is_read);
        assert_eq!(last.content, "Ships tomorrow");
    }

    #[test]
    fn test_same_instant_sends_get_distinct_ids() {
        let mut store = MarketplaceStore::seeded();
        let thread = ThreadId::new("thread-1");
        store.set_selected_thread(Some(thread.clone()));
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        send_message(&mut store, "a", now).unwrap();
        send_message(&mut store, "b", now).unwrap();

        let messages = store.snapshot().messages_for(&thread);
        let [.., first, second] = messages else {
            panic!("expected two new messages");
        };
        assert_eq!(first.id.as_str(), "1700000000000");
        assert_eq!(second.id.as_str(), "1700000000001");
    }

    #[test]
    fn test_same_instant_in_other_thread_reuses_id() {
        let mut store = MarketplaceStore::seeded();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        store.set_selected_thread(Some(ThreadId::new("thread-1")));
        send_message(&mut store, "a", now).unwrap();
        store.set_selected_thread(Some(ThreadId::new("thread-2")));
        send_message(&mut store, "b", now).unwrap();

        let last = store
            .snapshot()
            .messages_for(&ThreadId::new("thread-2"))
            .last()
            .unwrap();
        assert_eq!(last.id.as_str(), "1700000000000");
    }
}
