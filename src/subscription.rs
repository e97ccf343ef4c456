//! Global pointer-event channel
//!
//! Overlays close on any pointer event anywhere in the host document. The
//! host owns one [`PointerChannel`]; each grid subscribes while mounted and
//! the subscription is released when its guard drops, so teardown always
//! detaches the listener no matter how it was triggered.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifies one mounted grid on the channel
pub type SubscriberId = u64;

#[derive(Debug, Default)]
struct ChannelState {
    next_id: SubscriberId,
    subscribers: Vec<SubscriberId>,
}

/// Broadcast point for document-level pointer events
///
/// Single-threaded by design: the grid core runs entirely on the host UI
/// thread, so an `Rc<RefCell>` registry is sufficient.
#[derive(Debug, Clone, Default)]
pub struct PointerChannel {
    state: Rc<RefCell<ChannelState>>,
}

impl PointerChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; the returned guard unsubscribes on drop
    pub fn subscribe(&self) -> PointerSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push(id);
        PointerSubscription {
            channel: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Subscribers that should receive the next global pointer event
    pub fn recipients(&self) -> Vec<SubscriberId> {
        self.state.borrow().subscribers.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }
}

/// RAII guard for a channel subscription
#[derive(Debug)]
pub struct PointerSubscription {
    channel: Weak<RefCell<ChannelState>>,
    id: SubscriberId,
}

impl PointerSubscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.channel.upgrade() {
            state.borrow_mut().subscribers.retain(|s| *s != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop() {
        let channel = PointerChannel::new();
        assert_eq!(channel.subscriber_count(), 0);

        let a = channel.subscribe();
        let b = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);
        assert_eq!(channel.recipients(), vec![a.id(), b.id()]);

        drop(a);
        assert_eq!(channel.subscriber_count(), 1);
        assert_eq!(channel.recipients(), vec![b.id()]);

        drop(b);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_guard_outliving_channel_is_harmless() {
        let channel = PointerChannel::new();
        let guard = channel.subscribe();
        drop(channel);
        drop(guard);
    }
}
