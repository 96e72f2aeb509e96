//! Bounded frame channel between the capture thread and the GUI.
//!
//! This is the backpressure mechanism of the whole pipeline: the
//! producer never blocks on a slow consumer, and the consumer only
//! ever sees the freshest frames because overflow evicts the oldest
//! packet instead of stalling.

use crate::frame::FramePacket;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// How many packets the display queue holds. Kept tiny so the GUI
/// never renders stale frames.
pub const DISPLAY_QUEUE_DEPTH: usize = 2;

/// Fixed-capacity FIFO queue with drop-oldest overflow policy.
///
/// Both sides are non-blocking: `try_send` either stores the packet or
/// drops a frame, `try_recv` returns immediately. Enqueue and dequeue
/// are atomic with respect to each other.
pub struct FrameChannel {
    queue: Mutex<VecDeque<FramePacket>>,
    capacity: usize,
}

impl FrameChannel {
    /// Creates a channel holding at most `capacity` packets (min 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            capacity: capacity.max(1),
        }
    }

    /// Enqueues a packet without blocking.
    ///
    /// When the queue is full, exactly one oldest packet is evicted
    /// and the enqueue is retried once; if it is still full the packet
    /// is dropped and `false` is returned. Dropping is intentional and
    /// silent: a lost frame is cheaper than a stalled camera loop.
    pub fn try_send(&self, packet: FramePacket) -> bool {
        let mut queue = self.lock();

        if queue.len() < self.capacity {
            queue.push_back(packet);
            return true;
        }

        queue.pop_front();
        if queue.len() < self.capacity {
            queue.push_back(packet);
            true
        } else {
            false
        }
    }

    /// Dequeues the oldest packet, if any. Never blocks.
    pub fn try_recv(&self) -> Option<FramePacket> {
        self.lock().pop_front()
    }

    /// Number of packets currently queued.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no packet is queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards all queued packets. Used when a session stops.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<FramePacket>> {
        // A poisoned queue only means a producer panicked mid-push;
        // the data itself is still a valid deque.
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Mat;

    fn packet(seq: u64) -> FramePacket {
        FramePacket::new(Mat::default(), Vec::new(), 0.0, seq).unwrap()
    }

    #[test]
    fn test_empty_channel_recv_returns_none() {
        let channel = FrameChannel::new(DISPLAY_QUEUE_DEPTH);
        assert!(channel.try_recv().is_none());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_fifo_order_below_capacity() {
        let channel = FrameChannel::new(DISPLAY_QUEUE_DEPTH);
        assert!(channel.try_send(packet(1)));
        assert!(channel.try_send(packet(2)));

        assert_eq!(channel.try_recv().unwrap().seq, 1);
        assert_eq!(channel.try_recv().unwrap().seq, 2);
        assert!(channel.try_recv().is_none());
    }

    #[test]
    fn test_overflow_evicts_oldest_first() {
        let channel = FrameChannel::new(DISPLAY_QUEUE_DEPTH);
        for seq in 1..=3 {
            channel.try_send(packet(seq));
        }

        assert_eq!(channel.len(), 2);
        assert_eq!(channel.try_recv().unwrap().seq, 2);
        assert_eq!(channel.try_recv().unwrap().seq, 3);
    }

    #[test]
    fn test_paused_consumer_keeps_only_two_newest() {
        // Five packets produced faster than consumed: exactly the
        // last two survive, in production order.
        let channel = FrameChannel::new(DISPLAY_QUEUE_DEPTH);
        for seq in 1..=5 {
            channel.try_send(packet(seq));
        }

        assert_eq!(channel.len(), 2);
        assert_eq!(channel.try_recv().unwrap().seq, 4);
        assert_eq!(channel.try_recv().unwrap().seq, 5);
        assert!(channel.try_recv().is_none());
    }

    #[test]
    fn test_clear_discards_everything() {
        let channel = FrameChannel::new(DISPLAY_QUEUE_DEPTH);
        channel.try_send(packet(1));
        channel.try_send(packet(2));

        channel.clear();
        assert!(channel.is_empty());
        assert!(channel.try_recv().is_none());
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let channel = FrameChannel::new(0);
        assert!(channel.try_send(packet(1)));
        assert_eq!(channel.try_recv().unwrap().seq, 1);
    }
}
