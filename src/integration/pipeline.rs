//! TrackerPipeline for feeding tracking changes into the dispatcher.

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, unbounded};

use crate::error::FeedError;
use crate::tracker::{ChangeBatch, ChangeReport, MarkerDispatcher};

use super::{Renderer, UiShell};

/// Create a connected feed/subscription pair.
///
/// The feed is handed to the tracking source; the subscription stays with
/// whoever applies the batches. Dropping the subscription disconnects the feed.
///
/// The feed is unbounded: batches that are never pumped accumulate without
/// limit. Use [`bounded_change_feed`] when the consumer may stall.
pub fn change_feed() -> (ChangeFeed, Subscription) {
    let (sender, receiver) = unbounded();
    (ChangeFeed { sender }, Subscription { receiver })
}

/// Like [`change_feed`], but holding at most `capacity` unread batches.
///
/// Publishing into a full feed never blocks; it fails with [`FeedError::Full`]
/// and the batch is dropped.
pub fn bounded_change_feed(capacity: usize) -> (ChangeFeed, Subscription) {
    let (sender, receiver) = bounded(capacity);
    (ChangeFeed { sender }, Subscription { receiver })
}

/// Producer end used by a tracking source to push change batches.
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: Sender<ChangeBatch>,
}

impl ChangeFeed {
    /// Push one frame's changes.
    pub fn publish(&self, batch: ChangeBatch) -> Result<(), FeedError> {
        self.sender.try_send(batch).map_err(|err| match err {
            TrySendError::Full(_) => FeedError::Full,
            TrySendError::Disconnected(_) => FeedError::Disconnected,
        })
    }
}

/// Receiving end of a [`ChangeFeed`]. Batches come out in publish order.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<ChangeBatch>,
}

impl Subscription {
    /// Next pending batch, if one has been published.
    pub fn try_next(&self) -> Option<ChangeBatch> {
        self.receiver.try_recv().ok()
    }

    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Release the subscription; later publishes fail with `Disconnected`.
    pub fn cancel(self) {
        drop(self.receiver);
    }
}

/// Anything that pushes tracking change batches, such as a camera-driven
/// image tracker.
pub trait TrackingSource {
    /// Start delivering batches into `feed`, replacing any previous feed.
    fn attach(&mut self, feed: ChangeFeed);
}

/// A combined runner that bundles a tracking subscription with the dispatcher.
///
/// Batches are applied one at a time, in order, from a single `&mut self`
/// call, so the dispatcher never sees overlapping deliveries.
pub struct TrackerPipeline<R: Renderer, U: UiShell> {
    subscription: Subscription,
    dispatcher: MarkerDispatcher<R, U>,
}

impl<R: Renderer, U: UiShell> TrackerPipeline<R, U> {
    /// Subscribe to `source` and route its batches to `dispatcher`.
    pub fn new<S: TrackingSource + ?Sized>(source: &mut S, dispatcher: MarkerDispatcher<R, U>) -> Self {
        let (feed, subscription) = change_feed();
        source.attach(feed);
        Self::with_subscription(subscription, dispatcher)
    }

    /// Use an existing subscription.
    pub fn with_subscription(subscription: Subscription, dispatcher: MarkerDispatcher<R, U>) -> Self {
        Self {
            subscription,
            dispatcher,
        }
    }

    /// Apply every pending batch and return their reports in order.
    pub fn pump(&mut self) -> Vec<ChangeReport> {
        let mut reports = Vec::new();
        while let Some(batch) = self.subscription.try_next() {
            reports.push(self.dispatcher.on_change(&batch));
        }
        reports
    }

    /// Forward an info button click.
    pub fn button_clicked(&mut self) {
        self.dispatcher.button_clicked();
    }

    /// Get a reference to the underlying dispatcher.
    pub fn dispatcher(&self) -> &MarkerDispatcher<R, U> {
        &self.dispatcher
    }

    /// Get a mutable reference to the underlying dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut MarkerDispatcher<R, U> {
        &mut self.dispatcher
    }

    /// Tear down the subscription and hand back the dispatcher.
    pub fn into_dispatcher(self) -> MarkerDispatcher<R, U> {
        self.dispatcher
    }
}
