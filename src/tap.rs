//! Pass-through stream stage with terminal accounting.
//!
//! [`FoldTap`] wraps a fallible stream, forwards every item downstream
//! unchanged, and folds the `Ok` items into an accumulator as they pass.
//! When the stream reaches a terminal state the accumulated value is
//! reported through a callback:
//!
//! - natural end of stream → `on_complete(acc)`
//! - the wrapper is dropped before the end (downstream gave up) →
//!   `on_complete(partial_acc)`
//! - upstream error → `on_failure(&err)`, and the error is forwarded
//!
//! `on_complete` fires at most once across all paths. The stage is
//! strictly demand-driven: one poll in, at most one item out, no
//! buffering and no read-ahead.
//!
//! The stage knows nothing about HTTP or bytes; the access-log
//! middleware specializes it to a `u64` byte count, but any element and
//! accumulator types work.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;

/// Stream wrapper that folds passing items and reports the result once
/// the stream terminates.
pub struct FoldTap<S, B, F, C, E>
where
    C: FnOnce(B),
{
    inner: S,
    acc: Option<B>,
    combine: F,
    on_complete: Option<C>,
    on_failure: E,
}

impl<S, B, F, C, E> FoldTap<S, B, F, C, E>
where
    C: FnOnce(B),
{
    /// Wrap `inner`, starting the accumulator at `zero`.
    ///
    /// `combine` folds each forwarded item into the accumulator;
    /// `on_complete` receives the final (or partial, on cancellation)
    /// value; `on_failure` observes upstream errors before they are
    /// forwarded.
    pub fn new(inner: S, zero: B, combine: F, on_complete: C, on_failure: E) -> Self {
        Self {
            inner,
            acc: Some(zero),
            combine,
            on_complete: Some(on_complete),
            on_failure,
        }
    }

    /// Fire the completion callback if it has not fired yet.
    fn fire_complete(&mut self) {
        if let (Some(on_complete), Some(acc)) = (self.on_complete.take(), self.acc.take()) {
            on_complete(acc);
        }
    }

    /// Disarm the completion callback after a failure. A failed stream
    /// never completes, so a later drop must not report a partial value.
    fn disarm(&mut self) {
        self.on_complete = None;
        self.acc = None;
    }
}

impl<S, T, Err, B, F, C, E> Stream for FoldTap<S, B, F, C, E>
where
    S: Stream<Item = Result<T, Err>> + Unpin,
    B: Unpin,
    F: FnMut(B, &T) -> B + Unpin,
    C: FnOnce(B) + Unpin,
    E: FnMut(&Err) + Unpin,
{
    type Item = Result<T, Err>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(item))) => {
                if let Some(acc) = this.acc.take() {
                    this.acc = Some((this.combine)(acc, &item));
                }
                Poll::Ready(Some(Ok(item)))
            }
            Poll::Ready(Some(Err(err))) => {
                // Not gated by the completion flag: every upstream error
                // is observed, even one arriving after completion.
                (this.on_failure)(&err);
                this.disarm();
                Poll::Ready(Some(Err(err)))
            }
            Poll::Ready(None) => {
                this.fire_complete();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, B, F, C, E> Drop for FoldTap<S, B, F, C, E>
where
    C: FnOnce(B),
{
    fn drop(&mut self) {
        // Dropped before the natural end: downstream cancelled. Report
        // whatever was accumulated so far, unless a terminal event
        // already fired.
        self.fire_complete();
    }
}
