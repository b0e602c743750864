// Metrics hooks for the matching layer.
//
// Callers install a global `MatchMetrics` implementation via
// [`set_match_metrics`], then `Matcher` reports per-frame latency, hand
// count, and the top-scoring gesture for each call to
// [`Matcher::match_frame`](crate::engine::Matcher::match_frame). This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::gesture::GestureType;
use crate::hand::WhichHand;

/// Metrics observer for frame classification.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one classified frame.
    ///
    /// `which` is the hand selector the caller used, `latency` the
    /// wall-clock duration of the classification, `hands_tracked` the
    /// number of hands present in the frame, and `best` the top-scoring
    /// gesture with its confidence, if any slot rose above zero.
    fn record_match(
        &self,
        which: WhichHand,
        latency: Duration,
        hands_tracked: usize,
        best: Option<(GestureType, f32)>,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// Typically called once during application startup so every `Matcher`
/// shares the same metrics backend. The recorder never influences
/// classification output.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
