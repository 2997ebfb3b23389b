// SPDX-License-Identifier: MPL-2.0
//! Frame set preloading.
//!
//! Every frame of a [`FrameSet`] is fetched before rotation is enabled, so
//! that swapping frames during a drag never waits on decoding.
//!
//! # Design
//!
//! - **One attempt per frame**: no retries; a single failure fails the batch
//! - **Settle before resolving**: the outcome is decided only once every
//!   attempt (success or failure) has been counted, in any arrival order
//! - **Generations**: each [`AssetPreloader::begin`] bumps a generation token;
//!   results tagged with an older generation are dropped on arrival, so a slow
//!   response for a previously selected variant cannot touch the current batch
//! - **Integer-indexed cache**: decoded frames are kept by internal index
//!
//! The preloader itself does no I/O. Callers dispatch the returned
//! [`FrameRequest`]s (for example with [`fetch_frame`] on the iced runtime)
//! and feed each [`FrameLoaded`] back through [`AssetPreloader::record`].
//! [`AssetPreloader::load`] bundles both halves for callers that simply want
//! to await the outcome.

use super::image::ImageData;
use super::source::FrameSource;
use crate::domain::FrameSet;
use crate::error::{AssetLoadFailure, Error, Result};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::fmt;
use std::sync::Arc;

/// Token identifying one preload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Preload lifecycle of the current frame set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Ready,
    Failed(AssetLoadFailure),
}

impl LoadState {
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, LoadState::Ready)
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// The settled outcome, if the batch has finished.
    #[must_use]
    pub fn outcome(self) -> Option<LoadOutcome> {
        match self {
            LoadState::Ready => Some(LoadOutcome::Ready),
            LoadState::Failed(failure) => Some(LoadOutcome::Failed(failure)),
            LoadState::NotStarted | LoadState::Loading => None,
        }
    }
}

/// Final result of a preload batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    Failed(AssetLoadFailure),
}

impl LoadOutcome {
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, LoadOutcome::Ready)
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetLoad`] when at least one frame failed.
    pub fn into_result(self) -> Result<()> {
        match self {
            LoadOutcome::Ready => Ok(()),
            LoadOutcome::Failed(failure) => Err(Error::AssetLoad(failure)),
        }
    }
}

impl From<LoadOutcome> for LoadState {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Ready => LoadState::Ready,
            LoadOutcome::Failed(failure) => LoadState::Failed(failure),
        }
    }
}

/// One frame to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    pub generation: Generation,
    pub index: usize,
    pub path: String,
}

/// Settled attempt for one frame.
#[derive(Debug, Clone)]
pub struct FrameLoaded {
    pub generation: Generation,
    pub index: usize,
    pub path: String,
    pub result: Result<ImageData>,
}

/// Work produced by [`AssetPreloader::begin`].
#[derive(Debug, Clone)]
pub struct PreloadPlan {
    pub generation: Generation,
    /// One request per frame, in index order.
    pub requests: Vec<FrameRequest>,
    /// Set when the batch settled without any request (empty frame set).
    pub outcome: Option<LoadOutcome>,
}

/// Counters for the batch in flight.
#[derive(Debug)]
struct Batch {
    total: usize,
    loaded: usize,
    errored: usize,
    settled: Vec<bool>,
}

impl Batch {
    fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            errored: 0,
            settled: vec![false; total],
        }
    }

    fn is_complete(&self) -> bool {
        self.loaded + self.errored == self.total
    }
}

/// Tracks the preload of the active frame set.
#[derive(Default)]
pub struct AssetPreloader {
    generation: Generation,
    state: LoadState,
    batch: Option<Batch>,
    frames: Vec<Option<ImageData>>,
}

impl AssetPreloader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new batch for `frame_set`, abandoning any batch in flight.
    ///
    /// Nothing from a previous batch is reused, even if the frame set is the
    /// same one (this is how an explicit retry works).
    pub fn begin(&mut self, frame_set: &FrameSet) -> PreloadPlan {
        self.generation = self.generation.next();
        let generation = self.generation;
        let total = frame_set.frame_count();
        self.frames = vec![None; total];

        if total == 0 {
            self.batch = None;
            self.state = LoadState::Ready;
            tracing::info!(
                %generation,
                base_path = frame_set.base_path(),
                "empty frame set, nothing to preload"
            );
            return PreloadPlan {
                generation,
                requests: Vec::new(),
                outcome: Some(LoadOutcome::Ready),
            };
        }

        self.batch = Some(Batch::new(total));
        self.state = LoadState::Loading;
        tracing::info!(
            %generation,
            base_path = frame_set.base_path(),
            frame_count = total,
            "preloading frame set"
        );

        let requests = (0..total)
            .map(|index| FrameRequest {
                generation,
                index,
                path: frame_set.frame_path(index),
            })
            .collect();

        PreloadPlan {
            generation,
            requests,
            outcome: None,
        }
    }

    /// Accounts for one settled attempt.
    ///
    /// Returns the outcome exactly once, when the last outstanding attempt of
    /// the current generation settles. Results from superseded generations,
    /// out-of-range indices and repeated settlements of an index are ignored.
    pub fn record(&mut self, loaded: FrameLoaded) -> Option<LoadOutcome> {
        if loaded.generation != self.generation {
            tracing::debug!(
                stale = %loaded.generation,
                current = %self.generation,
                path = %loaded.path,
                "dropping result from superseded preload"
            );
            return None;
        }

        let batch = self.batch.as_mut()?;
        match batch.settled.get_mut(loaded.index) {
            Some(settled) if !*settled => *settled = true,
            _ => {
                tracing::warn!(
                    index = loaded.index,
                    path = %loaded.path,
                    "ignoring unexpected frame result"
                );
                return None;
            }
        }

        match loaded.result {
            Ok(image) => {
                batch.loaded += 1;
                if let Some(slot) = self.frames.get_mut(loaded.index) {
                    *slot = Some(image);
                }
            }
            Err(err) => {
                batch.errored += 1;
                tracing::error!(path = %loaded.path, error = %err, "failed to load frame");
            }
        }

        if !batch.is_complete() {
            return None;
        }

        let outcome = if batch.errored == 0 {
            LoadOutcome::Ready
        } else {
            LoadOutcome::Failed(AssetLoadFailure {
                errored: batch.errored,
                total: batch.total,
            })
        };

        tracing::info!(
            generation = %self.generation,
            loaded = batch.loaded,
            errored = batch.errored,
            "preload settled"
        );

        self.batch = None;
        self.state = outcome.into();
        if !outcome.is_ready() {
            self.frames.clear();
        }
        Some(outcome)
    }

    /// Fetches every frame of `frame_set` from `source` and waits for the
    /// batch to settle.
    pub async fn load(&mut self, source: Arc<dyn FrameSource>, frame_set: &FrameSet) -> LoadOutcome {
        let plan = self.begin(frame_set);
        if let Some(outcome) = plan.outcome {
            return outcome;
        }

        let mut pending: FuturesUnordered<_> = plan
            .requests
            .into_iter()
            .map(|request| fetch_frame(Arc::clone(&source), request))
            .collect();

        while let Some(loaded) = pending.next().await {
            if let Some(outcome) = self.record(loaded) {
                return outcome;
            }
        }

        // Each request settles exactly once, so the loop above always returns.
        self.state.outcome().unwrap_or(LoadOutcome::Ready)
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Settled and total attempt counts of the batch in flight.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.batch
            .as_ref()
            .map(|batch| (batch.loaded + batch.errored, batch.total))
    }

    /// Decoded frame at the given internal index.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&ImageData> {
        self.frames.get(index).and_then(Option::as_ref)
    }

    /// Decoded frames in index order. Only complete once the batch is ready.
    pub fn frames(&self) -> impl Iterator<Item = &ImageData> {
        self.frames.iter().flatten()
    }
}

impl fmt::Debug for AssetPreloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetPreloader")
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("progress", &self.progress())
            .field("decoded", &self.frames().count())
            .finish()
    }
}

/// Fetches one asset on the blocking thread pool.
pub async fn fetch_asset(source: Arc<dyn FrameSource>, path: String) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || source.fetch(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Asset task failed: {e}"))))
}

/// Fetches the frame described by `request`.
///
/// Always yields a [`FrameLoaded`], so every request settles.
pub async fn fetch_frame(source: Arc<dyn FrameSource>, request: FrameRequest) -> FrameLoaded {
    let FrameRequest {
        generation,
        index,
        path,
    } = request;
    let result = fetch_asset(source, path.clone()).await;
    FrameLoaded {
        generation,
        index,
        path,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_set(count: usize) -> FrameSet {
        FrameSet::new("/black-matte/", count).unwrap()
    }

    fn ok(request: &FrameRequest) -> FrameLoaded {
        FrameLoaded {
            generation: request.generation,
            index: request.index,
            path: request.path.clone(),
            result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
        }
    }

    fn err(request: &FrameRequest) -> FrameLoaded {
        FrameLoaded {
            generation: request.generation,
            index: request.index,
            path: request.path.clone(),
            result: Err(Error::Io("404".into())),
        }
    }

    #[test]
    fn new_preloader_has_not_started() {
        let preloader = AssetPreloader::new();
        assert_eq!(preloader.state(), LoadState::NotStarted);
        assert!(preloader.progress().is_none());
    }

    #[test]
    fn begin_issues_one_request_per_frame() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(3));

        assert!(plan.outcome.is_none());
        assert_eq!(preloader.state(), LoadState::Loading);
        let paths: Vec<_> = plan.requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/black-matte/1.png", "/black-matte/2.png", "/black-matte/3.png"]
        );
    }

    #[test]
    fn empty_frame_set_is_ready_without_requests() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(0));

        assert!(plan.requests.is_empty());
        assert_eq!(plan.outcome, Some(LoadOutcome::Ready));
        assert_eq!(preloader.state(), LoadState::Ready);
    }

    #[test]
    fn ready_only_after_every_frame_loads() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(3));

        assert_eq!(preloader.record(ok(&plan.requests[2])), None);
        assert_eq!(preloader.record(ok(&plan.requests[0])), None);
        assert_eq!(preloader.progress(), Some((2, 3)));
        assert_eq!(
            preloader.record(ok(&plan.requests[1])),
            Some(LoadOutcome::Ready)
        );
        assert_eq!(preloader.state(), LoadState::Ready);
        assert_eq!(preloader.frames().count(), 3);
        assert!(preloader.frame(2).is_some());
    }

    #[test]
    fn early_failure_waits_for_remaining_attempts() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(3));

        assert_eq!(preloader.record(err(&plan.requests[0])), None);
        assert_eq!(preloader.state(), LoadState::Loading);
        assert_eq!(preloader.record(ok(&plan.requests[1])), None);

        let failure = AssetLoadFailure {
            errored: 1,
            total: 3,
        };
        assert_eq!(
            preloader.record(ok(&plan.requests[2])),
            Some(LoadOutcome::Failed(failure))
        );
        assert_eq!(preloader.state(), LoadState::Failed(failure));
        assert_eq!(preloader.frames().count(), 0);
    }

    #[test]
    fn outcome_is_reported_exactly_once() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(2));

        let mut outcomes = 0;
        for request in &plan.requests {
            if preloader.record(ok(request)).is_some() {
                outcomes += 1;
            }
        }
        // Replays after settlement change nothing.
        for request in &plan.requests {
            if preloader.record(err(request)).is_some() {
                outcomes += 1;
            }
        }
        assert_eq!(outcomes, 1);
        assert_eq!(preloader.state(), LoadState::Ready);
    }

    #[test]
    fn duplicate_result_for_an_index_is_ignored() {
        let mut preloader = AssetPreloader::new();
        let plan = preloader.begin(&frame_set(2));

        assert_eq!(preloader.record(ok(&plan.requests[0])), None);
        assert_eq!(preloader.record(err(&plan.requests[0])), None);
        assert_eq!(preloader.progress(), Some((1, 2)));
        assert_eq!(
            preloader.record(ok(&plan.requests[1])),
            Some(LoadOutcome::Ready)
        );
    }

    #[test]
    fn stale_generation_cannot_affect_current_batch() {
        let mut preloader = AssetPreloader::new();
        let first = preloader.begin(&frame_set(36));
        let second = preloader.begin(&FrameSet::new("/m-package/", 36).unwrap());
        assert!(second.generation > first.generation);

        // Every late result from the abandoned batch fails; none may count.
        for request in &first.requests {
            assert_eq!(preloader.record(err(request)), None);
        }
        assert_eq!(preloader.state(), LoadState::Loading);
        assert_eq!(preloader.progress(), Some((0, 36)));

        let mut outcome = None;
        for request in &second.requests {
            outcome = preloader.record(ok(request)).or(outcome);
        }
        assert_eq!(outcome, Some(LoadOutcome::Ready));
    }

    #[test]
    fn begin_again_restarts_from_scratch() {
        let mut preloader = AssetPreloader::new();
        let set = frame_set(1);
        let plan = preloader.begin(&set);
        preloader.record(err(&plan.requests[0]));
        assert!(preloader.state().is_failed());

        let retry = preloader.begin(&set);
        assert_eq!(preloader.state(), LoadState::Loading);
        assert_eq!(
            preloader.record(ok(&retry.requests[0])),
            Some(LoadOutcome::Ready)
        );
    }

    #[test]
    fn outcome_converts_to_result() {
        assert!(LoadOutcome::Ready.into_result().is_ok());
        let failure = AssetLoadFailure {
            errored: 1,
            total: 2,
        };
        assert!(matches!(
            LoadOutcome::Failed(failure).into_result(),
            Err(Error::AssetLoad(f)) if f == failure
        ));
    }
}
