// SPDX-License-Identifier: MPL-2.0
use iced_turntable::domain::FrameSet;
use iced_turntable::error::{AssetLoadFailure, Error, Result};
use iced_turntable::media::{
    fetch_frame, AssetPreloader, FrameSource, FsFrameSource, ImageData, LoadOutcome, LoadState,
};
use image_rs::{Rgba, RgbaImage};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

/// In-memory source producing a `n x 1` image for frame file `n`.
#[derive(Default)]
struct ScriptedSource {
    failing: HashSet<usize>,
    /// Later frames answer faster when set.
    reverse_latency: bool,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn failing(indices: &[usize]) -> Self {
        Self {
            failing: indices.iter().copied().collect(),
            ..Self::default()
        }
    }
}

fn file_index(asset_path: &str) -> usize {
    Path::new(asset_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse().ok())
        .unwrap_or(0)
}

impl FrameSource for ScriptedSource {
    fn fetch(&self, asset_path: &str) -> Result<ImageData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let file_index = file_index(asset_path);
        if self.reverse_latency {
            std::thread::sleep(Duration::from_millis(40_u64.saturating_sub(file_index as u64 * 5)));
        }
        if self.failing.contains(&(file_index - 1)) {
            return Err(Error::Io(format!("{asset_path}: not found")));
        }
        let width = file_index as u32;
        Ok(ImageData::from_rgba(width, 1, vec![0; width as usize * 4]))
    }
}

#[tokio::test]
async fn every_frame_decoded_resolves_ready() {
    let source = Arc::new(ScriptedSource::default());
    let frame_set = FrameSet::new("/black-matte/", 36).unwrap();
    let mut preloader = AssetPreloader::new();

    let outcome = preloader.load(source.clone(), &frame_set).await;

    assert_eq!(outcome, LoadOutcome::Ready);
    assert_eq!(preloader.state(), LoadState::Ready);
    assert_eq!(source.calls.load(Ordering::SeqCst), 36);
    assert_eq!(preloader.frames().count(), 36);
}

#[tokio::test]
async fn frames_are_cached_by_index_not_arrival_order() {
    let source = Arc::new(ScriptedSource {
        reverse_latency: true,
        ..ScriptedSource::default()
    });
    let frame_set = FrameSet::new("/m-package/", 8).unwrap();
    let mut preloader = AssetPreloader::new();

    let outcome = preloader.load(source, &frame_set).await;

    assert!(outcome.is_ready());
    for index in 0..8 {
        let frame = preloader.frame(index).expect("frame decoded");
        assert_eq!(frame.width as usize, index + 1);
    }
}

#[tokio::test]
async fn any_failure_fails_the_batch_after_all_attempts() {
    let source = Arc::new(ScriptedSource::failing(&[3, 17]));
    let frame_set = FrameSet::new("/style-sport/", 36).unwrap();
    let mut preloader = AssetPreloader::new();

    let outcome = preloader.load(source.clone(), &frame_set).await;

    let failure = AssetLoadFailure {
        errored: 2,
        total: 36,
    };
    assert_eq!(outcome, LoadOutcome::Failed(failure));
    assert_eq!(preloader.state(), LoadState::Failed(failure));
    // One attempt per frame, no retries.
    assert_eq!(source.calls.load(Ordering::SeqCst), 36);
    assert!(matches!(
        outcome.into_result(),
        Err(Error::AssetLoad(AssetLoadFailure { errored: 2, .. }))
    ));
}

#[tokio::test]
async fn every_frame_failing_still_settles() {
    let all: Vec<usize> = (0..5).collect();
    let source = Arc::new(ScriptedSource::failing(&all));
    let frame_set = FrameSet::new("/black-matte/", 5).unwrap();
    let mut preloader = AssetPreloader::new();

    let outcome = preloader.load(source, &frame_set).await;

    assert_eq!(
        outcome,
        LoadOutcome::Failed(AssetLoadFailure {
            errored: 5,
            total: 5
        })
    );
}

#[tokio::test]
async fn empty_frame_set_is_ready_without_fetching() {
    let source = Arc::new(ScriptedSource::default());
    let frame_set = FrameSet::new("/black-matte/", 0).unwrap();
    let mut preloader = AssetPreloader::new();

    let outcome = preloader.load(source.clone(), &frame_set).await;

    assert_eq!(outcome, LoadOutcome::Ready);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn results_of_a_superseded_batch_are_ignored() {
    let source: Arc<dyn FrameSource> = Arc::new(ScriptedSource::failing(&[0]));
    let set_a = FrameSet::new("/black-matte/", 4).unwrap();
    let set_b = FrameSet::new("/m-package/", 4).unwrap();
    let mut preloader = AssetPreloader::new();

    let plan_a = preloader.begin(&set_a);
    let plan_b = preloader.begin(&set_b);
    assert!(plan_b.generation > plan_a.generation);

    // A's failing frame arrives after B started: it must not fail B.
    for request in plan_a.requests {
        let loaded = fetch_frame(source.clone(), request).await;
        assert_eq!(preloader.record(loaded), None);
    }
    assert_eq!(preloader.state(), LoadState::Loading);

    let ok_source: Arc<dyn FrameSource> = Arc::new(ScriptedSource::default());
    let mut outcome = None;
    for request in plan_b.requests {
        let loaded = fetch_frame(ok_source.clone(), request).await;
        outcome = preloader.record(loaded).or(outcome);
    }
    assert_eq!(outcome, Some(LoadOutcome::Ready));
}

#[tokio::test]
async fn retry_after_failure_starts_fresh() {
    let frame_set = FrameSet::new("/black-matte/", 6).unwrap();
    let mut preloader = AssetPreloader::new();

    let failed = preloader
        .load(Arc::new(ScriptedSource::failing(&[2])), &frame_set)
        .await;
    assert!(!failed.is_ready());
    let first_generation = preloader.generation();

    let retried = preloader
        .load(Arc::new(ScriptedSource::default()), &frame_set)
        .await;
    assert!(retried.is_ready());
    assert!(preloader.generation() > first_generation);
    assert_eq!(preloader.frames().count(), 6);
}

fn write_frames(dir: &Path, count: usize) {
    fs::create_dir_all(dir).expect("failed to create variant dir");
    for file_index in 1..=count {
        RgbaImage::from_pixel(2, 2, Rgba([file_index as u8, 0, 0, 255]))
            .save(dir.join(format!("{file_index}.png")))
            .expect("failed to write frame");
    }
}

#[tokio::test]
async fn filesystem_source_loads_variant_directory() {
    let root = tempdir().expect("failed to create temp dir");
    write_frames(&root.path().join("black-matte"), 4);

    let source = Arc::new(FsFrameSource::new(root.path()));
    let frame_set = FrameSet::new("/black-matte/", 4).unwrap();
    let mut preloader = AssetPreloader::new();

    assert_eq!(preloader.load(source, &frame_set).await, LoadOutcome::Ready);
    assert_eq!(preloader.frame(3).map(|f| f.width), Some(2));
}

#[tokio::test]
async fn filesystem_source_missing_frame_fails_batch() {
    let root = tempdir().expect("failed to create temp dir");
    let variant = root.path().join("m-package");
    write_frames(&variant, 4);
    fs::remove_file(variant.join("3.png")).expect("failed to remove frame");

    let source = Arc::new(FsFrameSource::new(root.path()));
    let frame_set = FrameSet::new("/m-package/", 4).unwrap();
    let mut preloader = AssetPreloader::new();

    assert_eq!(
        preloader.load(source, &frame_set).await,
        LoadOutcome::Failed(AssetLoadFailure {
            errored: 1,
            total: 4
        })
    );
}
