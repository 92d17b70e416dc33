//! End-to-end tests for worker rendering and the conversion pipeline.
//!
//! These tests verify:
//! - Submitted jobs render off the caller's thread
//! - A newer submission cancels the older one
//! - Precondition failures travel back through the worker
//! - The converter drives binarize + render in one call

use symbol_art::error::{PoolKind, PreconditionError};
use symbol_art::offload::{OffloadError, OffloadRunner, RenderJob};
use symbol_art::output::{OutputPanel, NOT_COMPUTED};
use symbol_art::pipeline::{ConvertError, Converter, RenderSettings};
use symbol_art::raster::{Raster, Threshold};
use symbol_art::symbols::{Orientation, SymbolPool};
use unicode_segmentation::UnicodeSegmentation;

fn two_by_one() -> Raster {
    let mut raster = Raster::new(2, 1);
    raster.set_gray(0, 0, 0);
    raster.set_gray(1, 0, 255);
    raster
}

fn squares_job(binary: Raster, orientation: Orientation) -> RenderJob {
    RenderJob::new(
        binary,
        SymbolPool::from_text("□"),
        SymbolPool::from_text("■"),
        orientation,
    )
}

fn square_settings() -> RenderSettings {
    RenderSettings {
        threshold: Threshold::from(100),
        orientation: Orientation::Upright,
        light: SymbolPool::from_text("□"),
        dark: SymbolPool::from_text("■"),
    }
}

// ==================== Runner Tests ====================

#[tokio::test]
async fn test_submit_renders_on_worker() {
    let mut runner = OffloadRunner::new();
    let handle = runner.submit(squares_job(two_by_one(), Orientation::Upright));
    assert_eq!(handle.wait().await, Ok(vec!["■□".to_string()]));
}

#[tokio::test]
async fn test_submit_turned() {
    let mut runner = OffloadRunner::new();
    let handle = runner.submit(squares_job(two_by_one(), Orientation::Turned));
    assert_eq!(
        handle.wait().await,
        Ok(vec!["■".to_string(), "□".to_string()])
    );
}

#[tokio::test]
async fn test_resubmit_cancels_previous() {
    let mut runner = OffloadRunner::new();
    let large = Raster::new(1500, 1500);

    let first = runner.submit(squares_job(large, Orientation::Turned));
    let second = runner.submit(squares_job(two_by_one(), Orientation::Upright));

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert_eq!(runner.current_id(), Some(second.id()));

    let err = first.wait().await.unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(second.wait().await, Ok(vec!["■□".to_string()]));
}

#[tokio::test]
async fn test_many_resubmits_only_last_resolves() {
    let mut runner = OffloadRunner::new();
    let mut handles = Vec::new();
    for _ in 0..5 {
        handles.push(runner.submit(squares_job(two_by_one(), Orientation::Upright)));
    }

    let last = handles.pop().unwrap();
    for handle in handles {
        assert_eq!(handle.wait().await, Err(OffloadError::Cancelled));
    }
    assert!(last.wait().await.is_ok());
}

#[tokio::test]
async fn test_empty_pool_reported_through_worker() {
    let mut runner = OffloadRunner::new();
    let job = RenderJob::new(
        two_by_one(),
        SymbolPool::from_text("□"),
        SymbolPool::default(),
        Orientation::Upright,
    );
    let result = runner.submit(job).wait().await;
    assert!(!result.as_ref().unwrap_err().is_cancelled());
    assert_eq!(
        result,
        Err(OffloadError::Precondition(PreconditionError::EmptySymbolPool(
            PoolKind::Dark
        )))
    );
}

#[test]
fn test_wait_blocking_outside_runtime() {
    let mut runner = OffloadRunner::new();
    let handle = runner.submit(squares_job(two_by_one(), Orientation::Upright));
    assert_eq!(handle.wait_blocking(), Ok(vec!["■□".to_string()]));
}

// ==================== Converter Tests ====================

#[tokio::test]
async fn test_convert_without_image() {
    let mut converter = Converter::new(square_settings());
    assert_eq!(converter.convert().await, Err(ConvertError::NotLoaded));
}

#[tokio::test]
async fn test_convert_example_image() {
    let mut converter = Converter::new(square_settings());
    converter.set_source(two_by_one());
    assert_eq!(converter.convert().await, Ok(vec!["■□".to_string()]));

    converter.set_orientation(Orientation::Turned);
    assert_eq!(
        converter.convert().await,
        Ok(vec!["■".to_string(), "□".to_string()])
    );
}

#[tokio::test]
async fn test_convert_threshold_change_rebuilds_binary() {
    let mut source = Raster::new(1, 1);
    source.set_gray(0, 0, 150);

    let mut converter = Converter::new(square_settings());
    converter.set_source(source);
    assert_eq!(converter.convert().await, Ok(vec!["□".to_string()]));

    converter.set_threshold(Threshold::from(150));
    assert!(converter.binary().is_none());
    assert_eq!(converter.convert().await, Ok(vec!["■".to_string()]));
}

#[tokio::test]
async fn test_convert_empty_pool_shown_in_panel() {
    let mut converter = Converter::new(square_settings());
    converter.set_source(two_by_one());
    converter.set_symbols(SymbolPool::default(), SymbolPool::from_text("■"));

    let mut panel = OutputPanel::new();
    assert_eq!(panel.lines(), &[NOT_COMPUTED.to_string()]);

    let ok = panel.show(converter.convert().await);
    assert!(!ok);
    assert_eq!(
        panel.lines(),
        &["No symbols supplied for light pixels, enter some symbols!".to_string()]
    );
}

#[tokio::test]
async fn test_compute_supersedes_previous_compute() {
    let mut converter = Converter::new(square_settings());
    converter.set_source(Raster::new(800, 800));

    let first = converter.compute().unwrap();
    let second = converter.compute().unwrap();

    assert_eq!(first.wait().await, Err(OffloadError::Cancelled));
    let lines = second.wait().await.unwrap();
    assert_eq!(lines.len(), 800);
    assert!(lines
        .iter()
        .all(|line| line.graphemes(true).count() == 800));
}
