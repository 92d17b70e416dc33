//! Conversion pipeline: source image -> binary image -> symbol lines.
//!
//! [`Converter`] keeps the loaded source raster and its binary version
//! around so a threshold, orientation or symbol change only re-runs the
//! stages that depend on it.

use crate::acquire::{AcquireError, ImageLoader, ImageSource};
use crate::error::PreconditionError;
use crate::offload::{OffloadError, OffloadRunner, RenderHandle, RenderJob};
use crate::raster::{binarize, Raster, Threshold};
use crate::symbols::{Orientation, SymbolPool, SymbolPreset};

/// Errors surfaced by the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Image not loaded!")]
    NotLoaded,

    /// Opaque message from image acquisition
    #[error("{0}")]
    Acquisition(String),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Execution(OffloadError),
}

impl From<AcquireError> for ConvertError {
    fn from(e: AcquireError) -> Self {
        ConvertError::Acquisition(e.to_string())
    }
}

impl From<OffloadError> for ConvertError {
    fn from(e: OffloadError) -> Self {
        match e {
            OffloadError::Precondition(p) => ConvertError::Precondition(p),
            other => ConvertError::Execution(other),
        }
    }
}

/// Everything that shapes the rendered output besides the image itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub threshold: Threshold,
    pub orientation: Orientation,
    pub light: SymbolPool,
    pub dark: SymbolPool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let (light, dark) = SymbolPreset::default().pools();
        Self {
            threshold: Threshold::default(),
            orientation: Orientation::default(),
            light,
            dark,
        }
    }
}

/// Headless converter owning the current images and the render runner.
#[derive(Debug, Default)]
pub struct Converter {
    settings: RenderSettings,
    runner: OffloadRunner,
    source: Option<Raster>,
    binary: Option<Raster>,
}

impl Converter {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Replace the source image. The binary image is rebuilt on next use.
    pub fn set_source(&mut self, raster: Raster) {
        log::info!("Source image set: {}x{}", raster.width(), raster.height());
        self.source = Some(raster);
        self.binary = None;
    }

    /// Load `source` with `loader` and make it the current image.
    ///
    /// On failure the previous image is kept.
    pub async fn load(
        &mut self,
        loader: &ImageLoader,
        source: &ImageSource,
    ) -> Result<(), ConvertError> {
        let raster = loader.load(source).await?;
        self.set_source(raster);
        Ok(())
    }

    pub fn source(&self) -> Option<&Raster> {
        self.source.as_ref()
    }

    /// Binary image built for the current threshold, if any.
    pub fn binary(&self) -> Option<&Raster> {
        self.binary.as_ref()
    }

    pub fn set_threshold(&mut self, threshold: Threshold) {
        if self.settings.threshold != threshold {
            self.settings.threshold = threshold;
            self.binary = None;
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.settings.orientation = orientation;
    }

    pub fn set_symbols(&mut self, light: SymbolPool, dark: SymbolPool) {
        self.settings.light = light;
        self.settings.dark = dark;
    }

    /// Rebuild the binary image from the source at the current threshold.
    ///
    /// # Errors
    /// `ConvertError::NotLoaded` when no source image was set.
    pub fn update_binary(&mut self) -> Result<&Raster, ConvertError> {
        let source = self.source.as_ref().ok_or(ConvertError::NotLoaded)?;
        log::info!("Update binary image {:?}", source.size());
        let binary = self.binary.insert(binarize(source, self.settings.threshold));
        Ok(&*binary)
    }

    /// Submit the binary image for rendering, cancelling any earlier one.
    ///
    /// The binary image is rebuilt first if the threshold changed since.
    pub fn compute(&mut self) -> Result<RenderHandle, ConvertError> {
        if self.binary.is_none() {
            self.update_binary()?;
        }
        let binary = self.binary.clone().ok_or(ConvertError::NotLoaded)?;
        let job = RenderJob::new(
            binary,
            self.settings.light.clone(),
            self.settings.dark.clone(),
            self.settings.orientation,
        );
        Ok(self.runner.submit(job))
    }

    /// Binarize and render the current image, waiting for the lines.
    pub async fn convert(&mut self) -> Result<Vec<String>, ConvertError> {
        self.update_binary()?;
        let handle = self.compute()?;
        Ok(handle.wait().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PoolKind;

    fn two_by_one() -> Raster {
        let mut raster = Raster::new(2, 1);
        raster.set_gray(0, 0, 0);
        raster.set_gray(1, 0, 255);
        raster
    }

    fn squares_settings() -> RenderSettings {
        RenderSettings {
            threshold: Threshold::from(100),
            orientation: Orientation::Upright,
            light: SymbolPool::from_text("□"),
            dark: SymbolPool::from_text("■"),
        }
    }

    #[tokio::test]
    async fn test_convert_without_source_fails() {
        let mut converter = Converter::default();
        assert_eq!(converter.convert().await, Err(ConvertError::NotLoaded));
        assert_eq!(ConvertError::NotLoaded.to_string(), "Image not loaded!");
    }

    #[tokio::test]
    async fn test_convert_two_by_one() {
        let mut converter = Converter::new(squares_settings());
        converter.set_source(two_by_one());
        assert_eq!(converter.convert().await.unwrap(), vec!["■□".to_string()]);

        converter.set_orientation(Orientation::Turned);
        assert_eq!(
            converter.convert().await.unwrap(),
            vec!["■".to_string(), "□".to_string()]
        );
    }

    #[tokio::test]
    async fn test_threshold_change_rebuilds_binary() {
        let mut converter = Converter::new(squares_settings());
        converter.set_source(two_by_one());
        converter.update_binary().unwrap();
        assert_eq!(converter.binary().unwrap().get_gray(1, 0), 255);

        converter.set_threshold(Threshold::from(255));
        assert!(converter.binary().is_none());
        let lines = converter.compute().unwrap().wait().await.unwrap();
        assert_eq!(lines, vec!["■■".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_pool_is_precondition_error() {
        let mut converter = Converter::new(squares_settings());
        converter.set_source(two_by_one());
        converter.set_symbols(SymbolPool::default(), SymbolPool::from_text("■"));
        assert_eq!(
            converter.convert().await,
            Err(ConvertError::Precondition(PreconditionError::EmptySymbolPool(
                PoolKind::Light
            )))
        );
    }

    #[tokio::test]
    async fn test_recompute_cancels_previous() {
        let mut converter = Converter::new(squares_settings());
        converter.set_source(two_by_one());
        let first = converter.compute().unwrap();
        let second = converter.compute().unwrap();
        assert_eq!(first.wait().await, Err(OffloadError::Cancelled));
        assert!(second.wait().await.is_ok());
    }

    #[test]
    fn test_offload_errors_map_to_convert_errors() {
        let crashed: ConvertError = OffloadError::WorkerCrashed.into();
        assert_eq!(crashed, ConvertError::Execution(OffloadError::WorkerCrashed));
        let pre: ConvertError =
            OffloadError::Precondition(PreconditionError::ThresholdOutOfRange(300)).into();
        assert!(matches!(pre, ConvertError::Precondition(_)));
    }
}
