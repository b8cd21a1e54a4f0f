//! Redraw lifecycle for one chart bound to one surface.
//!
//! Every trigger (mount, new data, new options, resize) runs the same full
//! clear-and-repaint through [`render_chart`]. Nothing is diffed or cached
//! between passes.

use crate::error::Result;
use crate::render::{render_chart, Surface};
use crate::types::{ChartOptions, Dataset};

/// Where a controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No surface attached.
    #[default]
    Unmounted,
    /// Surface attached but the current dataset is not on it: nothing has
    /// been drawn yet, the last pass failed, or the dataset is empty. In the
    /// last two cases the previous frame, if any, is left on the surface.
    Mounted,
    /// The current dataset is on the surface.
    Rendered,
}

/// Owns a surface and redraws the chart whenever its inputs change.
#[derive(Debug)]
pub struct ChartController<S: Surface> {
    options: ChartOptions,
    dataset: Dataset,
    surface: Option<S>,
    state: ControllerState,
}

impl<S: Surface> Default for ChartController<S> {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl<S: Surface> ChartController<S> {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            dataset: Dataset::default(),
            surface: None,
            state: ControllerState::Unmounted,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Attach `surface` and draw the current dataset, if any.
    ///
    /// A surface that was already attached is replaced and dropped.
    pub fn mount(&mut self, surface: S) -> Result<()> {
        self.surface = Some(surface);
        self.state = ControllerState::Mounted;
        self.render()
    }

    /// Replace the dataset and redraw when mounted.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Result<()> {
        self.dataset = dataset;
        self.render()
    }

    /// Replace the options and redraw when mounted.
    pub fn set_options(&mut self, options: ChartOptions) -> Result<()> {
        self.options = options;
        self.render()
    }

    /// Resize the surface to the container's new logical size and redraw.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!(width, height, "resize ignored, no surface mounted");
            return Ok(());
        };
        surface.resize(width, height);
        self.render()
    }

    /// Run one full pass with the current dataset and options.
    ///
    /// A data error aborts the pass and leaves the controller `Mounted`.
    pub fn render(&mut self) -> Result<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        if self.dataset.is_empty() {
            self.state = ControllerState::Mounted;
            return Ok(());
        }

        match render_chart(&self.dataset, surface, &self.options) {
            Ok(()) => {
                self.state = ControllerState::Rendered;
                Ok(())
            }
            Err(e) => {
                self.state = ControllerState::Mounted;
                Err(e)
            }
        }
    }

    /// Detach and hand back the surface.
    pub fn unmount(&mut self) -> Option<S> {
        self.state = ControllerState::Unmounted;
        self.surface.take()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::error::{ChartError, DataError};
    use crate::render::{CommandRecorder, DrawCommand};
    use crate::types::{ChartType, Rgba, Series};

    fn revenue() -> Dataset {
        Dataset::new(
            ChartType::Bar,
            vec!["Q1".to_string(), "Q2".to_string()],
            vec![Series::new(
                "Revenue",
                vec![30_000.0, 60_000.0],
                Rgba::new(33, 150, 243),
            )],
        )
    }

    #[test]
    fn test_lifecycle_states() {
        let mut controller = ChartController::new(ChartOptions::default());
        assert_eq!(controller.state(), ControllerState::Unmounted);

        controller.set_dataset(revenue()).unwrap();
        assert_eq!(controller.state(), ControllerState::Unmounted);

        controller.mount(CommandRecorder::new(400.0, 300.0)).unwrap();
        assert_eq!(controller.state(), ControllerState::Rendered);

        let surface = controller.unmount().unwrap();
        assert!(!surface.is_empty());
        assert_eq!(controller.state(), ControllerState::Unmounted);
        assert!(controller.surface().is_none());
    }

    #[test]
    fn test_mount_without_data_stays_mounted() {
        let mut controller = ChartController::default();
        controller.mount(CommandRecorder::new(400.0, 300.0)).unwrap();
        assert_eq!(controller.state(), ControllerState::Mounted);
        assert!(controller.surface().unwrap().is_empty());
    }

    #[test]
    fn test_resize_redraws_at_new_size() {
        let mut controller = ChartController::default();
        controller.mount(CommandRecorder::new(400.0, 300.0)).unwrap();
        controller.set_dataset(revenue()).unwrap();
        let before: Vec<_> = controller.surface().unwrap().rects().collect();

        controller.resize(800.0, 600.0).unwrap();
        let surface = controller.surface().unwrap();
        assert_eq!(surface.size(), (800.0, 600.0));
        let after: Vec<_> = surface.rects().collect();
        assert_eq!(before.len(), after.len());
        assert!(after[1].height > before[1].height);
        assert!(matches!(
            surface.commands().first(),
            Some(DrawCommand::Clear { .. })
        ));
    }

    #[test]
    fn test_data_error_is_returned() {
        let mut controller = ChartController::default();
        controller.mount(CommandRecorder::new(400.0, 300.0)).unwrap();
        controller.set_dataset(revenue()).unwrap();

        let mut broken = revenue();
        broken.series[0].values[1] = f64::NAN;
        let err = controller.set_dataset(broken).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Data(DataError::NonFinite { index: 1, .. })
        ));
        assert_eq!(controller.state(), ControllerState::Mounted);
        // The failed pass never reached the surface.
        assert!(!controller.surface().unwrap().is_empty());
    }

    #[test]
    fn test_empty_dataset_keeps_previous_frame() {
        let mut controller = ChartController::default();
        controller.mount(CommandRecorder::new(400.0, 300.0)).unwrap();
        controller.set_dataset(revenue()).unwrap();
        let frame = controller.surface().unwrap().commands().to_vec();

        controller.set_dataset(Dataset::default()).unwrap();
        assert_eq!(controller.state(), ControllerState::Mounted);
        assert_eq!(controller.surface().unwrap().commands(), frame.as_slice());
    }

    #[test]
    fn test_resize_while_unmounted_is_ignored() {
        let mut controller: ChartController<CommandRecorder> = ChartController::default();
        controller.resize(100.0, 100.0).unwrap();
        assert_eq!(controller.state(), ControllerState::Unmounted);
    }
}
