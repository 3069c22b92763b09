use serde::{Deserialize, Serialize};
use themekit_common::ExtractError;

/// Tuning knobs for image palette extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Colors returned per image.
    pub num_colors: usize,
    /// Longest edge after downscaling, in pixels.
    pub max_dimension: u32,
    /// Sample one pixel out of every `sample_stride`.
    pub sample_stride: usize,
    /// Fixed number of k-means rounds.
    pub iterations: usize,
    /// Clusters computed per requested color before the saturation cut.
    pub cluster_multiplier: usize,
    /// Pixels with alpha below this are ignored.
    pub min_alpha: u8,
    /// Pixels at or below this relative luminance are ignored.
    pub min_luminance: f64,
    /// Pixels at or above this relative luminance are ignored.
    pub max_luminance: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            num_colors: 6,
            max_dimension: 100,
            sample_stride: 4,
            iterations: 15,
            cluster_multiplier: 2,
            min_alpha: 128,
            min_luminance: 0.05,
            max_luminance: 0.95,
        }
    }
}

impl ExtractOptions {
    pub fn with_num_colors(mut self, num_colors: usize) -> Self {
        self.num_colors = num_colors;
        self
    }

    /// Clusters computed before the saturation cut. Saturates instead of
    /// overflowing; `check` rejects options where that would happen.
    pub fn cluster_count(&self) -> usize {
        self.num_colors.saturating_mul(self.cluster_multiplier)
    }

    /// Reject options that would make extraction meaningless.
    pub fn check(&self) -> Result<(), ExtractError> {
        let mut problems = Vec::new();
        if self.num_colors == 0 {
            problems.push("num_colors must be at least 1".to_string());
        }
        if self.max_dimension == 0 {
            problems.push("max_dimension must be at least 1".to_string());
        }
        if self.sample_stride == 0 {
            problems.push("sample_stride must be at least 1".to_string());
        }
        if self.cluster_multiplier == 0 {
            problems.push("cluster_multiplier must be at least 1".to_string());
        }
        if self.num_colors.checked_mul(self.cluster_multiplier).is_none() {
            problems.push(format!(
                "num_colors ({}) * cluster_multiplier ({}) overflows",
                self.num_colors, self.cluster_multiplier
            ));
        }
        if self.min_luminance >= self.max_luminance {
            problems.push(format!(
                "min_luminance ({}) must be below max_luminance ({})",
                self.min_luminance, self.max_luminance
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ExtractError::InvalidOptions(problems.join("; ")))
        }
    }
}
