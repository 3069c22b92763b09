//! Dominant-color extraction from raster images.
//!
//! The image is downscaled, sparsely sampled, filtered (transparent,
//! near-black and near-white pixels are dropped) and clustered with
//! over-provisioned k-means. The most saturated centroids win and are
//! returned brightest first.
//!
//! Centroid seeding is random, so two runs over the same image can differ
//! slightly. Pass a seeded RNG for reproducible output.

mod kmeans;
mod options;

#[cfg(test)]
mod tests;

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use rand::Rng;
use themekit_common::{ColorPalette, ExtractError, HexColor, PaletteColors, Rgb};
use tracing::debug;

use crate::contrast::luminance;
use crate::convert::rgb_to_hex;
use crate::roles::{assign_image_roles, LuminanceRanking};

pub use kmeans::kmeans;
pub use options::ExtractOptions;

/// Colors produced by one extraction, brightest first.
pub type ExtractedColorSet = Vec<HexColor>;

/// Cluster already-decoded RGBA bytes (4 bytes per pixel).
pub fn extract_colors_from_pixels<R: Rng + ?Sized>(
    rgba: &[u8],
    options: &ExtractOptions,
    rng: &mut R,
) -> Result<ExtractedColorSet, ExtractError> {
    options.check()?;

    let samples: Vec<Rgb> = rgba
        .chunks_exact(4)
        .step_by(options.sample_stride)
        .filter(|px| px[3] >= options.min_alpha)
        .map(|px| Rgb::new(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])))
        .filter(|c| {
            let lum = luminance(c.r, c.g, c.b);
            lum > options.min_luminance && lum < options.max_luminance
        })
        .collect();

    if samples.is_empty() {
        return Err(ExtractError::NoUsablePixels);
    }

    let k = options.cluster_count();
    let centroids = kmeans(&samples, k, options.iterations, rng);
    debug!(
        samples = samples.len(),
        clusters = centroids.len(),
        "k-means finished"
    );

    Ok(rank_centroids(centroids, options.num_colors))
}

/// Keep the `count` most saturated centroids, then order them by luminance.
fn rank_centroids(centroids: Vec<Rgb>, count: usize) -> ExtractedColorSet {
    let mut scored: Vec<(Rgb, f64)> = centroids
        .into_iter()
        .map(|c| (c, c.saturation()))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(count);

    let mut by_luminance: Vec<(Rgb, f64)> = scored
        .into_iter()
        .map(|(c, _)| (c, luminance(c.r, c.g, c.b)))
        .collect();
    by_luminance.sort_by(|a, b| b.1.total_cmp(&a.1));

    by_luminance
        .into_iter()
        .map(|(c, _)| rgb_to_hex(c.r, c.g, c.b))
        .collect()
}

/// Downscale so the longest edge is at most `max_dimension`, then cluster.
pub fn extract_colors_from_image<R: Rng + ?Sized>(
    image: &DynamicImage,
    options: &ExtractOptions,
    rng: &mut R,
) -> Result<ExtractedColorSet, ExtractError> {
    options.check()?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ExtractError::NoUsablePixels);
    }

    let max = f64::from(options.max_dimension);
    let scale = (max / f64::from(width))
        .min(max / f64::from(height))
        .min(1.0);
    let target_w = ((f64::from(width) * scale) as u32).max(1);
    let target_h = ((f64::from(height) * scale) as u32).max(1);

    let rgba = if (target_w, target_h) == (width, height) {
        image.to_rgba8()
    } else {
        image
            .resize_exact(target_w, target_h, FilterType::Triangle)
            .to_rgba8()
    };
    debug!(width, height, target_w, target_h, "downscaled image for extraction");

    extract_colors_from_pixels(rgba.as_raw(), options, rng)
}

/// Decode an encoded image (PNG, JPEG, GIF, WebP, BMP) and cluster it.
pub fn extract_colors_from_bytes<R: Rng + ?Sized>(
    bytes: &[u8],
    options: &ExtractOptions,
    rng: &mut R,
) -> Result<ExtractedColorSet, ExtractError> {
    let image =
        image::load_from_memory(bytes).map_err(|e| ExtractError::Decode(e.to_string()))?;
    extract_colors_from_image(&image, options, rng)
}

/// Read an image file and cluster it with the thread RNG.
///
/// The file read is the only suspension point; decoding and clustering
/// run to completion without yielding.
pub async fn extract_colors_from_path(
    path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractedColorSet, ExtractError> {
    let bytes = read_image_file(path).await?;
    extract_colors_from_bytes(&bytes, options, &mut rand::thread_rng())
}

/// Like [`extract_colors_from_path`], seeding k-means from `rng`.
pub async fn extract_colors_from_path_with_rng<R: Rng + ?Sized>(
    path: &Path,
    options: &ExtractOptions,
    rng: &mut R,
) -> Result<ExtractedColorSet, ExtractError> {
    let bytes = read_image_file(path).await?;
    extract_colors_from_bytes(&bytes, options, rng)
}

async fn read_image_file(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ExtractError::Io(format!("failed to read {}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = bytes.len(), "image loaded");
    Ok(bytes)
}

/// Map extracted colors onto the seven palette roles.
///
/// See [`assign_image_roles`] for the positions and fallbacks used.
pub fn generate_palette_from_colors(extracted: &[HexColor], dark: bool) -> PaletteColors {
    let ranking = LuminanceRanking::by_relative_luminance(extracted);
    assign_image_roles(&ranking, dark)
}

/// Light and dark palettes built from one extraction.
pub fn palette_variants_from_image(extracted: &[HexColor]) -> (ColorPalette, ColorPalette) {
    (
        ColorPalette::new(
            "From Image (Light)",
            generate_palette_from_colors(extracted, false),
        ),
        ColorPalette::new(
            "From Image (Dark)",
            generate_palette_from_colors(extracted, true),
        ),
    )
}
