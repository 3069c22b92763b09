//! Tests for k-means and image palette extraction.

use super::*;
use image::{ImageFormat, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Two clusters for two requested colors; converges to both tones of a
/// two-tone image from any seeding.
fn two_cluster_options() -> ExtractOptions {
    ExtractOptions {
        num_colors: 2,
        cluster_multiplier: 1,
        ..ExtractOptions::default()
    }
}

fn split_image(width: u32, height: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |_, y| {
        if y < height / 2 {
            top
        } else {
            bottom
        }
    }))
}

fn solid_image(width: u32, height: u32, pixel: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel))
}

fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn kmeans_separates_distinct_groups() {
    let mut points = Vec::new();
    for i in 0..20 {
        let d = f64::from(i % 5);
        points.push(Rgb::new(10.0 + d, 20.0 + d, 30.0 + d));
        points.push(Rgb::new(200.0 + d, 180.0 + d, 160.0 + d));
    }

    let mut centroids = kmeans(&points, 2, 15, &mut rng());
    centroids.sort_by(|a, b| a.r.total_cmp(&b.r));

    assert_eq!(centroids.len(), 2);
    assert!((centroids[0].r - 12.0).abs() < 1e-9);
    assert!((centroids[1].g - 182.0).abs() < 1e-9);
}

#[test]
fn kmeans_returns_points_when_k_covers_them() {
    let points = vec![Rgb::new(1.0, 2.0, 3.0), Rgb::new(4.0, 5.0, 6.0)];
    assert_eq!(kmeans(&points, 5, 15, &mut rng()), points);
    assert!(kmeans(&[], 3, 15, &mut rng()).is_empty());
    assert!(kmeans(&points, 0, 15, &mut rng()).is_empty());
}

#[test]
fn kmeans_is_reproducible_with_same_seed() {
    let points: Vec<Rgb> = (0..200)
        .map(|i| {
            let v = f64::from(i);
            Rgb::new(v % 255.0, (v * 7.0) % 255.0, (v * 13.0) % 255.0)
        })
        .collect();
    let a = kmeans(&points, 8, 15, &mut StdRng::seed_from_u64(1));
    let b = kmeans(&points, 8, 15, &mut StdRng::seed_from_u64(1));
    assert_eq!(a, b);
}

#[test]
fn fully_transparent_image_fails() {
    let image = solid_image(10, 10, Rgba([120, 40, 200, 0]));
    let result = extract_colors_from_image(&image, &ExtractOptions::default(), &mut rng());
    assert!(matches!(result, Err(ExtractError::NoUsablePixels)));
}

#[test]
fn pure_black_or_white_image_fails() {
    for pixel in [Rgba([0, 0, 0, 255]), Rgba([255, 255, 255, 255])] {
        let image = solid_image(16, 16, pixel);
        let result = extract_colors_from_image(&image, &ExtractOptions::default(), &mut rng());
        assert!(matches!(result, Err(ExtractError::NoUsablePixels)));
    }
}

#[test]
fn two_tone_image_yields_both_tones_brightest_first() {
    let image = split_image(10, 10, RED, BLUE);
    let colors = extract_colors_from_image(&image, &two_cluster_options(), &mut rng()).unwrap();
    assert_eq!(
        colors,
        vec![HexColor::from_rgb(255, 0, 0), HexColor::from_rgb(0, 0, 255)]
    );
}

#[test]
fn default_options_keep_most_saturated_centroids() {
    let image = split_image(10, 10, RED, BLUE);
    let colors = extract_colors_from_image(&image, &ExtractOptions::default(), &mut rng()).unwrap();

    let red = HexColor::from_rgb(255, 0, 0);
    let blue = HexColor::from_rgb(0, 0, 255);
    assert_eq!(colors.len(), 6);
    assert!(colors.iter().all(|c| *c == red || *c == blue), "{colors:?}");
}

#[test]
fn near_white_pixels_are_ignored() {
    let image = split_image(8, 8, Rgba([250, 250, 250, 255]), Rgba([42, 157, 143, 255]));
    let colors = extract_colors_from_image(&image, &ExtractOptions::default(), &mut rng()).unwrap();
    let teal = HexColor::from_rgb(42, 157, 143);
    assert!(colors.iter().all(|c| *c == teal), "{colors:?}");
}

#[test]
fn large_image_is_downscaled_and_extracted() {
    let image = split_image(640, 320, RED, BLUE);
    let colors = extract_colors_from_image(&image, &ExtractOptions::default(), &mut rng()).unwrap();
    assert!(!colors.is_empty());
    assert!(colors.len() <= 6);
}

#[test]
fn output_is_sorted_by_descending_luminance() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(60, 60, |x, y| {
        Rgba([(x * 4) as u8 + 10, (y * 4) as u8 + 10, 128, 255])
    }));
    let options = ExtractOptions::default().with_num_colors(4);
    let colors = extract_colors_from_image(&image, &options, &mut rng()).unwrap();
    assert_eq!(colors.len(), 4);
    for pair in colors.windows(2) {
        assert!(
            crate::contrast::relative_luminance(pair[0])
                >= crate::contrast::relative_luminance(pair[1])
        );
    }
}

#[test]
fn same_seed_gives_same_extraction() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(50, 50, |x, y| {
        Rgba([(x * 5) as u8, 100, (y * 5) as u8, 255])
    }));
    let options = ExtractOptions::default();
    let a = extract_colors_from_image(&image, &options, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = extract_colors_from_image(&image, &options, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_options_are_rejected() {
    let image = split_image(10, 10, RED, BLUE);
    let options = ExtractOptions {
        num_colors: 0,
        sample_stride: 0,
        ..ExtractOptions::default()
    };
    let err = extract_colors_from_image(&image, &options, &mut rng()).unwrap_err();
    match err {
        ExtractError::InvalidOptions(msg) => {
            assert!(msg.contains("num_colors"));
            assert!(msg.contains("sample_stride"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn overflowing_cluster_count_is_rejected() {
    let image = split_image(10, 10, RED, BLUE);
    let options = ExtractOptions {
        num_colors: usize::MAX / 2 + 1,
        ..ExtractOptions::default()
    };
    assert_eq!(options.cluster_count(), usize::MAX);

    let err = extract_colors_from_image(&image, &options, &mut rng()).unwrap_err();
    match err {
        ExtractError::InvalidOptions(msg) => assert!(msg.contains("overflows")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let result =
        extract_colors_from_bytes(b"definitely not an image", &ExtractOptions::default(), &mut rng());
    assert!(matches!(result, Err(ExtractError::Decode(_))));
}

#[test]
fn encoded_png_round_trips_through_bytes() {
    let bytes = encode_png(&split_image(10, 10, RED, BLUE));
    let colors = extract_colors_from_bytes(&bytes, &two_cluster_options(), &mut rng()).unwrap();
    assert!(colors.contains(&HexColor::from_rgb(255, 0, 0)));
    assert!(colors.contains(&HexColor::from_rgb(0, 0, 255)));
}

#[tokio::test]
async fn extract_from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swatch.png");
    std::fs::write(&path, encode_png(&solid_image(12, 12, Rgba([233, 196, 106, 255])))).unwrap();

    let colors = extract_colors_from_path(&path, &ExtractOptions::default())
        .await
        .unwrap();
    // A flat image collapses every centroid onto the same color.
    let expected = HexColor::from_rgb(233, 196, 106);
    assert_eq!(colors.len(), 6);
    assert!(colors.iter().all(|c| *c == expected));
}

#[tokio::test]
async fn extract_from_path_with_seeded_rng_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("split.png");
    std::fs::write(&path, encode_png(&split_image(20, 20, RED, BLUE))).unwrap();
    let options = ExtractOptions::default();

    let first = extract_colors_from_path_with_rng(&path, &options, &mut rng())
        .await
        .unwrap();
    let second = extract_colors_from_path_with_rng(&path, &options, &mut rng())
        .await
        .unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[tokio::test]
async fn extract_from_missing_path_is_io_error() {
    let result = extract_colors_from_path(
        Path::new("/tmp/themekit-no-such-image.png"),
        &ExtractOptions::default(),
    )
    .await;
    assert!(matches!(result, Err(ExtractError::Io(_))));
}

#[tokio::test]
async fn transparent_file_fails_with_no_usable_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clear.png");
    std::fs::write(&path, encode_png(&solid_image(10, 10, Rgba([0, 0, 0, 0])))).unwrap();

    let result = extract_colors_from_path(&path, &ExtractOptions::default()).await;
    assert!(matches!(result, Err(ExtractError::NoUsablePixels)));
}

#[test]
fn palette_from_extracted_colors_is_complete() {
    let extracted: Vec<HexColor> = ["#e9c46a", "#2a9d8f", "#e76f51", "#264653"]
        .iter()
        .map(|s| HexColor::parse(s).unwrap())
        .collect();

    for dark in [false, true] {
        let palette = generate_palette_from_colors(&extracted, dark);
        for (_, color) in palette.iter() {
            assert_eq!(color.to_hex().len(), 7);
        }
    }

    let (light, dark) = palette_variants_from_image(&extracted);
    assert_eq!(light.name, "From Image (Light)");
    assert_eq!(dark.name, "From Image (Dark)");
    assert_eq!(dark.colors.text.to_hex(), "#f0f0f0");
    assert!(
        crate::contrast::relative_luminance(dark.colors.background)
            < crate::contrast::relative_luminance(light.colors.background)
    );
}

#[test]
fn palette_from_empty_extraction_uses_fallbacks() {
    let palette = generate_palette_from_colors(&[], true);
    assert_eq!(palette.primary.to_hex(), "#e94560");
    assert_eq!(palette.text_muted.to_hex(), "#a0a0a0");
}
