use rand::Rng;
use themekit_common::Rgb;

/// Lloyd's k-means over RGB points for a fixed number of rounds.
///
/// Initial centroids are `k` distinct points drawn without replacement.
/// A centroid that loses all of its points keeps its previous position.
/// When there are no more than `k` points, they are returned as-is.
pub fn kmeans<R: Rng + ?Sized>(
    points: &[Rgb],
    k: usize,
    iterations: usize,
    rng: &mut R,
) -> Vec<Rgb> {
    if points.is_empty() || k == 0 {
        return Vec::new();
    }
    if points.len() <= k {
        return points.to_vec();
    }

    let mut centroids: Vec<Rgb> = rand::seq::index::sample(rng, points.len(), k)
        .into_iter()
        .map(|i| points[i])
        .collect();

    let mut sums = vec![Accumulator::default(); k];
    for _ in 0..iterations {
        sums.iter_mut().for_each(|acc| *acc = Accumulator::default());

        for point in points {
            sums[nearest(point, &centroids)].add(point);
        }

        for (centroid, acc) in centroids.iter_mut().zip(&sums) {
            if let Some(mean) = acc.mean() {
                *centroid = mean;
            }
        }
    }

    centroids
}

/// Index of the closest centroid; ties go to the lower index.
fn nearest(point: &Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = point.distance_squared(centroid);
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, point: &Rgb) {
        self.r += point.r;
        self.g += point.g;
        self.b += point.b;
        self.count += 1;
    }

    fn mean(&self) -> Option<Rgb> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(Rgb::new(self.r / n, self.g / n, self.b / n))
    }
}
