//! Path and cycle lengths of a tour.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Total distance of the open path `tour[0] → … → tour[n-1]`.
///
/// Zero for tours with fewer than two nodes.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::build_tour_from;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::{cycle_length, path_length};
///
/// let dm = DistanceMatrix::uniform(4, 2.0);
/// let tour = build_tour_from(0, &dm).unwrap();
/// assert!((path_length(&tour, &dm) - 6.0).abs() < 1e-10);
/// assert!((cycle_length(&tour, &dm) - 8.0).abs() < 1e-10);
/// ```
pub fn path_length(tour: &Tour, distances: &DistanceMatrix) -> f64 {
    tour.nodes()
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum()
}

/// Total distance of the closed cycle, including the return leg to the start.
pub fn cycle_length(tour: &Tour, distances: &DistanceMatrix) -> f64 {
    match (tour.start(), tour.last()) {
        (Some(first), Some(last)) if tour.len() > 1 => {
            path_length(tour, distances) + distances.get(last, first)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::build_tour_from;

    #[test]
    fn test_empty_and_single() {
        let dm = DistanceMatrix::new(1);
        let tour = build_tour_from(0, &dm).expect("valid");
        assert_eq!(path_length(&tour, &dm), 0.0);
        assert_eq!(cycle_length(&tour, &dm), 0.0);
        assert_eq!(path_length(&Tour::new(), &dm), 0.0);
    }

    #[test]
    fn test_asymmetric_return_leg() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![10.0, 0.0]]).expect("square");
        let tour = build_tour_from(0, &dm).expect("valid");
        assert!((path_length(&tour, &dm) - 1.0).abs() < 1e-10);
        assert!((cycle_length(&tour, &dm) - 11.0).abs() < 1e-10);
    }
}
