//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Distances need not be symmetric. Diagonal entries are never read by the
/// tour builders and are ignored by [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 3.0],
///     vec![8.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked serialized form; converted through [`DistanceMatrix::try_from`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = InputError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let len = raw.data.len();
        let size = raw.size;
        Self::from_data(size, raw.data).ok_or(InputError::DataLength { size, len })
    }
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix where every off-diagonal distance equals `distance`.
    pub fn uniform(size: usize, distance: f64) -> Self {
        let mut dm = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    dm.set(i, j, distance);
                }
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if size.checked_mul(size) != Some(data.len()) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(InputError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every off-diagonal entry is finite and non-negative.
    ///
    /// Reports the first offending entry in row-major order.
    pub fn validate(&self) -> Result<(), InputError> {
        for from in 0..self.size {
            for to in 0..self.size {
                if from == to {
                    continue;
                }
                let value = self.get(from, to);
                if !value.is_finite() {
                    return Err(InputError::NonFiniteDistance { from, to, value });
                }
                if value < 0.0 {
                    return Err(InputError::NegativeDistance { from, to, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_line_matrix() {
        let dm = line_matrix(4);
        assert_eq!(dm.size(), 4);
        assert!((dm.get(0, 3) - 3.0).abs() < 1e-10);
        assert!((dm.get(2, 1) - 1.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        assert!(line_matrix(5).is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data_is_row_major() {
        // Row 0 leaves cheaply, row 2 returns expensively.
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 2.0, 4.0, 0.0, 3.0, 9.0, 8.0, 0.0])
            .expect("3x3");
        assert_eq!(dm.get(0, 2), 2.0);
        assert_eq!(dm.get(2, 0), 9.0);
        assert_eq!(dm.get(1, 2), 3.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data_missing_entries() {
        assert!(DistanceMatrix::from_data(3, vec![0.0; 8]).is_none());
        assert!(DistanceMatrix::from_data(usize::MAX, Vec::new()).is_none());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            InputError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let dm = DistanceMatrix::from_rows(Vec::new()).expect("empty is square");
        assert_eq!(dm.size(), 0);
    }

    #[test]
    fn test_set_one_direction() {
        let mut dm = line_matrix(3);
        dm.set(2, 0, 10.0);
        assert_eq!(dm.get(2, 0), 10.0);
        assert_eq!(dm.get(0, 2), 2.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_uniform() {
        let dm = DistanceMatrix::uniform(3, 7.0);
        assert_eq!(dm.get(0, 2), 7.0);
        assert_eq!(dm.get(1, 1), 0.0);
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut dm = line_matrix(3);
        dm.set(2, 0, -1.0);
        assert_eq!(
            dm.validate(),
            Err(InputError::NegativeDistance {
                from: 2,
                to: 0,
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut dm = line_matrix(3);
        dm.set(0, 1, f64::NAN);
        assert!(matches!(
            dm.validate(),
            Err(InputError::NonFiniteDistance { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn test_validate_ignores_diagonal() {
        let mut dm = line_matrix(3);
        dm.set(1, 1, -5.0);
        assert!(dm.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let dm = line_matrix(3);
        let json = serde_json::to_string(&dm).expect("serialize");
        let back: DistanceMatrix = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(dm, back);
    }

    #[test]
    fn test_deserialize_rejects_short_data() {
        let err = serde_json::from_str::<DistanceMatrix>(r#"{"data":[0.0],"size":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("needs 2x2 entries, got 1"));
    }
}
