use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Matrix;

/// Rows only. A matrix without rows carries no column count.
impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq((0..self.rows()).map(|r| self.row_slice(r)))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::new(rows).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::MatrixError;

    #[test]
    fn serializes_as_rows() {
        let matrix = Matrix::from_array([[1, 2], [3, 4]]);
        let json = serde_json::to_string(&matrix).expect("serializes");
        assert_eq!(json, "[[1,2],[3,4]]");
    }

    #[test]
    fn deserializes_rectangular_rows() {
        let matrix: Matrix = serde_json::from_str("[[0,3,5],[5,5,2]]").expect("rectangular");
        assert_eq!(matrix, Matrix::from_array([[0, 3, 5], [5, 5, 2]]));
    }

    #[test]
    fn rejects_ragged_rows() {
        let error = serde_json::from_str::<Matrix>("[[1,2],[3]]").expect_err("ragged");
        let expected = MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1,
        };
        assert!(error.to_string().contains(&expected.to_string()));
    }

    #[test]
    fn rowless_matrix_round_trips_as_empty() {
        let matrix: Matrix = Matrix::zeros(0, 3);
        let json = serde_json::to_string(&matrix).expect("serializes");
        assert_eq!(json, "[]");

        let restored: Matrix = serde_json::from_str(&json).expect("empty list");
        assert_eq!(restored.dimensions(), (0, 0));
    }
}
