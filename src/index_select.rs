use std::sync::Arc;

use ndarray::{Array1, Array2, Axis};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::tensor::{Tensor, TensorData};

fn check_bounds(indices: &[usize], size: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= size) {
        Some(&index) => Err(Error::OutOfRange { index, size }),
        None => Ok(()),
    }
}

impl Tensor {
    /// Select entries of the payload by position.
    ///
    /// Flat payloads pick single elements, row payloads copy whole rows. `dim` is
    /// accepted but not interpreted, and the result keeps `self`'s shape unchanged.
    pub fn index_select(&self, dim: usize, indices: &[usize]) -> Result<Tensor> {
        trace!(dim, "index_select ignores dim; selecting along the storage axis");

        let selected = match &*self.data {
            TensorData::Flat(v) => {
                check_bounds(indices, v.len())?;
                TensorData::Flat(indices.iter().map(|&i| v[i]).collect::<Array1<i64>>())
            }
            TensorData::Rows(m) => {
                check_bounds(indices, m.nrows())?;
                let picked: Array2<i64> = m.select(Axis(0), indices);
                TensorData::Rows(picked)
            }
        };

        debug!(count = indices.len(), "index_select");
        Ok(Tensor {
            shape: self.shape.clone(),
            data: Arc::new(selected),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::tensor::Tensor;

    #[test]
    fn test_select_flat() {
        let t = Tensor::from_flat([4], vec![10, 20, 30, 40]).unwrap();
        let s = t.index_select(0, &[0, 0, 3]).unwrap();
        assert_eq!(s.flatten(), vec![10, 10, 40]);
        assert_eq!(s.shape(), t.shape());
    }

    #[test]
    fn test_select_rows() {
        let t = Tensor::from_rows([2, 2], vec![vec![1, 2], vec![3, 4]]).unwrap();
        let s = t.index_select(0, &[0, 0, 1, 1]).unwrap();
        assert_eq!(
            s.to_rows(),
            Some(vec![vec![1, 2], vec![1, 2], vec![3, 4], vec![3, 4]])
        );
        assert_eq!(s.shape().dims(), &[2, 2]);
        assert!(!s.shares_storage(&t));
    }

    #[test]
    fn test_dim_is_not_interpreted() {
        let t = Tensor::from_rows([2, 2], vec![vec![1, 2], vec![3, 4]]).unwrap();
        let a = t.index_select(0, &[1]).unwrap();
        let b = t.index_select(7, &[1]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_select_out_of_range() {
        let t = Tensor::from_flat([4], vec![10, 20, 30, 40]).unwrap();
        let err = t.index_select(0, &[1, 4]).unwrap_err();
        assert_eq!(err, Error::OutOfRange { index: 4, size: 4 });

        let r = Tensor::from_rows([2, 3], vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let err = r.index_select(0, &[2]).unwrap_err();
        assert_eq!(err, Error::OutOfRange { index: 2, size: 2 });
    }

    #[test]
    fn test_select_no_indices() {
        let r = Tensor::from_rows([2, 3], vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let s = r.index_select(0, &[]).unwrap();
        assert_eq!(s.element_count(), 0);
        assert_eq!(s.to_rows(), Some(vec![]));
    }
}
