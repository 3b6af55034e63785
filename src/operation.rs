use std::ops::Mul;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::shape::shape_equal;
use crate::tensor::{Tensor, TensorData};

impl Tensor {
    /// Element-wise (Hadamard) product.
    ///
    /// Both shapes must be equal. The result keeps `self`'s shape and is always stored
    /// flat. Multiplication wraps on `i64` overflow.
    pub fn hadamard_product(&self, other: &Tensor) -> Result<Tensor> {
        if !shape_equal(&self.shape, &other.shape) {
            return Err(Error::shape_mismatch(self.shape.dims(), other.shape.dims()));
        }

        let lhs = self.flatten();
        let rhs = other.flatten();
        if lhs.len() != rhs.len() {
            return Err(Error::shape_mismatch(&[lhs.len()], &[rhs.len()]));
        }

        let product: Vec<i64> = lhs
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.wrapping_mul(*b))
            .collect();

        debug!(shape = %self.shape, len = product.len(), "hadamard product");
        Ok(Tensor {
            shape: self.shape.clone(),
            data: Arc::new(TensorData::from(product)),
        })
    }
}

impl Mul for &Tensor {
    type Output = Result<Tensor>;

    fn mul(self, rhs: Self) -> Result<Tensor> {
        self.hadamard_product(rhs)
    }
}
