use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::shape::Shape;
use crate::tensor::Tensor;

impl Tensor {
    /// Give the tensor a new shape with the same number of stored elements.
    ///
    /// The payload is shared with `self` and keeps its original layout: a row-major
    /// payload reshaped to a 1-D shape is still stored as rows.
    pub fn reshape(&self, new_shape: impl Into<Shape>) -> Result<Tensor> {
        let new_shape = new_shape.into();
        let count = self.element_count();

        match new_shape.numel() {
            Some(n) if n == count => {}
            _ => return Err(Error::shape_mismatch(&[count], new_shape.dims())),
        }

        let out = Tensor::with_shared(new_shape, Arc::clone(&self.data))?;
        debug!(from = %self.shape, to = %out.shape, "reshaped tensor");
        Ok(out)
    }
}
