//! # aten-lite - a small shape-aware integer tensor
//!
//! [`Tensor`] pairs a [`Shape`] with a payload stored either flat or as row-major
//! rows ([`TensorData`]). Tensors are immutable; every operation returns a new one:
//!
//! - [`Tensor::reshape`] - new shape over the same (shared) payload
//! - [`Tensor::hadamard_product`] - element-wise product, flat result
//! - [`Tensor::index_select`] - pick elements or whole rows by position
//! - [`Tensor::flatten`] - payload as one row-major sequence
//!
//! ```
//! use aten_lite::prelude::*;
//!
//! let t = Tensor::from_rows([2, 2], vec![vec![1, 2], vec![3, 4]])?;
//! assert_eq!(t.reshape([4])?.flatten(), vec![1, 2, 3, 4]);
//!
//! let twos = t.full_like(2);
//! assert_eq!(t.hadamard_product(&twos)?.flatten(), vec![2, 4, 6, 8]);
//! # Ok::<(), aten_lite::Error>(())
//! ```

pub mod error;
mod index_select;
mod operation;
mod reshape;
pub mod shape;
pub mod tensor;

pub use error::{Error, Result};
pub use shape::{shape_equal, Shape};
pub use tensor::{Tensor, TensorData};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::shape::Shape;
    pub use crate::tensor::{Tensor, TensorData};
}
