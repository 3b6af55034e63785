use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayD, Ix1, Ix2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shape::Shape;

/// Storage of a tensor: either a flat sequence or row-major rows of equal length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TensorData {
    Flat(Array1<i64>),
    Rows(Array2<i64>),
}

impl TensorData {
    /// Number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            TensorData::Flat(v) => v.len(),
            TensorData::Rows(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in row-major order.
    pub fn to_flat_vec(&self) -> Vec<i64> {
        match self {
            TensorData::Flat(v) => v.to_vec(),
            TensorData::Rows(m) => m.iter().copied().collect(),
        }
    }

    /// Same layout with every element replaced by `value`.
    pub fn filled(&self, value: i64) -> TensorData {
        match self {
            TensorData::Flat(v) => TensorData::Flat(Array1::from_elem(v.len(), value)),
            TensorData::Rows(m) => TensorData::Rows(Array2::from_elem(m.raw_dim(), value)),
        }
    }

    /// Build row storage from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<TensorData> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(Error::unsupported(format!(
                "ragged rows: row {} has {} elements, expected {}",
                i,
                row.len(),
                ncols
            )));
        }
        let nrows = rows.len();
        let flat: Vec<i64> = rows.into_iter().flatten().collect();
        Array2::from_shape_vec((nrows, ncols), flat)
            .map(TensorData::Rows)
            .map_err(|e| Error::unsupported(e.to_string()))
    }
}

impl From<Vec<i64>> for TensorData {
    fn from(v: Vec<i64>) -> Self {
        TensorData::Flat(Array1::from(v))
    }
}

impl From<Array1<i64>> for TensorData {
    fn from(v: Array1<i64>) -> Self {
        TensorData::Flat(v)
    }
}

impl From<Array2<i64>> for TensorData {
    fn from(m: Array2<i64>) -> Self {
        TensorData::Rows(m)
    }
}

impl TryFrom<ArrayD<i64>> for TensorData {
    type Error = Error;

    fn try_from(a: ArrayD<i64>) -> Result<Self> {
        match a.ndim() {
            1 => a
                .into_dimensionality::<Ix1>()
                .map(TensorData::Flat)
                .map_err(|e| Error::unsupported(e.to_string())),
            2 => a
                .into_dimensionality::<Ix2>()
                .map(TensorData::Rows)
                .map_err(|e| Error::unsupported(e.to_string())),
            n => Err(Error::unsupported(format!("{}-D array", n))),
        }
    }
}

impl fmt::Display for TensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_seq<'a>(
            f: &mut fmt::Formatter<'_>,
            items: impl Iterator<Item = &'a i64>,
        ) -> fmt::Result {
            write!(f, "[")?;
            for (i, x) in items.enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            write!(f, "]")
        }

        match self {
            TensorData::Flat(v) => write_seq(f, v.iter()),
            TensorData::Rows(m) => {
                write!(f, "[")?;
                for (i, row) in m.rows().into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_seq(f, row.iter())?;
                }
                write!(f, "]")
            }
        }
    }
}

/// An immutable integer tensor.
///
/// The shape describes the logical dimensions; the payload is stored flat or as rows and
/// is only checked against the shape where an operation needs it (see [`Tensor::reshape`]).
/// Cloning a tensor shares its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTensor"))]
pub struct Tensor {
    pub(crate) shape: Shape,
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Create a tensor. Fails with [`Error::InvalidShape`] if `shape` has no dimensions.
    pub fn new(shape: impl Into<Shape>, data: impl Into<TensorData>) -> Result<Self> {
        Self::with_shared(shape.into(), Arc::new(data.into()))
    }

    pub(crate) fn with_shared(shape: Shape, data: Arc<TensorData>) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::InvalidShape {
                reason: "shape must have at least one dimension",
            });
        }
        Ok(Tensor { shape, data })
    }

    pub fn from_flat(shape: impl Into<Shape>, data: Vec<i64>) -> Result<Self> {
        Self::new(shape, data)
    }

    pub fn from_rows(shape: impl Into<Shape>, rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::new(shape, TensorData::from_rows(rows)?)
    }

    /// Create a tensor from a 1-D or 2-D array.
    pub fn from_array(shape: impl Into<Shape>, array: ArrayD<i64>) -> Result<Self> {
        Self::new(shape, TensorData::try_from(array)?)
    }

    /// Same shape and layout, every element set to `value`.
    pub fn full_like(&self, value: i64) -> Tensor {
        Tensor {
            shape: self.shape.clone(),
            data: Arc::new(self.data.filled(value)),
        }
    }

    pub fn ones_like(&self) -> Tensor {
        self.full_like(1)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Logical element count implied by the shape.
    pub fn numel(&self) -> Option<usize> {
        self.shape.numel()
    }

    /// Number of elements actually stored.
    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_flat(&self) -> bool {
        matches!(*self.data, TensorData::Flat(_))
    }

    /// Rows of a row-major payload, `None` for flat storage.
    pub fn to_rows(&self) -> Option<Vec<Vec<i64>>> {
        match &*self.data {
            TensorData::Flat(_) => None,
            TensorData::Rows(m) => Some(m.rows().into_iter().map(|r| r.to_vec()).collect()),
        }
    }

    /// Whether both tensors point at the same payload.
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// All stored elements in row-major order.
    pub fn flatten(&self) -> Vec<i64> {
        self.data.to_flat_vec()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={}, data={})", self.shape, self.data)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTensor {
    shape: Shape,
    data: TensorData,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTensor> for Tensor {
    type Error = Error;

    fn try_from(raw: RawTensor) -> Result<Self> {
        Tensor::new(raw.shape, raw.data)
    }
}
