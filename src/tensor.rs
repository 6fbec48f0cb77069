use ndarray::{Array, ArrayView, Ix4};
use thiserror::Error;

pub const INPUT_HEIGHT: usize = 224;
pub const INPUT_WIDTH: usize = 224;
pub const INPUT_CHANNELS: usize = 3;

/// Model input layout: one batched image in NHWC order.
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("tensor shape {got:?} does not match expected {expected:?}")]
pub struct ShapeMismatch {
    pub expected: [usize; 4],
    pub got: Vec<usize>,
}

/// A normalized image batch, validated against [`INPUT_SHAPE`] when
/// constructed so shape errors surface at the boundary instead of inside
/// the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor(Array<f32, Ix4>);

impl InputTensor {
    pub fn new(array: Array<f32, Ix4>) -> Result<Self, ShapeMismatch> {
        if array.shape() != &INPUT_SHAPE {
            return Err(ShapeMismatch {
                expected: INPUT_SHAPE,
                got: array.shape().to_vec(),
            });
        }
        Ok(Self(array))
    }

    pub fn view(&self) -> ArrayView<'_, f32, Ix4> {
        self.0.view()
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }
}

/// One probability per label, index-aligned with the label set.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionVector(Vec<f32>);

impl PredictionVector {
    pub fn new(scores: Vec<f32>) -> Self {
        Self(scores)
    }

    pub fn scores(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_tensor_rejects_wrong_shapes() {
        let err = InputTensor::new(Array::zeros((1, 100, 100, 3))).unwrap_err();

        assert_eq!(err.expected, INPUT_SHAPE);
        assert_eq!(err.got, vec![1, 100, 100, 3]);
    }

    #[test]
    fn input_tensor_accepts_the_model_shape() {
        let tensor =
            InputTensor::new(Array::zeros((1, INPUT_HEIGHT, INPUT_WIDTH, INPUT_CHANNELS))).unwrap();

        assert_eq!(tensor.shape(), &INPUT_SHAPE);
    }
}
