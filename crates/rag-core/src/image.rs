use crate::GraphError;

/// Borrowed row-major `f32` image, `data.len() == width * height`.
#[derive(Clone, Copy, Debug)]
pub struct ScalarImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [f32],
}

/// Owned row-major `f32` image.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl<'a> ScalarImageView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [f32]) -> Result<Self, GraphError> {
        check_len("image data", width * height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }
}

impl ScalarImage {
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self, GraphError> {
        check_len("image data", width * height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn as_view(&self) -> ScalarImageView<'_> {
        ScalarImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.as_view().get(x, y)
    }
}

pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), GraphError> {
    if expected != actual {
        return Err(GraphError::DimensionMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that `weights` has `expected_len` entries and that all of them are finite.
pub fn validate_weights(
    what: &'static str,
    weights: &[f32],
    expected_len: usize,
) -> Result<(), GraphError> {
    check_len(what, expected_len, weights.len())?;
    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
        return Err(GraphError::InvalidWeight { what, index, value });
    }
    Ok(())
}

/// Like [`validate_weights`], additionally rejecting negative entries.
pub fn validate_non_negative_weights(
    what: &'static str,
    weights: &[f32],
    expected_len: usize,
) -> Result<(), GraphError> {
    validate_weights(what, weights, expected_len)?;
    if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| **w < 0.0) {
        return Err(GraphError::InvalidWeight { what, index, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_wrong_length() {
        let data = [0.0f32; 5];
        let err = ScalarImageView::new(2, 3, &data).unwrap_err();
        assert_eq!(
            GraphError::DimensionMismatch {
                what: "image data",
                expected: 6,
                actual: 5
            },
            err
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = ScalarImage::from_fn(3, 2, |x, y| (10 * y + x) as f32);
        assert_eq!(&[0.0, 1.0, 2.0, 10.0, 11.0, 12.0], img.data.as_slice());
        assert_eq!(Some(12.0), img.get(2, 1));
        assert_eq!(None, img.get(3, 0));
    }

    #[test]
    fn weight_validation_reports_first_offender() {
        assert!(validate_weights("w", &[1.0, 2.0], 2).is_ok());
        let err = validate_weights("w", &[1.0, f32::NAN, f32::INFINITY], 3).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { index: 1, .. }));

        let err = validate_non_negative_weights("w", &[1.0, -0.5], 2).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { index: 1, .. }));
    }
}
