//! Seam between the pipeline and the external regression model.
//!
//! Inference itself lives outside this crate. A host implements
//! [`ScoreModel`] (or one [`AxisRegressor`] per axis, combined with
//! [`AxisModels`]) over whatever feature representation its model expects,
//! then calls [`Diagnoser::diagnose_with`].

use thiserror::Error;

use crate::error::DiagnoseError;
use crate::pipeline::{Diagnoser, Diagnosis, Scores};

/// A model that predicts both axis scores for one input.
pub trait ScoreModel {
    /// Model input, e.g. a flattened pixel feature vector.
    type Input: ?Sized;
    /// Failure reported by the model.
    type Error;

    /// Predict the `(x, y)` scores for `input`.
    fn predict(&self, input: &Self::Input) -> Result<Scores, Self::Error>;
}

/// A single-axis regressor.
pub trait AxisRegressor {
    /// Model input.
    type Input: ?Sized;
    /// Failure reported by the regressor.
    type Error;

    /// Predict one axis score for `input`.
    fn predict_axis(&self, input: &Self::Input) -> Result<f64, Self::Error>;
}

/// Two independent regressors, one per axis, acting as one [`ScoreModel`].
#[derive(Clone, Debug)]
pub struct AxisModels<X, Y> {
    /// Temporal axis regressor.
    pub x: X,
    /// Valence axis regressor.
    pub y: Y,
}

impl<X, Y> AxisModels<X, Y> {
    /// Pair up an x-axis and a y-axis regressor.
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl<I, E, X, Y> ScoreModel for AxisModels<X, Y>
where
    I: ?Sized,
    X: AxisRegressor<Input = I, Error = E>,
    Y: AxisRegressor<Input = I, Error = E>,
{
    type Input = I;
    type Error = E;

    fn predict(&self, input: &I) -> Result<Scores, E> {
        let x = self.x.predict_axis(input)?;
        let y = self.y.predict_axis(input)?;
        Ok(Scores::new(x, y))
    }
}

/// Failure of a model-backed diagnosis.
#[derive(Debug, Error)]
pub enum ModelDiagnoseError<E> {
    /// The model could not produce scores.
    #[error("score model failed: {0}")]
    Model(E),

    /// The model's scores could not be diagnosed.
    #[error(transparent)]
    Diagnose(#[from] DiagnoseError),
}

impl Diagnoser {
    /// Predict scores for `input` with `model`, then run the pipeline on them.
    pub fn diagnose_with<M: ScoreModel>(
        &self,
        model: &M,
        input: &M::Input,
    ) -> Result<Diagnosis, ModelDiagnoseError<M::Error>> {
        let scores = model.predict(input).map_err(ModelDiagnoseError::Model)?;
        tracing::debug!(x = scores.x, y = scores.y, "model produced scores");
        Ok(self.diagnose_scores(scores)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Quadrant;

    /// Averages the feature vector and scales it onto one axis.
    struct MeanRegressor {
        scale: f64,
        offset: f64,
    }

    impl AxisRegressor for MeanRegressor {
        type Input = [f64];
        type Error = &'static str;

        fn predict_axis(&self, input: &[f64]) -> Result<f64, Self::Error> {
            if input.is_empty() {
                return Err("empty feature vector");
            }
            let mean = input.iter().sum::<f64>() / input.len() as f64;
            Ok(mean * self.scale + self.offset)
        }
    }

    fn models() -> AxisModels<MeanRegressor, MeanRegressor> {
        AxisModels::new(
            MeanRegressor { scale: 6.0, offset: -3.0 },
            MeanRegressor { scale: -6.0, offset: 3.0 },
        )
    }

    #[test]
    fn test_axis_models_predict_both_axes() {
        let scores = models().predict(&[1.0, 1.0][..]).unwrap();
        assert_eq!(scores, Scores::new(3.0, -3.0));
    }

    #[test]
    fn test_diagnose_with_model() {
        let d = Diagnoser::new().diagnose_with(&models(), &[1.0, 1.0][..]).unwrap();
        assert_eq!(d.quadrant, Quadrant::FutureNegative);
        assert_eq!(d.x_bucket.value(), 3);
        assert_eq!(d.y_bucket.value(), -3);
    }

    #[test]
    fn test_model_error_propagates() {
        let empty: [f64; 0] = [];
        let err = Diagnoser::new().diagnose_with(&models(), &empty[..]).unwrap_err();
        assert!(matches!(err, ModelDiagnoseError::Model("empty feature vector")));
    }

    #[test]
    fn test_non_finite_prediction_is_a_diagnose_error() {
        let d = Diagnoser::new().diagnose_with(&models(), &[f64::NAN][..]);
        assert!(matches!(
            d,
            Err(ModelDiagnoseError::Diagnose(DiagnoseError::InvalidInput { .. }))
        ));
    }
}
