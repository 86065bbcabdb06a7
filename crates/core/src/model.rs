/// A callable model that maps an input to an output.
///
/// In this workspace a model is usually the right-hand side of an ODE: it
/// takes a [`Sample`](crate::Sample) `(x, y)` and returns the slope `dy/dx`.
/// Closures of the form `Fn(f64, f64) -> f64` are wrapped with [`Slope`].
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// Adapts a plain derivative function `f(x, y)` into a [`Model`].
///
/// ```
/// use stepwise_core::{Model, Sample, Slope};
///
/// let decay = Slope(|_x: f64, y: f64| -y);
/// assert_eq!(decay.call(&Sample::new(0.0, 2.0)), Ok(-2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slope<F>(pub F);

impl<F> Model for Slope<F>
where
    F: Fn(f64, f64) -> f64,
{
    type Input = crate::Sample;
    type Output = f64;
    type Error = std::convert::Infallible;

    fn call(&self, input: &Self::Input) -> Result<f64, Self::Error> {
        Ok((self.0)(input.x, input.y))
    }
}
