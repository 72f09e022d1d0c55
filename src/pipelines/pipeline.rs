//! Pipeline trait.
use crate::error::Error;

/// Implemented by every pipeline.
///
/// Generic over the produced value so that pipelines returning data
/// (rather than only writing files) fit the same dispatch.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
