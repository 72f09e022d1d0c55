/*! Filtering utilities

Filters operate on sentence or page level and implement [filter::Filter]:
stateless detection, so the same filter can run at any point of a pipeline
without changing its answers.

`detect` returning `true` means the item is kept.
!*/
mod filter;
mod page;
mod sentence;

pub use filter::Filter;
pub use page::PageSelection;
pub use sentence::{LengthBounds, MathFormula};
