use crate::geometry::Geometry;
use crate::topology::Complex;

/// Validates the topological consistency of a whole complex.
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if every invariant holds.
    #[must_use]
    pub fn execute<G: Geometry>(&self, complex: &Complex<G>) -> bool {
        match complex.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "complex failed validation");
                false
            }
        }
    }
}

impl Default for IsValid {
    fn default() -> Self {
        Self::new()
    }
}
