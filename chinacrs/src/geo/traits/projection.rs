//! Conversion of points from one coordinate system into another.

/// Converts points of type `InPoint` into `OutPoint` and back.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Converts the input point. Returns `None` if the point cannot be converted.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts the point back into the input coordinate system.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that swaps the direction of the wrapped one: `project` calls the inner `unproject` and vice versa.
pub struct InvertedProjection<In, Out> {
    inner: Box<dyn Projection<InPoint = Out, OutPoint = In>>,
}

impl<In, Out> InvertedProjection<In, Out> {
    /// Wraps the given projection.
    pub fn new(inner: Box<dyn Projection<InPoint = Out, OutPoint = In>>) -> Self {
        Self { inner }
    }
}

impl<In, Out> Projection for InvertedProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        self.inner.project(input)
    }
}

/// Applies two projections one after another.
pub struct ChainProjection<In, Mid, Out> {
    first: Box<dyn Projection<InPoint = In, OutPoint = Mid>>,
    second: Box<dyn Projection<InPoint = Mid, OutPoint = Out>>,
}

impl<In, Mid, Out> ChainProjection<In, Mid, Out> {
    /// Creates a projection that projects with `first` and then with `second`. Unprojecting goes in the
    /// opposite order.
    pub fn new(
        first: Box<dyn Projection<InPoint = In, OutPoint = Mid>>,
        second: Box<dyn Projection<InPoint = Mid, OutPoint = Out>>,
    ) -> Self {
        Self { first, second }
    }
}

impl<In, Mid, Out> Projection for ChainProjection<In, Mid, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        self.second.project(&self.first.project(input)?)
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        self.first.unproject(&self.second.unproject(input)?)
    }
}
