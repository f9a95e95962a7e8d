//! Runners and Decorators
//!
//! A `Runner` is a unit of work executed with no arguments and no return value.
//! A `Decorator` turns one runner into another, so instrumentation can be layered
//! around a computation without touching it:
//!
//! ```text
//! decorate(base, [d1, d2])  ==  d2(d1(base))
//!
//! ┌──────────── d2 ────────────┐
//! │ ┌────────── d1 ──────────┐ │
//! │ │          base          │ │
//! │ └────────────────────────┘ │
//! └────────────────────────────┘
//! ```

/// A zero-argument unit of work.
pub trait Runner {
    /// Execute the work synchronously to completion.
    fn run(&self);
}

impl<R: Runner + ?Sized> Runner for Box<R> {
    fn run(&self) {
        (**self).run()
    }
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self) {
        (**self).run()
    }
}

/// Runner backed by a closure.
pub struct RunnerFn<F>(F);

impl<F: Fn()> RunnerFn<F> {
    /// Wrap a closure as a runner
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn()> Runner for RunnerFn<F> {
    fn run(&self) {
        (self.0)()
    }
}

/// Runner that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunner;

impl Runner for NoopRunner {
    fn run(&self) {}
}

/// Transformation from one runner to another.
pub type Decorator = Box<dyn Fn(Box<dyn Runner>) -> Box<dyn Runner>>;

/// Apply decorators to `base` in order.
///
/// Each decorator wraps the result of the previous one, so the last decorator
/// is the outermost layer. An empty list returns `base` unchanged.
pub fn decorate<I>(base: Box<dyn Runner>, decorators: I) -> Box<dyn Runner>
where
    I: IntoIterator<Item = Decorator>,
{
    decorators
        .into_iter()
        .fold(base, |decorated, decorator| decorator(decorated))
}
