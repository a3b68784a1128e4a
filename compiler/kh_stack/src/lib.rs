//! Stack growth for recursive walks over syntax trees.
//!
//! Rendering an expression like `((((...))))` or a chain of nested blocks
//! recurses once per level. Source written by hand rarely goes deep, but
//! generated code can, so every recursive tree walk goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown with `stacker`. On `wasm32` the
//! closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// impl fmt::Display for Expr {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         ensure_sufficient_stack(|| self.kind.render(f))
///     }
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
