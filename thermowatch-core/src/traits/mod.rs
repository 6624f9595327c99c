//! Extension points
//!
//! - [`smoother`]: batch series smoothers ([`Smoother`])
//! - [`stream`]: pull-based sample sources ([`Stream`])
//!
//! Both are implemented by the crate's own types and open for callers:
//! a custom smoother can be passed wherever a [`Smoother`] is accepted, and
//! any acquisition front end that yields [`crate::Sample`]s through
//! [`Stream`] can feed [`crate::stream::collect_samples`].

pub mod smoother;
pub mod stream;

pub use smoother::Smoother;
pub use stream::Stream;
