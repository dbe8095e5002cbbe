//! Question 3: Liskov Substitution
//!
//! Anything typed as a `Shape` must honour every `Shape` method. A line has
//! no area, so the question's `LineShape` can only fail when asked for one.
//! The solution splits shapes by dimension and only two-dimensional shapes
//! promise an area.

pub mod question;
pub mod solution;
