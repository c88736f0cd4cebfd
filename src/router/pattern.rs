//! Path template compilation and segment matching.
//!
//! A template such as `/users/:id/posts` is split on `/` into an ordered list of
//! [`Segment`]s. A segment starting with [`CAPTURE_MARKER`] is a named capture and
//! matches any text; every other segment must match byte-for-byte.
//!
//! Compilation cannot fail. Odd templates (`""`, `"//"`, `"/:"`) simply compile to
//! patterns that only match equally odd paths.

use smallvec::SmallVec;
use std::sync::Arc;

/// Character that turns a template segment into a named capture.
pub const CAPTURE_MARKER: char = ':';

/// Segment delimiter shared by templates and request paths.
pub const DELIMITER: char = '/';

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/:id/posts/:post_id).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Captured path parameters in template order.
///
/// Param names use `Arc<str>` because they come from the compiled pattern and are
/// shared by every request matching it; values are per-request text from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// One compiled template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched by exact, case-sensitive equality.
    Literal(String),
    /// Matches any single path segment and binds its text to the name.
    Capture(Arc<str>),
}

/// A compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a route template into its segments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypost::router::{PathPattern, Segment};
    ///
    /// let pattern = PathPattern::compile("/users/:id");
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.segments()[2], Segment::Capture("id".into()));
    /// ```
    #[must_use]
    pub fn compile(template: &str) -> Self {
        let segments = template
            .split(DELIMITER)
            .map(|segment| match segment.strip_prefix(CAPTURE_MARKER) {
                Some(name) => Segment::Capture(Arc::from(name)),
                None => Segment::Literal(segment.to_owned()),
            })
            .collect();

        Self {
            template: template.to_owned(),
            segments,
        }
    }

    /// The template this pattern was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, including the empty one before a leading `/`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of the capture segments in template order.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Capture(name) => Some(name.as_ref()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the captured parameters (possibly empty) when every segment matches,
    /// `None` otherwise. Paths with a different segment count are rejected before any
    /// text is compared.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<ParamVec> {
        if path.split(DELIMITER).count() != self.segments.len() {
            return None;
        }

        let mut params = ParamVec::new();
        for (segment, part) in self.segments.iter().zip(path.split(DELIMITER)) {
            match segment {
                Segment::Literal(text) => {
                    if text != part {
                        return None;
                    }
                }
                Segment::Capture(name) => params.push((Arc::clone(name), part.to_owned())),
            }
        }
        Some(params)
    }
}
