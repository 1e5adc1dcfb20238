//! "Did you mean" matching for command names.
//!
//! Candidates are scored by Levenshtein distance. A candidate that starts with the
//! requested text scores `0` without computing the distance.


/// Candidates farther than this are not suggested.
pub const DISTANCE_THRESHOLD: usize = 3;

/// Maximum number of suggestions collected for one request.
pub const MAX_SUGGESTIONS: usize = 5;

/// Levenshtein distance over characters; insert, delete, and substitute each cost 1.
pub fn distance(a: &str, b: &str) -> usize {
	strsim::levenshtein(a, b)
}

/// Returns the distance between `a` and `b` when it is within `threshold`.
pub fn analyse(a: &str, b: &str, threshold: usize) -> Option<usize> {
	let distance = distance(a, b);
	(distance <= threshold).then_some(distance)
}

/// Scores `candidate` against `requested`, short-circuiting prefix matches to `0`.
pub fn similarity(requested: &str, candidate: &str, threshold: usize) -> Option<usize> {
	if candidate.starts_with(requested) {
		return Some(0);
	}
	analyse(requested, candidate, threshold)
}

/// A candidate close enough to be suggested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	pub base: String,
	pub distance: usize,
}

/// Collects up to `max` similar candidates, sorted by distance.
///
/// Candidates are scanned in order and scanning stops once `max` are found, so earlier
/// candidates win over closer later ones. Ties keep scan order.
pub fn suggest<'a, I>(requested: &str, candidates: I, threshold: usize, max: usize) -> Vec<Suggestion>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut found: Vec<Suggestion> = candidates
		.into_iter()
		.filter_map(|base| {
			similarity(requested, base, threshold).map(|distance| Suggestion {
				base: base.to_string(),
				distance,
			})
		})
		.take(max)
		.collect();
	found.sort_by_key(|s| s.distance);
	found
}
