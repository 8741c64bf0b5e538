/// Relative-ordering band for one extension registration.
///
/// Bands run from first-applied to last-applied. Within one band, entries
/// keep their registration order; across a registry chain the bands apply
/// globally, so an ancestor's `Outermost` still binds tighter than a
/// descendant's `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Position {
	/// Applied first. At most one registration per extension-point kind
	/// may hold this band; a second one is a configuration error.
	Outermost,
	OutsideDefault,
	#[default]
	Default,
	InsideDefault,
	/// Applied last.
	Innermost,
}
