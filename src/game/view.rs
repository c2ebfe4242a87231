//! Render input computed from game state.
//!
//! The core computes these predicates; the renderer only paints them. The
//! contract mirrors the presentation layer's card widget: `is_flipped` for
//! open cards, `is_inactive` for cleared ones, and a face name only when the
//! card is actually showing it.

/// Per-card render input, derived from the open set, the cleared set, and the
/// disabled flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    /// Face name when the card is revealed; `None` while face-down.
    pub face: Option<&'a str>,
    /// Face-up and unresolved.
    pub is_flipped: bool,
    /// Pair already matched; stays revealed and ignores clicks.
    pub is_inactive: bool,
    /// Whether a click on this card would do anything.
    pub is_clickable: bool,
}
