/// Render and resize decisions for one pass of the runner loop
pub struct Coalescer;

impl Coalescer {
    /// Draw when a new snapshot was published or a redraw was forced
    /// (first frame, resize, resume).
    #[inline]
    pub fn decide_render(snapshot_changed: bool, forced: bool) -> bool {
        snapshot_changed || forced
    }

    /// Only the last of several queued resizes is applied.
    #[inline]
    pub fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}
