/// Paint layer of a draw item.
///
/// Layers are painted in ascending order. Within a layer, circles paint
/// first, then lines, then text (see `render::SceneRenderer`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
