use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// Two lists compare equal when they recorded the same commands in the same
/// order, which is what "pixel-identical output" means before rasterization.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command on layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Distinct layers present in the list, back to front.
    pub fn layers(&self) -> Vec<ZIndex> {
        let mut zs: Vec<ZIndex> = self.items.iter().map(|i| i.key.z).collect();
        zs.sort_unstable();
        zs.dedup();
        zs
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

impl PartialEq for DrawList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn dot(list: &mut DrawList, z: i32, x: f32) {
        list.push_solid_circle(ZIndex(z), Vec2::new(x, 0.0), 1.0, Color::rgb(0, 0, 0));
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                other => panic!("unexpected command {other:?}"),
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_layer_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 2, 1.0);
        dot(&mut list, 0, 2.0);
        dot(&mut list, 2, 3.0);
        dot(&mut list, 1, 4.0);

        assert_eq!(xs(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
        assert_eq!(list.layers(), vec![ZIndex(0), ZIndex(1), ZIndex(2)]);
    }

    #[test]
    fn clear_resets_order_and_equality() {
        let mut a = DrawList::new();
        dot(&mut a, 0, 1.0);
        a.clear();
        dot(&mut a, 0, 5.0);

        let mut b = DrawList::new();
        dot(&mut b, 0, 5.0);

        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn re_sorts_after_push_following_iteration() {
        let mut list = DrawList::new();
        dot(&mut list, 1, 1.0);
        assert_eq!(xs(&mut list), vec![1.0]);
        dot(&mut list, 0, 2.0);
        assert_eq!(xs(&mut list), vec![2.0, 1.0]);
    }
}
