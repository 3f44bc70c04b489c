use ratatui::layout::Rect;

/// What a pointer press on a screen region means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The search input.
    Input,
    /// The arrow button next to the input.
    Toggle,
    /// A list row.
    Item(String),
    /// The `×` on a chip.
    ChipRemove(String),
    /// The submit button.
    Submit,
    /// Inside the picker but on nothing clickable (borders, dividers).
    Inert,
}

/// Screen regions recorded while drawing one frame.
///
/// Rebuilt on every draw from the render descriptor; later regions win, so
/// widgets push their container first and the clickable parts after.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// The innermost target under `(column, row)`, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rect, &HitTarget)> {
        self.regions.iter().map(|(area, target)| (area, target))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_region_wins() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 20, 10), HitTarget::Inert);
        map.push(Rect::new(2, 2, 5, 1), HitTarget::Item("Bali".into()));

        assert_eq!(map.target_at(3, 2), Some(&HitTarget::Item("Bali".into())));
        assert_eq!(map.target_at(3, 3), Some(&HitTarget::Inert));
        assert_eq!(map.target_at(25, 3), None);
    }

    #[test]
    fn test_edges_are_exclusive() {
        let mut map = HitMap::new();
        map.push(Rect::new(5, 5, 2, 2), HitTarget::Toggle);
        assert!(map.target_at(5, 5).is_some());
        assert!(map.target_at(6, 6).is_some());
        assert!(map.target_at(7, 6).is_none());
        assert!(map.target_at(6, 7).is_none());
    }

    #[test]
    fn test_empty_regions_ignored() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 0, 3), HitTarget::Submit);
        assert!(map.is_empty());
    }
}
