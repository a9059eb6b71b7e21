// ============================================================================
// Gallery
// ============================================================================

/// Ordered run of media links sharing a group name. Order is document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// `href` of every trigger; `None` when the trigger had none.
    pub hrefs: Vec<Option<String>>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// Prev/next only make sense with more than one member.
    pub fn has_many(&self) -> bool {
        self.hrefs.len() > 1
    }
}

/// Position of a single trigger: which group, and where inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerSlot {
    pub group: usize,
    pub index: usize,
}

/// All lightbox groups on a page, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    groups: Vec<Group>,
}

impl Gallery {
    /// Partition triggers into groups.
    ///
    /// Each item is `(group name, href)` in document order. A missing or empty
    /// group name falls back to `default_group`. The returned slots line up
    /// one-to-one with the input triggers.
    pub fn from_triggers<I, S>(triggers: I, default_group: &str) -> (Self, Vec<TriggerSlot>)
    where
        I: IntoIterator<Item = (Option<S>, Option<String>)>,
        S: AsRef<str>,
    {
        let mut groups: Vec<Group> = Vec::new();
        let mut slots = Vec::new();

        for (name, href) in triggers {
            let name: &str = match &name {
                Some(n) if !n.as_ref().is_empty() => n.as_ref(),
                _ => default_group,
            };

            let group = match groups.iter().position(|g| g.name == name) {
                Some(existing) => existing,
                None => {
                    groups.push(Group {
                        name: name.to_string(),
                        hrefs: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            slots.push(TriggerSlot {
                group,
                index: groups[group].hrefs.len(),
            });
            groups[group].hrefs.push(href);
        }

        (Self { groups }, slots)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn trigger_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Step `index` one place in this direction, wrapping inside `len`.
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    /// Group last opened; stays set after close so the overlay keeps its image.
    pub group: Option<usize>,
    pub index: usize,
    pub is_open: bool,
}

/// What the overlay should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub href: Option<String>,
    pub show_nav: bool,
}

/// The single lightbox of a page: its gallery plus open/close/navigate state.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    gallery: Gallery,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            state: LightboxState::default(),
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn current_group(&self) -> Option<&Group> {
        self.state.group.and_then(|g| self.gallery.group(g))
    }

    /// True when the active group has prev/next navigation.
    pub fn has_many(&self) -> bool {
        self.current_group().is_some_and(Group::has_many)
    }

    /// Open at `slot`. Slots outside the gallery are ignored and return `false`.
    pub fn open(&mut self, slot: TriggerSlot) -> bool {
        let in_range = self
            .gallery
            .group(slot.group)
            .is_some_and(|g| slot.index < g.len());
        if !in_range {
            return false;
        }

        self.state = LightboxState {
            group: Some(slot.group),
            index: slot.index,
            is_open: true,
        };
        true
    }

    /// Idempotent.
    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Move one step with wraparound. No-op (returns `false`) when nothing was
    /// ever opened.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(len) = self.current_group().map(Group::len).filter(|len| *len > 0) else {
            return false;
        };
        self.state.index = direction.step(self.state.index, len);
        true
    }

    /// Slide for the current state, whether or not the overlay is open.
    pub fn current(&self) -> Option<Slide> {
        let group = self.current_group()?;
        let href = group.hrefs.get(self.state.index)?.clone();
        Some(Slide {
            href,
            show_nav: group.has_many(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn href(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn three_images() -> Lightbox {
        let (gallery, _) = Gallery::from_triggers(
            vec![
                (Some("trip"), href("a.jpg")),
                (Some("trip"), href("b.jpg")),
                (Some("trip"), href("c.jpg")),
            ],
            "default",
        );
        Lightbox::new(gallery)
    }

    #[test]
    fn test_partition_keeps_document_order() {
        let (gallery, slots) = Gallery::from_triggers(
            vec![
                (Some("a"), href("1.jpg")),
                (None, href("2.jpg")),
                (Some("a"), href("3.jpg")),
                (Some(""), href("4.jpg")),
                (Some("b"), None),
            ],
            "default",
        );

        let names: Vec<&str> = gallery.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["a", "default", "b"]);
        assert_eq!(gallery.groups()[0].hrefs, vec![href("1.jpg"), href("3.jpg")]);
        assert_eq!(gallery.groups()[1].hrefs, vec![href("2.jpg"), href("4.jpg")]);
        assert_eq!(gallery.trigger_count(), 5);
        assert_eq!(
            slots,
            vec![
                TriggerSlot { group: 0, index: 0 },
                TriggerSlot { group: 1, index: 0 },
                TriggerSlot { group: 0, index: 1 },
                TriggerSlot { group: 1, index: 1 },
                TriggerSlot { group: 2, index: 0 },
            ]
        );
    }

    #[test]
    fn test_navigate_scenario() {
        let mut lb = three_images();
        assert!(lb.open(TriggerSlot { group: 0, index: 0 }));
        assert!(lb.is_open());

        lb.navigate(Direction::Next);
        assert_eq!(lb.index(), 1);
        assert_eq!(lb.current().and_then(|s| s.href), href("b.jpg"));

        lb.navigate(Direction::Prev);
        lb.navigate(Direction::Prev);
        assert_eq!(lb.index(), 2);
        assert_eq!(lb.current().and_then(|s| s.href), href("c.jpg"));
    }

    #[test]
    fn test_next_n_times_returns_to_start() {
        let mut lb = three_images();
        for start in 0..3 {
            lb.open(TriggerSlot { group: 0, index: start });
            for _ in 0..3 {
                lb.navigate(Direction::Next);
            }
            assert_eq!(lb.index(), start);
        }
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut lb = three_images();
        lb.open(TriggerSlot { group: 0, index: 0 });
        lb.navigate(Direction::Prev);
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_single_member_hides_nav() {
        let (gallery, slots) = Gallery::from_triggers(
            vec![
                (Some("solo"), href("x.jpg")),
                (None, href("y.jpg")),
                (None, href("z.jpg")),
            ],
            "default",
        );
        let mut lb = Lightbox::new(gallery);

        lb.open(slots[0]);
        assert_eq!(
            lb.current(),
            Some(Slide { href: href("x.jpg"), show_nav: false })
        );
        lb.navigate(Direction::Next);
        assert_eq!(lb.index(), 0);

        lb.open(slots[2]);
        assert!(lb.current().is_some_and(|s| s.show_nav));
    }

    #[test]
    fn test_close_is_idempotent_and_keeps_slide() {
        let mut lb = three_images();
        lb.close();
        assert!(!lb.is_open());

        lb.open(TriggerSlot { group: 0, index: 1 });
        lb.close();
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.current().and_then(|s| s.href), href("b.jpg"));
    }

    #[test]
    fn test_never_opened_is_inert() {
        let mut lb = three_images();
        assert!(!lb.navigate(Direction::Next));
        assert_eq!(lb.current(), None);
        assert!(!lb.open(TriggerSlot { group: 0, index: 7 }));
        assert!(!lb.open(TriggerSlot { group: 4, index: 0 }));
        assert!(!lb.is_open());
    }

    #[test]
    fn test_missing_href_is_unset_source() {
        let (gallery, slots) = Gallery::from_triggers(vec![(None::<&str>, None)], "default");
        let mut lb = Lightbox::new(gallery);
        lb.open(slots[0]);
        assert_eq!(lb.current(), Some(Slide { href: None, show_nav: false }));
    }
}
