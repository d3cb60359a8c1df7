use alloc::vec::Vec;

use crate::{LocalPosition, Offset, Orientation, SourceId, StickyHost};

/// The single pinned header instance.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PinnedHeader<V> {
    pub(crate) position: usize,
    pub(crate) view: V,
    pub(crate) ignored_by_layout: bool,
}

/// A side effect the lifecycle applies against the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Release,
    Create(usize),
    Rebind(usize),
}

/// What the lifecycle knows about the current pin when planning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Current {
    pub(crate) position: usize,
    /// Whether the pinned view's type still matches the type reported for the target position.
    pub(crate) type_matches: bool,
}

/// Plans the commands that take the pin from `current` to `target`.
///
/// `layout` forces a rebind of an unchanged pin, since a layout pass may have changed its content.
pub(crate) fn plan(current: Option<Current>, target: Option<usize>, layout: bool) -> Vec<Command> {
    let mut out = Vec::new();
    match (current, target) {
        (None, None) => {}
        (Some(_), None) => out.push(Command::Release),
        (None, Some(target)) => out.push(Command::Create(target)),
        (Some(cur), Some(target)) => {
            if !cur.type_matches {
                out.push(Command::Release);
                out.push(Command::Create(target));
            } else if layout || cur.position != target {
                out.push(Command::Rebind(target));
            }
        }
    }
    out
}

/// Owns the pinned header and its drawing offset.
#[derive(Clone, Debug)]
pub(crate) struct PinnedHeaderLifecycle<V> {
    pinned: Option<PinnedHeader<V>>,
    translation: Offset,
    // The header's own row, hidden while the pin stands in for it.
    hidden_original: Option<V>,
}

impl<V> Default for PinnedHeaderLifecycle<V> {
    fn default() -> Self {
        Self {
            pinned: None,
            translation: Offset::ZERO,
            hidden_original: None,
        }
    }
}

impl<V: Clone + PartialEq> PinnedHeaderLifecycle<V> {
    pub(crate) fn pinned(&self) -> Option<&PinnedHeader<V>> {
        self.pinned.as_ref()
    }

    pub(crate) fn pinned_view(&self) -> Option<&V> {
        self.pinned.as_ref().map(|p| &p.view)
    }

    pub(crate) fn translation(&self) -> Offset {
        self.translation
    }

    pub(crate) fn current<H: StickyHost<View = V>>(&self, host: &H, target: usize) -> Option<Current> {
        self.pinned.as_ref().map(|p| Current {
            position: p.position,
            type_matches: host.view_type_of(&p.view) == host.item_view_type(target),
        })
    }

    /// Applies `commands` in order. Returns `true` when a header was created or rebound.
    pub(crate) fn apply<H: StickyHost<View = V>>(
        &mut self,
        host: &mut H,
        commands: &[Command],
        orientation: Orientation,
    ) -> bool {
        let mut bound = false;
        for &command in commands {
            match command {
                Command::Release => self.release(host),
                Command::Create(position) => {
                    self.create(host, position, orientation);
                    bound = true;
                }
                Command::Rebind(position) => {
                    self.rebind(host, position, orientation);
                    bound = true;
                }
            }
        }
        bound
    }

    fn create<H: StickyHost<View = V>>(&mut self, host: &mut H, position: usize, orientation: Orientation) {
        debug_assert!(self.pinned.is_none(), "create with a header already pinned");
        hdebug!(position, "create pinned header");
        let view = host.instantiate(position);
        host.setup_header_view(source_of(host, position), &view);
        host.add_ignored(&view);
        host.measure_and_place(&view, orientation);
        self.pinned = Some(PinnedHeader {
            position,
            view,
            ignored_by_layout: true,
        });
    }

    fn rebind<H: StickyHost<View = V>>(&mut self, host: &mut H, position: usize, orientation: Orientation) {
        let Some(pinned) = self.pinned.as_mut() else {
            return;
        };
        htrace!(from = pinned.position, to = position, "rebind pinned header");
        host.rebind(&pinned.view, position);
        pinned.position = position;
        host.measure_and_place(&pinned.view, orientation);
    }

    /// Scraps the pinned header, if any, and returns it to the recycler.
    pub(crate) fn release<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        self.restore_hidden(host);
        let Some(pinned) = self.pinned.take() else {
            return;
        };
        hdebug!(position = pinned.position, "release pinned header");
        self.translation = Offset::ZERO;
        host.set_translation(&pinned.view, Offset::ZERO);
        host.teardown_header_view(source_of(host, pinned.position), &pinned.view);
        if pinned.ignored_by_layout {
            host.remove_ignored(&pinned.view);
        }
        host.release(pinned.view);
    }

    pub(crate) fn place<H: StickyHost<View = V>>(&mut self, host: &mut H, translation: Offset) {
        let Some(pinned) = self.pinned.as_ref() else {
            return;
        };
        self.translation = translation;
        host.set_translation(&pinned.view, translation);
    }

    /// Hides `original` (the header's own row) while the pin covers it, restoring the previous one.
    pub(crate) fn hide_original<H: StickyHost<View = V>>(&mut self, host: &mut H, original: Option<V>) {
        if self.hidden_original == original {
            return;
        }
        self.restore_hidden(host);
        if let Some(view) = original {
            host.set_visible(&view, false);
            self.hidden_original = Some(view);
        }
    }

    fn restore_hidden<H: StickyHost<View = V>>(&mut self, host: &mut H) {
        if let Some(view) = self.hidden_original.take() {
            host.set_visible(&view, true);
        }
    }

    /// Shifts the recorded position after a structural change. `None` means the item is gone.
    pub(crate) fn remap(&mut self, map: impl FnOnce(usize) -> Option<usize>) -> bool {
        let Some(pinned) = self.pinned.as_mut() else {
            return true;
        };
        match map(pinned.position) {
            Some(position) => {
                pinned.position = position;
                true
            }
            None => false,
        }
    }

    pub(crate) fn detach<H: StickyHost<View = V>>(&self, host: &mut H) {
        if let Some(pinned) = &self.pinned {
            host.detach(&pinned.view);
        }
    }

    pub(crate) fn attach<H: StickyHost<View = V>>(&self, host: &mut H) {
        if let Some(pinned) = &self.pinned {
            host.attach(&pinned.view);
        }
    }
}

fn source_of<H: StickyHost>(host: &H, position: usize) -> SourceId {
    host.resolve(position)
        .map(|LocalPosition { source, .. }| source)
        .unwrap_or(SourceId::ROOT)
}
