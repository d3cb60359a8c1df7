use sticky_headers::{
    Bounds, HeaderHooks, ItemSource, Offset, Orientation, Recycler, Size, StickyHeaders,
    StickyHeadersOptions, ViewportAccessor,
};

const SECTION: usize = 8;
const HEADER: i32 = 24;
const ROW: i32 = 16;

// A vertical list of 40 items: every 8th one is a section header.
struct List {
    items: usize,
    height: i32,
    scroll: i32,
    // (position, layout bounds, translation) per view handle.
    views: Vec<(usize, Bounds, Offset)>,
    rows: Vec<usize>,
    pinned: Vec<usize>,
    detached: Vec<usize>,
}

fn is_header(position: usize) -> bool {
    position % SECTION == 0
}

impl List {
    fn size_of(position: usize) -> i32 {
        if is_header(position) { HEADER } else { ROW }
    }

    fn layout(&mut self) {
        self.rows.clear();
        let mut top = -self.scroll;
        for position in 0..self.items {
            let bottom = top + Self::size_of(position);
            if bottom > 0 && top < self.height {
                let bounds = Bounds {
                    left: 0,
                    top,
                    right: 200,
                    bottom,
                };
                self.views.push((position, bounds, Offset::ZERO));
                self.rows.push(self.views.len() - 1);
            }
            top = bottom;
        }
    }

    fn attached_pins(&self) -> impl Iterator<Item = usize> + '_ {
        self.pinned
            .iter()
            .copied()
            .filter(|v| !self.detached.contains(v))
    }
}

impl ViewportAccessor for List {
    type View = usize;

    fn child_count(&self) -> usize {
        self.rows.len() + self.attached_pins().count()
    }

    fn child_at(&self, index: usize) -> Option<usize> {
        match self.rows.get(index) {
            Some(&view) => Some(view),
            None => self.attached_pins().nth(index - self.rows.len()),
        }
    }

    fn position_of(&self, view: &usize) -> Option<usize> {
        self.views.get(*view).map(|v| v.0)
    }

    fn view_type_of(&self, view: &usize) -> u32 {
        self.item_view_type(self.views[*view].0)
    }

    fn bounds(&self, view: &usize) -> Bounds {
        let (_, b, t) = self.views[*view];
        Bounds {
            top: b.top + t.y as i32,
            bottom: b.bottom + t.y as i32,
            ..b
        }
    }

    fn viewport_size(&self) -> Size {
        Size {
            width: 200,
            height: self.height,
        }
    }

    fn detach(&mut self, view: &usize) {
        self.detached.push(*view);
    }

    fn attach(&mut self, view: &usize) {
        self.detached.retain(|v| v != view);
    }

    fn add_ignored(&mut self, view: &usize) {
        self.pinned.push(*view);
    }

    fn remove_ignored(&mut self, view: &usize) {
        self.pinned.retain(|v| v != view);
    }

    fn measure_and_place(&mut self, view: &usize, _orientation: Orientation) {
        let size = Self::size_of(self.views[*view].0);
        self.views[*view].1 = Bounds {
            left: 0,
            top: 0,
            right: 200,
            bottom: size,
        };
    }

    fn set_translation(&mut self, view: &usize, translation: Offset) {
        self.views[*view].2 = translation;
    }

    fn scroll_to_position(&mut self, position: usize, offset: Option<i32>) {
        let start: i32 = (0..position).map(Self::size_of).sum();
        self.scroll = (start - offset.unwrap_or(0)).max(0);
    }
}

impl Recycler for List {
    fn instantiate(&mut self, position: usize) -> usize {
        self.views.push((position, Bounds::default(), Offset::ZERO));
        self.views.len() - 1
    }

    fn rebind(&mut self, view: &usize, position: usize) {
        self.views[*view].0 = position;
    }

    fn release(&mut self, _view: usize) {}
}

impl ItemSource for List {
    fn item_count(&self) -> usize {
        self.items
    }

    fn item_view_type(&self, position: usize) -> u32 {
        u32::from(is_header(position))
    }
}

impl HeaderHooks for List {}

fn main() {
    let mut list = List {
        items: 40,
        height: 120,
        scroll: 0,
        views: Vec::new(),
        rows: Vec::new(),
        pinned: Vec::new(),
        detached: Vec::new(),
    };
    let options = StickyHeadersOptions::new(|_, position| is_header(position));
    let mut engine = StickyHeaders::new(options);
    engine.attach_source(&mut list);
    engine.on_layout_children(&mut list, false, |l| l.layout());
    engine.on_layout_completed(&mut list);

    for _ in 0..12 {
        engine.scroll_by(&mut list, 20, |l, delta| {
            l.scroll += delta;
            l.layout();
            delta
        });
        println!(
            "scroll={:>3} pinned={:?} translation={:?}",
            list.scroll,
            engine.pinned_position(),
            engine.translation()
        );
    }

    engine.request_scroll(&mut list, 21, Some(0));
    engine.on_layout_children(&mut list, false, |l| l.layout());
    engine.on_layout_completed(&mut list);
    println!(
        "after request_scroll(21): scroll={} pinned={:?} pending={}",
        list.scroll,
        engine.pinned_position(),
        engine.has_pending_scroll()
    );
}
