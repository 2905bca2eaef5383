use crate::section::Section;

/// Rows scrolled before the navbar switches to its scrolled look.
pub const SCROLLED_THRESHOLD: usize = 2;
/// Row under the navbar used to decide which section is active.
pub const ACTIVE_PROBE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub start: usize,
    pub len: usize,
}

impl SectionSpan {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.start + self.len
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ScrolledBy(isize),
    PagedDown,
    PagedUp,
    ScrolledToTop,
    ScrolledToBottom,
    ScrollRequested { row: usize },
    Stepped,
    Resized { viewport_height: usize },
    Measured { page_height: usize },
    MenuToggled,
    MenuMoved(isize),
    MenuClosed,
}

/// Scroll position of the page and the state of the section menu.
///
/// Direct scrolling moves the offset at once. `ScrollRequested` only sets a
/// target which `Stepped` approaches a little on every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    offset: usize,
    target: Option<usize>,
    page_height: usize,
    viewport_height: usize,
    menu_open: bool,
    menu_index: usize,
}

impl Navigation {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn max_offset(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_section(&self) -> Section {
        let sections = Section::navigable();
        sections
            .get(self.menu_index)
            .copied()
            .unwrap_or(Section::Hero)
    }

    /// The section under the probe row, or the last one starting above it.
    pub fn active_section(&self, spans: &[SectionSpan]) -> Option<Section> {
        let probe = self.offset + ACTIVE_PROBE;
        spans
            .iter()
            .filter(|span| span.section.nav_label().is_some())
            .find(|span| span.contains(probe))
            .or_else(|| {
                spans
                    .iter()
                    .filter(|span| span.section.nav_label().is_some())
                    .filter(|span| span.start <= probe)
                    .last()
            })
            .map(|span| span.section)
    }

    fn clamp(&self, row: usize) -> usize {
        row.min(self.max_offset())
    }

    fn scroll_to(&mut self, row: usize) {
        self.target = None;
        self.offset = self.clamp(row);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrolledBy(delta) => {
                let row = self.offset.saturating_add_signed(delta);
                self.scroll_to(row);
            }
            Message::PagedDown => {
                let page = self.viewport_height.saturating_sub(1).max(1);
                self.scroll_to(self.offset + page);
            }
            Message::PagedUp => {
                let page = self.viewport_height.saturating_sub(1).max(1);
                self.scroll_to(self.offset.saturating_sub(page));
            }
            Message::ScrolledToTop => self.scroll_to(0),
            Message::ScrolledToBottom => self.scroll_to(self.max_offset()),
            Message::ScrollRequested { row } => {
                let row = self.clamp(row);
                self.target = (row != self.offset).then_some(row);
            }
            Message::Stepped => {
                let Some(target) = self.target else {
                    return;
                };
                let distance = target.abs_diff(self.offset);
                let step = distance.div_ceil(4).max(1);
                self.offset = if target > self.offset {
                    self.offset + step
                } else {
                    self.offset - step
                };
                if self.offset == target {
                    self.target = None;
                }
            }
            Message::Resized { viewport_height } => {
                self.viewport_height = viewport_height;
                self.offset = self.clamp(self.offset);
                self.target = self.target.map(|row| self.clamp(row));
            }
            Message::Measured { page_height } => {
                self.page_height = page_height;
                self.offset = self.clamp(self.offset);
                self.target = self.target.map(|row| self.clamp(row));
            }
            Message::MenuToggled => {
                self.menu_open = !self.menu_open;
            }
            Message::MenuMoved(delta) => {
                let len = Section::navigable().len() as isize;
                self.menu_index = (self.menu_index as isize + delta).rem_euclid(len) as usize;
            }
            Message::MenuClosed => {
                self.menu_open = false;
            }
        }
    }
}
