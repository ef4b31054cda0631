//! Moving between screens: numbered pages for the tabbed layout, arrow
//! keys between sections for the scrolling one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

/// Tabbed layout. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    previous: Option<usize>,
    total: usize,
}

impl Pager {
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            previous: None,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Staying on the same page or leaving the range is a no-op.
    pub fn go_to(&mut self, page: usize) -> Option<PageChange> {
        if page == self.current || page == 0 || page > self.total {
            return None;
        }
        let change = PageChange {
            from: self.current,
            to: page,
        };
        self.previous = Some(self.current);
        self.current = page;
        Some(change)
    }

    pub fn next(&mut self) -> Option<PageChange> {
        self.go_to(self.current + 1)
    }

    /// CSS classes for page `page`: the active page zooms in, the one we
    /// just left zooms out.
    pub fn page_class(&self, page: usize) -> &'static str {
        if page == self.current {
            "page active"
        } else if Some(page) == self.previous {
            "page prev"
        } else {
            "page"
        }
    }

    pub fn dot_active(&self, page: usize) -> bool {
        page == self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Arrow keys move between sections; everything else is ignored.
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowDown" | "ArrowRight" => Some(Direction::Next),
        "ArrowUp" | "ArrowLeft" => Some(Direction::Previous),
        _ => None,
    }
}

/// How far below the top of the viewport a section may start and still
/// count as the one being read.
pub const SECTION_THRESHOLD_PX: f64 = 80.0;

/// Scrolling layout. Sections are indexed from 0 and clamp at both ends.
///
/// Holds no cursor: wheel, touch and scrollbar move the page too, so the
/// caller reads the current section from the layout on every key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNav {
    count: usize,
}

impl SectionNav {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Section to scroll to from `current`, or `None` at either end. An
    /// out of range `current` is treated as the last section.
    pub fn step_from(&self, current: usize, direction: Direction) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let current = current.min(self.count - 1);
        match direction {
            Direction::Next if current + 1 < self.count => Some(current + 1),
            Direction::Previous if current > 0 => Some(current - 1),
            _ => None,
        }
    }

    pub fn jump(&self, index: usize) -> Option<usize> {
        (index < self.count).then_some(index)
    }
}

/// The section being read, given each section's top edge relative to the
/// viewport: the last one whose top is at or above `threshold`. Before the
/// first section reaches it, that is section 0.
pub fn section_at(tops: &[f64], threshold: f64) -> usize {
    tops.iter().rposition(|&top| top <= threshold).unwrap_or(0)
}
