use super::section::SectionId;

/// Header height plus a little slack.
pub const DEFAULT_SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Read-only view of the current layout. Implementations must measure on
/// every call; the spy never caches bounds.
pub trait SectionLayout {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self(section)
    }
}

/// Tracks which section sits under a probe line `lookahead` pixels below the
/// top of the viewport.
///
/// Sections are tested in list order and the first match wins. A probe above
/// the first present section selects that section. When nothing contains the
/// probe (past the end of the content, or a gap between sections) the
/// previous selection is kept.
///
/// Each evaluation is linear in the number of sections, which stays cheap for
/// the single-digit section count of a page like this one.
#[derive(Clone, Debug)]
pub struct ScrollSpy {
    sections: Vec<SectionId>,
    lookahead: f64,
    active: SectionId,
}

impl ScrollSpy {
    pub fn new(sections: Vec<SectionId>, lookahead: f64) -> Self {
        let active = sections.first().copied().unwrap_or_default();
        Self {
            sections,
            lookahead,
            active,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn probe(&self, scroll_offset: f64) -> f64 {
        scroll_offset + self.lookahead
    }

    /// Re-evaluates the active section. Returns the new section when it
    /// changed.
    pub fn evaluate(
        &mut self,
        scroll_offset: f64,
        layout: &impl SectionLayout,
    ) -> Option<SectionId> {
        let probe = self.probe(scroll_offset);
        let next = self.select(probe, layout)?;

        if next == self.active {
            return None;
        }

        self.active = next;
        Some(next)
    }

    fn select(&self, probe: f64, layout: &impl SectionLayout) -> Option<SectionId> {
        let mut first_present = None;

        for &section in &self.sections {
            let Some(bounds) = layout.bounds(section) else {
                continue;
            };

            if first_present.is_none() {
                first_present = Some(section);
                if probe < bounds.top {
                    return Some(section);
                }
            }

            if bounds.contains(probe) {
                return Some(section);
            }
        }

        None
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), DEFAULT_SCROLL_LOOKAHEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stacked sections of the given heights starting at `start`.
    fn stacked(start: f64, heights: &[(SectionId, f64)]) -> Vec<(SectionId, SectionBounds)> {
        let mut top = start;
        heights
            .iter()
            .map(|&(section, height)| {
                let bounds = SectionBounds { top, height };
                top += height;
                (section, bounds)
            })
            .collect()
    }

    fn layout_of(
        table: Vec<(SectionId, SectionBounds)>,
    ) -> impl Fn(SectionId) -> Option<SectionBounds> {
        move |section| {
            table
                .iter()
                .find(|(candidate, _)| *candidate == section)
                .map(|(_, bounds)| *bounds)
        }
    }

    #[test]
    fn probe_inside_second_section_selects_it() {
        let layout = layout_of(stacked(
            0.0,
            &[(SectionId::Home, 800.0), (SectionId::About, 800.0)],
        ));
        let mut spy = ScrollSpy::new(vec![SectionId::Home, SectionId::About], 100.0);

        assert_eq!(spy.evaluate(750.0, &layout), Some(SectionId::About));
        assert_eq!(spy.active(), SectionId::About);
    }

    #[test]
    fn unchanged_section_reports_nothing() {
        let layout = layout_of(stacked(0.0, &[(SectionId::Home, 800.0)]));
        let mut spy = ScrollSpy::default();

        assert_eq!(spy.evaluate(0.0, &layout), None);
        assert_eq!(spy.active(), SectionId::Home);
    }

    #[test]
    fn probe_past_the_end_retains_previous_section() {
        let layout = layout_of(stacked(
            0.0,
            &[(SectionId::Home, 800.0), (SectionId::About, 800.0)],
        ));
        let mut spy = ScrollSpy::default();
        spy.evaluate(900.0, &layout);

        assert_eq!(spy.evaluate(10_000.0, &layout), None);
        assert_eq!(spy.active(), SectionId::About);
    }

    #[test]
    fn probe_before_first_section_selects_first() {
        let layout = layout_of(stacked(
            400.0,
            &[(SectionId::Home, 800.0), (SectionId::About, 800.0)],
        ));
        let mut spy = ScrollSpy::default();
        spy.evaluate(1_200.0, &layout);
        assert_eq!(spy.active(), SectionId::About);

        assert_eq!(spy.evaluate(0.0, &layout), Some(SectionId::Home));
    }

    #[test]
    fn overlapping_sections_resolve_to_list_order() {
        let layout = layout_of(vec![
            (SectionId::Projects, SectionBounds { top: 0.0, height: 1_000.0 }),
            (SectionId::Skills, SectionBounds { top: 500.0, height: 1_000.0 }),
        ]);
        let mut spy = ScrollSpy::new(vec![SectionId::Projects, SectionId::Skills], 100.0);
        spy.evaluate(1_100.0, &layout);
        assert_eq!(spy.active(), SectionId::Skills);

        assert_eq!(spy.evaluate(600.0, &layout), Some(SectionId::Projects));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = layout_of(stacked(
            0.0,
            &[(SectionId::Home, 500.0), (SectionId::Contact, 500.0)],
        ));
        let mut spy = ScrollSpy::default();

        assert_eq!(spy.evaluate(600.0, &layout), Some(SectionId::Contact));
    }

    #[test]
    fn empty_layout_keeps_default() {
        let layout = |_: SectionId| -> Option<SectionBounds> { None };
        let mut spy = ScrollSpy::default();

        assert_eq!(spy.evaluate(1_234.0, &layout), None);
        assert_eq!(spy.active(), SectionId::Home);
    }

    #[test]
    fn every_offset_selects_a_known_section() {
        let layout = layout_of(stacked(
            0.0,
            &SectionId::ALL.map(|section| (section, 600.0)),
        ));
        let mut spy = ScrollSpy::default();

        for offset in (0..6_000).step_by(37) {
            spy.evaluate(f64::from(offset), &layout);
            assert!(SectionId::ALL.contains(&spy.active()));
        }
    }

    #[test]
    fn layout_is_read_on_every_evaluation() {
        use std::cell::Cell;

        let about_top = Cell::new(800.0);
        let layout = |section: SectionId| match section {
            SectionId::Home => Some(SectionBounds { top: 0.0, height: about_top.get() }),
            SectionId::About => Some(SectionBounds { top: about_top.get(), height: 800.0 }),
            _ => None,
        };
        let mut spy = ScrollSpy::default();

        assert_eq!(spy.evaluate(750.0, &layout), Some(SectionId::About));

        about_top.set(1_200.0);
        assert_eq!(spy.evaluate(750.0, &layout), Some(SectionId::Home));
    }
}
