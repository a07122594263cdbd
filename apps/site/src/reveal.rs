//! Reveal schedule — the stagger timing the page uses for its entrance
//! animations, exposed as pure data.
//!
//! Strictly presentation: the renderer turns delays into `animation-delay`
//! styles on already-bound output. Nothing here feeds back into loading or
//! binding, which keeps the loader/binder core testable without a rendering
//! surface.

/// Kind of section children being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Contacts,
    Skills,
    Timeline,
    Cards,
    Chips,
}

/// Base delay plus per-item step, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl RevealSchedule {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Contacts => Self {
                base_ms: 300,
                step_ms: 100,
            },
            Section::Skills => Self {
                base_ms: 400,
                step_ms: 150,
            },
            Section::Timeline => Self {
                base_ms: 500,
                step_ms: 200,
            },
            Section::Cards => Self {
                base_ms: 600,
                step_ms: 150,
            },
            Section::Chips => Self {
                base_ms: 800,
                step_ms: 100,
            },
        }
    }

    /// Delay for the item at `index`.
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.base_ms + self.step_ms * index as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_base_plus_step_times_index() {
        let schedule = RevealSchedule::for_section(Section::Skills);
        assert_eq!(schedule.delay_ms(0), 400);
        assert_eq!(schedule.delay_ms(1), 550);
        assert_eq!(schedule.delay_ms(4), 1000);
    }

    #[test]
    fn test_timeline_items_reveal_slowest_per_step() {
        let timeline = RevealSchedule::for_section(Section::Timeline);
        let chips = RevealSchedule::for_section(Section::Chips);
        assert!(timeline.step_ms > chips.step_ms);
    }

    #[test]
    fn test_delays_within_a_section_are_monotonic() {
        for section in [
            Section::Contacts,
            Section::Skills,
            Section::Timeline,
            Section::Cards,
            Section::Chips,
        ] {
            let schedule = RevealSchedule::for_section(section);
            assert!(schedule.delay_ms(1) > schedule.delay_ms(0));
        }
    }
}
