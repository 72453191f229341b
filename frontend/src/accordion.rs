//! Open/closed bookkeeping for a group of collapsible panels where at most
//! one panel may be open at a time.
//!
//! Everything in here is plain data. The FAQ component measures content
//! heights and feeds them in, then renders whatever [`GroupState::project`]
//! hands back.

use log::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panel {
    pub is_open: bool,
    /// Pixel height of the content region, taken the last time the panel opened.
    pub measured_height: Option<u32>,
}

/// What the rendering layer needs for one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub expanded: bool,
    pub max_height: Option<u32>,
}

impl PanelView {
    pub fn style(&self) -> String {
        match self.max_height {
            Some(px) => format!("max-height: {}px", px),
            None => String::new(),
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupState {
    panels: Vec<Panel>,
}

impl GroupState {
    /// Builds the group from the static "initially open" markers, in order.
    /// Only the first marked panel is honoured so the group starts out valid.
    pub fn new<I>(open_markers: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut seen_open = false;
        let panels = open_markers
            .into_iter()
            .enumerate()
            .map(|(index, marked)| {
                let is_open = marked && !seen_open;
                if marked && seen_open {
                    warn!("faq panel {} marked open but another panel already is; starting it closed", index);
                }
                seen_open |= is_open;
                Panel { is_open, measured_height: None }
            })
            .collect();
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.panels.get(index).map_or(false, |p| p.is_open)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.is_open)
    }

    /// Records a content height for a panel without changing whether it is open.
    pub fn measure(&self, index: usize, height: u32) -> Self {
        let mut next = self.clone();
        if let Some(panel) = next.panels.get_mut(index) {
            panel.measured_height = Some(height);
        }
        next
    }

    /// Handles a click on the header of panel `index`.
    ///
    /// Every other panel is closed whatever the activated panel's state was.
    /// The activated panel then flips: closed if it was open, otherwise open
    /// with `measured_height` as its target height.
    pub fn activate(&self, index: usize, measured_height: u32) -> Self {
        let was_open = match self.panels.get(index) {
            Some(panel) => panel.is_open,
            None => {
                warn!("activation of faq panel {} ignored, group has {} panels", index, self.panels.len());
                return self.clone();
            }
        };

        let mut next = self.clone();
        for (i, panel) in next.panels.iter_mut().enumerate() {
            if i != index {
                panel.is_open = false;
            }
        }

        let target = &mut next.panels[index];
        if was_open {
            target.is_open = false;
        } else {
            target.is_open = true;
            target.measured_height = Some(measured_height);
        }

        debug!("faq panel {} activated (was open: {}), open panel now {:?}", index, was_open, next.open_index());
        next
    }

    pub fn project(&self) -> Vec<PanelView> {
        self.panels
            .iter()
            .map(|panel| {
                if panel.is_open {
                    PanelView { expanded: true, max_height: panel.measured_height }
                } else {
                    PanelView { expanded: false, max_height: Some(0) }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(group: &GroupState) -> Vec<bool> {
        group.panels().iter().map(|p| p.is_open).collect()
    }

    fn assert_at_most_one_open(group: &GroupState) {
        let open = group.panels().iter().filter(|p| p.is_open).count();
        assert!(open <= 1, "{} panels open: {:?}", open, states(group));
    }

    #[test]
    fn opening_a_closed_panel_in_a_closed_group() {
        let group = GroupState::new([false, false, false]);
        let group = group.activate(1, 120);
        assert_eq!(states(&group), vec![false, true, false]);
        assert_eq!(group.open_index(), Some(1));
    }

    #[test]
    fn activating_the_open_panel_collapses_everything() {
        let group = GroupState::new([false, false, false]).activate(1, 120);
        let group = group.activate(1, 120);
        assert_eq!(states(&group), vec![false, false, false]);
        assert_eq!(group.open_index(), None);
    }

    #[test]
    fn later_activation_wins() {
        let group = GroupState::new([false, false, false])
            .activate(1, 80)
            .activate(1, 80)
            .activate(0, 60)
            .activate(2, 90);
        assert_eq!(states(&group), vec![false, false, true]);
    }

    #[test]
    fn single_initially_open_panel_toggles() {
        let group = GroupState::new([true]);
        assert!(group.is_open(0));
        let group = group.activate(0, 40);
        assert!(!group.is_open(0));
        let group = group.activate(0, 40);
        assert!(group.is_open(0));
    }

    #[test]
    fn opening_one_closes_the_other() {
        let group = GroupState::new([false, true, false, false]);
        let group = group.activate(3, 200);
        assert!(group.is_open(3));
        assert!(!group.is_open(1));
        assert_at_most_one_open(&group);
    }

    #[test]
    fn invariant_holds_over_long_sequences() {
        let mut group = GroupState::new([false; 5]);
        // deterministic pseudo-random walk over panel indices
        let mut seed = 7usize;
        for _ in 0..500 {
            seed = (seed * 31 + 11) % 97;
            group = group.activate(seed % 5, seed as u32);
            assert_at_most_one_open(&group);
        }
    }

    #[test]
    fn multiple_open_markers_keep_only_the_first() {
        let group = GroupState::new([false, true, true]);
        assert_eq!(states(&group), vec![false, true, false]);
    }

    #[test]
    fn out_of_range_activation_is_a_no_op() {
        let group = GroupState::new([false, true]);
        assert_eq!(group.activate(5, 10), group);
    }

    #[test]
    fn empty_group_is_fine() {
        let group = GroupState::new(std::iter::empty());
        assert!(group.is_empty());
        assert_eq!(group.activate(0, 10), group);
        assert!(group.project().is_empty());
    }

    #[test]
    fn projection_uses_measured_height_for_the_open_panel() {
        let group = GroupState::new([false, false]).activate(0, 172);
        let views = group.project();
        assert_eq!(views[0], PanelView { expanded: true, max_height: Some(172) });
        assert_eq!(views[1], PanelView { expanded: false, max_height: Some(0) });
        assert_eq!(views[0].style(), "max-height: 172px");
        assert_eq!(views[1].style(), "max-height: 0px");
        assert_eq!(views[0].aria_expanded(), "true");
        assert_eq!(views[1].aria_expanded(), "false");
    }

    #[test]
    fn unmeasured_open_panel_leaves_height_to_css() {
        let group = GroupState::new([true]);
        assert_eq!(group.project()[0].style(), "");
        let group = group.measure(0, 64);
        assert_eq!(group.project()[0].style(), "max-height: 64px");
        assert!(group.is_open(0));
    }

    #[test]
    fn reopening_remeasures() {
        let group = GroupState::new([false]).activate(0, 50).activate(0, 50).activate(0, 75);
        assert_eq!(group.panels()[0].measured_height, Some(75));
    }
}
