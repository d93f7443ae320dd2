use super::{Course, CourseUniversityLink};

pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum LinkState {
    Pending,
    Loaded(Vec<CourseUniversityLink>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotState {
    pub course: Course,
    pub links: LinkState,
}

impl SlotState {
    pub fn links(&self) -> Option<&[CourseUniversityLink]> {
        match &self.links {
            LinkState::Pending => None,
            LinkState::Loaded(links) => Some(links),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SlotAction {
    Select { slot: usize, course: Course },
    Clear { slot: usize },
    LinksLoaded {
        slot: usize,
        course_id: String,
        links: Vec<CourseUniversityLink>,
    },
    LinksFailed { slot: usize, course_id: String },
}

/// The three comparison positions. Every change goes through [`reduce`],
/// which returns a new snapshot and leaves the old one untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSlots {
    slots: [Option<SlotState>; SLOT_COUNT],
}

impl ComparisonSlots {
    pub fn get(&self, slot: usize) -> Option<&SlotState> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn filled(&self) -> impl Iterator<Item = (usize, &SlotState)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|state| (idx, state)))
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    pub fn course_ids(&self) -> Vec<String> {
        self.filled()
            .map(|(_, state)| state.course.id.clone())
            .collect()
    }
}

pub fn reduce(state: &ComparisonSlots, action: SlotAction) -> ComparisonSlots {
    let mut next = state.clone();

    match action {
        SlotAction::Select { slot, course } => {
            if let Some(entry) = next.slots.get_mut(slot) {
                *entry = Some(SlotState {
                    course,
                    links: LinkState::Pending,
                });
            }
        }
        SlotAction::Clear { slot } => {
            if let Some(entry) = next.slots.get_mut(slot) {
                *entry = None;
            }
        }
        SlotAction::LinksLoaded {
            slot,
            course_id,
            links,
        } => set_links(&mut next, slot, &course_id, links),
        // A failed lookup reads as "offered nowhere" rather than an error.
        SlotAction::LinksFailed { slot, course_id } => {
            set_links(&mut next, slot, &course_id, Vec::new())
        }
    }

    next
}

pub fn reduce_all(
    state: &ComparisonSlots,
    actions: impl IntoIterator<Item = SlotAction>,
) -> ComparisonSlots {
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}

fn set_links(
    slots: &mut ComparisonSlots,
    slot: usize,
    course_id: &str,
    links: Vec<CourseUniversityLink>,
) {
    // Links for a course that has since been replaced are dropped.
    if let Some(Some(state)) = slots.slots.get_mut(slot) {
        if state.course.id == course_id {
            state.links = LinkState::Loaded(links);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str) -> Course {
        serde_json::from_value(serde_json::json!({ "id": id, "name": id })).unwrap()
    }

    fn link(course: &str, fee: f64) -> CourseUniversityLink {
        serde_json::from_value(serde_json::json!({
            "id": format!("{course}-{fee}"),
            "course": course,
            "university": "u",
            "fees_ksh": fee,
        }))
        .unwrap()
    }

    #[test]
    fn select_then_load_links() {
        let empty = ComparisonSlots::default();
        let selected = reduce(
            &empty,
            SlotAction::Select {
                slot: 1,
                course: course("a"),
            },
        );
        let loaded = reduce(
            &selected,
            SlotAction::LinksLoaded {
                slot: 1,
                course_id: "a".into(),
                links: vec![link("a", 100.0)],
            },
        );

        assert_eq!(empty.filled_count(), 0);
        assert_eq!(selected.get(1).unwrap().links(), None);
        assert_eq!(loaded.get(1).unwrap().links().unwrap().len(), 1);
        assert_eq!(loaded.course_ids(), vec!["a".to_string()]);
    }

    #[test]
    fn stale_links_are_ignored() {
        let state = reduce(
            &ComparisonSlots::default(),
            SlotAction::Select {
                slot: 0,
                course: course("new"),
            },
        );
        let next = reduce(
            &state,
            SlotAction::LinksLoaded {
                slot: 0,
                course_id: "old".into(),
                links: vec![link("old", 1.0)],
            },
        );

        assert_eq!(next, state);
    }

    #[test]
    fn failed_links_degrade_to_empty() {
        let state = reduce(
            &ComparisonSlots::default(),
            SlotAction::Select {
                slot: 2,
                course: course("c"),
            },
        );
        let next = reduce(
            &state,
            SlotAction::LinksFailed {
                slot: 2,
                course_id: "c".into(),
            },
        );

        assert_eq!(next.get(2).unwrap().links(), Some(&[][..]));
    }

    #[test]
    fn clear_and_out_of_range() {
        let state = reduce(
            &ComparisonSlots::default(),
            SlotAction::Select {
                slot: 0,
                course: course("a"),
            },
        );

        let cleared = reduce(&state, SlotAction::Clear { slot: 0 });
        let ignored = reduce(
            &state,
            SlotAction::Select {
                slot: 7,
                course: course("b"),
            },
        );

        assert_eq!(cleared.filled_count(), 0);
        assert_eq!(ignored, state);
    }
}
