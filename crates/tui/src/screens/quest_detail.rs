//! Quest detail rows rendered with labeled-value cells.

use wyrmdex_data::QuestRecord;

use crate::presentation::widgets::label_value::LabelValueCell;

/// Builds the labeled-value rows for one quest.
///
/// The location row appears only for a known location; subquest rows
/// appear only when a subquest exists; flag-derived rows appear only
/// when their bit is set, so an empty label never renders.
pub fn quest_rows(quest: &QuestRecord) -> Vec<LabelValueCell> {
    let mut rows = vec![
        LabelValueCell::new("", quest.display_name()),
        LabelValueCell::new("Goal", &quest.goal),
    ];

    if quest.location_id > 0 {
        rows.push(LabelValueCell::new(
            "Location",
            format!("#{}", quest.location_id),
        ));
    }

    rows.extend([
        LabelValueCell::new("Type", quest.kind.to_string()),
        LabelValueCell::new("Rank", &quest.rank),
        LabelValueCell::new("Stars", &quest.stars),
        LabelValueCell::new("Time", format!("{} min", quest.time_limit)),
        LabelValueCell::new("Fee", format!("{}z", quest.fee)),
        LabelValueCell::new("Reward", format!("{}z", quest.reward)),
        LabelValueCell::new("HRP", quest.hrp.to_string()),
    ]);

    if !quest.sub_goal.is_empty() {
        rows.push(LabelValueCell::new("Subquest", &quest.sub_goal));
        rows.push(LabelValueCell::new(
            "Sub Reward",
            format!("{}z", quest.sub_reward),
        ));
        rows.push(LabelValueCell::new("Sub HRP", quest.sub_hrp.to_string()));
    }

    if quest.has_gathering_item() {
        rows.push(LabelValueCell::new("Objective", "Gathering item"));
    }
    if quest.requires_academy_points() {
        rows.push(LabelValueCell::new("Requires", "Academy points"));
    }
    if !quest.flavor.is_empty() {
        rows.push(LabelValueCell::new("", &quest.flavor));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmdex_data::QuestFlags;

    fn quest() -> QuestRecord {
        QuestRecord {
            id: 1,
            name: "Jaggi Hunt".into(),
            goal: "Hunt 5 Jaggi".into(),
            time_limit: 50,
            fee: 150,
            reward: 1500,
            ..QuestRecord::default()
        }
    }

    #[test]
    fn name_row_has_no_label() {
        let rows = quest_rows(&quest());
        assert!(!rows[0].label_visible());
        assert_eq!(rows[0].value_text(), "Jaggi Hunt");
    }

    #[test]
    fn location_row_appears_only_for_a_known_location() {
        let mut q = quest();
        assert!(!quest_rows(&q).iter().any(|r| r.label_text() == "Location"));

        q.location_id = 3;
        let rows = quest_rows(&q);
        let location = rows.iter().find(|r| r.label_text() == "Location").unwrap();
        assert_eq!(location.value_text(), "#3");
    }

    #[test]
    fn subquest_rows_only_when_present() {
        let mut q = quest();
        assert!(!quest_rows(&q).iter().any(|r| r.label_text() == "Subquest"));

        q.sub_goal = "Deliver 3 hides".into();
        let rows = quest_rows(&q);
        assert!(rows.iter().any(|r| r.label_text() == "Subquest"));
    }

    #[test]
    fn flag_rows_follow_the_metadata_bits() {
        let mut q = quest();
        q.flags = QuestFlags::GATHERING_ITEM | QuestFlags::ACADEMY_POINTS;

        let rows = quest_rows(&q);
        assert!(rows.iter().any(|r| r.value_text() == "Gathering item"));
        assert!(rows.iter().any(|r| r.value_text() == "Academy points"));
    }
}
