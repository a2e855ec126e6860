//! Draft state behind the add/update schedule forms.

use crate::model::{BinStatus, Schedule};

/// Smart bin offered as a checkbox on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinOption {
    pub id: &'static str,
    pub status: BinStatus,
    pub processed: bool,
}

pub const DEFAULT_BINS: [BinOption; 6] = [
    BinOption { id: "SB001", status: BinStatus::Full, processed: false },
    BinOption { id: "SB002", status: BinStatus::Full, processed: false },
    BinOption { id: "SB003", status: BinStatus::Full, processed: false },
    BinOption { id: "SB004", status: BinStatus::Full, processed: false },
    BinOption { id: "SB005", status: BinStatus::Full, processed: false },
    BinOption { id: "SB006", status: BinStatus::Available, processed: false },
];

/// Only full bins nobody has picked up yet can be scheduled.
pub fn selectable_bins() -> Vec<&'static str> {
    DEFAULT_BINS
        .iter()
        .filter(|bin| bin.status == BinStatus::Full && !bin.processed)
        .map(|bin| bin.id)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub schedule_id: String,
    pub selected_bins: Vec<String>,
    pub driver_id: String,
    pub time: String,
    pub route: String,
}

impl ScheduleDraft {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            schedule_id: schedule.schedule_id.clone(),
            selected_bins: schedule.smart_bins.clone(),
            driver_id: schedule.driver_id.clone(),
            time: schedule.time.clone(),
            route: schedule.route.clone(),
        }
    }

    /// Checkbox handler: add on check, remove on uncheck. Order of selection
    /// is kept and a bin is never listed twice.
    pub fn toggle_bin(&mut self, bin_id: &str, checked: bool) {
        if checked {
            if !self.is_selected(bin_id) {
                self.selected_bins.push(bin_id.to_string());
            }
        } else {
            self.selected_bins.retain(|bin| bin != bin_id);
        }
    }

    pub fn is_selected(&self, bin_id: &str) -> bool {
        self.selected_bins.iter().any(|bin| bin == bin_id)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_schedule(&self) -> Schedule {
        Schedule {
            schedule_id: self.schedule_id.clone(),
            smart_bins: self.selected_bins.clone(),
            driver_id: self.driver_id.clone(),
            time: self.time.clone(),
            route: self.route.clone(),
        }
    }
}

/// Parse the update form's bin text. Splits on `", "` only, so `"SB1,SB2"`
/// stays a single entry.
pub fn parse_bin_list(text: &str) -> Vec<String> {
    text.split(", ").map(str::to_string).collect()
}

pub fn join_bin_list(bins: &[String]) -> String {
    bins.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_bins_excludes_available() {
        assert_eq!(selectable_bins(), vec!["SB001", "SB002", "SB003", "SB004", "SB005"]);
    }

    #[test]
    fn test_draft_builds_exact_payload() {
        let mut draft = ScheduleDraft {
            schedule_id: "S00003".to_string(),
            driver_id: "D001".to_string(),
            time: "10:30".to_string(),
            route: "City Center".to_string(),
            ..Default::default()
        };
        draft.toggle_bin("SB001", true);
        draft.toggle_bin("SB002", true);

        let payload = serde_json::to_value(draft.to_schedule()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "scheduleId": "S00003",
                "smartBins": ["SB001", "SB002"],
                "driverId": "D001",
                "time": "10:30",
                "route": "City Center"
            })
        );

        draft.reset();
        assert_eq!(draft, ScheduleDraft::default());
    }

    #[test]
    fn test_toggle_bin_by_presence() {
        let mut draft = ScheduleDraft::default();
        draft.toggle_bin("SB003", true);
        draft.toggle_bin("SB001", true);
        draft.toggle_bin("SB003", true);
        assert_eq!(draft.selected_bins, vec!["SB003", "SB001"]);

        draft.toggle_bin("SB003", false);
        assert_eq!(draft.selected_bins, vec!["SB001"]);
        assert!(!draft.is_selected("SB003"));

        draft.toggle_bin("SB009", false);
        assert_eq!(draft.selected_bins, vec!["SB001"]);
    }

    #[test]
    fn test_bin_list_text_round_trip() {
        let bins = parse_bin_list("SB001, SB002, SB003");
        assert_eq!(bins, vec!["SB001", "SB002", "SB003"]);
        assert_eq!(join_bin_list(&bins), "SB001, SB002, SB003");

        assert_eq!(parse_bin_list("SB001,SB002"), vec!["SB001,SB002"]);
        assert_eq!(parse_bin_list(""), vec![""]);
    }

    #[test]
    fn test_draft_from_schedule() {
        let schedule = Schedule {
            schedule_id: "S1".to_string(),
            smart_bins: vec!["SB004".to_string()],
            driver_id: "D2".to_string(),
            time: "08:00".to_string(),
            route: "Kandy Road".to_string(),
        };
        assert_eq!(ScheduleDraft::from_schedule(&schedule).to_schedule(), schedule);
    }
}
