//! Client-side list filtering. Pure: inputs are never mutated and nothing
//! here touches the network.

use crate::model::{Driver, Schedule};
use crate::resource::RemoteResource;

/// True when any field contains `needle`, ignoring case. An empty needle
/// matches everything.
pub fn matches_any(needle: &str, fields: &[&str]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Schedule ID or driver ID.
pub fn filter_schedules<'a>(schedules: &'a [Schedule], text: &str) -> Vec<&'a Schedule> {
    schedules
        .iter()
        .filter(|s| matches_any(text, &[s.schedule_id.as_str(), s.driver_id.as_str()]))
        .collect()
}

/// Driver name or driver ID.
pub fn filter_drivers<'a>(drivers: &'a [Driver], text: &str) -> Vec<&'a Driver> {
    drivers
        .iter()
        .filter(|d| matches_any(text, &[d.driver_name.as_str(), d.driver_id.as_str()]))
        .collect()
}

pub fn available_drivers(drivers: &[Driver]) -> Vec<Driver> {
    drivers.iter().filter(|d| d.available).cloned().collect()
}

pub fn schedules_for_driver<'a>(schedules: &'a [Schedule], driver_id: &str) -> Vec<&'a Schedule> {
    schedules.iter().filter(|s| s.driver_id == driver_id).collect()
}

/// Drop rows with `schedule_id` after the backend confirmed the delete.
/// Returns how many rows were removed.
pub fn remove_schedule(schedules: &mut Vec<Schedule>, schedule_id: &str) -> usize {
    let before = schedules.len();
    schedules.retain(|s| s.schedule_id != schedule_id);
    before - schedules.len()
}

/// Changes to the fetched schedule table. Each one is applied to the state
/// held at the time it lands, so concurrent deletes compose.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleTableAction {
    /// A new fetch state replaces the table.
    Load(RemoteResource<Vec<Schedule>>),
    /// The backend confirmed the delete of this schedule.
    Deleted(String),
    /// The backend refused the delete; the row stays.
    DeleteFailed(String),
}

pub fn reduce_schedule_table(
    current: &RemoteResource<Vec<Schedule>>,
    action: ScheduleTableAction,
) -> RemoteResource<Vec<Schedule>> {
    match action {
        ScheduleTableAction::Load(resource) => resource,
        ScheduleTableAction::Deleted(schedule_id) => {
            let mut next = current.clone();
            next.map_ready(|items| {
                let removed = remove_schedule(items, &schedule_id);
                tracing::debug!(schedule_id = %schedule_id, removed, "schedule removed from table");
            });
            next
        }
        ScheduleTableAction::DeleteFailed(schedule_id) => {
            tracing::debug!(schedule_id = %schedule_id, "delete failed, table unchanged");
            current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(id: &str, driver: &str) -> Schedule {
        Schedule {
            schedule_id: id.to_string(),
            driver_id: driver.to_string(),
            ..Default::default()
        }
    }

    fn driver(id: &str, name: &str, available: bool) -> Driver {
        Driver {
            driver_id: id.to_string(),
            driver_name: name.to_string(),
            available,
        }
    }

    #[test]
    fn test_matches_any_ignores_case() {
        assert!(matches_any("", &["x"]));
        assert!(matches_any("ab", &["xaby"]));
        assert!(matches_any("AB", &["xaby"]));
        assert!(matches_any("ab", &["q", "XABY"]));
        assert!(!matches_any("abz", &["xaby"]));
        assert!(!matches_any("zz", &["xaby", "q"]));
    }

    #[test]
    fn test_filter_schedules_by_either_id() {
        let schedules = vec![schedule("S001", "D001"), schedule("S002", "D002"), schedule("S010", "D001")];

        let by_driver = filter_schedules(&schedules, "D001");
        assert_eq!(by_driver.len(), 2);

        let by_schedule = filter_schedules(&schedules, "S00");
        assert_eq!(by_schedule.len(), 2);

        assert_eq!(filter_schedules(&schedules, "s00").len(), 2);
        assert_eq!(filter_schedules(&schedules, "d002").len(), 1);
        assert_eq!(filter_schedules(&schedules, "").len(), 3);
        assert_eq!(schedules.len(), 3);
    }

    #[test]
    fn test_filter_drivers_ignores_case() {
        let drivers = vec![driver("D001", "Kamal Perera", true), driver("D002", "Nimal", false)];

        let hits = filter_drivers(&drivers, "kamal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].driver_id, "D001");

        assert_eq!(filter_drivers(&drivers, "d00").len(), 2);
        assert_eq!(filter_drivers(&drivers, "x").len(), 0);
    }

    #[test]
    fn test_available_drivers() {
        let drivers = vec![driver("D001", "A", true), driver("D002", "B", false), driver("D003", "C", true)];
        let ids: Vec<_> = available_drivers(&drivers).into_iter().map(|d| d.driver_id).collect();
        assert_eq!(ids, vec!["D001", "D003"]);
    }

    #[test]
    fn test_schedules_for_driver_is_exact() {
        let schedules = vec![schedule("S1", "D1"), schedule("S2", "D10"), schedule("S3", "D1")];
        let hits = schedules_for_driver(&schedules, "D1");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|s| s.driver_id == "D1"));
    }

    #[test]
    fn test_remove_schedule_removes_only_matching_row() {
        let mut schedules = vec![schedule("S1", "D1"), schedule("S2", "D1"), schedule("S3", "D2")];
        assert_eq!(remove_schedule(&mut schedules, "S2"), 1);
        let ids: Vec<_> = schedules.iter().map(|s| s.schedule_id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);

        assert_eq!(remove_schedule(&mut schedules, "missing"), 0);
        assert_eq!(schedules.len(), 2);
    }

    fn ids(table: &RemoteResource<Vec<Schedule>>) -> Vec<&str> {
        table
            .data()
            .map(|items| items.iter().map(|s| s.schedule_id.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_concurrent_deletes_compose() {
        let loaded = RemoteResource::Ready(vec![schedule("A", "D1"), schedule("B", "D1"), schedule("C", "D2")]);

        // both deletes were confirmed from the same render; A resolves first
        let after_a = reduce_schedule_table(&loaded, ScheduleTableAction::Deleted("A".to_string()));
        let after_b = reduce_schedule_table(&after_a, ScheduleTableAction::Deleted("B".to_string()));

        assert_eq!(ids(&after_b), vec!["C"]);
    }

    #[test]
    fn test_failed_delete_keeps_table() {
        let loaded = RemoteResource::Ready(vec![schedule("A", "D1"), schedule("B", "D1")]);
        let after = reduce_schedule_table(&loaded, ScheduleTableAction::DeleteFailed("A".to_string()));
        assert_eq!(after, loaded);
    }

    #[test]
    fn test_delete_before_load_is_ignored() {
        let loading: RemoteResource<Vec<Schedule>> = RemoteResource::Loading;
        let after = reduce_schedule_table(&loading, ScheduleTableAction::Deleted("A".to_string()));
        assert!(after.is_loading());

        let reloaded = reduce_schedule_table(
            &after,
            ScheduleTableAction::Load(RemoteResource::Ready(vec![schedule("A", "D1")])),
        );
        assert_eq!(ids(&reloaded), vec!["A"]);
    }
}
