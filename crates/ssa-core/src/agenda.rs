//! Date-range and keyword filtering for the public event listing.
//!
//! Only published, non-deleted events are ever listed.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::record::EventRecord;

/// Which events to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaFilter {
    /// First day listed (inclusive).
    pub from: NaiveDate,
    /// Last day listed (inclusive).
    pub to: NaiveDate,
    /// Lowercased keyword matched against title, description, and location.
    keyword: Option<String>,
}

impl AgendaFilter {
    /// `today` through `today + days`, both inclusive.
    pub fn upcoming(today: NaiveDate, days: u32) -> Self {
        let to = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            from: today,
            to,
            keyword: None,
        }
    }

    /// Sets the keyword, trimmed and lowercased. Blank keywords are dropped.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Whether `event` belongs in the listing.
    pub fn matches(&self, event: &EventRecord) -> bool {
        if !event.is_public() || event.date < self.from || event.date > self.to {
            return false;
        }
        let Some(keyword) = &self.keyword else {
            return true;
        };
        [
            Some(event.title.as_str()),
            event.description.as_deref(),
            event.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(keyword.as_str()))
    }
}

/// Events matching `filter`, in input order.
pub fn filter_events<'a>(
    events: &'a [EventRecord],
    filter: &AgendaFilter,
) -> Vec<&'a EventRecord> {
    let listed: Vec<_> = events.iter().filter(|e| filter.matches(e)).collect();
    tracing::debug!(
        total = events.len(),
        listed = listed.len(),
        "filtered agenda events"
    );
    listed
}

/// Groups events by day.
///
/// Within a day, timed events come first in start order and untimed events
/// last; ties are broken by title.
pub fn group_by_date<'a, I>(events: I) -> BTreeMap<NaiveDate, Vec<&'a EventRecord>>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut days: BTreeMap<NaiveDate, Vec<&EventRecord>> = BTreeMap::new();
    for event in events {
        days.entry(event.date).or_default().push(event);
    }
    for day in days.values_mut() {
        day.sort_by(|a, b| {
            (a.start_time.is_none(), a.start_time, &a.title).cmp(&(
                b.start_time.is_none(),
                b.start_time,
                &b.title,
            ))
        });
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    use crate::status::RecordStatus;
    use crate::time::TimeOfDay;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn event(id: &str, title: &str, day: u32, start: Option<(u32, u32)>) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            date: date(day),
            start_time: start.map(|(h, m)| TimeOfDay::new(h, m).unwrap()),
            end_time: None,
            location: None,
            status: RecordStatus::Published,
            deleted_at: None,
        }
    }

    fn ids(events: &[&EventRecord]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn upcoming_range_is_inclusive() {
        let filter = AgendaFilter::upcoming(date(10), 5);
        assert_eq!(filter.from, date(10));
        assert_eq!(filter.to, date(15));

        let events = [
            event("a", "Before", 9, None),
            event("b", "First", 10, None),
            event("c", "Last", 15, None),
            event("d", "After", 16, None),
        ];
        assert_eq!(ids(&filter_events(&events, &filter)), ["b", "c"]);
    }

    #[test]
    fn drafts_archived_and_deleted_events_are_hidden() {
        let mut draft = event("draft", "Draft", 10, None);
        draft.status = RecordStatus::Draft;
        let mut archived = event("archived", "Archived", 10, None);
        archived.status = RecordStatus::Archived;
        let mut deleted = event("deleted", "Deleted", 10, None);
        deleted.deleted_at = Some(Utc::now());
        let events = [draft, archived, deleted, event("live", "Live", 10, None)];

        let filter = AgendaFilter::upcoming(date(1), 30);
        assert_eq!(ids(&filter_events(&events, &filter)), ["live"]);
    }

    #[test]
    fn keyword_matches_any_text_field_case_insensitively() {
        let mut described = event("desc", "Workshop", 10, None);
        described.description = Some("Intro to KAYAKING".to_string());
        let mut located = event("loc", "Meetup", 10, None);
        located.location = Some("Kayak Club".to_string());
        let events = [
            event("title", "Kayak tour", 10, None),
            described,
            located,
            event("none", "Bake sale", 10, None),
        ];

        let filter =
            AgendaFilter::upcoming(date(1), 30).with_keyword(Some(" kayak ".to_string()));
        assert_eq!(
            ids(&filter_events(&events, &filter)),
            ["title", "desc", "loc"]
        );
    }

    #[test]
    fn blank_keyword_is_ignored() {
        let filter = AgendaFilter::upcoming(date(1), 1).with_keyword(Some("  ".to_string()));
        assert_eq!(filter.keyword(), None);
    }

    #[test]
    fn keyword_is_stored_lowercased() {
        let filter = AgendaFilter::upcoming(date(1), 1).with_keyword(Some(" Kayak ".to_string()));
        assert_eq!(filter.keyword(), Some("kayak"));
    }

    #[test]
    fn groups_by_day_with_untimed_events_last() {
        let events = [
            event("late", "Concert", 12, Some((19, 30))),
            event("untimed", "All day fair", 12, None),
            event("early", "Breakfast", 12, Some((8, 0))),
            event("b", "Beta", 11, Some((10, 0))),
            event("a", "Alpha", 11, Some((10, 0))),
        ];

        let days = group_by_date(&events);
        let order: Vec<(NaiveDate, Vec<String>)> = days
            .into_iter()
            .map(|(day, events)| (day, ids(&events)))
            .collect();
        assert_eq!(
            order,
            vec![
                (date(11), vec!["a".to_string(), "b".to_string()]),
                (
                    date(12),
                    vec![
                        "early".to_string(),
                        "late".to_string(),
                        "untimed".to_string()
                    ]
                ),
            ]
        );
    }
}
