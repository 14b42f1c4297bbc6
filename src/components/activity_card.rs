use dioxus::prelude::*;
use crate::utils::{Activity, LocaleDateTime};

/// Shown as the only list entry when nobody has joined
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

#[derive(Props, Clone, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
}

/// Card for a single activity: title, description, date, time, location
/// and the participant list. Stateless; the record is only read.
#[component]
pub fn ActivityCard(props: ActivityCardProps) -> Element {
    let activity = &props.activity;

    // Date and time labels come from the same parsed instant
    let when = LocaleDateTime::parse(&activity.date);
    let date_label = when.format_date();
    let time_label = when.format_time();

    rsx! {
        div {
            class: "activity-card",

            h4 { class: "activity-card-title", "{activity.title}" }

            p { class: "activity-card-description", "{activity.description}" }

            p {
                class: "activity-card-date",
                strong { "Date:" }
                " {date_label}"
            }

            p {
                class: "activity-card-time",
                strong { "Time:" }
                " {time_label}"
            }

            p {
                class: "activity-card-location",
                strong { "Location:" }
                " {activity.location}"
            }

            ParticipantList { participants: activity.participants.clone() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ParticipantListProps {
    pub participants: Vec<String>,
}

/// Participants block of the card, in input order
#[component]
pub fn ParticipantList(props: ParticipantListProps) -> Element {
    rsx! {
        div {
            class: "activity-card-participants",

            div { class: "activity-card-participants-title", "Participants" }

            ul {
                class: "activity-card-participants-list",

                if props.participants.is_empty() {
                    li { class: "activity-card-participants-empty", "{NO_PARTICIPANTS_TEXT}" }
                } else {
                    // Position keys: the list is never reordered apart from its record
                    for (index, participant) in props.participants.iter().enumerate() {
                        li { key: "participant-{index}", "{participant}" }
                    }
                }
            }
        }
    }
}

/// Skeleton loader for activity cards
#[component]
pub fn ActivityCardSkeleton() -> Element {
    rsx! {
        div {
            class: "activity-card activity-card-skeleton animate-pulse",

            // Title skeleton
            div { class: "h-5 w-2/3 bg-muted rounded" }

            // Description skeleton
            div { class: "h-4 w-full bg-muted rounded" }
            div { class: "h-4 w-3/4 bg-muted rounded" }

            // Date, time, location
            div { class: "h-4 w-1/3 bg-muted rounded" }
            div { class: "h-4 w-1/4 bg-muted rounded" }
            div { class: "h-4 w-1/2 bg-muted rounded" }

            // Participants skeleton
            div {
                class: "activity-card-participants",
                div { class: "h-4 w-24 bg-muted rounded" }
                div { class: "h-4 w-20 bg-muted rounded" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn render_card(activity: Activity) -> String {
        let mut dom = VirtualDom::new_with_props(ActivityCard, ActivityCardProps { activity });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_participants(participants: Vec<String>) -> String {
        let mut dom = VirtualDom::new_with_props(
            ParticipantList,
            ParticipantListProps { participants },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn beach_cleanup(participants: Option<Vec<String>>) -> Activity {
        Activity::new(
            "Beach Cleanup",
            "Help clean the shore",
            "2024-06-01T09:00:00Z",
            "Main Beach",
        )
        .with_participants(participants)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_renders_all_fields() {
        let html = render_card(beach_cleanup(Some(names(&["Alice", "Bob"]))));

        assert!(html.contains("class=\"activity-card\""));
        assert!(html.contains(">Beach Cleanup</h4>"));
        assert!(html.contains(">Help clean the shore</p>"));
        assert!(html.contains(
            "<p class=\"activity-card-location\"><strong>Location:</strong> Main Beach</p>"
        ));
        assert!(html.contains(">Participants</div>"));
    }

    #[test]
    fn test_participants_in_order() {
        let html = render_card(beach_cleanup(Some(names(&["Alice", "Bob"]))));

        assert_eq!(html.matches("<li").count(), 2);
        let alice = html.find(">Alice</li>").unwrap();
        let bob = html.find(">Bob</li>").unwrap();
        assert!(alice < bob);
        assert!(!html.contains(NO_PARTICIPANTS_TEXT));
    }

    #[test]
    fn test_empty_participants_show_placeholder() {
        let html = render_card(beach_cleanup(Some(Vec::new())));

        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains(">No participants yet</li>"));
    }

    #[test]
    fn test_missing_participants_show_placeholder() {
        let html = render_card(beach_cleanup(None));
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains(NO_PARTICIPANTS_TEXT));

        let from_json = Activity::from_json(r#"{"title": "Chess Club", "participants": null}"#).unwrap();
        let html = render_card(from_json);
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains(NO_PARTICIPANTS_TEXT));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = render_participants(names(&["Sam", "Ana", "Sam"]));

        assert_eq!(html.matches("<li").count(), 3);
        assert_eq!(html.matches(">Sam</li>").count(), 2);
        let first_sam = html.find(">Sam</li>").unwrap();
        let ana = html.find(">Ana</li>").unwrap();
        assert!(first_sam < ana);
    }

    #[test]
    fn test_date_and_time_labels() {
        let activity = beach_cleanup(None);
        let when = LocaleDateTime::parse("2024-06-01T09:00:00Z");
        let html = render_card(activity);

        assert!(html.contains("<strong>Date:</strong>"));
        assert!(html.contains("<strong>Time:</strong>"));
        assert!(html.contains(&when.format_date_in(&Local)));
        assert!(html.contains(&when.format_time_in(&Local)));
    }

    #[test]
    fn test_invalid_date_passes_through() {
        let activity = Activity::new("Picnic", "Bring food", "sometime soon", "Park");
        let html = render_card(activity);

        assert_eq!(html.matches("Invalid Date").count(), 2);
        assert!(html.contains(">Picnic</h4>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let activity = beach_cleanup(Some(names(&["Alice", "Bob"])));
        assert_eq!(render_card(activity.clone()), render_card(activity));
    }

    #[test]
    fn test_empty_record_still_renders() {
        let html = render_card(Activity::default());

        assert!(html.contains("activity-card-title"));
        assert!(html.contains(NO_PARTICIPANTS_TEXT));
        assert_eq!(html.matches("Invalid Date").count(), 2);
    }

    #[test]
    fn test_skeleton_has_no_list() {
        let mut dom = VirtualDom::new(ActivityCardSkeleton);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("activity-card-skeleton"));
        assert!(!html.contains("<li"));
    }
}
