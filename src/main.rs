#![allow(non_snake_case)]

use anyhow::Context;
use dioxus::prelude::*;

// Modules
mod components;
mod utils;

use components::{ActivityCard, ActivityCardSkeleton};
use utils::Activity;

const SAMPLE_ACTIVITIES: &str = include_str!("../assets/sample_activities.json");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting activity card demo");

    dioxus::launch(App);
}

fn load_sample_activities() -> anyhow::Result<Vec<Activity>> {
    Activity::list_from_json(SAMPLE_ACTIVITIES).context("Failed to read bundled sample activities")
}

#[component]
fn App() -> Element {
    let activities = match load_sample_activities() {
        Ok(activities) => activities,
        Err(e) => {
            log::error!("{:#}", e);
            return rsx! {
                div {
                    class: "activity-grid",
                    ActivityCardSkeleton {}
                    p { class: "activity-grid-error", "Could not load activities" }
                }
            };
        }
    };

    rsx! {
        div {
            class: "activity-grid",
            for (index, activity) in activities.into_iter().enumerate() {
                ActivityCard { key: "activity-{index}", activity }
            }
        }
    }
}
