use crate::api::{TurfApi, use_api};
use crate::catalog::slot_listing_date;
use crate::session::use_session;
use crate::web::HttpClient;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use turf_shared::Slot;

/// Slots for the fixed listing day. Any failure yields an empty list.
pub async fn fetch_slots<C: HttpClient>(api: &TurfApi<C>) -> Vec<Slot> {
    let Some(date) = slot_listing_date() else {
        warn!("[Slots] listing date is not a valid calendar day");
        return Vec::new();
    };
    match api.slots(date).await {
        Ok(slots) => slots,
        Err(e) => {
            warn!("[Slots] could not load slots for {}: {}", date, e);
            Vec::new()
        }
    }
}

/// Row labels, in the order the backend returned the slots.
pub fn rows(slots: &[Slot]) -> Vec<String> {
    slots.iter().map(Slot::time_range).collect()
}

/// One row per slot.
#[component]
pub fn SlotList() -> impl IntoView {
    let api = use_api().with_token(use_session().token());
    let (slots, set_slots) = signal(Vec::<Slot>::new());

    spawn_local(async move {
        set_slots.set(fetch_slots(&api).await);
    });

    view! {
        <div>
            <h2 class="text-xl font-semibold mb-2">"Available Slots"</h2>
            <ul class="divide-y divide-base-200">
                {move || {
                    slots
                        .with(|list| rows(list))
                        .into_iter()
                        .map(|row| view! { <li class="py-2 font-mono">{row}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::MockHttpClient;

    fn api(client: MockHttpClient) -> TurfApi<MockHttpClient> {
        TurfApi::new("http://api.test", client)
    }

    #[tokio::test]
    async fn rows_follow_response_order() {
        let api = api(MockHttpClient::new().respond(
            200,
            r#"[{"id":7,"startTime":"18:00","endTime":"19:00"},{"id":2,"startTime":"06:00","endTime":"07:00"}]"#,
        ));

        let slots = fetch_slots(&api).await;

        assert_eq!(rows(&slots), vec!["18:00 - 19:00", "06:00 - 07:00"]);
        assert_eq!(api.client().request_count(), 1);
        assert_eq!(api_query(&api), vec![("date".to_string(), "2026-02-15".to_string())]);
    }

    #[tokio::test]
    async fn failures_render_nothing() {
        let api = api(MockHttpClient::new().fail("offline"));
        assert!(fetch_slots(&api).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_renders_nothing() {
        let api = api(MockHttpClient::new().respond(200, r#"{"slots":[]}"#));
        assert!(fetch_slots(&api).await.is_empty());
    }

    fn api_query(api: &TurfApi<MockHttpClient>) -> Vec<(String, String)> {
        api.client()
            .last_request()
            .map(|req| req.query)
            .unwrap_or_default()
    }
}
