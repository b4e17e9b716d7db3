use crate::api::use_api;
use crate::auth::{AuthMode, AuthPhase, AuthScreen, authenticate};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    let screen = RwSignal::new(AuthScreen::default());
    let mode = move || screen.with(|s| s.mode);
    let is_signup = move || mode() == AuthMode::Signup;
    let error_msg = move || screen.with(|s| s.error().map(str::to_string));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut pending = None;
        screen.update(|s| pending = s.begin_submit().ok());
        let Some(request) = pending else {
            return;
        };

        let api = api.clone();
        let session = session.clone();
        spawn_local(async move {
            match authenticate(&api, &session, request).await {
                Ok(_) => {
                    let mut target = AppRoute::Home;
                    screen.update(|s| target = s.succeed());
                    router.navigate(target.to_path());
                }
                Err(message) => screen.update(|s| s.fail(message)),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-gradient-to-br from-indigo-400 to-purple-700 p-5">
            <div class="card w-full max-w-md shadow-2xl bg-base-100">
                <div class="card-body">
                    <div class="text-center mb-6">
                        <h1 class="text-3xl font-semibold">"⚽ Turf Booking"</h1>
                        <p class="text-sm text-base-content/70">{move || mode().subtitle()}</p>
                    </div>

                    <Show when=move || screen.with(AuthScreen::phase) == AuthPhase::Error>
                        <div role="alert" class="alert alert-error text-sm py-2 justify-center">
                            <span>{move || error_msg().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form on:submit=on_submit class="space-y-4">
                        <Show when=is_signup>
                            <div class="form-control">
                                <label class="label" for="firstName">
                                    <span class="label-text">"First Name"</span>
                                </label>
                                <input
                                    id="firstName"
                                    type="text"
                                    placeholder="Enter your first name"
                                    on:input=move |ev| screen.update(|s| s.form.first_name = event_target_value(&ev))
                                    prop:value=move || screen.with(|s| s.form.first_name.clone())
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="lastName">
                                    <span class="label-text">"Last Name"</span>
                                </label>
                                <input
                                    id="lastName"
                                    type="text"
                                    placeholder="Enter your last name"
                                    on:input=move |ev| screen.update(|s| s.form.last_name = event_target_value(&ev))
                                    prop:value=move || screen.with(|s| s.form.last_name.clone())
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="phoneNumber">
                                    <span class="label-text">"Phone Number"</span>
                                </label>
                                <input
                                    id="phoneNumber"
                                    type="tel"
                                    placeholder="Enter your phone number"
                                    on:input=move |ev| screen.update(|s| s.form.phone_number = event_target_value(&ev))
                                    prop:value=move || screen.with(|s| s.form.phone_number.clone())
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email Address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter your email"
                                on:input=move |ev| screen.update(|s| s.form.email = event_target_value(&ev))
                                prop:value=move || screen.with(|s| s.form.email.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="Enter your password"
                                on:input=move |ev| screen.update(|s| s.form.password = event_target_value(&ev))
                                prop:value=move || screen.with(|s| s.form.password.clone())
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=move || screen.with(AuthScreen::is_submitting)
                        >
                            <Show when=move || screen.with(AuthScreen::is_submitting)>
                                <span class="loading loading-spinner"></span>
                            </Show>
                            {move || screen.with(AuthScreen::button_label)}
                        </button>
                    </form>

                    <div class="divider text-xs text-base-content/50">{move || mode().toggle_prompt()}</div>

                    <button
                        type="button"
                        class="btn btn-outline btn-primary w-full"
                        disabled=move || screen.with(AuthScreen::is_submitting)
                        on:click=move |_| screen.update(AuthScreen::toggle_mode)
                    >
                        {move || mode().toggle_label()}
                    </button>

                    <Show when=move || !is_signup()>
                        <div class="text-center mt-6">
                            <a href="#" class="link link-primary text-sm font-medium">"Forgot password?"</a>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
