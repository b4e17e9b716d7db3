use crate::catalog::{ALL_LOCATIONS, FEATURED_TURFS, HomeSection, Turf};
use crate::components::location_modal::LocationModal;
use crate::components::slot_list::SlotList;
use crate::session::{SessionStore, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scroll to a section; `false` if it is not in the document.
fn scroll_to(section: HomeSection) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Identity shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderIdentity {
    SignedIn { email: String },
    Anonymous,
}

impl HeaderIdentity {
    /// A stored user record is enough; the token is not checked.
    pub fn read(session: &SessionStore) -> Self {
        match session.load() {
            Some(current) => HeaderIdentity::SignedIn {
                email: current.user.email,
            },
            None => HeaderIdentity::Anonymous,
        }
    }
}

/// Forget the session and report what the header shows afterwards.
pub fn logout(session: &SessionStore) -> HeaderIdentity {
    session.clear();
    HeaderIdentity::read(session)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // Read once per mount; a later login elsewhere is only seen on the next mount
    let (identity, set_identity) = signal(HeaderIdentity::read(&session));
    let show_slots = RwSignal::new(false);
    let location_open = RwSignal::new(false);
    let selected_location = RwSignal::new(ALL_LOCATIONS.to_string());
    let active_section = RwSignal::new(HomeSection::Home);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        set_identity.set(logout(&session));
        router.navigate(AppRoute::Home.to_path());
    };

    let nav_item = move |section: HomeSection| {
        view! {
            <li>
                <a
                    class=move || {
                        if active_section.get() == section {
                            "border-b-2 border-primary rounded-none"
                        } else {
                            "rounded-none"
                        }
                    }
                    on:click=move |_| {
                        if scroll_to(section) {
                            active_section.set(section);
                        }
                    }
                >
                    {section.label()}
                </a>
            </li>
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-base-200 font-sans">
            <header class="navbar bg-base-100 shadow sticky top-0 z-50 px-4 md:px-8">
                <div class="flex-1">
                    <span class="text-xl font-bold">"⚽ Turf Booking"</span>
                </div>
                <ul class="menu menu-horizontal hidden md:flex gap-1">
                    {nav_item(HomeSection::Home)}
                    {nav_item(HomeSection::Turfs)}
                    <li>
                        <a on:click=move |_| location_open.set(true)>
                            "📍 " {move || selected_location.get()}
                        </a>
                    </li>
                    {nav_item(HomeSection::About)}
                </ul>
                <div class="flex-none gap-2">
                    {move || match identity.get() {
                        HeaderIdentity::SignedIn { email } => view! {
                            <span class="text-sm text-base-content/70 hidden sm:inline">{email}</span>
                            <button class="btn btn-outline btn-error btn-sm" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        }
                        .into_any(),
                        HeaderIdentity::Anonymous => view! {
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| router.navigate(AppRoute::Login.to_path())
                            >
                                "Login"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </header>

            <LocationModal open=location_open selected=selected_location />

            <main class="flex-1 max-w-7xl w-full mx-auto p-4 md:p-8 space-y-12">
                <section id="home" class="hero rounded-box bg-gradient-to-br from-indigo-400 to-purple-700 text-white py-16">
                    <div class="hero-content text-center flex-col">
                        <h2 class="text-4xl font-bold">"Welcome to Turf Booking"</h2>
                        <p class="opacity-90">"Book premium cricket turfs near you at the best prices"</p>
                        <input
                            type="text"
                            placeholder="Search turfs by location..."
                            class="input input-bordered w-full max-w-md text-base-content"
                        />
                    </div>
                </section>

                <section id="turfs" class="space-y-6">
                    <div class="flex items-center justify-between">
                        <h2 class="text-2xl font-bold">"Available Turfs"</h2>
                        <button class="btn btn-outline btn-primary btn-sm" on:click=move |_| show_slots.update(|s| *s = !*s)>
                            {move || if show_slots.get() { "Hide" } else { "Show" }} " Available Slots"
                        </button>
                    </div>
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                        <For
                            each=|| FEATURED_TURFS
                            key=|turf| turf.id
                            children=|turf| view! { <TurfCard turf=turf /> }
                        />
                    </div>
                </section>

                <Show when=move || show_slots.get()>
                    <section class="card bg-base-100 shadow">
                        <div class="card-body">
                            <SlotList />
                        </div>
                    </section>
                </Show>

                <section class="grid gap-6 md:grid-cols-3">
                    <InfoCard icon="🎯" title="Easy Booking" text="Book your preferred turf in just a few clicks" />
                    <InfoCard icon="💰" title="Best Prices" text="Get the most competitive rates in your area" />
                    <InfoCard icon="🏆" title="Premium Turfs" text="Only verified high-quality sports facilities" />
                </section>

                <AboutSection />
            </main>

            <footer class="footer footer-center p-6 bg-neutral text-neutral-content">
                <p>"© 2026 Turf Booking. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn TurfCard(turf: Turf) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body items-center text-center">
                <div class="text-6xl">{turf.image}</div>
                <h3 class="card-title">{turf.name}</h3>
                <p class="text-sm text-base-content/70">"📍 " {turf.location}</p>
                <div class="flex w-full justify-between font-semibold">
                    <span class="text-primary">{turf.price}</span>
                    <span>"⭐ " {turf.rating_label()}</span>
                </div>
                // No booking endpoint exists yet
                <button class="btn btn-primary w-full" disabled=true title="Online booking is not available yet">
                    "Book Now"
                </button>
            </div>
        </div>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center">
                <span class="text-4xl">{icon}</span>
                <h3 class="card-title">{title}</h3>
                <p class="text-base-content/70">{text}</p>
            </div>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="card bg-base-100 shadow">
            <div class="card-body space-y-6">
                <h2 class="text-2xl font-bold text-center">"About Turf Booking"</h2>
                <p class="text-center text-base-content/80">
                    "Turf Booking is a leading platform dedicated to connecting sports enthusiasts "
                    "with premium cricket turfs and sports facilities. Our mission is to make sports "
                    "accessible and affordable for everyone."
                </p>

                <div class="grid gap-6 md:grid-cols-3">
                    <div class="p-4 rounded-box bg-base-200">
                        <h3 class="font-semibold mb-2">"Our Mission"</h3>
                        <p class="text-sm">
                            "To revolutionize sports facility booking by providing a seamless, transparent, "
                            "and user-friendly platform that connects players with quality turfs."
                        </p>
                    </div>
                    <div class="p-4 rounded-box bg-base-200">
                        <h3 class="font-semibold mb-2">"Why Choose Us"</h3>
                        <ul class="list-disc list-inside text-sm">
                            <li>"Wide variety of premium turfs"</li>
                            <li>"Competitive and transparent pricing"</li>
                            <li>"Easy and instant booking"</li>
                            <li>"24/7 customer support"</li>
                            <li>"Verified and trusted facilities"</li>
                        </ul>
                    </div>
                    <div class="p-4 rounded-box bg-base-200">
                        <h3 class="font-semibold mb-2">"Our Reach"</h3>
                        <p class="text-sm">
                            "Operating across multiple cities with hundreds of verified turfs, we serve "
                            "thousands of sports enthusiasts every month. Join our growing community today!"
                        </p>
                    </div>
                </div>

                <div class="text-center space-y-1">
                    <h3 class="font-semibold">"Get in Touch"</h3>
                    <p>"📧 Email: support@turfbooking.com"</p>
                    <p>"📱 Phone: +91-1234-567-890"</p>
                    <p>"🏢 Address: Sports Complex, Downtown Area, Your City"</p>
                </div>
            </div>
        </section>
    }
}
