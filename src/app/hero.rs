use leptos::prelude::*;

use super::{contact::Socials, timer::TimerSlot, PROFILE_IMAGE, RESUME};
use crate::typewriter::{Typewriter, CURSOR_BLINK};

const PHRASES: [&str; 3] = ["Hi there!", "I am", "VISHNU MANIKANDAN"];

fn type_next(typewriter: RwSignal<Typewriter>, slot: TimerSlot) {
    let Some(delay) = typewriter.try_with_untracked(Typewriter::next_delay).flatten() else {
        slot.cancel();
        return;
    };
    slot.arm(delay, move || {
        if typewriter.try_update(Typewriter::step).is_some() {
            type_next(typewriter, slot);
        }
    });
}

fn blink_next(typewriter: RwSignal<Typewriter>, slot: TimerSlot) {
    slot.arm(CURSOR_BLINK, move || {
        if typewriter.try_update(Typewriter::blink).is_some() {
            blink_next(typewriter, slot);
        }
    });
}

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(PHRASES));
    let typing = TimerSlot::new();
    let cursor = TimerSlot::new();

    // timers only run in the browser
    Effect::watch(
        || (),
        move |_, _, _| {
            type_next(typewriter, typing);
            blink_next(typewriter, cursor);
        },
        true,
    );

    let text = move || typewriter.with(|t| t.text().to_string());
    let cursor_visible = move || typewriter.with(Typewriter::cursor_visible);

    view! {
        <section
            id="hero"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20 md:pt-0 hero-bg"
        >
            <div class="container mx-auto px-6 z-10 relative">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left">
                        <div class="text-3xl sm:text-4xl md:text-5xl lg:text-7xl font-bold mb-6 leading-tight min-h-[8rem] flex items-center justify-center lg:justify-start font-display gradient-text">
                            <span aria-live="polite">{text}</span>
                            <span
                                class="cursor inline-block w-0.5 h-12 bg-green-500 ml-1"
                                class:opacity-0=move || !cursor_visible()
                            ></span>
                        </div>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8 font-body">
                            "Full stack developer building for the web"
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center lg:justify-start mb-8">
                            <a href=RESUME download="resume.pdf" class="button-primary">
                                "Download Resume"
                            </a>
                            <a href="#projects" class="button-outline">
                                "View Projects"
                            </a>
                        </div>
                        <Socials />
                    </div>
                    <div class="flex justify-center">
                        <img
                            src=PROFILE_IMAGE
                            alt="Vishnu Manikandan"
                            class="w-64 h-64 lg:w-80 lg:h-80 rounded-full object-cover border-4 border-green-500 profile-glow"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
