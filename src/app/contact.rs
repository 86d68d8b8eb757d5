use leptos::prelude::*;

pub const EMAIL: &str = "vishnumanikandan654@gmail.com";
pub const LOCATION: &str = "Erode, Tamilnadu";

pub const SOCIALS: [(&str, &str, &str); 2] = [
    ("GitHub", "https://github.com/VishnuMK2006", "devicon-github-plain"),
    (
        "LinkedIn",
        "https://linkedin.com/in/vishnumanikandant",
        "devicon-linkedin-plain",
    ),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 relative section-bg">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 font-display gradient-text">
                        "CONTACT ME 📡"
                    </h2>
                    <p class="text-xl text-gray-300 max-w-2xl mx-auto font-body">
                        "Ready to collaborate on your next project? Let's turn ideas into reality!"
                    </p>
                </div>
                <div class="max-w-2xl mx-auto space-y-6">
                    <a href=format!("mailto:{EMAIL}") class="contact-row card">
                        <span class="contact-icon">"✉"</span>
                        <div>
                            <h4 class="text-white font-semibold font-display">"Email"</h4>
                            <p class="text-gray-300 font-body">{EMAIL}</p>
                        </div>
                    </a>
                    <div class="contact-row card">
                        <span class="contact-icon">"📍"</span>
                        <div>
                            <h4 class="text-white font-semibold font-display">"Location"</h4>
                            <p class="text-gray-300 font-body">{LOCATION}</p>
                        </div>
                    </div>
                    <Socials />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Socials() -> impl IntoView {
    view! {
        <div class="flex gap-4 justify-center lg:justify-start">
            {SOCIALS
                .iter()
                .map(|(label, href, icon)| {
                    view! {
                        <a
                            href=*href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="icon-button"
                            aria-label=*label
                        >
                            <i class=*icon></i>
                        </a>
                    }
                })
                .collect_view()}
            <a href=format!("mailto:{EMAIL}") class="icon-button" aria-label="Email">
                "✉"
            </a>
        </div>
    }
}
