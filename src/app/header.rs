use leptos::prelude::*;

const NAV: [(&str, &str); 8] = [
    ("hero", "Home"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("certifications", "Certifications"),
    ("blogs", "Blogs"),
    ("education", "Education"),
    ("contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-black/90 backdrop-blur-md border-b border-green-500/40">
            <nav class="container mx-auto px-4 sm:px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#hero" class="text-white font-bold text-lg sm:text-xl font-display">
                        "Vishnu_MK"
                    </a>
                    <ul class="hidden md:flex items-center gap-6">
                        {NAV
                            .iter()
                            .map(|(id, label)| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{id}")
                                            class="text-gray-300 hover:text-green-400 transition-colors font-body"
                                        >
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </nav>
        </header>
    }
}
