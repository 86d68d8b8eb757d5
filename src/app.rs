mod blogs;
mod certifications;
mod contact;
mod education;
mod experience;
mod header;
mod hero;
mod projects;
mod section;
mod skills;
mod timer;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use blogs::BlogsSection;
use certifications::CertificationsSection;
use contact::ContactSection;
use education::EducationSection;
use experience::ExperienceSection;
use header::Header;
use hero::Hero;
use projects::ProjectsSection;
use skills::SkillsSection;

// Served from `public/`
const FAVICON: &str = "/favicon.svg";
const PROFILE_IMAGE: &str = "/profile.svg";
const RESUME: &str = "/resume.pdf";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Rajdhani:wght@400;500;600&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white font-body">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Vishnu Manikandan - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <SkillsSection />
        <ProjectsSection />
        <ExperienceSection />
        <CertificationsSection />
        <BlogsSection />
        <EducationSection />
        <ContactSection />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = env!("BUILD_TIME");
    let built = built.split('T').next().unwrap_or(built);
    view! {
        <footer class="py-8 border-t border-green-500/30 text-center text-sm text-gray-400 font-body">
            <p>"© Vishnu Manikandan"</p>
            <p class="mt-1">"Built " {built}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [FAVICON, PROFILE_IMAGE, RESUME] {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "{} is linked but missing", file.display());
        }
    }

    #[test]
    fn test_resume_is_a_pdf() {
        let resume = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(RESUME.trim_start_matches('/'));
        let bytes = std::fs::read(resume).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
