//! The portfolio page: hero, about, skills, projects, and contact sections.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::project_card::ProjectCard;
use crate::components::section::Section;
use crate::content::{
    ABOUT_SECTION, CONTACT_SECTION, HOME_SECTION, OWNER_NAME, PROFILE_FALLBACK_IMAGE, PROFILE_IMAGE, PROJECTS,
    PROJECTS_SECTION, REPOSITORIES_URL, SKILLS_SECTION, SKILL_STACKS, STATS,
};

/// Image to switch to after `current` failed to load, if any.
///
/// The placeholder is tried once; a failing placeholder is left alone so the
/// error handler cannot loop.
fn photo_fallback(current: &str) -> Option<&'static str> {
    (current != PROFILE_FALLBACK_IMAGE).then_some(PROFILE_FALLBACK_IMAGE)
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <Section id=HOME_SECTION class="hero">
            <h1 class="hero__title">
                "Building digital "
                <br/>
                <span class="hero__highlight">"experiences"</span>
                " that matter."
            </h1>
            <p class="hero__lead">
                "I'm a Full Stack Developer specializing in building exceptional, human-centered products."
            </p>
            <div class="hero__actions">
                <a href="#projects" class="btn btn--solid">"View Work"</a>
                <a href="#contact" class="btn btn--outline">"Contact Me"</a>
            </div>
            <div class="hero__scroll" aria-hidden="true">"\u{2304}"</div>
        </Section>
    }
}

#[component]
fn About() -> impl IntoView {
    let photo = RwSignal::new(PROFILE_IMAGE);
    let on_photo_error = move |_| {
        if let Some(next) = photo_fallback(photo.get_untracked()) {
            photo.set(next);
        }
    };

    view! {
        <Section id=ABOUT_SECTION>
            <div class="about">
                <div class="about__text">
                    <h2 class="section__title">"About Me"</h2>
                    <div class="section__rule"></div>
                    <p class="about__body">
                        "I'm a passionate Full Stack Developer focused on building clean, user-friendly applications."
                        <br/>
                        <br/>
                        "I love modern stacks like React, Node.js, Tailwind, and cloud platforms."
                    </p>
                    <div class="about__stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                let class = format!("stat {}", stat.gradient);
                                view! {
                                    <div class=class>
                                        <div class="stat__value">{stat.value}</div>
                                        <div class="stat__label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="about__photo-frame">
                    <img src=move || photo.get() alt=OWNER_NAME class="about__photo" on:error=on_photo_error/>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <Section id=SKILLS_SECTION class="section--tinted">
            <h2 class="section__title section__title--large">"My Arsenal"</h2>
            <div class="skills">
                {SKILL_STACKS
                    .iter()
                    .map(|stack| {
                        let icon_class = format!("skills__icon {}", stack.accent);
                        view! {
                            <div class="skills__card">
                                <div class=icon_class>{stack.icon.glyph()}</div>
                                <h3 class="skills__title">{stack.title}</h3>
                                <div class="skills__list">
                                    {stack
                                        .skills
                                        .iter()
                                        .map(|s| view! { <span class="skills__chip">{*s}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <Section id=PROJECTS_SECTION>
            <div class="projects">
                <div class="projects__header">
                    <div>
                        <h2 class="section__title section__title--large">"Featured Work"</h2>
                        <p class="projects__lead">
                            "A selection of projects that showcase my passion for design and coding."
                        </p>
                    </div>
                    <a href=REPOSITORIES_URL class="projects__all">"View All Projects \u{2197}"</a>
                </div>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <Section id=CONTACT_SECTION>
            <div class="contact">
                <h2 class="section__title">
                    "Let's build something "
                    <span class="contact__accent">"amazing"</span>
                </h2>
                <p class="contact__lead">"Currently open for new opportunities and interesting projects."</p>
                <ContactForm/>
            </div>
        </Section>
    }
}
