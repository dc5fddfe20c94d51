//! Card for a featured project: screenshot banner, links, description, tags.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let banner_class = format!("project-card__banner {}", project.gradient);

    view! {
        <article class="project-card">
            <div class=banner_class>
                <div class="project-card__shade"></div>
                <div class="project-card__screen">
                    <img src=project.image alt=project.title class="project-card__image"/>
                </div>
            </div>
            <div class="project-card__body">
                <div class="project-card__header">
                    <h3 class="project-card__title">{project.title}</h3>
                    <div class="project-card__links">
                        <a href=project.source_url class="project-card__link" aria-label="Source code">
                            "GitHub"
                        </a>
                        <a href=project.live_url class="project-card__link" aria-label="Open project">
                            "\u{2197}"
                        </a>
                    </div>
                </div>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
