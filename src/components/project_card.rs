//! Project Card Component
//!
//! Featured project with screenshot, demo capture, features and stack.

use leptos::prelude::*;

use crate::markdown::render_inline;
use crate::models::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let title = project.title.as_str();

    view! {
        <article class="project-card">
            <div class="project-grid">
                <div class="project-media">
                    <div class="media-frame">
                        <img src=project.image.as_str() alt=format!("{} - Project Screenshot", title) />
                    </div>
                    {project.demo.as_ref().map(|demo| view! {
                        <div class="media-frame">
                            <img src=demo.as_str() alt=format!("{} - Demo", title) loading="lazy" />
                        </div>
                    })}
                </div>

                <div class="project-body">
                    <h3 class="project-title">{title}</h3>
                    <p class="project-description">{project.description.as_str()}</p>
                    <p class="project-long" inner_html=render_inline(&project.long_description)></p>

                    <h4 class="project-subheading">"Key Features:"</h4>
                    <ul class="feature-list">
                        {project.features.iter().map(|feature| view! {
                            <li>
                                <span class="feature-dot"></span>
                                <span>{feature.as_str()}</span>
                            </li>
                        }).collect_view()}
                    </ul>

                    <h4 class="project-subheading">"Technologies Used:"</h4>
                    <div class="chip-row">
                        {project.technologies.iter().map(|tech| view! {
                            <span class="chip chip-accent">{tech.as_str()}</span>
                        }).collect_view()}
                    </div>

                    <div class="project-actions">
                        <a
                            href=project.live.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-gradient"
                        >
                            "↗ Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </article>
    }
}
