//! Portfolio Page
//!
//! Single scrolling page: hero, about, skills, projects, contact.

use leptos::prelude::*;

use crate::components::{NavBar, ProjectCard, SectionHeading, SkillCard};
use crate::content;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let portfolio = content::portfolio();
    let owner = &portfolio.owner;
    let contact = &portfolio.contact;

    view! {
        <div id="main-content" class="portfolio">
            <NavBar brand=owner.name.as_str() />

            // Hero
            <section class="hero" aria-labelledby="hero-heading">
                <div class="container narrow center">
                    <h1 id="hero-heading" class="hero-title gradient-text fade-in-up">
                        {owner.name.as_str()}
                    </h1>
                    <p class="hero-tagline fade-in-up delay-100">{owner.tagline.as_str()}</p>
                    <p class="hero-summary fade-in-up delay-200">{owner.summary.as_str()}</p>
                    <div class="hero-actions fade-in-up delay-300">
                        <a href="#projects" class="btn btn-gradient">"View My Work"</a>
                        <a href="#contact" class="btn btn-outline">"Get In Touch"</a>
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="section surface" aria-labelledby="about-heading">
                <div class="container narrow">
                    <SectionHeading id="about-heading" title="About Me" />
                    <div class="about-text">
                        {portfolio.about.iter().map(|paragraph| view! {
                            <p>{paragraph.as_str()}</p>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Skills
            <section id="skills" class="section" aria-labelledby="skills-heading">
                <div class="container">
                    <SectionHeading id="skills-heading" title="Technical Skills" />
                    <div class="skills-grid">
                        {portfolio.skills.iter().map(|group| view! {
                            <SkillCard group=group />
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Projects
            <section id="projects" class="section surface" aria-labelledby="projects-heading">
                <div class="container">
                    <SectionHeading id="projects-heading" title="Featured Projects" />
                    <div class="project-list">
                        {portfolio.projects.iter().map(|project| view! {
                            <ProjectCard project=project />
                        }).collect_view()}
                    </div>
                    <p class="more-projects">
                        "More projects coming soon! I'm always working on something new."
                    </p>
                </div>
            </section>

            // Contact
            <section id="contact" class="section" aria-labelledby="contact-heading">
                <div class="container narrow center">
                    <h2 id="contact-heading" class="section-heading gradient-text">
                        {contact.heading.as_str()}
                    </h2>
                    <p class="contact-blurb">{contact.blurb.as_str()}</p>
                    <div class="contact-actions">
                        <a href=format!("mailto:{}", contact.email) class="btn btn-surface">
                            {format!("✉ {}", contact.email)}
                        </a>
                        <a
                            href=contact.linkedin.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-gradient"
                        >
                            "in LinkedIn Profile"
                        </a>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <p>{portfolio.footer.as_str()}</p>
            </footer>
        </div>
    }
}
