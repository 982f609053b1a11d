//! Inline stylesheet for the page. Written into a `<style>` element verbatim.

pub const STYLESHEET: &str = r#"
:root {
    --primary: #4F46E5;
    --primary-dark: #4338CA;
    --secondary: #10B981;
    --dark: #1F2937;
    --light: #F9FAFB;
    --gray: #6B7280;
    --light-gray: #E5E7EB;
    --negative: #DC2626;
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; scroll-padding-top: 5rem; }

body {
    margin: 0;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', sans-serif;
    color: var(--dark);
    background-color: var(--light);
    line-height: 1.6;
}

a { color: var(--primary); }

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    background: white;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.site-title { font-size: 1.25rem; font-weight: 700; }
.nav { display: flex; gap: 0.5rem; flex-wrap: wrap; }

.nav-link {
    color: var(--dark);
    font-weight: 500;
    text-decoration: none;
    padding: 0.5rem 1rem;
    border-radius: 0.375rem;
    transition: background-color 0.2s ease;
}

.nav-link:hover { background-color: var(--light-gray); }

.container { width: 100%; max-width: 72rem; margin: 0 auto; padding: 0 1rem; }

.hero-section {
    background: linear-gradient(135deg, #4F46E5 0%, #10B981 100%);
    color: white;
    padding: 8rem 0 4rem;
}

.hero-row { display: flex; flex-wrap: wrap; align-items: center; gap: 2rem; }
.hero-text { flex: 2 1 24rem; }
.hero-text h1 { font-size: 2.25rem; margin: 0 0 0.5rem; }
.hero-subtitle { font-size: 1.5rem; margin-bottom: 1.5rem; }
.hero-bio { font-size: 1.125rem; opacity: 0.9; }
.hero-actions { display: flex; gap: 1rem; margin-top: 1.5rem; }
.hero-image-wrap { flex: 1 1 16rem; display: flex; justify-content: center; }

.profile-image {
    width: 16rem;
    height: 16rem;
    object-fit: cover;
    border-radius: 9999px;
    border: 4px solid white;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}

.button {
    display: inline-block;
    padding: 0.5rem 1.25rem;
    border-radius: 0.375rem;
    font-weight: 500;
    text-decoration: none;
    border: 1px solid transparent;
    cursor: pointer;
}

.button-solid { background: white; color: var(--primary); }
.button-outline { color: white; border-color: white; }
.button-primary { background: var(--primary); color: white; }
.button-primary:hover { background: var(--primary-dark); }

.section {
    padding: 2rem 0;
    border-bottom: 1px solid var(--light-gray);
}

.section:last-child { border-bottom: none; }
.section-heading { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.subheading { font-size: 1.25rem; font-weight: 600; margin: 1rem 0; }

.tag-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; padding: 0; list-style: none; }

.skill-tag {
    background-color: var(--light-gray);
    color: var(--dark);
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    display: inline-block;
}

.skill-tag.small { font-size: 0.75rem; padding: 0.25rem 0.5rem; }

.project-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
    gap: 1.5rem;
}

.card {
    background: white;
    border-radius: 0.5rem;
    overflow: hidden;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.card:hover {
    transform: translateY(-5px);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
}

.card-body { padding: 1rem; }
.project-image { width: 100%; height: 12rem; object-fit: cover; }
.project-title { font-size: 1.25rem; font-weight: 700; }
.project-category { font-size: 0.875rem; color: var(--gray); margin-bottom: 0.5rem; }
.project-links { display: flex; gap: 0.75rem; font-size: 0.875rem; font-weight: 500; }

.timeline-item {
    position: relative;
    padding-left: 2rem;
    margin-bottom: 2rem;
}

.timeline-item:before {
    content: '';
    position: absolute;
    left: 0;
    top: 0.25rem;
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
    background-color: var(--primary);
}

.timeline-item:after {
    content: '';
    position: absolute;
    left: 0.5rem;
    top: 1.25rem;
    width: 0.125rem;
    height: calc(100% + 1rem);
    background-color: var(--light-gray);
}

.timeline-item:last-child:after { display: none; }
.timeline-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
.timeline-title { font-size: 1.25rem; font-weight: 700; }
.timeline-dates { font-size: 0.875rem; color: var(--gray); white-space: nowrap; }
.timeline-org { font-size: 1.125rem; font-weight: 500; color: var(--primary); margin-bottom: 0.5rem; }

.contact-row { display: flex; flex-wrap: wrap; gap: 2rem; }
.contact-column { flex: 1 1 20rem; }
.contact-form label { display: block; font-weight: 500; margin-bottom: 0.25rem; }

.contact-form input,
.contact-form textarea {
    width: 100%;
    padding: 0.5rem;
    margin-bottom: 1rem;
    border: 1px solid var(--light-gray);
    border-radius: 0.375rem;
    font: inherit;
}

.contact-info { list-style: none; padding: 0; }
.contact-info li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }

.notification {
    padding: 0.75rem 1rem;
    border-radius: 0.375rem;
    margin-bottom: 1rem;
    color: white;
    animation: notification-fade 0.3s ease-out, notification-fade 0.5s ease-in 5s reverse forwards;
}

.notification-positive { background: var(--secondary); }
.notification-negative { background: var(--negative); }

@keyframes notification-fade {
    from { opacity: 0; }
    to { opacity: 1; }
}

.site-footer { padding: 1.5rem 0; background: var(--dark); color: white; }
.footer-row { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; }
.copyright { color: #9CA3AF; }

.social-icon {
    color: white;
    font-size: 1.5rem;
    margin-right: 1rem;
    transition: color 0.2s ease;
}

.social-icon:hover { color: var(--primary); }
"#;
