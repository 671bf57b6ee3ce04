//! Template engine for rendering site pages.

use minijinja::{context, Environment};

use crate::filters;

/// Site-wide values every page sees.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteContext {
    /// Site title
    pub title: String,
    /// Short description for the hero card and meta tags
    pub description: String,
    /// Base URL (for deployment under a path prefix)
    pub base_url: String,
}

/// One content item as the templates see it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ItemSummary {
    /// Item title
    pub title: String,
    /// ISO date string, formatted by the date filters
    pub date: String,
    /// Optional description for listings
    pub description: Option<String>,
    /// Absolute URL path of the item page
    pub url: String,
    /// Tags shown on listing cards
    pub tags: Vec<String>,
    /// Cover image URL, if any
    pub cover: Option<String>,
}

/// Figures for the home page's animated counters.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct StatsContext {
    pub days_running: i64,
    pub thoughts: u32,
    pub moments: u32,
}

/// Everything a single page render needs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    pub site: SiteContext,
    /// Page title
    pub title: String,
    /// Rendered content HTML (empty for listing pages)
    pub content: String,
    /// ISO date for item pages
    pub date: Option<String>,
    /// Cover image for item pages
    pub cover: Option<String>,
    /// Items for listing pages
    pub items: Vec<ItemSummary>,
    /// Counter figures, home page only
    pub stats: Option<StatsContext>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new engine with the embedded templates and filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        filters::register(&mut env);

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("list.html", LIST_TEMPLATE),
            ("post.html", POST_TEMPLATE),
            ("photo.html", PHOTO_TEMPLATE),
            ("gallery.html", GALLERY_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("embedded template is valid");
        }

        Self { env }
    }

    /// Render a page using the named template.
    pub fn render_page(
        &self,
        template: &str,
        page: &PageContext,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            site => &page.site,
            title => &page.title,
            content => &page.content,
            date => &page.date,
            cover => &page.cover,
            items => &page.items,
            stats => &page.stats,
            critical_css => CRITICAL_CSS,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Inlined into <head> through the cssmin filter; the full stylesheet is a
// passthrough asset.
const CRITICAL_CSS: &str = r#"
:root {
  --bg-primary: #f7f5f2;
  --bg-secondary: #efe9e1;
  --bg-card: rgba(255, 255, 255, 0.7);
  --text-primary: #2b2722;
  --gradient-primary: linear-gradient(120deg, #b98a6b, #7e6a8a);
}

:root[data-theme="dark"] {
  --bg-primary: #17151a;
  --bg-secondary: #201d24;
  --bg-card: rgba(32, 29, 36, 0.7);
  --text-primary: #e8e4de;
}

body {
  margin: 0;
  background: var(--bg-primary);
  color: var(--text-primary);
}

.glass-header {
  position: sticky;
  top: 0;
  z-index: 1000;
  background: var(--bg-card);
  backdrop-filter: blur(12px);
}
"#;

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site.title }}</title>
  {% if site.description %}<meta name="description" content="{{ site.description }}">
  {% endif %}<style>{{ critical_css | cssmin | safe }}</style>
  <link rel="stylesheet" href="{{ site.base_url | safe }}assets/css/style.css">
</head>
<body>
  <header class="glass-header">
    <nav class="nav">
      <a class="nav-logo" href="{{ site.base_url | safe }}">{{ site.title }}</a>
      <ul class="nav-links">
        <li><a href="{{ site.base_url | safe }}posts/">Thoughts</a></li>
        <li><a href="{{ site.base_url | safe }}projects/">Projects</a></li>
        <li><a href="{{ site.base_url | safe }}gallery/">Moments</a></li>
      </ul>
      <button id="themeToggle" class="theme-toggle" type="button" aria-label="Toggle theme">&#9681;</button>
    </nav>
  </header>
  <main>
    {% block content %}{% endblock %}
  </main>
  <footer class="site-footer">
    <p>&copy; {{ site.title }}</p>
  </footer>
  <script src="{{ site.base_url | safe }}assets/js/theme.js"></script>
  <script src="{{ site.base_url | safe }}assets/js/main.js"></script>
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="hero-section">
  <div class="hero-card">
    <h1>{{ site.title }}</h1>
    <p>{{ site.description }}</p>
    <a class="btn" href="{{ site.base_url | safe }}posts/">Start reading</a>
  </div>
</section>

{% if stats %}
<section class="stats-section">
  <div class="stat">
    <span id="daysRunning" data-target="{{ stats.days_running }}">0</span>
    <label>days running</label>
  </div>
  <div class="stat">
    <span id="thoughtsCount" data-target="{{ stats.thoughts }}">0</span>
    <label>thoughts</label>
  </div>
  <div class="stat">
    <span id="momentsCount" data-target="{{ stats.moments }}">0</span>
    <label>moments</label>
  </div>
</section>
{% endif %}

<section class="recent">
  {% for item in items %}
  <article class="card">
    <h2><a href="{{ item.url | safe }}">{{ item.title }}</a></h2>
    <time datetime="{{ item.date | html_date_string }}">{{ item.date | readable_date }}</time>
    {% if item.description %}<p>{{ item.description }}</p>{% endif %}
  </article>
  {% endfor %}
</section>
{% endblock %}"##;

const LIST_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<h1>{{ title }}</h1>
{% for item in items %}
<article class="card">
  <h2><a href="{{ item.url | safe }}">{{ item.title }}</a></h2>
  <time datetime="{{ item.date | html_date_string }}">{{ item.date | readable_date }}</time>
  {% if item.description %}<p>{{ item.description }}</p>{% endif %}
  {% if item.tags %}
  <ul class="tags">
    {% for tag in item.tags %}<li>{{ tag }}</li>{% endfor %}
  </ul>
  {% endif %}
</article>
{% endfor %}
{% endblock %}"##;

const POST_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="article-content">
  <h1>{{ title }}</h1>
  <time datetime="{{ date | html_date_string }}">{{ date | readable_date }}</time>
  {{ content | safe }}
</article>
{% endblock %}"##;

const PHOTO_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="article-content photo-page">
  <h1>{{ title }}</h1>
  <time datetime="{{ date | html_date_string }}">{{ date | readable_date }}</time>
  {% if cover %}<img class="photo" src="{{ cover | safe }}" alt="{{ title }}">{% endif %}
  {{ content | safe }}
</article>
{% endblock %}"##;

const GALLERY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<h1>{{ title }}</h1>
<section class="gallery-section">
  {% for item in items %}
  <figure class="gallery-item">
    <a href="{{ item.url | safe }}">
      {% if item.cover %}<img src="{{ item.cover | safe }}" alt="{{ item.title }}" loading="lazy">{% endif %}
      <figcaption>
        {{ item.title }}
        <time datetime="{{ item.date | html_date_string }}">{{ item.date | readable_date }}</time>
      </figcaption>
    </a>
  </figure>
  {% endfor %}
</section>
{% endblock %}"##;
