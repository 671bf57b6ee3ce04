//! Initialize a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing reverie site...");

    let content_dir = Path::new("content");

    if content_dir.exists() && !yes {
        tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
        return Ok(());
    }

    let scaffold: [(&str, &str); 8] = [
        ("site.toml", DEFAULT_CONFIG),
        ("content/posts/welcome.md", DEFAULT_POST),
        ("content/projects/this-site.md", DEFAULT_PROJECT),
        ("content/gallery/first-light.md", DEFAULT_PHOTO),
        ("assets/css/style.css", STYLE_CSS),
        ("assets/js/theme.js", THEME_JS),
        ("assets/js/main.js", MAIN_JS),
        ("content/gallery/images/.gitkeep", ""),
    ];

    for (path, contents) in scaffold {
        let path = Path::new(path);
        if path.exists() && !yes {
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    for section in ["posts", "projects"] {
        let images = content_dir.join(section).join("images");
        fs::create_dir_all(&images)
            .with_context(|| format!("Failed to create {}", images.display()))?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'reverie build' and then 'reverie serve' to preview.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Reverie configuration

[site]
# Site title, shown in the header and hero card
title = "Dream Journal"

# Short description for the hero card and meta tags
description = "A quiet corner of the web"

# Base URL (set to "/dream-journal/" when deploying under a path prefix)
base_url = "/"

[content]
# Content root with posts/, projects/ and gallery/
dir = "content"

# Output directory
output = "_site"

[build]
# Gentle HTML minification of .html outputs
minify = true

# Strip HTML comments while minifying
remove_comments = false

[stats]
# Launch date for the "days running" counter
start_date = "2024-01-01"

# Fixed figures for the other two counters
thoughts = 25
moments = 48
"#;

const DEFAULT_POST: &str = r#"---
title: Welcome
date: 2024-01-01
description: The first entry in this journal.
tags: [meta]
---

# Welcome

This journal is built with reverie. Write Markdown under `content/posts/`
and every file becomes a page.

Single newlines
become line breaks, and bare links like https://example.com are clickable.

## Headings get anchors

Hover a heading to find its permalink.
"#;

const DEFAULT_PROJECT: &str = r#"---
title: This Site
date: 2024-01-02
description: The static site generator behind these pages.
tags: [rust]
---

A single binary renders all of this: collections sorted newest-first,
Markdown with heading anchors, and a gently minified output tree.
"#;

const DEFAULT_PHOTO: &str = r#"---
title: First Light
date: 2024-01-03
description: Morning over the rooftops.
cover: first-light.jpg
---

Taken from the kitchen window, a little after seven.
"#;

const STYLE_CSS: &str = r#"/* Reverie default stylesheet. Critical variables are inlined per page. */

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.7;
}

main {
  max-width: 760px;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  max-width: 960px;
  margin: 0 auto;
  padding: 0.75rem 1rem;
}

.nav-logo {
  font-weight: 700;
  text-decoration: none;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 1rem;
  list-style: none;
  margin: 0 0 0 auto;
  padding: 0;
}

.nav-links a {
  color: var(--text-primary);
  text-decoration: none;
}

.theme-toggle {
  border: none;
  background: none;
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
}

.hero-section {
  text-align: center;
  padding: 4rem 1rem;
}

.hero-card {
  animation: hero-rise 0.8s ease both;
}

@keyframes hero-rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: none; }
}

.stats-section {
  display: flex;
  justify-content: center;
  gap: 3rem;
  padding: 2rem 0;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.stat span {
  font-size: 2rem;
  font-weight: 700;
  background: var(--gradient-primary);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.card {
  background: var(--bg-card);
  border-radius: 12px;
  padding: 1.25rem 1.5rem;
  margin-bottom: 1rem;
}

.card.fade-in,
.gallery-item.fade-in,
.hero-card.fade-in {
  opacity: 1 !important;
  transform: none !important;
}

.article-content time {
  display: block;
  opacity: 0.7;
  margin-bottom: 1.5rem;
}

.article-content .direct-link {
  opacity: 0;
  margin-left: 0.35rem;
  text-decoration: none;
  transition: opacity 0.15s;
}

.article-content h1:hover .direct-link,
.article-content h2:hover .direct-link,
.article-content h3:hover .direct-link {
  opacity: 0.6;
}

.gallery-section {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.gallery-item {
  margin: 0;
  background: var(--bg-card);
  border-radius: 12px;
  overflow: hidden;
  animation: gallery-drift 0.6s ease both;
}

@keyframes gallery-drift {
  from { opacity: 0; transform: scale(0.96); }
  to { opacity: 1; transform: none; }
}

.gallery-item img {
  width: 100%;
  display: block;
}

.gallery-item figcaption {
  padding: 0.75rem 1rem;
}

.btn {
  position: relative;
  overflow: hidden;
  display: inline-block;
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  background: var(--gradient-primary);
  color: #fff;
  text-decoration: none;
}

.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  transform: scale(0);
  animation: ripple-animation 0.6s ease-out;
  pointer-events: none;
}

@keyframes ripple-animation {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

.site-footer {
  text-align: center;
  padding: 2rem 0;
  opacity: 0.7;
}
"#;

// Mirrors the ThemeManager state machine in reverie-ui.
const THEME_JS: &str = r#"(function() {
  'use strict';

  const themeToggle = document.getElementById('themeToggle');
  const html = document.documentElement;

  const savedTheme = localStorage.getItem('theme');
  const prefersDarkScheme = window.matchMedia('(prefers-color-scheme: dark)').matches;

  // Resolution order: stored preference, system preference, light.
  const currentTheme = savedTheme || (prefersDarkScheme ? 'dark' : 'light');
  applyTheme(currentTheme);

  function applyTheme(theme) {
    if (theme === 'dark') {
      html.setAttribute('data-theme', 'dark');
    } else {
      html.removeAttribute('data-theme');
    }
  }

  function toggleTheme() {
    const next = html.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';

    applyTheme(next);
    localStorage.setItem('theme', next);
    html.style.transition = 'background-color 0.3s ease, color 0.3s ease';

    window.dispatchEvent(new CustomEvent('themechange', { detail: { theme: next } }));
  }

  if (themeToggle) {
    themeToggle.addEventListener('click', toggleTheme);
    themeToggle.addEventListener('keydown', (e) => {
      if (e.key === 'Enter' || e.key === ' ') {
        e.preventDefault();
        toggleTheme();
      }
    });
  }

  // Follow the system only while no explicit choice is stored.
  window.matchMedia('(prefers-color-scheme: dark)').addEventListener('change', (e) => {
    if (!localStorage.getItem('theme')) {
      applyTheme(e.matches ? 'dark' : 'light');
    }
  });

  window.themeManager = {
    toggle: toggleTheme,
    getCurrentTheme: () => html.getAttribute('data-theme') === 'dark' ? 'dark' : 'light',
    setTheme: (theme) => {
      applyTheme(theme);
      localStorage.setItem('theme', theme === 'dark' ? 'dark' : 'light');
    }
  };
})();
"#;

// Mirrors the counter/effects state in reverie-ui. Counter targets are
// injected by the build as data-target attributes.
const MAIN_JS: &str = r#"(function() {
  'use strict';

  document.addEventListener('DOMContentLoaded', function() {
    initVisitorStats();
    initScrollAnimations();
    initNavigationEffects();
    initReadingProgress();
    initRipples();
  });

  function initVisitorStats() {
    ['daysRunning', 'thoughtsCount', 'momentsCount'].forEach(function(id, index) {
      const element = document.getElementById(id);
      if (!element) return;

      const target = parseInt(element.dataset.target || '0', 10);
      animateNumber(element, 0, target, 2000 + index * 500);
    });
  }

  function animateNumber(element, start, end, duration) {
    const range = Math.abs(end - start);

    // Zero range: nothing to animate, show the final value.
    if (range === 0) {
      element.textContent = end;
      return;
    }

    const increment = end > start ? 1 : -1;
    const stepTime = Math.floor(duration / range);
    let current = start;

    const timer = setInterval(function() {
      current += increment;
      element.textContent = current;

      if (current === end) {
        clearInterval(timer);
      }
    }, stepTime);
  }

  function initScrollAnimations() {
    const observer = new IntersectionObserver(function(entries) {
      entries.forEach(function(entry) {
        if (entry.isIntersecting) {
          entry.target.classList.add('fade-in');
          observer.unobserve(entry.target);
        }
      });
    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

    function observe(element) {
      element.style.opacity = '0';
      element.style.transform = 'translateY(30px)';
      element.style.transition = 'opacity 0.6s ease, transform 0.6s ease';
      observer.observe(element);
    }

    // Hero cards on the home layout animate via CSS instead.
    if (!document.querySelector('.hero-section')) {
      document.querySelectorAll('.hero-card').forEach(observe);
    }

    document.querySelectorAll('.card, .gallery-item').forEach(function(element) {
      // Gallery pages keep their own CSS animation.
      if (element.closest('.gallery-section')) return;
      observe(element);
    });
  }

  function initNavigationEffects() {
    const header = document.querySelector('.glass-header');
    if (!header) return;

    window.addEventListener('scroll', function() {
      if (window.scrollY > 100) {
        header.style.background = 'var(--bg-secondary)';
        header.style.backdropFilter = 'blur(20px)';
      } else {
        header.style.background = 'var(--bg-card)';
        header.style.backdropFilter = 'blur(12px)';
      }
    });
  }

  function initReadingProgress() {
    if (!document.querySelector('.article-content')) return;

    const progressBar = document.createElement('div');
    progressBar.className = 'reading-progress';
    progressBar.innerHTML = '<div class="reading-progress-bar"></div>';
    document.body.appendChild(progressBar);

    const style = document.createElement('style');
    style.textContent =
      '.reading-progress{position:fixed;top:0;left:0;width:100%;height:3px;' +
      'background:rgba(255,255,255,0.1);z-index:1001}' +
      '.reading-progress-bar{height:100%;background:var(--gradient-primary);' +
      'width:0%;transition:width 0.3s ease}';
    document.head.appendChild(style);

    const bar = progressBar.querySelector('.reading-progress-bar');
    window.addEventListener('scroll', function() {
      const winScroll = document.body.scrollTop || document.documentElement.scrollTop;
      const height = document.documentElement.scrollHeight - document.documentElement.clientHeight;
      if (height <= 0) return;
      bar.style.width = (winScroll / height) * 100 + '%';
    });
  }

  function initRipples() {
    document.querySelectorAll('.btn').forEach(function(button) {
      button.addEventListener('click', function(e) {
        const ripple = document.createElement('span');
        ripple.className = 'ripple';

        const rect = button.getBoundingClientRect();
        const size = Math.max(rect.width, rect.height);

        ripple.style.width = ripple.style.height = size + 'px';
        ripple.style.left = (e.clientX - rect.left - size / 2) + 'px';
        ripple.style.top = (e.clientY - rect.top - size / 2) + 'px';

        button.appendChild(ripple);
        setTimeout(function() { ripple.remove(); }, 600);
      });
    });
  }
})();
"#;
