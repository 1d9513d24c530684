use constcat::concat;

mod catalog;
mod components;
mod variables;

pub use catalog::CATALOG_STYLES;
pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const STOREFRONT_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: Georgia, 'Times New Roman', serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    CATALOG_STYLES,
    r#"
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link.active {
  color: var(--primary);
  background-color: var(--neutral-100);
}

.hero {
  padding: var(--space-8) var(--space-4);
  text-align: center;
}

.hero-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}
"#
);
