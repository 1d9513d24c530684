pub const CATALOG_STYLES: &str = r#"
/* Collection listing */
.collection-layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  gap: var(--space-6);
}

.collection-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
}

.collection-toolbar .form-input { flex: 1; min-width: 200px; }
.collection-toolbar .form-select { width: auto; }

.filter-toggle { display: none; }

.filter-sidebar {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  align-self: start;
}

.filter-group { margin-bottom: var(--space-4); }
.filter-group h4 { margin-bottom: var(--space-2); }
.filter-option { display: flex; gap: var(--space-2); align-items: center; }
.price-range { display: flex; gap: var(--space-2); }

.filter-bubbles {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.filter-bubble {
  background-color: var(--neutral-200);
  border-radius: var(--radius-full);
  padding: var(--space-1) var(--space-3);
  border: none;
  cursor: pointer;
}

.catalog-grid {
  display: grid;
  gap: var(--space-4);
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
}

.catalog-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  display: flex;
  flex-direction: column;
}

.catalog-card img {
  width: 100%;
  height: 220px;
  object-fit: cover;
  cursor: pointer;
  background-color: var(--neutral-200);
}

.catalog-card-body {
  padding: var(--space-3);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  flex: 1;
}

.status-badge {
  align-self: flex-start;
  border-radius: var(--radius-full);
  padding: 0 var(--space-2);
  font-size: 0.75rem;
  color: white;
}

.status-available { background-color: var(--status-available); }
.status-upcoming { background-color: var(--status-upcoming); }
.status-sold { background-color: var(--status-sold); }

.pagination {
  display: flex;
  justify-content: center;
  gap: var(--space-1);
  margin-top: var(--space-6);
}

.pagination .active { background-color: var(--primary); color: white; }
.pagination .ellipsis { padding: var(--space-2); }

/* Search overlay and gallery */
.search-results { list-style: none; }
.search-results li { padding: var(--space-2) 0; border-bottom: 1px solid var(--border); cursor: pointer; }

.gallery-frame { display: flex; align-items: center; gap: var(--space-2); }
.gallery-frame img { max-width: 100%; max-height: 70vh; margin: 0 auto; }
.gallery-thumbs { display: flex; gap: var(--space-2); margin-top: var(--space-3); overflow-x: auto; }
.gallery-thumbs img { width: 64px; height: 64px; object-fit: cover; cursor: pointer; opacity: 0.6; }
.gallery-thumbs img.selected { opacity: 1; outline: 2px solid var(--primary); }

@media (max-width: 768px) {
  .collection-layout { grid-template-columns: 1fr; }
  .filter-toggle { display: inline-flex; }
  .filter-sidebar { display: none; }
  .filter-sidebar.drawer-open {
    display: block;
    position: fixed;
    inset: 0 20% 0 0;
    z-index: 40;
    overflow-y: auto;
    box-shadow: var(--shadow-lg);
  }
}
"#;
