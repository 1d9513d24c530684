pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
  border: none;
}

.btn:disabled {
  opacity: 0.5;
  cursor: default;
}

.btn-primary { background-color: var(--primary); color: white; }
.btn-primary:hover { background-color: var(--primary-dark); }
.btn-secondary { background-color: var(--neutral-200); color: var(--text-primary); }
.btn-secondary:hover { background-color: var(--neutral-300); }
.btn-danger { background-color: var(--error); color: white; }
.btn-sm { padding: var(--space-1) var(--space-3); font-size: 0.875rem; }

/* Form Elements */
.form-group { margin-bottom: var(--space-4); }

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea,
.form-select {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus,
.form-select:focus {
  border-color: var(--primary);
  outline: none;
}

/* Skeleton loader */
.skeleton {
  background: linear-gradient(90deg, var(--neutral-200) 25%, var(--neutral-300) 50%, var(--neutral-200) 75%);
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
  height: 1em;
}

@keyframes skeleton-loading {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-4);
}

.notice {
  background-color: #FFF5F5;
  color: var(--error);
  padding: var(--space-2) var(--space-4);
  display: flex;
  justify-content: space-between;
}

.empty-state {
  padding: var(--space-8) var(--space-4);
  text-align: center;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  color: var(--text-secondary);
}

/* Table styles */
table { width: 100%; border-collapse: collapse; background-color: var(--surface); }
thead tr { background-color: var(--primary); color: white; }
th, td { padding: var(--space-3); text-align: left; }
tbody tr { border-bottom: 1px solid var(--border); }

/* Modal styles */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.modal-content {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  width: 100%;
  max-height: 90%;
  overflow: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
  border-bottom: 1px solid var(--border);
}

.modal-body { padding: var(--space-4); }

.modal-footer {
  padding: var(--space-4);
  border-top: 1px solid var(--border);
}

.btn-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
}

.form {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.modal-title { font-size: 1.25rem; }
.modal-buttons { display: flex; gap: var(--space-2); }
.status-message { color: var(--text-secondary); }

.table {
  width: 100%;
  border-collapse: collapse;
}

.table th,
.table td {
  padding: var(--space-2) var(--space-3);
  border-bottom: 1px solid var(--border);
  text-align: left;
}

.logo a { color: var(--text-primary); }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
