//! Global CSS styles for ScholarLink.
//!
//! Every custom property used by the style resolvers is defined under `:root`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Brand */
  --primary: #3b5bdb;
  --primary-soft: #e7ecff;
  --on-primary: #ffffff;
  --secondary: #0c8599;
  --on-secondary: #ffffff;

  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f1f3f5;
  --background: #f8f9fb;
  --border: #dee2e6;

  /* Text */
  --text: #1f2933;
  --text-muted: #6b7280;

  /* Semantic */
  --success: #2f9e44;
  --success-soft: #e6f6ea;
  --warning: #e67700;
  --warning-soft: #fff4e0;
  --danger: #e03131;
  --danger-soft: #ffe8e8;
  --info: #1971c2;
  --info-soft: #e5f1fb;

  /* Avatar placeholders */
  --avatar-1: #5c7cfa;
  --avatar-2: #20c997;
  --avatar-3: #f76707;
  --avatar-4: #ae3ec9;
  --avatar-5: #1c7ed6;
  --avatar-6: #e64980;

  /* Tooltip */
  --tooltip-bg: #212529;
  --tooltip-fg: #f8f9fa;

  /* Shape */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 14px;
  --shadow-sm: 0 1px 2px rgba(16, 24, 40, 0.06);
  --shadow-md: 0 4px 12px rgba(16, 24, 40, 0.1);
  --shadow-lg: 0 16px 40px rgba(16, 24, 40, 0.18);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--text);
  line-height: 1.5;
  min-height: 100vh;
}

h1 { font-size: 1.75rem; font-weight: 700; }
h2 { font-size: 1.25rem; font-weight: 600; }
h3 { font-size: 1.05rem; font-weight: 600; }

.muted { color: var(--text-muted); }

/* === Workspace === */
.workspace {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.workspace-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  flex-wrap: wrap;
}

.section-toolbar {
  display: flex;
  align-items: flex-end;
  gap: 1rem;
  flex-wrap: wrap;
}

.empty-state {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  border: 1px dashed var(--border);
  border-radius: var(--radius-md);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  cursor: pointer;
  font-family: inherit;
  font-weight: 500;
  transition: filter var(--transition-fast), background var(--transition-fast);
}

.btn:hover:not(:disabled) { filter: brightness(0.95); }
.btn:focus-visible { outline: 2px solid var(--primary); outline-offset: 2px; }

.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
  color: var(--text-muted);
  padding: 0.25rem;
}

.icon-btn:hover { color: var(--text); }

.spinner {
  display: inline-block;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.7s linear infinite;
}

.spinner-sm { width: 0.75rem; height: 0.75rem; }
.spinner-md { width: 1rem; height: 1rem; }
.spinner-lg { width: 1.25rem; height: 1.25rem; }

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Cards === */
.card { display: flex; flex-direction: column; gap: 0.75rem; }
.card-header { display: flex; align-items: flex-start; justify-content: space-between; gap: 0.75rem; }
.card-subtitle { color: var(--text-muted); font-size: 0.875rem; }
.card-footer { display: flex; gap: 0.5rem; justify-content: flex-end; }
.card-hoverable { cursor: pointer; }
.card-hoverable:hover { box-shadow: var(--shadow-lg); transform: translateY(-2px); }

/* === Badges and avatars === */
.badge { display: inline-flex; align-items: center; font-weight: 600; white-space: nowrap; }

.avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  color: #ffffff;
  font-weight: 600;
  flex-shrink: 0;
}

.lazy-image-frame, .avatar-img { width: 100%; height: 100%; }
.avatar-img { object-fit: cover; }

/* === Form fields === */
.form-field { display: flex; flex-direction: column; gap: 0.25rem; min-width: 14rem; }
.input-label { font-size: 0.875rem; font-weight: 500; }
.input-hint { font-size: 0.8rem; color: var(--text-muted); }
.input-field { font-family: inherit; outline: none; }
.input-field:focus { border-color: var(--primary); box-shadow: 0 0 0 3px var(--primary-soft); }
.field-error { font-size: 0.8rem; color: var(--danger); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal { display: flex; flex-direction: column; max-height: 90vh; overflow-y: auto; }
.modal-header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.modal-body { display: flex; flex-direction: column; gap: 1rem; }
.modal-actions { display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1.5rem; }

/* === Tabs === */
.tabs { display: flex; gap: 0.25rem; border-bottom: 1px solid var(--border); }
.tabs-pills { border-bottom: none; }
.tab { font-family: inherit; cursor: pointer; }
.tab-count { color: var(--text-muted); font-size: 0.8rem; }

/* === Tooltip === */
.tooltip { pointer-events: none; white-space: nowrap; z-index: 50; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1100;
  max-width: 22rem;
}

.toast { display: flex; align-items: center; gap: 0.75rem; animation: toast-in 200ms ease-out; }
.toast-message { flex: 1; font-size: 0.9rem; }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
