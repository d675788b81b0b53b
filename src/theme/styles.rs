//! Global CSS styles for the Notespace shell.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* MOSS GREEN (Actions, Status) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Links, Input) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --warning: #ff9f00;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition: 0.2s ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: 0.9375rem;
}

.app-shell {
  max-width: 820px;
  margin: 0 auto;
  padding: 1.5rem;
}

/* === Breadcrumb === */
.breadcrumb {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
  flex-wrap: wrap;
}

.crumb-link {
  background: none;
  border: none;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: inherit;
  cursor: pointer;
  padding: 0.1rem 0.2rem;
}

.crumb-link:hover {
  text-shadow: 0 0 8px var(--cyan-glow);
  text-decoration: underline;
}

.crumb-current {
  color: var(--text-primary);
  padding: 0.1rem 0.2rem;
}

.crumb-separator {
  color: var(--text-muted);
}

/* === Folder & note lists === */
.folder-list,
.note-list {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  margin-bottom: 1rem;
}

.folder-row,
.note-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.6rem;
  border: 1px solid var(--void-border);
  border-radius: 6px;
  background: var(--void-lighter);
}

.folder-row:hover {
  border-color: var(--moss);
}

.folder-open {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  flex: 1;
  background: none;
  border: none;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: inherit;
  cursor: pointer;
  text-align: left;
}

.folder-open:hover .folder-name {
  color: var(--cyan);
}

.note-title {
  flex: 1;
  color: var(--text-secondary);
}

/* === Image indicator === */
.image-indicator {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--text-muted);
  font-size: 0.8rem;
}

.indicator-count {
  color: var(--moss-glow);
}

/* === Buttons === */
.btn-primary,
.btn-danger,
.btn-ghost,
.btn-badge {
  font-family: var(--font-mono);
  border-radius: 6px;
  cursor: pointer;
  padding: 0.45rem 1rem;
  background: transparent;
  transition: all var(--transition);
}

.btn-primary {
  border: 1px solid var(--moss);
  color: var(--moss-glow);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 12px rgba(124, 184, 124, 0.3);
  transform: translateY(-1px);
}

.btn-danger {
  border: 1px solid var(--danger);
  color: var(--danger);
}

.btn-ghost {
  border: 1px solid var(--void-border);
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
}

.btn-badge {
  border: 1px solid var(--void-border);
  color: var(--text-muted);
  font-size: 0.75rem;
  padding: 0.15rem 0.5rem;
}

.btn-primary:disabled,
.btn-danger:disabled,
.btn-ghost:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
  font-size: 0.9rem;
  padding: 0.2rem 0.4rem;
}

.icon-btn:hover:not(:disabled) {
  color: var(--cyan);
}

/* === Form fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 0.75rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: 0.8rem;
}

.input-hint {
  color: var(--text-muted);
  font-style: italic;
}

.input-field {
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 6px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: inherit;
  padding: 0.5rem 0.6rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 8px var(--cyan-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-field:disabled {
  opacity: 0.5;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.rename-modal {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  padding: 1.5rem;
  width: min(420px, 90vw);
}

.modal-title {
  font-size: 1.1rem;
  margin-bottom: 1rem;
  color: var(--text-primary);
}

.modal-actions {
  display: flex;
  gap: 0.6rem;
  justify-content: flex-end;
  margin-top: 1rem;
}

.error-text {
  color: var(--danger);
  font-size: 0.85rem;
  margin-top: 0.25rem;
}

/* === Loading === */
.loading-state {
  display: flex;
  justify-content: center;
  padding: 3rem;
}

.loading-message {
  color: var(--text-muted);
  font-style: italic;
}
"#;
