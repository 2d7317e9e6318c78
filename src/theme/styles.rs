//! Global CSS styles for the PageKit playground.
//!
//! Dark palette by default; the `light` class (on `<html>` in a browser, on
//! the playground root here) swaps the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root, .dark {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111111;
  --void-border: #1a1a1a;

  /* ACCENTS */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;
  --cyan: #00d4aa;
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  --overlay: rgba(10, 10, 10, 0.85);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Light Palette === */
.light {
  --void-black: #f7f5ef;
  --void-lighter: #ffffff;
  --void-border: #d9d5c8;

  --moss: #4a6a4a;
  --moss-glow: #3f7f3f;
  --cyan: #007a63;
  --gold: #8a6d12;
  --gold-glow: rgba(138, 109, 18, 0.15);

  --text-primary: #1a1a1a;
  --text-secondary: rgba(26, 26, 26, 0.75);
  --text-muted: rgba(26, 26, 26, 0.55);

  --overlay: rgba(247, 245, 239, 0.85);
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
  margin-bottom: 0.75rem;
}

.body-text {
  font-family: var(--font-mono);
  font-size: var(--text-base);
  color: var(--text-primary);
  line-height: 1.7;
}

.muted {
  color: var(--text-muted);
}

/* === Skip Link === */
.skip-link {
  position: absolute;
  left: 1rem;
  top: -3rem;
  z-index: 2000;
  padding: 0.5rem 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--cyan);
  border-radius: 4px;
  color: var(--cyan);
  text-decoration: none;
  transition: top var(--transition-fast);
}

.skip-link:focus {
  top: 1rem;
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  border-color: var(--moss-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
  transform: translateY(-1px);
}

.btn-ghost {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid transparent;
  border-radius: 4px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--void-border);
}

button:disabled {
  opacity: 0.5;
  cursor: default;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 50%;
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
  border-color: var(--moss-glow);
}

.theme-toggle-icon {
  font-size: var(--text-base);
  line-height: 1;
}

.close-btn {
  border: none;
  font-size: var(--text-xl);
  color: var(--text-muted);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.modal-content {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  max-width: 480px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem;
  border-bottom: 1px solid var(--void-border);
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
}

.modal-body {
  padding: 1.5rem;
}

/* === Playground Layout === */
.playground {
  min-height: 100vh;
  background: var(--void-black);
  color: var(--text-primary);
  outline: none;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.playground-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 2rem;
  border-bottom: 1px solid var(--void-border);
}

.playground-header .page-title {
  font-size: var(--text-xl);
}

.playground-main {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  max-width: 800px;
  margin: 0 auto;
  padding: 2rem;
}

.playground-main:focus {
  outline: 1px dashed var(--cyan);
  outline-offset: 4px;
}

.control-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

/* === DOM Inspector === */
.dom-inspector {
  border: 1px solid var(--void-border);
  border-radius: 8px;
  padding: 1.5rem;
  background: var(--void-lighter);
}

.inspector-stats {
  display: grid;
  grid-template-columns: max-content 1fr;
  gap: 0.25rem 1.5rem;
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.inspector-stats dt {
  color: var(--text-muted);
}

.inspector-stats dd {
  color: var(--cyan);
}

.inspector-outline {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-secondary);
  white-space: pre;
  overflow-x: auto;
}
"#;
