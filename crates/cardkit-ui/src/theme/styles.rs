//! Stylesheets for the card component and the demo harness.
//!
//! Colors come from `--ck-*` custom properties emitted by
//! [`super::root_variables`]; sizing comes from the inline custom properties
//! written by [`crate::paint`].

pub const CARD_STYLES: &str = r#"
/* === Card === */
.card {
  position: relative;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: 16px;
  background: var(--ck-surface);
  color: var(--ck-text-primary);
  font-family: var(--ck-font-sans);
  will-change: transform;
}

/* Static border, drawn above content so fullbleed media cannot hide it */
.card::before {
  content: "";
  position: absolute;
  inset: 0;
  border-radius: 16px;
  border: 1px solid var(--ck-border);
  pointer-events: none;
  z-index: 10;
}

.card--centered {
  text-align: center;
}

.card--interactive {
  cursor: pointer;
}

.card--outlined-hover:hover::before {
  border: 2px solid var(--ck-text-primary);
}

.card--interactive:focus-visible {
  outline: none;
  box-shadow: 0 0 0 2px var(--ck-surface), 0 0 0 4px var(--ck-primary);
}

/* === Media === */
.card__media {
  position: relative;
  overflow: hidden;
  flex-shrink: 0;
  transform: translateZ(0);
  order: var(--media-order, 1);
}

.card__media--rounded {
  border-radius: 12px;
}

.card__media--gap {
  margin-bottom: var(--media-gap, 24px);
}

.card__media--centered {
  margin-left: auto;
  margin-right: auto;
}

.card__media--image {
  width: 100%;
  max-height: var(--media-max-h);
  aspect-ratio: var(--media-aspect, 16 / 9);
}

.card__media--image img {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card__media--glyph {
  color: var(--ck-primary);
}

.card__media--glyph.card__media--centered {
  display: flex;
  justify-content: center;
}

.card__media--glyph svg {
  width: 100%;
  height: 100%;
}

/* === Content === */
.card__content {
  display: flex;
  flex: 1;
  flex-direction: column;
  width: 100%;
  order: var(--content-order, 2);
}

.card__content--centered {
  align-items: center;
}

.card__titles > * + * {
  margin-top: 4px;
}

.card__eyebrow {
  display: block;
  font-size: 14px;
  letter-spacing: 0.025em;
  color: var(--ck-text-secondary);
}

.card__heading {
  font-size: 20px;
  font-weight: 600;
  line-height: 1.25;
}

.card__subheading {
  font-size: 16px;
  font-weight: 400;
  line-height: 1.375;
}

.card__body {
  margin-top: 12px;
  font-size: 16px;
  line-height: 1.625;
}

/* === Badges === */
.card__badges {
  display: flex;
  width: 100%;
  margin-bottom: 20px;
}

.card__badges--between { justify-content: space-between; }
.card__badges--center { justify-content: center; gap: 8px; }
.card__badges--start { justify-content: flex-start; gap: 8px; }
.card__badges--flow { flex-wrap: wrap; }

.card__badge {
  display: flex;
  align-items: center;
  height: 20px;
  padding: 2px 4px;
  border-radius: 4px;
  font-size: 12px;
  font-weight: 500;
  text-transform: uppercase;
}

.card__badge--primary {
  background: var(--ck-primary);
  color: #ffffff;
}

.card__badge--secondary {
  background: var(--ck-neutral-fill);
  color: var(--ck-text-primary);
}

/* === Buttons === */
.card__buttons {
  display: flex;
  flex-direction: column;
  flex-wrap: wrap;
  gap: 16px;
  margin-top: 20px;
}

.card__buttons--centered {
  align-items: center;
  width: 100%;
}

.card__button {
  position: relative;
  z-index: 10;
  display: inline-flex;
  justify-content: center;
  width: 100%;
  padding: 8px 16px;
  border-radius: 4px;
  font-size: 16px;
  font-weight: 500;
  cursor: pointer;
  transition: all 200ms ease;
}

.card__button--primary {
  border: none;
  background: var(--ck-primary);
  color: #ffffff;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.card__button--primary:hover {
  background: var(--ck-primary-hover);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.card__button--secondary {
  border: 1px solid var(--ck-border-strong);
  background: transparent;
  color: var(--ck-text-primary);
}

.card__button--secondary:hover {
  background: var(--ck-neutral-hover);
  border-color: var(--ck-border-hover);
}

/* === Footer === */
.card__footer {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  display: flex;
  align-items: center;
  padding: 16px 24px;
  background: var(--ck-footer-background);
}

.card__footer-icon {
  display: inline-flex;
  flex-shrink: 0;
  width: 20px;
  height: 20px;
  margin-right: 8px;
}

.card__footer-text {
  font-size: 14px;
}

/* === Wide viewports === */
@media (min-width: 768px) {
  .card__media {
    order: var(--media-order-wide, var(--media-order, 1));
  }

  .card__content {
    order: var(--content-order-wide, var(--content-order, 2));
  }

  .card--horizontal {
    flex-direction: row;
    align-items: stretch;
  }

  .card--horizontal .card__content {
    flex: 1;
  }

  .card__media--gap-wide-right {
    margin-bottom: 0;
    margin-right: var(--media-gap, 24px);
  }

  .card__media--gap-wide-left {
    margin-bottom: 0;
    margin-left: var(--media-gap, 24px);
  }

  .card__media--beside {
    width: var(--media-wide-w);
    max-height: none;
    aspect-ratio: auto;
  }

  .card__media--beside img {
    position: absolute;
    inset: 0;
  }

  .card__buttons {
    display: inline-flex;
    flex-direction: row;
  }

  .card__buttons--centered {
    justify-content: center;
    width: auto;
  }

  .card__button {
    width: auto;
  }
}
"#;

pub const HARNESS_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--ck-font-sans);
  background: var(--ck-page-background);
  color: var(--ck-text-primary);
  min-height: 100vh;
}

/* === Style Guide === */
.style-guide {
  padding: 32px;
}

.style-guide__inner {
  max-width: 896px;
  margin: 0 auto;
}

.style-guide__section + .style-guide__section {
  margin-top: 64px;
}

.style-guide__title {
  margin-bottom: 24px;
  font-size: 30px;
  font-weight: 700;
}

.style-guide__title--muted {
  font-size: 24px;
  color: var(--ck-text-secondary);
}

.style-guide__cards > * + * {
  margin-top: 32px;
}

/* === Story Browser === */
.story-browser {
  display: flex;
  min-height: 100vh;
}

.story-nav {
  width: 260px;
  flex-shrink: 0;
  padding: 24px 16px;
  border-right: 1px solid var(--ck-border);
  background: var(--ck-surface);
}

.story-nav__heading {
  margin-bottom: 12px;
  font-size: 12px;
  font-weight: 600;
  text-transform: uppercase;
  color: var(--ck-text-secondary);
}

.story-nav__link {
  display: block;
  padding: 6px 8px;
  border-radius: 4px;
  color: var(--ck-text-primary);
  text-decoration: none;
}

.story-nav__link.active {
  background: var(--ck-neutral-fill);
  font-weight: 600;
}

.story-stage {
  flex: 1;
  padding: 32px;
}

.story-stage__description {
  margin: 8px 0 24px;
  color: var(--ck-text-secondary);
}

.story-stage__canvas {
  max-width: 1200px;
}

.activity-log {
  margin-top: 32px;
  font-family: monospace;
  font-size: 13px;
  color: var(--ck-text-secondary);
}

.activity-log__entry + .activity-log__entry {
  margin-top: 4px;
}
"#;
