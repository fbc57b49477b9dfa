/// Page wiring constants: element hooks, visual presets and preference keys.
///
/// These express intended behavior and keep magic strings out of the wiring
/// code.

// Wave subsystem hooks
pub const WAVE_ELEMENT_ID: &str = "wave";
pub const HOVER_TARGET_SELECTOR: &str = ".target";
pub const SOURCE_ATTR: &str = "data-wave-source";

// Stroke presets: brighter glow while a trigger is in flight, heavier steady
// glow once it settles.
pub const ACTIVE_FILTER: &str = "url(#activeGlow)";
pub const ACTIVE_STROKE_WIDTH: &str = "4";
pub const SETTLED_FILTER: &str = "url(#whiteGlow)";
pub const SETTLED_STROKE_WIDTH: &str = "3";

// Page plumbing hooks
pub const I18N_ATTR: &str = "data-i18n";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const MENU_ACTIVE_CLASS: &str = "active";
pub const LIGHT_THEME_CLASS: &str = "light-theme";
pub const THEME_TOGGLE_CLASS: &str = "dark-mode-toggle";
pub const LANGUAGE_TOGGLE_CLASS: &str = "language-toggle";

// Scroll-triggered fade-ins: sections gain the reveal class once a tenth of
// them is visible, 50px before they would naturally enter the viewport.
pub const FADE_IN_SELECTOR: &str = ".project-card, .skill-category, .contact-item";
pub const ANIMATE_IN_CLASS: &str = "animate-in";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Fixed-navbar allowance subtracted from smooth-scroll targets.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

// Preference store keys
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";
pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";
