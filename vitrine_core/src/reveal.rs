// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection-driven reveals.
//!
//! Each [`RevealSpec`] describes one `IntersectionObserver`: which elements
//! it watches, at what visibility ratio it fires, how the root box is
//! adjusted, and what happens to an element once it comes into view.
//! [`PORTFOLIO_REVEALS`] is the page's table; [`FOOTER_TOGGLE`] is the one
//! observer whose effect is reversible.
//!
//! Root margins are [`Insets`] read the CSS way: each edge moves outward by
//! its value, so a negative bottom inset shrinks the viewport from below and
//! delays the reveal until the element is further on screen.

use alloc::format;
use alloc::string::String;

use kurbo::Insets;

use crate::time::Duration;

/// Class added to an element once it has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// A pair of inline style values applied together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InlineStyle {
    /// Value for `opacity`.
    pub opacity: &'static str,
    /// Value for `transform`.
    pub transform: &'static str,
}

/// A reveal that fires element by element with a growing delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Delay added per position.
    pub step: Duration,
    /// If set, positions wrap modulo this value so rows restart the cascade.
    pub wrap: Option<usize>,
    /// Style applied at install time.
    pub hidden: InlineStyle,
    /// Style applied once revealed.
    pub shown: InlineStyle,
    /// Value for `transition`, applied at install time.
    pub transition: &'static str,
}

impl Stagger {
    /// Returns the reveal delay for the element at `index` in its group.
    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        let slot = match self.wrap {
            Some(wrap) if wrap > 0 => index % wrap,
            _ => index,
        };
        self.step.saturating_mul(slot as u64)
    }
}

/// What happens to an element when it scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Add a class immediately.
    AddClass(&'static str),
    /// Apply inline styles after a per-element delay.
    Stagger(Stagger),
}

/// One intersection observer's configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// CSS selector for the watched elements.
    pub selector: &'static str,
    /// Visible ratio at which the observer fires.
    pub threshold: f64,
    /// Root margin, or `None` for the bare viewport.
    pub root_margin: Option<Insets>,
    /// Effect applied to each revealed element.
    pub effect: RevealEffect,
}

impl RevealSpec {
    /// Returns the `rootMargin` string for the observer options, if any.
    #[must_use]
    pub fn root_margin_css(&self) -> Option<String> {
        self.root_margin.map(|m| root_margin_css(&m))
    }
}

/// Formats insets as a CSS margin shorthand (`top right bottom left`).
#[must_use]
pub fn root_margin_css(margin: &Insets) -> String {
    format!(
        "{}px {}px {}px {}px",
        margin.y0, margin.x1, margin.y1, margin.x0
    )
}

/// Insets that only pull the bottom edge in by `px`.
const fn bottom(px: f64) -> Option<Insets> {
    Some(Insets {
        x0: 0.0,
        y0: 0.0,
        x1: 0.0,
        y1: -px,
    })
}

/// Staggered fade-up used by experience entries.
pub const ITEM_STAGGER: Stagger = Stagger {
    step: Duration::from_millis(150),
    wrap: Some(4),
    hidden: InlineStyle {
        opacity: "0",
        transform: "translateY(30px)",
    },
    shown: InlineStyle {
        opacity: "1",
        transform: "translateY(0)",
    },
    transition: "opacity 0.6s ease-out, transform 0.6s ease-out",
};

/// Staggered fade-up-and-grow used by skill categories.
pub const SKILL_STAGGER: Stagger = Stagger {
    step: Duration::from_millis(120),
    wrap: None,
    hidden: InlineStyle {
        opacity: "0",
        transform: "translateY(40px) scale(0.95)",
    },
    shown: InlineStyle {
        opacity: "1",
        transform: "translateY(0) scale(1)",
    },
    transition: "opacity 0.7s cubic-bezier(0.5, 0, 0, 1), transform 0.7s cubic-bezier(0.5, 0, 0, 1)",
};

/// Every one-shot reveal on the portfolio page.
pub const PORTFOLIO_REVEALS: &[RevealSpec] = &[
    RevealSpec {
        selector: ".animate-on-scroll",
        threshold: 0.15,
        root_margin: bottom(80.0),
        effect: RevealEffect::AddClass(VISIBLE_CLASS),
    },
    RevealSpec {
        selector: ".scale-on-scroll",
        threshold: 0.2,
        root_margin: bottom(50.0),
        effect: RevealEffect::AddClass(VISIBLE_CLASS),
    },
    RevealSpec {
        selector: ".slide-left, .slide-right",
        threshold: 0.1,
        root_margin: bottom(30.0),
        effect: RevealEffect::AddClass(VISIBLE_CLASS),
    },
    RevealSpec {
        selector: ".stagger-children",
        threshold: 0.2,
        root_margin: None,
        effect: RevealEffect::AddClass(VISIBLE_CLASS),
    },
    RevealSpec {
        selector: ".item",
        threshold: 0.1,
        root_margin: bottom(30.0),
        effect: RevealEffect::Stagger(ITEM_STAGGER),
    },
    RevealSpec {
        selector: ".skill-category",
        threshold: 0.2,
        root_margin: None,
        effect: RevealEffect::Stagger(SKILL_STAGGER),
    },
];

/// A class that follows another element's visibility in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleSpec {
    /// Selector for the element whose class changes.
    pub target: &'static str,
    /// Selector for the element being watched.
    pub watched: &'static str,
    /// Class to add while watched is in view.
    pub class: &'static str,
    /// Visible ratio at which the observer fires.
    pub threshold: f64,
}

/// The footer shows while the contact section is on screen.
pub const FOOTER_TOGGLE: ToggleSpec = ToggleSpec {
    target: ".site-footer",
    watched: "#contact",
    class: VISIBLE_CLASS,
    threshold: 0.3,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_delays_restart_every_four() {
        let delays: [u64; 6] = core::array::from_fn(|i| ITEM_STAGGER.delay(i).as_millis());
        assert_eq!(delays, [0, 150, 300, 450, 0, 150]);
    }

    #[test]
    fn skill_delays_grow_linearly() {
        assert_eq!(SKILL_STAGGER.delay(0), Duration::ZERO);
        assert_eq!(SKILL_STAGGER.delay(5), Duration::from_millis(600));
    }

    #[test]
    fn zero_wrap_does_not_divide_by_zero() {
        let stagger = Stagger {
            wrap: Some(0),
            ..ITEM_STAGGER
        };
        assert_eq!(stagger.delay(3), Duration::from_millis(450));
    }

    #[test]
    fn root_margin_is_top_right_bottom_left() {
        let spec = PORTFOLIO_REVEALS[0];
        assert_eq!(spec.root_margin_css().as_deref(), Some("0px 0px -80px 0px"));

        let m = Insets {
            x0: 1.0,
            y0: 2.0,
            x1: 3.0,
            y1: 4.0,
        };
        assert_eq!(root_margin_css(&m), "2px 3px 4px 1px");
    }

    #[test]
    fn bare_viewport_has_no_margin() {
        let stagger_children = PORTFOLIO_REVEALS
            .iter()
            .find(|s| s.selector == ".stagger-children")
            .expect("preset exists");
        assert_eq!(stagger_children.root_margin_css(), None);
    }

    #[test]
    fn thresholds_are_ratios() {
        for spec in PORTFOLIO_REVEALS {
            assert!(
                (0.0..=1.0).contains(&spec.threshold),
                "{} has threshold {}",
                spec.selector,
                spec.threshold
            );
        }
        assert!((0.0..=1.0).contains(&FOOTER_TOGGLE.threshold));
    }
}
