//! Entrance and scroll animation model.
//!
//! An animated block is described by an [`AnimationSpec`]: where it starts,
//! where it ends, and what starts it. The browser only interpolates; the
//! decision of *when* a block moves lives in [`RevealOnce`], which allows a
//! single `unanimated -> animated` transition and never goes back.

/// Position and opacity of a block at rest or before its entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl VisualState {
    /// Original position, fully opaque.
    pub const REST: VisualState = VisualState {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Transparent at the original position.
    pub const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        ..Self::REST
    };

    /// Inline CSS for this state (`transform` + `opacity`).
    pub fn to_css(&self) -> String {
        format!(
            "transform: translate3d({}px, {}px, 0) scale({}); opacity: {};",
            self.x, self.y, self.scale, self.opacity
        )
    }
}

/// What starts an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// The component was mounted (hero blocks, header).
    Mount,
    /// The block entered the viewport. A negative margin shrinks the
    /// viewport so the block has to scroll further in first.
    InView { margin_px: i32 },
    /// Started by an enclosing block's trigger, so a whole section reveals
    /// from one intersection.
    Inherit,
}

impl Trigger {
    /// `rootMargin` value for an IntersectionObserver, if any.
    pub fn root_margin(&self) -> Option<String> {
        match self {
            Trigger::Mount | Trigger::Inherit => None,
            Trigger::InView { margin_px } => Some(format!("{margin_px}px")),
        }
    }
}

/// Initial state, final state and trigger for one animated block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub initial: VisualState,
    pub target: VisualState,
    pub trigger: Trigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl AnimationSpec {
    fn in_view(initial: VisualState, duration_ms: u32) -> Self {
        Self {
            initial,
            target: VisualState::REST,
            trigger: Trigger::InView { margin_px: 0 },
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Opacity only.
    pub fn fade_in() -> Self {
        Self::in_view(VisualState::HIDDEN, 800)
    }

    /// Rise `distance` px while fading in.
    pub fn fade_up(distance: f64) -> Self {
        Self::in_view(
            VisualState {
                y: distance,
                ..VisualState::HIDDEN
            },
            600,
        )
    }

    /// Slide in horizontally from `offset` px while fading in.
    pub fn slide_x(offset: f64) -> Self {
        Self::in_view(
            VisualState {
                x: offset,
                ..VisualState::HIDDEN
            },
            800,
        )
    }

    /// Grow from 80% while fading in.
    pub fn pop_in() -> Self {
        Self::in_view(
            VisualState {
                scale: 0.8,
                ..VisualState::HIDDEN
            },
            800,
        )
    }

    /// Drop in from `distance` px above, opaque throughout (site header).
    pub fn slide_down(distance: f64) -> Self {
        Self::in_view(
            VisualState {
                y: -distance,
                ..VisualState::REST
            },
            600,
        )
        .on_mount()
    }

    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }

    /// Follow the enclosing block's trigger instead of owning one.
    pub fn inherited(mut self) -> Self {
        self.trigger = Trigger::Inherit;
        self
    }

    pub fn in_view_margin(mut self, margin_px: i32) -> Self {
        self.trigger = Trigger::InView { margin_px };
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Add `index * step_ms` to the delay, for grids that cascade in.
    pub fn staggered(mut self, index: usize, step_ms: u32) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms = self
            .delay_ms
            .saturating_add(index.saturating_mul(step_ms));
        self
    }

    pub fn transition_css(&self) -> String {
        format!(
            "transition: transform {d}ms ease-out {w}ms, opacity {d}ms ease-out {w}ms;",
            d = self.duration_ms,
            w = self.delay_ms
        )
    }
}

/// Per-block "animate once" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOnce {
    has_animated: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    /// Record that the trigger condition was met.
    ///
    /// Returns `true` only for the first call; later calls are no-ops.
    pub fn trigger(&mut self) -> bool {
        if self.has_animated {
            return false;
        }
        self.has_animated = true;
        true
    }

    pub fn state(&self, spec: &AnimationSpec) -> VisualState {
        if self.has_animated {
            spec.target
        } else {
            spec.initial
        }
    }

    /// Inline style for the block. The transition is only attached once
    /// the block has been triggered so the initial state paints instantly.
    pub fn style(&self, spec: &AnimationSpec) -> String {
        let mut css = self.state(spec).to_css();
        if self.has_animated {
            css.push(' ');
            css.push_str(&spec.transition_css());
        }
        css
    }
}

/// Scroll-linked hero transform for one value of scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Vertical offset as a percentage of the hero's height.
    pub offset_percent: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({}%); opacity: {};",
            self.offset_percent, self.opacity
        )
    }
}

/// Home hero parallax: offset 0% → 50% over progress [0, 1], opacity
/// 1 → 0 over [0, 0.5]. Input outside 0..=1 (or NaN) is clamped.
pub fn hero_parallax(progress: f64) -> ParallaxFrame {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ParallaxFrame {
        offset_percent: 50.0 * p,
        opacity: (1.0 - p / 0.5).clamp(0.0, 1.0),
    }
}

/// Progress of a container scrolling out of the top of the viewport:
/// 0 when its top edge is at the viewport top, 1 when its bottom edge is.
pub fn scroll_progress(scroll_y: f64, container_top: f64, container_height: f64) -> f64 {
    if container_height <= 0.0 || !container_height.is_finite() {
        return 0.0;
    }
    ((scroll_y - container_top) / container_height).clamp(0.0, 1.0)
}

/// Parallax frame for a container whose bounding rect currently starts
/// `viewport_top` px from the top of the viewport (negative once scrolled
/// past) and is `height` px tall. Progress runs from the container's top
/// edge reaching the viewport top to its bottom edge doing the same.
pub fn container_parallax(viewport_top: f64, height: f64) -> ParallaxFrame {
    hero_parallax(scroll_progress(0.0, viewport_top, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveal_fires_once() {
        let mut reveal = RevealOnce::new();
        assert!(!reveal.has_animated());
        assert!(reveal.trigger());
        assert!(!reveal.trigger());
        assert!(!reveal.trigger());
        assert!(reveal.has_animated());
    }

    #[test]
    fn second_intersection_does_not_restore_initial_state() {
        let spec = AnimationSpec::fade_up(30.0);
        let mut reveal = RevealOnce::new();
        assert_eq!(reveal.state(&spec), spec.initial);

        reveal.trigger();
        assert_eq!(reveal.state(&spec), VisualState::REST);

        reveal.trigger();
        assert_eq!(reveal.state(&spec), VisualState::REST);
    }

    #[test]
    fn presets_start_transparent_and_offset() {
        let up = AnimationSpec::fade_up(50.0);
        assert_eq!(up.initial.y, 50.0);
        assert_eq!(up.initial.opacity, 0.0);
        assert_eq!(up.target, VisualState::REST);

        let left = AnimationSpec::slide_x(-50.0);
        assert_eq!(left.initial.x, -50.0);

        let pop = AnimationSpec::pop_in();
        assert_eq!(pop.initial.scale, 0.8);
    }

    #[test]
    fn header_slide_down_is_mount_triggered_and_opaque() {
        let header = AnimationSpec::slide_down(100.0);
        assert_eq!(header.trigger, Trigger::Mount);
        assert_eq!(header.initial.y, -100.0);
        assert_eq!(header.initial.opacity, 1.0);
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let spec = AnimationSpec::fade_up(50.0).with_delay(400).staggered(3, 100);
        assert_eq!(spec.delay_ms, 700);
        let none = AnimationSpec::fade_in().staggered(0, 200);
        assert_eq!(none.delay_ms, 0);
    }

    #[test]
    fn root_margin_only_for_in_view() {
        assert_eq!(Trigger::Mount.root_margin(), None);
        assert_eq!(
            AnimationSpec::fade_in().in_view_margin(-100).trigger.root_margin(),
            Some("-100px".to_string())
        );
    }

    #[test]
    fn style_attaches_transition_after_trigger() {
        let spec = AnimationSpec::fade_up(30.0).with_delay(100);
        let mut reveal = RevealOnce::new();
        assert_eq!(
            reveal.style(&spec),
            "transform: translate3d(0px, 30px, 0) scale(1); opacity: 0;"
        );
        reveal.trigger();
        assert_eq!(
            reveal.style(&spec),
            "transform: translate3d(0px, 0px, 0) scale(1); opacity: 1; \
             transition: transform 600ms ease-out 100ms, opacity 600ms ease-out 100ms;"
        );
    }

    #[test]
    fn parallax_endpoints() {
        assert_eq!(
            hero_parallax(0.0),
            ParallaxFrame {
                offset_percent: 0.0,
                opacity: 1.0
            }
        );
        assert_eq!(hero_parallax(0.5).opacity, 0.0);
        assert_eq!(hero_parallax(0.5).offset_percent, 25.0);
        assert_eq!(hero_parallax(1.0).offset_percent, 50.0);
    }

    #[test]
    fn parallax_clamps_out_of_range_input() {
        assert_eq!(hero_parallax(-3.0), hero_parallax(0.0));
        assert_eq!(hero_parallax(7.5), hero_parallax(1.0));
        assert_eq!(hero_parallax(f64::NAN), hero_parallax(0.0));
    }

    #[test]
    fn parallax_is_monotonic() {
        let mut previous = hero_parallax(0.0);
        for step in 1..=20 {
            let frame = hero_parallax(step as f64 / 20.0);
            assert!(frame.offset_percent >= previous.offset_percent);
            assert!(frame.opacity <= previous.opacity);
            previous = frame;
        }
    }

    #[test]
    fn scroll_progress_tracks_container() {
        assert_eq!(scroll_progress(0.0, 0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 0.0, 800.0), 1.0);
        assert_eq!(scroll_progress(100.0, 200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn inherited_blocks_have_no_observer_margin() {
        let child = AnimationSpec::fade_up(50.0).in_view_margin(-50).inherited();
        assert_eq!(child.trigger, Trigger::Inherit);
        assert_eq!(child.trigger.root_margin(), None);
    }

    #[test]
    fn parallax_is_measured_against_the_whole_container() {
        // 800px hero at the top of a 3200px page, scrolled 400px.
        let frame = container_parallax(-400.0, 3200.0);
        assert_eq!(
            frame,
            ParallaxFrame {
                offset_percent: 6.25,
                opacity: 0.75
            }
        );
        assert_eq!(container_parallax(0.0, 3200.0), hero_parallax(0.0));
        assert_eq!(container_parallax(120.0, 3200.0), hero_parallax(0.0));
        assert_eq!(container_parallax(-3200.0, 3200.0), hero_parallax(1.0));
    }
}
