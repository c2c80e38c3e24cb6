//! Entrance timing for the home page.
//!
//! The hero animates on mount. The about and industries sections each reveal
//! from a single intersection: the section block owns the in-view trigger and
//! every block inside it is [`Trigger::Inherit`](crate::animation::Trigger).

use crate::animation::AnimationSpec;

/// Wrapper around both title lines.
pub fn hero_heading() -> AnimationSpec {
    AnimationSpec::fade_up(50.0)
        .on_mount()
        .with_duration(1000)
        .with_delay(200)
}

/// "NEXUS"
pub fn hero_first_line() -> AnimationSpec {
    AnimationSpec::pop_in().on_mount().with_duration(800).with_delay(500)
}

/// "CORP"
pub fn hero_second_line() -> AnimationSpec {
    AnimationSpec::slide_x(-50.0)
        .on_mount()
        .with_duration(800)
        .with_delay(700)
}

pub fn hero_subtitle() -> AnimationSpec {
    AnimationSpec::fade_up(30.0)
        .on_mount()
        .with_duration(1000)
        .with_delay(900)
}

pub fn hero_cta() -> AnimationSpec {
    AnimationSpec::fade_up(30.0)
        .on_mount()
        .with_duration(1000)
        .with_delay(1100)
}

pub fn scroll_indicator() -> AnimationSpec {
    AnimationSpec::fade_in()
        .on_mount()
        .with_duration(1000)
        .with_delay(2000)
}

/// Owns the about section's trigger.
pub fn about_section() -> AnimationSpec {
    AnimationSpec::fade_in().in_view_margin(-100).with_duration(800)
}

pub fn about_copy() -> AnimationSpec {
    AnimationSpec::slide_x(-50.0)
        .inherited()
        .with_duration(800)
        .with_delay(200)
}

pub fn about_stats() -> AnimationSpec {
    AnimationSpec::slide_x(50.0)
        .inherited()
        .with_duration(800)
        .with_delay(400)
}

pub fn about_stat(index: usize) -> AnimationSpec {
    AnimationSpec::fade_up(20.0)
        .inherited()
        .with_duration(600)
        .with_delay(600)
        .staggered(index, 100)
}

/// Owns the industries section's trigger.
pub fn industries_section() -> AnimationSpec {
    AnimationSpec::fade_in().in_view_margin(-50).with_duration(800)
}

pub fn industries_heading() -> AnimationSpec {
    AnimationSpec::fade_up(30.0)
        .inherited()
        .with_duration(800)
        .with_delay(200)
}

pub fn industry_card(index: usize) -> AnimationSpec {
    AnimationSpec::fade_up(50.0)
        .inherited()
        .with_duration(600)
        .with_delay(400)
        .staggered(index, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Trigger;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_lines_animate_separately_inside_the_heading() {
        let heading = hero_heading();
        assert_eq!((heading.initial.y, heading.duration_ms, heading.delay_ms), (50.0, 1000, 200));

        let first = hero_first_line();
        assert_eq!(first.initial.scale, 0.8);
        assert_eq!((first.duration_ms, first.delay_ms), (800, 500));

        let second = hero_second_line();
        assert_eq!(second.initial.x, -50.0);
        assert_eq!((second.duration_ms, second.delay_ms), (800, 700));
    }

    #[test]
    fn hero_copy_runs_for_a_full_second() {
        assert_eq!((hero_subtitle().duration_ms, hero_subtitle().delay_ms), (1000, 900));
        assert_eq!((hero_cta().duration_ms, hero_cta().delay_ms), (1000, 1100));
        assert_eq!((scroll_indicator().duration_ms, scroll_indicator().delay_ms), (1000, 2000));
        for spec in [hero_heading(), hero_first_line(), hero_second_line(), hero_subtitle(), hero_cta()] {
            assert_eq!(spec.trigger, Trigger::Mount);
        }
    }

    #[test]
    fn about_children_follow_the_section_trigger() {
        assert_eq!(about_section().trigger, Trigger::InView { margin_px: -100 });
        assert_eq!(about_section().initial.opacity, 0.0);

        assert_eq!(about_copy().delay_ms, 200);
        assert_eq!(about_stats().delay_ms, 400);
        let third = about_stat(2);
        assert_eq!((third.initial.y, third.duration_ms, third.delay_ms), (20.0, 600, 800));

        for spec in [about_copy(), about_stats(), about_stat(0)] {
            assert_eq!(spec.trigger, Trigger::Inherit);
        }
    }

    #[test]
    fn industry_cards_rise_fifty_pixels_in_sequence() {
        assert_eq!(industries_section().trigger, Trigger::InView { margin_px: -50 });
        assert_eq!(industries_heading().delay_ms, 200);

        let delays: Vec<u32> = (0..5).map(|i| industry_card(i).delay_ms).collect();
        assert_eq!(delays, vec![400, 500, 600, 700, 800]);
        assert_eq!(industry_card(0).initial.y, 50.0);
        assert_eq!(industry_card(4).trigger, Trigger::Inherit);
    }
}
