//! The page's flight plan: regions, segments and their DOM sub-effects.
//!
//! Section anchors and choreography constants are hand-matched to the page
//! markup and the planet layout in `render.rs`. A region whose anchor is
//! missing from the document is skipped with a warning so one broken
//! section cannot blank the whole page.

use orrery_core::{
    Director, Ease, OrbitSpec, Pose, RegionId, RegionSpec, ScrollExtent, Segment, Timeline,
    TransitSpec, TweenSpec,
};
use web_sys as web;

use crate::constants::*;
use crate::dom;

/// How a region's document-space scroll extent is measured.
#[derive(Clone, Copy, Debug)]
pub enum ExtentRule {
    /// Section pins at the top of the viewport and absorbs `len` px of
    /// virtual scroll (its spacer provides the real page travel).
    Pin { anchor: &'static str, len: f32 },
    /// Spans from `from`'s top entering the bottom of the viewport until
    /// `to`'s top reaches `to_frac` of the viewport height.
    Span {
        from: &'static str,
        to: &'static str,
        to_frac: f32,
    },
}

/// One registered region plus the rule for measuring its extent.
pub struct PageBinding {
    pub id: RegionId,
    pub rule: ExtentRule,
}

pub fn hero_orbit() -> OrbitSpec {
    OrbitSpec {
        center: HERO_MOON_CENTER,
        radius: HERO_MOON_RADIUS,
        height: 0.0,
        angle_start: HERO_START_ANGLE,
        angle_end: HERO_END_ANGLE,
    }
}

pub fn portfolio_orbit() -> OrbitSpec {
    OrbitSpec {
        center: PORTFOLIO_CENTER,
        radius: PORTFOLIO_RADIUS,
        height: 0.0,
        angle_start: std::f32::consts::PI,
        angle_end: 0.0,
    }
}

pub fn vantage_orbit() -> OrbitSpec {
    OrbitSpec {
        center: VANTAGE_CENTER,
        radius: VANTAGE_RADIUS,
        height: VANTAGE_HEIGHT,
        angle_start: std::f32::consts::FRAC_PI_2,
        angle_end: 0.0,
    }
}

pub fn outpost_orbit() -> OrbitSpec {
    OrbitSpec {
        center: OUTPOST_CENTER,
        radius: OUTPOST_RADIUS,
        height: 0.0,
        angle_start: 0.0,
        angle_end: -std::f32::consts::FRAC_PI_2,
    }
}

/// Build the director for the whole page. Regions register in page order
/// with placeholder extents; the scroll binding measures the real ones
/// from the live layout.
pub fn build(document: &web::Document) -> (Director, Vec<PageBinding>) {
    let mut director = Director::new();
    let mut bindings = Vec::new();

    let hero = hero_orbit();
    let portfolio = portfolio_orbit();
    let vantage = vantage_orbit();
    let outpost = outpost_orbit();

    // 1. Hero: close orbit around the moon while the title subtitle
    //    reveals and hides behind its mask.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "hero",
        ExtentRule::Pin {
            anchor: "hero",
            len: HERO_PIN_LEN,
        },
        Segment::Orbit(hero),
        mask_timeline(document, "hero-mask"),
    );

    // 2. Travel out to the portfolio planet's western approach.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "travel-to-portfolio",
        ExtentRule::Span {
            from: "gap-to-portfolio",
            to: "portfolio",
            to_frac: 0.2,
        },
        Segment::Transit(TransitSpec::between(
            hero.evaluate(1.0),
            portfolio.evaluate(0.0),
            Ease::ExpoInOut,
        )),
        Timeline::new(1.0),
    );

    // 3. Portfolio: half-orbit while the work panels page through.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "portfolio",
        ExtentRule::Pin {
            anchor: "portfolio",
            len: PORTFOLIO_PIN_LEN,
        },
        Segment::Orbit(portfolio),
        panel_timeline(document),
    );

    // 4. Travel up to the high vantage over the ringed giant. Departure is
    //    from the planet's south point, not the orbit's east end: an
    //    authored cut, smoothed by the rig and reported by seal().
    let south_departure = Pose::new(
        PORTFOLIO_CENTER + glam::Vec3::new(0.0, 0.0, PORTFOLIO_RADIUS),
        PORTFOLIO_CENTER,
    );
    add_region(
        &mut director,
        &mut bindings,
        document,
        "travel-to-manifesto",
        ExtentRule::Span {
            from: "gap-to-manifesto",
            to: "manifesto",
            to_frac: 0.5,
        },
        Segment::Transit(TransitSpec::between(
            south_departure,
            vantage.evaluate(0.0),
            Ease::ExpoInOut,
        )),
        Timeline::new(1.0),
    );

    // 5. Manifesto: high sweep over the giant, second masked subtitle.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "manifesto",
        ExtentRule::Pin {
            anchor: "manifesto",
            len: MANIFESTO_PIN_LEN,
        },
        Segment::Orbit(vantage),
        mask_timeline(document, "manifesto-mask"),
    );

    // 6. Travel down to the outpost.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "travel-to-contact",
        ExtentRule::Span {
            from: "gap-to-contact",
            to: "contact",
            to_frac: 0.5,
        },
        Segment::Transit(TransitSpec::between(
            vantage.evaluate(1.0),
            outpost.evaluate(0.0),
            Ease::ExpoInOut,
        )),
        Timeline::new(1.0),
    );

    // 7. Contact: quarter-orbit holding the outpost while the form is up.
    add_region(
        &mut director,
        &mut bindings,
        document,
        "contact",
        ExtentRule::Pin {
            anchor: "contact",
            len: CONTACT_PIN_LEN,
        },
        Segment::Orbit(outpost),
        Timeline::new(1.0),
    );

    (director, bindings)
}

fn add_region(
    director: &mut Director,
    bindings: &mut Vec<PageBinding>,
    document: &web::Document,
    name: &'static str,
    rule: ExtentRule,
    segment: Segment,
    effects: Timeline,
) {
    let anchor = match rule {
        ExtentRule::Pin { anchor, .. } => anchor,
        ExtentRule::Span { from, .. } => from,
    };
    if dom::element_by_id(document, anchor).is_none() {
        log::warn!("region '{name}': missing anchor #{anchor}, skipping");
        return;
    }
    let pinned = matches!(rule, ExtentRule::Pin { .. });
    // Placeholder extent; scroll::wire measures the real one before the
    // first sample.
    let spec = RegionSpec::new(name, ScrollExtent::new(0.0, 1.0), pinned, segment)
        .with_effects(effects);
    match director.add_region(spec) {
        Ok(id) => bindings.push(PageBinding { id, rule }),
        Err(e) => log::error!("region '{name}' rejected: {e}"),
    }
}

/// Subtitle mask choreography: hidden left, reveal across the full width
/// early in the region, hide out to the right at the end.
fn mask_timeline(document: &web::Document, mask_id: &'static str) -> Timeline {
    let mut tl = Timeline::new(1.0);
    let Some(mask) = dom::element_by_id(document, mask_id) else {
        log::warn!("missing #{mask_id}; subtitle reveal disabled");
        return tl;
    };
    dom::set_clip_span(&mask, 0.0, 0.0);

    let reveal = mask.clone();
    tl.add(
        TweenSpec::new(MASK_REVEAL_START, MASK_DURATION, Ease::QuadInOut),
        move |t| dom::set_clip_span(&reveal, 0.0, t),
    );
    let hide = mask;
    tl.add(
        TweenSpec::new(MASK_HIDE_START, MASK_DURATION, Ease::QuadInOut),
        move |t| dom::set_clip_span(&hide, t, 1.0),
    );
    tl
}

/// Portfolio panel track on a 16-unit axis: each panel scrolls its inner
/// mockup, then swipes off to the left as the next slides in. Visibility
/// windows keep off-screen panels out of the compositor.
fn panel_timeline(document: &web::Document) -> Timeline {
    let mut tl = Timeline::new(PANEL_TRACK_UNITS);

    let panels: Vec<Option<web::Element>> = (1..=PANEL_COUNT)
        .map(|i| dom::element_by_id(document, &format!("panel-{i}")))
        .collect();
    let mockups: Vec<Option<web::Element>> = (1..=PANEL_COUNT)
        .map(|i| dom::element_by_id(document, &format!("mockup-inner-{i}")))
        .collect();

    // Panels after the first start off-screen right and hidden.
    for panel in panels.iter().skip(1).flatten() {
        dom::set_translate_x_vw(panel, PANEL_OFFSCREEN_VW);
        dom::set_visible(panel, false);
    }

    for i in 0..PANEL_COUNT {
        let slot = i as f32 * PANEL_SLOT_UNITS;

        // One full-track visibility driver per panel: visible from just
        // before its slide-in until its slide-out completes. A single
        // writer per panel keeps scrubbing in either direction coherent.
        if let Some(panel) = panels[i].clone() {
            let show_from = if i == 0 {
                f32::NEG_INFINITY
            } else {
                slot - PANEL_SLOT_UNITS + PANEL_SWIPE_OFFSET - PANEL_SHOW_LEAD
            };
            let gone_after = if i + 1 < PANEL_COUNT {
                slot + PANEL_SWIPE_OFFSET + PANEL_TWEEN_DURATION
            } else {
                f32::INFINITY
            };
            tl.add(
                TweenSpec::new(0.0, PANEL_TRACK_UNITS, Ease::None),
                move |t| {
                    let playhead = t * PANEL_TRACK_UNITS;
                    dom::set_visible(&panel, playhead >= show_from && playhead <= gone_after);
                },
            );
        } else {
            log::warn!("missing #panel-{}; paging disabled for it", i + 1);
        }

        // Inner mockup scroll midway through the panel's slot. The first
        // panel is a desktop mockup paging sideways; the rest are phone
        // mockups scrolling vertically.
        if let Some(mockup) = mockups[i].clone() {
            let horizontal = i == 0;
            tl.add(
                TweenSpec::new(
                    slot + PANEL_INNER_SCROLL_OFFSET,
                    PANEL_TWEEN_DURATION,
                    Ease::QuadInOut,
                ),
                move |t| {
                    if horizontal {
                        dom::set_translate_x_percent(&mockup, -50.0 * t);
                    } else {
                        dom::set_translate_y_percent(&mockup, -50.0 * t);
                    }
                },
            );
        } else {
            log::warn!("missing #mockup-inner-{}; inner scroll disabled", i + 1);
        }

        // Swipe this panel out and the next one in.
        if i + 1 < PANEL_COUNT {
            let swipe_at = slot + PANEL_SWIPE_OFFSET;
            if let Some(next) = panels[i + 1].clone() {
                tl.add(
                    TweenSpec::new(swipe_at, PANEL_TWEEN_DURATION, Ease::QuadInOut),
                    move |t| dom::set_translate_x_vw(&next, PANEL_OFFSCREEN_VW * (1.0 - t)),
                );
            }
            if let Some(out) = panels[i].clone() {
                tl.add(
                    TweenSpec::new(swipe_at, PANEL_TWEEN_DURATION, Ease::QuadInOut),
                    move |t| dom::set_translate_x_vw(&out, -PANEL_OFFSCREEN_VW * t),
                );
            }
        }
    }
    tl
}
